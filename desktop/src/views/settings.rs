//! Developer settings: webhook endpoint, theming, system name, auto-fill,
//! plus factory reset and the archive's only clear path. Admin only.

use dioxus::prelude::*;
use store::AppSettings;
use ui::components::{Button, ButtonVariant, Input, Label};

use crate::Route;

#[component]
pub fn Settings() -> Element {
    let session = ui::use_session();
    let settings = ui::use_settings();
    let records = ui::use_records();
    let nav = use_navigator();

    let mut sheets_url = use_signal(|| settings().sheets_url);
    let mut accent_color = use_signal(|| settings().accent_color);
    let mut system_name = use_signal(|| settings().system_name);
    let mut auto_fill = use_signal(|| settings().auto_fill);
    let mut save_status = use_signal(|| Option::<&str>::None);
    let mut archive_status = use_signal(|| Option::<String>::None);

    // The settings screen is restricted to the admin role.
    let is_admin = session()
        .user
        .map(|u| u.role.is_admin())
        .unwrap_or(false);
    if !session().loading && !is_admin {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let next = AppSettings {
                sheets_url: sheets_url().trim().to_string(),
                accent_color: accent_color().trim().to_string(),
                system_name: system_name().trim().to_string(),
                auto_fill: auto_fill(),
            };
            ui::apply_settings(settings, next).await;
            save_status.set(Some("Settings saved and applied."));
        });
    };

    let handle_reset = move |_: MouseEvent| {
        spawn(async move {
            let defaults = AppSettings::default();
            sheets_url.set(defaults.sheets_url.clone());
            accent_color.set(defaults.accent_color.clone());
            system_name.set(defaults.system_name.clone());
            auto_fill.set(defaults.auto_fill);
            ui::apply_settings(settings, defaults).await;
            save_status.set(Some("Factory defaults restored."));
        });
    };

    let handle_clear = move |_: MouseEvent| {
        spawn(async move {
            ui::clear_archive(records).await;
            archive_status.set(Some("Archive cleared.".to_string()));
        });
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                div {
                    h2 { class: "view-title", "Developer settings" }
                    p { class: "view-sub", "Spreadsheet link, theming, and maintenance" }
                }
                button {
                    class: "link-btn",
                    onclick: handle_reset,
                    "Factory reset"
                }
            }

            form {
                onsubmit: handle_save,
                div {
                    class: "settings-grid",
                    div {
                        class: "card",
                        h3 { class: "section-title", "Spreadsheet sync" }
                        div {
                            class: "field-row",
                            Label { html_for: "sheets-url", "Web app deployment URL" }
                            Input {
                                id: "sheets-url",
                                r#type: "url",
                                placeholder: "https://script.google.com/macros/s/...",
                                value: sheets_url(),
                                oninput: move |evt: FormEvent| {
                                    sheets_url.set(evt.value());
                                    save_status.set(None);
                                },
                            }
                            p {
                                class: "field-help",
                                "Saved records are mirrored here best-effort. Leave empty to keep the archive local-only."
                            }
                        }
                    }

                    div {
                        class: "card",
                        h3 { class: "section-title", "Theme and identity" }
                        div {
                            class: "field-row",
                            Label { html_for: "accent-color", "Accent color" }
                            div {
                                class: "color-row",
                                input {
                                    class: "color-swatch",
                                    r#type: "color",
                                    value: "{accent_color}",
                                    oninput: move |evt: FormEvent| {
                                        accent_color.set(evt.value());
                                        save_status.set(None);
                                    },
                                }
                                Input {
                                    id: "accent-color",
                                    value: accent_color(),
                                    oninput: move |evt: FormEvent| {
                                        accent_color.set(evt.value());
                                        save_status.set(None);
                                    },
                                }
                            }
                        }
                        div {
                            class: "field-row",
                            Label { html_for: "system-name", "Official system name" }
                            Input {
                                id: "system-name",
                                value: system_name(),
                                oninput: move |evt: FormEvent| {
                                    system_name.set(evt.value());
                                    save_status.set(None);
                                },
                            }
                        }
                        div {
                            class: "checkbox-row",
                            input {
                                id: "auto-fill",
                                r#type: "checkbox",
                                checked: auto_fill(),
                                onchange: move |evt: FormEvent| {
                                    auto_fill.set(evt.checked());
                                    save_status.set(None);
                                },
                            }
                            label {
                                r#for: "auto-fill",
                                "Offer AI auto-fill on the add screen"
                            }
                        }
                    }
                }

                div {
                    class: "detail-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        "Save settings"
                    }
                    if let Some(status) = save_status() {
                        span { class: "status-ok", "{status}" }
                    }
                }
            }

            div {
                class: "card danger-zone",
                h3 { class: "section-title", "Maintenance" }
                p {
                    class: "card-text",
                    "Clearing the archive removes every record from this workstation. Records mirrored to the spreadsheet endpoint are not touched."
                }
                div {
                    class: "detail-actions",
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: handle_clear,
                        "Clear archive"
                    }
                    if let Some(status) = archive_status() {
                        span { class: "status-note", "{status}" }
                    }
                }
            }
        }
    }
}

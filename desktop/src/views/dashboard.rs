use dioxus::prelude::*;
use store::Record;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let records = ui::use_records();
    let settings = ui::use_settings();
    let nav = use_navigator();

    let total = records().len();
    let today = store::models::today();
    let today_count = records().iter().filter(|r| r.date == today).count();
    let accounts = api::auth::known_accounts();
    let cloud_sync = !settings().sheets_url.is_empty();
    let recent: Vec<Record> = records().iter().take(5).cloned().collect();

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                div {
                    h2 { class: "view-title", "Welcome to {settings().system_name}" }
                    p { class: "view-sub", "Certified smart archiving workstation" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.push(Route::AddRecord {});
                    },
                    "Add request"
                }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Archived total", value: "{total}" }
                StatCard { label: "Requests today", value: "{today_count}" }
                StatCard { label: "Known accounts", value: "{accounts}" }
            }

            div {
                class: "dashboard-columns",
                div {
                    class: "card",
                    div {
                        class: "card-head",
                        h3 { class: "card-title", "Latest documents" }
                        button {
                            class: "link-btn",
                            onclick: move |_| {
                                nav.push(Route::Archive {});
                            },
                            "Open full archive"
                        }
                    }
                    if recent.is_empty() {
                        p { class: "empty-note", "Nothing archived yet." }
                    } else {
                        for record in recent {
                            RecentRow { record }
                        }
                    }
                }

                div {
                    class: "card card-dark",
                    div {
                        class: "card-head",
                        h3 { class: "card-title", "Archive status" }
                    }
                    p {
                        class: "card-text",
                        if cloud_sync {
                            "Saved records are mirrored to the configured spreadsheet endpoint. Local storage remains authoritative."
                        } else {
                            "Running in local-only mode. An administrator can configure a spreadsheet endpoint under developer settings."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat-card",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}

#[component]
fn RecentRow(record: Record) -> Element {
    let nav = use_navigator();
    let id = record.id.clone();
    let subject = if record.subject.chars().count() > 30 {
        format!("{}...", record.subject.chars().take(30).collect::<String>())
    } else {
        record.subject.clone()
    };

    rsx! {
        button {
            class: "recent-row",
            onclick: move |_| {
                nav.push(Route::RecordDetail { id: id.clone() });
            },
            div {
                p { class: "recent-name", "{record.applicant_name}" }
                p { class: "recent-subject", "{subject}" }
            }
            span { class: "recent-date", "{record.date}" }
        }
    }
}

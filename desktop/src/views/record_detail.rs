//! Record detail: the archival sheet for one request, plus export actions.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};

use crate::Route;

#[component]
pub fn RecordDetail(id: String) -> Element {
    let records = ui::use_records();
    let settings = ui::use_settings();
    let nav = use_navigator();
    let mut export_status = use_signal(|| Option::<String>::None);

    let record = records().iter().find(|r| r.id == id).cloned();

    // Entering the detail screen without a matching record is an invalid
    // state; fall back to the dashboard.
    let Some(record) = record else {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    };

    let archived_on = store::models::date_of_timestamp(&record.created_at);
    let notes = if record.notes.is_empty() {
        "No notes".to_string()
    } else {
        record.notes.clone()
    };

    let csv_record = record.clone();
    let handle_export_csv = move |_: MouseEvent| {
        let contents = store::export::record_csv(&csv_record);
        let stem = store::export::export_file_stem(&csv_record);
        export_status.set(Some(write_export(&format!("{stem}.csv"), &contents)));
    };

    let text_record = record.clone();
    let system_name = settings().system_name;
    let handle_export_text = move |_: MouseEvent| {
        let contents = store::export::record_text(&system_name, &text_record);
        let stem = store::export::export_file_stem(&text_record);
        export_status.set(Some(write_export(&format!("{stem}.txt"), &contents)));
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                button {
                    class: "link-btn",
                    onclick: move |_| {
                        nav.push(Route::Archive {});
                    },
                    "Back to archive"
                }
                div {
                    class: "detail-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_export_csv,
                        "Export CSV"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_export_text,
                        "Export text"
                    }
                }
            }

            if let Some(status) = export_status() {
                p { class: "status-note", "{status}" }
            }

            div {
                class: "detail-grid",
                div {
                    class: "card",
                    div {
                        class: "detail-head",
                        div {
                            h2 { class: "view-title", "{record.applicant_name}" }
                            p { class: "view-sub", "Archived request no. {record.id}" }
                        }
                        div {
                            p { class: "detail-label", "Archived on" }
                            p { class: "detail-value", "{archived_on}" }
                        }
                    }

                    div {
                        class: "detail-fields",
                        div {
                            class: "detail-field",
                            p { class: "detail-label", "Addressed to" }
                            p { class: "detail-value", "{record.recipient}" }
                        }
                        div {
                            class: "detail-field",
                            p { class: "detail-label", "Request date" }
                            p { class: "detail-value", "{record.date}" }
                        }
                        div {
                            class: "detail-field",
                            p { class: "detail-label", "Subject" }
                            p { class: "detail-value", "{record.subject}" }
                        }
                        div {
                            class: "detail-field",
                            p { class: "detail-label", "Office notes" }
                            p { class: "detail-value", "{notes}" }
                        }
                    }

                    p { class: "detail-label", "Extracted text (OCR)" }
                    div { class: "ocr-block", "{record.ocr_text}" }
                }

                div {
                    class: "card",
                    h3 { class: "card-title", "Original document scan" }
                    img { class: "image-frame", src: "{record.image_uri}" }
                    p { class: "field-help", "Stored at capture quality for legal use." }
                }
            }
        }
    }
}

/// Write an export under the platform downloads directory, returning a
/// user-facing status line.
fn write_export(file_name: &str, contents: &str) -> String {
    let dir = dirs::download_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let path = dir.join(file_name);
    match std::fs::write(&path, contents) {
        Ok(()) => format!("Saved {}", path.display()),
        Err(err) => {
            tracing::warn!("export failed: {err}");
            format!("Could not save {file_name}: {err}")
        }
    }
}

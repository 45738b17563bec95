//! New-record screen: scan upload, AI extraction, manual corrections.

use base64::prelude::*;
use dioxus::prelude::*;
use store::Record;
use ui::components::{Button, ButtonVariant, Input, Label, Textarea};

use crate::Route;

#[component]
pub fn AddRecord() -> Element {
    let records = ui::use_records();
    let settings = ui::use_settings();
    let nav = use_navigator();

    let mut image = use_signal(|| Option::<String>::None);
    let mut applicant_name = use_signal(String::new);
    let mut recipient = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut date = use_signal(store::models::today);
    let mut notes = use_signal(String::new);
    let mut ocr_text = use_signal(String::new);

    let mut extracting = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_pick = move |evt: FormEvent| {
        if let Some(files) = evt.files() {
            spawn(async move {
                let names = files.files();
                if let Some(name) = names.first() {
                    if let Some(bytes) = files.read_file(name).await {
                        image.set(Some(to_data_uri(name, &bytes)));
                        error.set(None);
                    }
                }
            });
        }
    };

    let handle_extract = move |_: MouseEvent| {
        let Some(data_uri) = image() else {
            return;
        };
        spawn(async move {
            extracting.set(true);
            error.set(None);
            let outcome = match api::OcrClient::from_env() {
                Ok(client) => client.extract(&data_uri).await,
                Err(e) => Err(e),
            };
            match outcome {
                Ok(result) => {
                    // Merge into the draft; manual notes are kept as-is.
                    applicant_name.set(result.applicant_name);
                    recipient.set(result.recipient);
                    subject.set(result.subject);
                    if !result.date.is_empty() {
                        date.set(result.date);
                    }
                    ocr_text.set(result.full_text);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            extracting.set(false);
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(image_uri) = image() else {
            error.set(Some(
                "Attach a scan of the document before archiving.".to_string(),
            ));
            return;
        };
        spawn(async move {
            saving.set(true);
            let record = Record {
                id: store::models::next_record_id(),
                applicant_name: applicant_name(),
                recipient: recipient(),
                subject: subject(),
                date: date(),
                notes: notes(),
                ocr_text: ocr_text(),
                image_uri,
                created_at: store::models::now_timestamp(),
            };

            // Local persistence is the durability boundary; the mirror runs
            // detached and its outcome is never inspected.
            let endpoint = settings().sheets_url;
            let mirrored = record.clone();
            spawn(async move {
                api::forward_record(&endpoint, &mirrored).await;
            });

            ui::archive_record(records, record).await;
            saving.set(false);
            nav.push(Route::Archive {});
        });
    };

    let auto_fill = settings().auto_fill;
    let sync_on = !settings().sheets_url.is_empty();

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                div {
                    h2 { class: "view-title", "Add request" }
                    p { class: "view-sub", "Upload the document and let the analysis fill in the fields" }
                }
                span {
                    class: "badge",
                    if sync_on { "Live sync enabled" } else { "Local-only mode" }
                }
            }

            if let Some(err) = error() {
                div { class: "error-banner", "{err}" }
            }

            form {
                class: "add-grid",
                onsubmit: handle_submit,

                div {
                    class: "card",
                    if let Some(data_uri) = image() {
                        img { class: "upload-preview", src: "{data_uri}" }
                        div {
                            class: "upload-actions",
                            if auto_fill {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: extracting(),
                                    onclick: handle_extract,
                                    if extracting() { "Analyzing..." } else { "Extract fields" }
                                }
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| image.set(None),
                                "Remove image"
                            }
                        }
                    } else {
                        label {
                            class: "upload-drop",
                            span { class: "upload-drop-title", "Upload the scan" }
                            span { class: "upload-drop-sub", "JPG or PNG" }
                            input {
                                r#type: "file",
                                accept: "image/*",
                                class: "upload-input",
                                onchange: handle_pick,
                            }
                        }
                    }
                }

                div {
                    class: "card",
                    h3 { class: "card-title", "Extracted information" }
                    div {
                        class: "form-grid",
                        div {
                            Label { html_for: "applicant", "Applicant name" }
                            Input {
                                id: "applicant",
                                required: true,
                                placeholder: "Full name",
                                value: applicant_name(),
                                oninput: move |evt: FormEvent| applicant_name.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "recipient", "Addressed to" }
                            Input {
                                id: "recipient",
                                required: true,
                                placeholder: "Ministry or directorate",
                                value: recipient(),
                                oninput: move |evt: FormEvent| recipient.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-wide",
                            Label { html_for: "subject", "Subject" }
                            Input {
                                id: "subject",
                                required: true,
                                value: subject(),
                                oninput: move |evt: FormEvent| subject.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "date", "Request date" }
                            Input {
                                id: "date",
                                r#type: "date",
                                required: true,
                                value: date(),
                                oninput: move |evt: FormEvent| date.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "notes", "Additional notes" }
                            Input {
                                id: "notes",
                                placeholder: "Any other details",
                                value: notes(),
                                oninput: move |evt: FormEvent| notes.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-wide",
                            Label { html_for: "ocr-text", "Extracted text (AI reading)" }
                            Textarea {
                                id: "ocr-text",
                                rows: 8,
                                value: ocr_text(),
                                oninput: move |evt: FormEvent| ocr_text.set(evt.value()),
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "submit-btn",
                        disabled: saving(),
                        if saving() { "Archiving..." } else { "Archive document" }
                    }
                }
            }
        }
    }
}

fn to_data_uri(file_name: &str, bytes: &[u8]) -> String {
    let mime = match file_name
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    };
    format!("data:{mime};base64,{}", BASE64_STANDARD.encode(bytes))
}

use dioxus::prelude::*;
use store::models::search_records;
use store::Record;

use crate::Route;

#[component]
pub fn Archive() -> Element {
    let records = ui::use_records();
    let mut query = use_signal(String::new);

    let all = records();
    let filtered: Vec<Record> = search_records(&all, &query())
        .into_iter()
        .cloned()
        .collect();
    let shown = filtered.len();

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                div {
                    h2 { class: "view-title", "Central archive" }
                    p { class: "view-sub", "Every archived request, incoming and outgoing" }
                }
                input {
                    class: "text-input search-input",
                    r#type: "text",
                    placeholder: "Search by applicant, subject, or recipient...",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }

            div {
                class: "card table-card",
                table {
                    class: "records-table",
                    thead {
                        tr {
                            th { "Applicant" }
                            th { "Addressed to" }
                            th { "Subject" }
                            th { "Date" }
                            th { "" }
                        }
                    }
                    tbody {
                        if filtered.is_empty() {
                            tr {
                                td {
                                    colspan: "5",
                                    class: "empty-cell",
                                    p { "No matching results" }
                                    button {
                                        class: "link-btn",
                                        onclick: move |_| query.set(String::new()),
                                        "Reset search"
                                    }
                                }
                            }
                        } else {
                            for record in filtered {
                                RecordRow { record }
                            }
                        }
                    }
                }
                div {
                    class: "table-foot",
                    "Total records: {shown}"
                }
            }
        }
    }
}

#[component]
fn RecordRow(record: Record) -> Element {
    let nav = use_navigator();
    let id = record.id.clone();

    rsx! {
        tr {
            td { class: "cell-strong", "{record.applicant_name}" }
            td {
                span { class: "tag", "{record.recipient}" }
            }
            td { class: "cell-muted", "{record.subject}" }
            td { class: "cell-muted", "{record.date}" }
            td {
                button {
                    class: "btn btn-outline btn-small",
                    onclick: move |_| {
                        nav.push(Route::RecordDetail { id: id.clone() });
                    },
                    "Details"
                }
            }
        }
    }
}

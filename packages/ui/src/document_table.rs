use api::Document;
use dioxus::prelude::*;

use crate::actions;
use crate::auth::use_app;
use crate::dialogs::BrowserDialogs;
use crate::edit_document_form::EditDocumentForm;
use crate::export_bar::ExportBar;

/// Column headers, in the order of [`Document::cells`].
pub const DOCUMENT_COLUMNS: [&str; 4] = ["ID", "Título", "Autor", "Data"];

/// Documents table, fetched on mount, with the export bar above it.
///
/// A failed fetch alerts and keeps whatever rows were already shown.
/// Roles that may modify records get edit and delete buttons per row; a
/// successful edit or delete refetches the table.
#[component]
pub fn DocumentTable() -> Element {
    let app = use_app();
    let can_modify = actions::can_modify(&app.sessions);
    let mut documents = use_signal(Vec::<Document>::new);
    let mut generation = use_signal(|| 0u32);
    let mut editing = use_signal(|| None::<Document>);

    let loader_app = app.clone();
    let _loader = use_resource(move || {
        let app = loader_app.clone();
        let _ = generation();
        async move {
            if let Some(rows) = actions::load_documents(&app.api, &BrowserDialogs).await {
                documents.set(rows);
            }
        }
    });

    let edit_form = editing().map(|document| {
        rsx! {
            EditDocumentForm {
                key: "{document.id_text()}",
                document: document,
                on_close: move |saved: bool| {
                    editing.set(None);
                    if saved {
                        generation += 1;
                    }
                },
            }
        }
    });

    rsx! {
        ExportBar { documents: documents() }

        table {
            class: "data-table",
            id: "tabela-documentos",
            thead {
                tr {
                    for column in DOCUMENT_COLUMNS {
                        th { "{column}" }
                    }
                    if can_modify {
                        th { "Ações" }
                    }
                }
            }
            tbody {
                for (index, doc) in documents().into_iter().enumerate() {
                    tr {
                        key: "{index}-{doc.id_text()}",
                        for cell in doc.cells() {
                            td { "{cell}" }
                        }
                        if can_modify {
                            td {
                                class: "row-actions",
                                button {
                                    r#type: "button",
                                    onclick: {
                                        let doc = doc.clone();
                                        move |_| editing.set(Some(doc.clone()))
                                    },
                                    "Editar"
                                }
                                button {
                                    class: "danger",
                                    r#type: "button",
                                    onclick: {
                                        let app = app.clone();
                                        let doc = doc.clone();
                                        move |_| {
                                            let app = app.clone();
                                            let doc = doc.clone();
                                            async move {
                                                if actions::delete_document(&app.api, &app.sessions, &BrowserDialogs, &doc).await {
                                                    generation += 1;
                                                }
                                            }
                                        }
                                    },
                                    "Excluir"
                                }
                            }
                        }
                    }
                }
            }
        }

        {edit_form}
    }
}

use api::{Document, ExportFormat};
use dioxus::prelude::*;

use crate::actions;
use crate::auth::use_app;
use crate::browser;
use crate::dialogs::BrowserDialogs;

/// Export controls for the rows currently shown. A blank name lets the
/// backend pick a timestamped one.
#[component]
pub fn ExportBar(documents: Vec<Document>) -> Element {
    let app = use_app();
    let mut name = use_signal(String::new);
    let mut exporting = use_signal(|| false);

    let buttons = ExportFormat::ALL.map(|format| {
        let app = app.clone();
        let documents = documents.clone();
        let onclick = move |_| {
            let app = app.clone();
            let documents = documents.clone();
            async move {
                exporting.set(true);
                let file = actions::export_documents(
                    &app.api,
                    &app.sessions,
                    &BrowserDialogs,
                    format,
                    &name(),
                    &documents,
                )
                .await;
                exporting.set(false);
                if let Some(file) = file {
                    browser::download(&file.file_name, format.mime_type(), &file.bytes);
                }
            }
        };
        (format, onclick)
    });

    rsx! {
        div {
            class: "export-bar",
            input {
                r#type: "text",
                placeholder: "Nome do arquivo (opcional)",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            for (format, onclick) in buttons {
                button {
                    key: "{format.label()}",
                    r#type: "button",
                    disabled: exporting(),
                    onclick: onclick,
                    "Exportar {format.label()}"
                }
            }
        }
    }
}

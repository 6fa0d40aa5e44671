//! Inline form for editing one record.
//!
//! Every stored field except the id, the attachment and the acting user is
//! offered as a text input named after its key. Submitting sends the whole
//! original record next to the edited copy.

use api::Document;
use dioxus::prelude::*;

use crate::actions;
use crate::auth::use_app;
use crate::dialogs::BrowserDialogs;

/// `on_close` receives `true` after a successful save, `false` on cancel.
#[component]
pub fn EditDocumentForm(document: Document, on_close: EventHandler<bool>) -> Element {
    let app = use_app();
    let mut saving = use_signal(|| false);
    let title = format!("Editar documento {}", document.id_text());
    let fields = document.editable_fields();

    let original = document.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        let original = original.clone();
        let edits: Vec<(String, String)> = evt
            .values()
            .into_iter()
            .map(|(key, value)| (key, value.as_value()))
            .collect();
        spawn(async move {
            saving.set(true);
            let saved =
                actions::edit_document(&app.api, &app.sessions, &BrowserDialogs, &original, edits)
                    .await;
            saving.set(false);
            if saved {
                on_close.call(true);
            }
        });
    };

    rsx! {
        form {
            id: "form-editar",
            class: "card",
            onsubmit: handle_save,

            h2 { "{title}" }

            for (key, value) in fields {
                div {
                    key: "{key}",
                    class: "field",
                    label { r#for: "editar-{key}", "{key}" }
                    input {
                        id: "editar-{key}",
                        name: "{key}",
                        r#type: "text",
                        initial_value: "{value}",
                    }
                }
            }

            div {
                class: "row-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving(),
                    "Salvar alterações"
                }
                button {
                    r#type: "button",
                    onclick: move |_| on_close.call(false),
                    "Cancelar"
                }
            }
        }
    }
}

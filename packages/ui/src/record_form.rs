//! Record entry form with an optional attachment upload.
//!
//! Every named input is sent as-is to `/salvar_dados`. The attachment is
//! uploaded as soon as it is picked, and the name the backend stored it
//! under goes into the read-only file-name field until the record is saved.

use dioxus::prelude::*;

use crate::actions;
use crate::auth::use_app;
use crate::browser;
use crate::dialogs::BrowserDialogs;

pub const RECORD_FORM_ID: &str = "form-registro";

/// Accepted attachment types, matching the backend's extension allow-list.
const ACCEPTED_FILES: &str = ".png,.jpg,.jpeg,.gif,.bmp,.mp4,.avi,.mov,.wmv,.mp3,.wav,.ogg,.m4a,.pdf,.doc,.docx,.txt";

#[component]
pub fn RecordForm() -> Element {
    let app = use_app();
    let mut file_name = use_signal(String::new);
    let mut uploading = use_signal(|| false);

    let save_app = app.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let app = save_app.clone();
        let fields: Vec<(String, String)> = evt
            .values()
            .into_iter()
            .map(|(key, value)| (key, value.as_value()))
            .collect();
        spawn(async move {
            let attached = file_name();
            let saved = actions::save_record(
                &app.api,
                &app.sessions,
                &BrowserDialogs,
                fields,
                Some(attached.as_str()),
            )
            .await;
            if saved {
                browser::reset_form(RECORD_FORM_ID);
                file_name.set(String::new());
            }
        });
    };

    let handle_file = move |evt: FormEvent| {
        let app = app.clone();
        async move {
            let Some(files) = evt.files() else {
                return;
            };
            let Some(name) = files.files().into_iter().next() else {
                return;
            };
            let Some(bytes) = files.read_file(&name).await else {
                tracing::warn!("Could not read selected file {name}");
                return;
            };
            uploading.set(true);
            if let Some(stored) =
                actions::upload_file(&app.api, &app.sessions, &BrowserDialogs, &name, bytes).await
            {
                file_name.set(stored);
            }
            uploading.set(false);
        }
    };

    rsx! {
        form {
            id: RECORD_FORM_ID,
            class: "card",
            onsubmit: handle_save,

            h2 { "Novo registro" }

            label { r#for: "titulo", "Título" }
            input { id: "titulo", name: "titulo", r#type: "text" }

            label { r#for: "autor", "Autor" }
            input { id: "autor", name: "autor", r#type: "text" }

            label { r#for: "data", "Data" }
            input { id: "data", name: "data", r#type: "date" }

            label { r#for: "descricao", "Descrição" }
            textarea { id: "descricao", name: "descricao", rows: "3" }

            label { r#for: "arquivo", "Anexo" }
            input {
                id: "arquivo",
                r#type: "file",
                accept: ACCEPTED_FILES,
                disabled: uploading(),
                onchange: handle_file,
            }
            input {
                id: "arquivo_nome",
                r#type: "text",
                readonly: true,
                placeholder: "Nenhum arquivo enviado",
                value: file_name(),
            }

            button {
                class: "primary",
                r#type: "submit",
                disabled: uploading(),
                "Salvar"
            }
        }
    }
}

//! Files in the backend's upload folder (`GET /listar_uploads`).

use api::UploadedFile;
use dioxus::prelude::*;

use crate::actions;
use crate::auth::use_app;
use crate::dialogs::BrowserDialogs;

/// Uploaded attachments with an open link per file. Roles that may modify
/// records also get a delete button.
#[component]
pub fn UploadList() -> Element {
    let app = use_app();
    let can_modify = actions::can_modify(&app.sessions);
    let mut files = use_signal(Vec::<UploadedFile>::new);
    let mut generation = use_signal(|| 0u32);

    let loader_app = app.clone();
    let _loader = use_resource(move || {
        let app = loader_app.clone();
        let _ = generation();
        async move {
            if let Some(rows) = actions::load_uploads(&app.api, &BrowserDialogs).await {
                files.set(rows);
            }
        }
    });

    rsx! {
        div {
            class: "section-header",
            h2 { "Arquivos enviados" }
            button {
                r#type: "button",
                onclick: move |_| generation += 1,
                "Atualizar"
            }
        }
        table {
            class: "data-table",
            id: "tabela-uploads",
            thead {
                tr {
                    th { "Arquivo" }
                    th { "Tamanho" }
                    th { "Modificado em" }
                    if can_modify {
                        th { "Ações" }
                    }
                }
            }
            tbody {
                for file in files() {
                    tr {
                        key: "{file.nome}",
                        td {
                            a {
                                href: app.api.upload_url(&file.nome),
                                target: "_blank",
                                rel: "noopener",
                                "{file.nome}"
                            }
                        }
                        td { "{file.size_label()}" }
                        td { class: "muted", "{file.data_modificacao}" }
                        if can_modify {
                            td {
                                button {
                                    class: "danger",
                                    r#type: "button",
                                    onclick: {
                                        let app = app.clone();
                                        let name = file.nome.clone();
                                        move |_| {
                                            let app = app.clone();
                                            let name = name.clone();
                                            async move {
                                                if actions::delete_upload(&app.api, &app.sessions, &BrowserDialogs, &name).await {
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
    }
}

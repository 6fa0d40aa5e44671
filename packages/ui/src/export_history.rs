//! Past exports (`GET /ver_exportacoes`), newest first.

use api::ExportRecord;
use dioxus::prelude::*;

use crate::actions;
use crate::auth::use_app;
use crate::dialogs::BrowserDialogs;

#[component]
pub fn ExportHistory() -> Element {
    let app = use_app();
    let mut rows = use_signal(Vec::<ExportRecord>::new);
    let mut generation = use_signal(|| 0u32);

    let _loader = use_resource(move || {
        let app = app.clone();
        let _ = generation();
        async move {
            if let Some(fresh) = actions::load_exports(&app.api, &BrowserDialogs).await {
                rows.set(fresh);
            }
        }
    });

    rsx! {
        div {
            class: "section-header",
            h2 { "Exportações" }
            button {
                r#type: "button",
                onclick: move |_| generation += 1,
                "Atualizar"
            }
        }
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Data/hora" }
                    th { "Arquivo" }
                    th { "Tipo" }
                    th { "Usuário" }
                    th { "Documentos" }
                }
            }
            tbody {
                for row in rows().into_iter().rev() {
                    tr {
                        key: "{row.id}",
                        td { class: "muted", "{row.timestamp}" }
                        td { "{row.nome_arquivo}" }
                        td { "{row.tipo}" }
                        td { "{row.usuario}" }
                        td { "{row.quantidade_documentos}" }
                    }
                }
            }
        }
    }
}

//! The backend's audit log (`GET /ver_logs`), newest first.

use api::LogEntry;
use dioxus::prelude::*;

use crate::actions;
use crate::auth::use_app;
use crate::dialogs::BrowserDialogs;

#[component]
pub fn ActivityLog() -> Element {
    let app = use_app();
    let mut entries = use_signal(Vec::<LogEntry>::new);
    let mut generation = use_signal(|| 0u32);

    let _loader = use_resource(move || {
        let app = app.clone();
        let _ = generation();
        async move {
            if let Some(rows) = actions::load_logs(&app.api, &BrowserDialogs).await {
                entries.set(rows);
            }
        }
    });

    rsx! {
        div {
            class: "section-header",
            h2 { "Registro de atividades" }
            button {
                r#type: "button",
                onclick: move |_| generation += 1,
                "Atualizar"
            }
        }
        table {
            class: "data-table activity-log",
            thead {
                tr {
                    th { "Data/hora" }
                    th { "Usuário" }
                    th { "Ação" }
                    th { "Detalhes" }
                }
            }
            tbody {
                for entry in entries().into_iter().rev() {
                    tr {
                        key: "{entry.id}",
                        td { class: "muted", "{entry.timestamp}" }
                        td { "{entry.usuario}" }
                        td { "{entry.acao}" }
                        td { "{entry.detalhes}" }
                    }
                }
            }
        }
    }
}

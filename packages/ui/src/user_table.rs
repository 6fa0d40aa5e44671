use api::UserAccount;
use dioxus::prelude::*;

use crate::actions;
use crate::auth::use_app;
use crate::browser;
use crate::dialogs::BrowserDialogs;

/// Users table with an inline delete action per row.
///
/// Deleting reloads the whole page on success, so the list is refetched.
#[component]
pub fn UserTable() -> Element {
    let app = use_app();
    let mut users = use_signal(Vec::<UserAccount>::new);

    let loader_app = app.clone();
    let _loader = use_resource(move || {
        let app = loader_app.clone();
        async move {
            if let Some(rows) = actions::load_users(&app.api, &BrowserDialogs).await {
                users.set(rows);
            }
        }
    });

    rsx! {
        table {
            class: "data-table",
            id: "tabela-usuarios",
            thead {
                tr {
                    th { "Usuário" }
                    th { "Tipo" }
                    th { "Ações" }
                }
            }
            tbody {
                for user in users() {
                    tr {
                        key: "{user.usuario}",
                        td { "{user.usuario}" }
                        td { "{user.role_label()}" }
                        td {
                            button {
                                class: "danger",
                                onclick: {
                                    let app = app.clone();
                                    let username = user.usuario.clone();
                                    move |_| {
                                        let app = app.clone();
                                        let username = username.clone();
                                        async move {
                                            if actions::delete_user(&app.api, &app.sessions, &BrowserDialogs, &username).await {
                                                browser::reload();
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

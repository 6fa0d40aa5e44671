use api::Role;
use dioxus::prelude::*;

use crate::actions::{self, Registration};
use crate::auth::use_app;
use crate::dialogs::BrowserDialogs;

/// Admin-only form for creating accounts.
#[component]
pub fn RegisterUserForm() -> Element {
    let app = use_app();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(String::new);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            let form = Registration {
                username: username(),
                password: password(),
                role: role(),
            };
            if actions::register_user(&app.api, &app.sessions, &BrowserDialogs, &form).await {
                username.set(String::new());
                password.set(String::new());
                role.set(String::new());
            }
        });
    };

    rsx! {
        form {
            id: "form-cadastro",
            class: "card",
            onsubmit: handle_register,

            h2 { "Cadastrar usuário" }

            label { r#for: "novo-usuario", "Usuário" }
            input {
                id: "novo-usuario",
                r#type: "text",
                value: username(),
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }

            label { r#for: "nova-senha", "Senha" }
            input {
                id: "nova-senha",
                r#type: "password",
                autocomplete: "new-password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            label { r#for: "tipo", "Tipo" }
            select {
                id: "tipo",
                value: role(),
                onchange: move |evt| role.set(evt.value()),
                option { value: "", "Selecione..." }
                for r in Role::ALL {
                    option {
                        key: "{r.as_str()}",
                        value: r.as_str(),
                        "{r.label()}"
                    }
                }
            }

            button {
                class: "primary",
                r#type: "submit",
                "Cadastrar"
            }
        }
    }
}

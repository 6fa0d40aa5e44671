//! Username/password login form.

use dioxus::prelude::*;

use crate::actions;
use crate::auth::use_app;
use crate::browser;
use crate::dialogs::BrowserDialogs;

/// Login form. A successful login navigates to the role's landing page.
#[component]
pub fn LoginForm() -> Element {
    let app = use_app();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            loading.set(true);
            let page = actions::login(
                &app.api,
                &app.sessions,
                &BrowserDialogs,
                &username(),
                &password(),
            )
            .await;
            loading.set(false);
            if let Some(page) = page {
                browser::navigate(page);
            }
        });
    };

    rsx! {
        form {
            id: "form-login",
            class: "card form-login",
            onsubmit: handle_login,

            h2 { "Entrar" }

            label { r#for: "usuario", "Usuário" }
            input {
                id: "usuario",
                r#type: "text",
                autocomplete: "username",
                value: username(),
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }

            label { r#for: "senha", "Senha" }
            input {
                id: "senha",
                r#type: "password",
                autocomplete: "current-password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                class: "primary",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Entrando..." } else { "Entrar" }
            }
        }
    }
}

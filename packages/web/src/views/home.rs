//! Home page: login form.

use dioxus::prelude::*;
use ui::{LoginForm, ThemeToggle};

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            class: "page page-login",
            div {
                class: "page-login-header",
                h1 { "Sistema de Arquivologia" }
                ThemeToggle {}
            }
            LoginForm {}
        }
    }
}

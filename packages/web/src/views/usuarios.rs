//! User management page. The users table only loads here.

use dioxus::prelude::*;
use ui::{BackButton, Navbar, UserTable};

#[component]
pub fn Usuarios() -> Element {
    rsx! {
        Navbar {
            title: "Usuários",
            BackButton {}
        }
        main {
            class: "page",
            section {
                class: "page-section",
                UserTable {}
            }
        }
    }
}

//! Administrator landing page.

use dioxus::prelude::*;
use ui::{
    ActivityLog, DocumentTable, ExportHistory, LogoutButton, Navbar, Page, RecordForm,
    RegisterUserForm, UploadList,
};

#[component]
pub fn Admin() -> Element {
    let users_href = Page::Users.href();

    rsx! {
        Navbar {
            title: "Administração",
            a { class: "button", href: "{users_href}", "Usuários" }
            LogoutButton {}
        }
        main {
            class: "page",
            section {
                class: "page-section",
                h2 { "Documentos" }
                DocumentTable {}
            }
            div {
                class: "page-columns",
                RecordForm {}
                RegisterUserForm {}
            }
            section {
                class: "page-section",
                UploadList {}
            }
            section {
                class: "page-section",
                ExportHistory {}
            }
            section {
                class: "page-section",
                ActivityLog {}
            }
        }
    }
}

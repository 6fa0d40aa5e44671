use dioxus::prelude::*;
use ui::{DocumentTable, LogoutButton, Navbar, RecordForm, UploadList};

/// Coder landing page. Coders enter records but cannot edit or delete them.
#[component]
pub fn Codificador() -> Element {
    rsx! {
        Navbar {
            title: "Codificador",
            LogoutButton {}
        }
        main {
            class: "page",
            section {
                class: "page-section",
                h2 { "Documentos" }
                DocumentTable {}
            }
            RecordForm {}
            section {
                class: "page-section",
                UploadList {}
            }
        }
    }
}

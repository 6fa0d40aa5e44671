use dioxus::prelude::*;
use ui::{DocumentTable, LogoutButton, Navbar, RecordForm, UploadList};

#[component]
pub fn Editor() -> Element {
    rsx! {
        Navbar {
            title: "Editor",
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

use dioxus::prelude::*;

use crate::theme_toggle::ThemeToggle;

/// Page header: title on the left, `children` and the theme toggle on the right.
#[component]
pub fn Navbar(title: String, children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            h1 { class: "navbar-title", "{title}" }
            div {
                class: "navbar-actions",
                {children}
                ThemeToggle {}
            }
        }
    }
}

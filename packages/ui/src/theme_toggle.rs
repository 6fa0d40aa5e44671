use dioxus::prelude::*;

use crate::actions;
use crate::auth::{use_app, use_theme};

/// Light/dark switch. The glyph shows the theme a click will switch to.
#[component]
pub fn ThemeToggle() -> Element {
    let app = use_app();
    let mut theme = use_theme();

    let onclick = move |_| {
        theme.set(actions::toggle_theme(&app.sessions));
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: "Alternar tema",
            onclick: onclick,
            "{theme().glyph()}"
        }
    }
}

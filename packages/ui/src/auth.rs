//! App context, session buttons and the provider that wires them up.

use api::HttpArchive;
use dioxus::prelude::*;
use store::{ClientConfig, SessionStore, Theme};

use crate::actions;
use crate::browser;

/// Storage backing the session on this platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Current theme; the toggle writes it, the provider applies it to the page.
pub type ThemeSignal = Signal<Theme>;

/// Everything an action needs besides the dialogs.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub api: HttpArchive,
    pub sessions: SessionStore<PlatformStore>,
}

impl AppContext {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: HttpArchive::from_config(config),
            sessions: SessionStore::new(PlatformStore::default()),
        }
    }
}

/// Get the app context provided by [`ArchiveProvider`].
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Provider component for the API client, session store and theme.
/// Wrap your app with this component.
#[component]
pub fn ArchiveProvider(config: ClientConfig, children: Element) -> Element {
    let app = use_context_provider(|| AppContext::new(&config));
    let theme: ThemeSignal =
        use_context_provider(|| Signal::new(actions::init_theme(&app.sessions)));

    use_effect(move || {
        browser::apply_theme(theme());
    });

    rsx! {
        {children}
    }
}

/// Button that clears the session and goes back to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Sair".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let app = use_app();

    let onclick = move |_| {
        let page = actions::logout(&app.sessions);
        browser::navigate(page);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Button that returns to the landing page of the logged-in role.
#[component]
pub fn BackButton(
    #[props(default = "Voltar".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let app = use_app();

    let onclick = move |_| {
        browser::navigate(actions::back_destination(&app.sessions));
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

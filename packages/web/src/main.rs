use dioxus::prelude::*;

use store::ClientConfig;
use ui::ArchiveProvider;
use views::{Admin, Codificador, Editor, Home, Usuarios};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/index.html")]
    Index {},
    #[route("/admin.html")]
    Admin {},
    #[route("/editor.html")]
    Editor {},
    #[route("/codificador.html")]
    Codificador {},
    #[route("/usuarios.html")]
    Usuarios {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded `arquivo.toml`.
const CONFIG_TOML: &str = include_str!("../arquivo.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to defaults, then apply the
/// `ARQUIVO_API_URL` build-time override.
fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}: {e}; using defaults", ClientConfig::filename());
        ClientConfig::default()
    });
    config.with_base_url_override(option_env!("ARQUIVO_API_URL"))
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    tracing::debug!("Backend at {}", config.api.base_url);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ArchiveProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// `/index.html` is the same page as `/`.
#[component]
fn Index() -> Element {
    rsx! {
        Home {}
    }
}

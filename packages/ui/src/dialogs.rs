//! Blocking browser dialogs behind a trait, so actions can be tested.

/// `window.alert` / `window.confirm`.
pub trait Dialogs {
    fn alert(&self, message: &str);
    /// Ask a yes/no question. `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

/// The real browser dialogs. Outside the browser, alerts go to the log and
/// every confirmation is declined.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("alert: {message}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("confirm (declined): {message}");
            false
        }
    }
}

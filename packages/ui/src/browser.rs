//! Thin wrappers over `window.location` and the DOM.
//!
//! On native targets these only log, so components still compile and render
//! there.

use store::Theme;

use crate::pages::Page;

/// Attribute on `<html>` that the stylesheet keys the palette on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Full page navigation to one of the fixed pages.
pub fn navigate(page: Page) {
    let href = page.href();
    tracing::info!("navigating to {href}");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&href) {
                tracing::error!("Failed to navigate to {href}: {e:?}");
            }
        }
    }
}

pub fn reload() {
    tracing::info!("reloading page");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                tracing::error!("Failed to reload: {e:?}");
            }
        }
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("{THEME_ATTRIBUTE}={}", theme.as_str());
    }
}

/// Hand `bytes` to the browser as a file download named `file_name`.
pub fn download(file_name: &str, mime_type: &str, bytes: &[u8]) {
    tracing::info!("downloading {file_name} ({} bytes)", bytes.len());
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = save_blob(file_name, mime_type, bytes) {
            tracing::error!("Failed to download {file_name}: {e:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime_type;
    }
}

/// Object URL plus a temporary `<a download>` click.
#[cfg(target_arch = "wasm32")]
fn save_blob(
    file_name: &str,
    mime_type: &str,
    bytes: &[u8],
) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}

/// Call `reset()` on the `<form>` with the given id.
pub fn reset_form(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let form = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok());
        match form {
            Some(form) => form.reset(),
            None => tracing::warn!("No form with id {id}"),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

//! WASM bindings for converting pages from inside the browser.
//!
//! This module exposes the conversion to JavaScript via wasm-bindgen. Writing
//! the result to the clipboard is left to the calling script.

use wasm_bindgen::prelude::*;

use crate::DEFAULT_ROOT;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert page markup (for example `document.documentElement.outerHTML`)
/// to DSL source.
///
/// `root` names the element to convert and defaults to `html`.
#[wasm_bindgen]
pub fn html_to_dsl(html: &str, root: Option<String>) -> Result<String, JsValue> {
    let root = root.as_deref().unwrap_or(DEFAULT_ROOT);
    crate::convert_html(html, root)
        .map(|result| result.content)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

//! Runtime configuration for the frontend.
//!
//! Everything has a compile-time default; the API base can be overridden by
//! deployments through a `window.EMBER_API_BASE` global set before the wasm
//! module loads.

use once_cell::sync::Lazy;
use wasm_bindgen::JsValue;

const DEFAULT_API_BASE: &str = "https://ember-grill-api.vercel.app/api/v1";

/// Upper bound on any API request, milliseconds.
pub const REQUEST_TIMEOUT_MS: i32 = 30_000;

static API_BASE: Lazy<String> = Lazy::new(|| {
    window_override("EMBER_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string())
});

/// Base URL of the remote menu API, resolved once per page load.
pub fn api_base() -> &'static str {
    API_BASE.as_str()
}

/// Build a full API URL from a path (the path should start with "/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn window_override(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(key)).ok()?;
    value.as_string().filter(|s| !s.is_empty())
}

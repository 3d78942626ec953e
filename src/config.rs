//! Runtime Configuration
//!
//! API base URL resolution for the deployed bundle.

use wasm_bindgen::JsValue;

/// Production qrm-service endpoint
pub const DEFAULT_API_BASE: &str = "https://qrm-service.netlify.app/.netlify/functions/api";

/// Global the host page may set before the bundle loads to point the grid
/// at a different API deployment
const API_BASE_GLOBAL: &str = "QR_GRID_API_BASE";

/// Resolve the API base URL, honoring a `window.QR_GRID_API_BASE` override.
pub fn api_base_url() -> String {
    let Some(window) = web_sys::window() else {
        return DEFAULT_API_BASE.to_string();
    };
    js_sys::Reflect::get(&window, &JsValue::from_str(API_BASE_GLOBAL))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

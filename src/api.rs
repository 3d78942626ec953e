//! API Wrappers
//!
//! Fetch-layer bindings to the qrm-service endpoints. Both entry points go
//! through one `get_json` helper so transport and decode failures degrade
//! the same way on the sorted and unsorted paths.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config;
use crate::models::ProfileRow;
use crate::state::{SortSpec, PAGE_LIMIT};

/// Fetch one unsorted page of profiles.
pub async fn fetch_profiles(page: u32) -> Result<Vec<ProfileRow>, String> {
    let url = format!(
        "{}/qr-profiles?page={}&limit={}",
        config::api_base_url(),
        page,
        PAGE_LIMIT
    );
    get_json(&url).await
}

/// Fetch one page of profiles ordered by the active sort spec.
pub async fn fetch_sorted_profiles(page: u32, spec: &SortSpec) -> Result<Vec<ProfileRow>, String> {
    let url = format!(
        "{}/sortedData?page={}&limit={}&field={}&order={}",
        config::api_base_url(),
        page,
        PAGE_LIMIT,
        spec.key,
        spec.order.as_str()
    );
    get_json(&url).await
}

async fn get_json(url: &str) -> Result<Vec<ProfileRow>, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| format!("request failed: {:?}", err))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response value".to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {} from {}", response.status(), url));
    }

    let body = JsFuture::from(
        response
            .json()
            .map_err(|err| format!("body is not JSON: {:?}", err))?,
    )
    .await
    .map_err(|err| format!("failed to read body: {:?}", err))?;

    serde_wasm_bindgen::from_value(body).map_err(|err| err.to_string())
}

//! Browser fetch plumbing via `web-sys`.
//!
//! The dashboard runs as WASM in the page served by the search service, so
//! requests go through the browser's `fetch` with relative URLs. Error
//! bodies still carry a decodable JSON payload, so the body text is returned
//! for any completed response; the HTTP status is reported alongside it and
//! only matters if the body turns out to be undecodable.

use crate::error::{FetchError, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// A completed HTTP exchange: status line plus the raw body text.
pub(crate) struct FetchedBody {
    pub status: u16,
    pub status_text: String,
    pub text: String,
}

/// GET `url` and return the body text regardless of HTTP status.
pub(crate) async fn fetch_text(url: &str) -> Result<FetchedBody> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Request(js_error_text(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Request("fetch did not yield a Response".to_string()))?;

    let text_promise = resp
        .text()
        .map_err(|e| FetchError::Body(js_error_text(&e)))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::Body(js_error_text(&e)))?;

    Ok(FetchedBody {
        status: resp.status(),
        status_text: resp.status_text(),
        text: text_value.as_string().unwrap_or_default(),
    })
}

/// Best-effort human-readable text for a JS exception value.
fn js_error_text(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

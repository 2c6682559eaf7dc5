//! HTTP call to the external land analysis service.
//!
//! Client-side (hydrate): a real multipart `POST` via `gloo-net`.
//! Server-side (SSR): returns `AnalyzeError::Unavailable`, since the upload
//! only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies all come back
//! as `AnalyzeError`; the upload widget turns any of them into a failure toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{AnalysisResult, AnalyzeResponse};
use crate::state::page::SelectedImage;

/// Fixed address of the analysis service.
pub const ANALYZE_ENDPOINT: &str = "http://localhost:8000/analyze";

/// Multipart field carrying the image bytes.
pub const ANALYZE_FORM_FIELD: &str = "file";

const FALLBACK_FAILURE_MESSAGE: &str = "Failed to analyze image";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("{0}")]
    Request(String),
    /// Non-2xx answer; `message` is the body text or a generic fallback.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid analysis response: {0}")]
    Decode(String),
    #[error("analysis is only available in the browser")]
    Unavailable,
}

impl AnalyzeError {
    /// Build the error for a non-2xx response from its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: status_failure_message(body) }
    }
}

/// Failure text for a rejected request: the body as sent, or a fallback when blank.
fn status_failure_message(body: &str) -> String {
    if body.trim().is_empty() {
        FALLBACK_FAILURE_MESSAGE.to_owned()
    } else {
        body.to_owned()
    }
}

/// Parse a successful response body into the shaped result.
///
/// # Errors
///
/// Returns `AnalyzeError::Decode` when the body is not the expected JSON shape.
pub fn decode_analysis(body: &str) -> Result<AnalysisResult, AnalyzeError> {
    serde_json::from_str::<AnalyzeResponse>(body)
        .map(AnalysisResult::from)
        .map_err(|e| AnalyzeError::Decode(e.to_string()))
}

/// Upload `image` to the analysis service and return the shaped result.
///
/// Issues exactly one request. No retry, timeout, or cancellation.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the service answers with a
/// non-2xx status, or the body does not decode.
pub async fn analyze_image(image: &SelectedImage) -> Result<AnalysisResult, AnalyzeError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|e| AnalyzeError::Request(js_error_text(&e)))?;
        form.append_with_blob_and_filename(ANALYZE_FORM_FIELD, image.file(), &image.name)
            .map_err(|e| AnalyzeError::Request(js_error_text(&e)))?;

        let resp = gloo_net::http::Request::post(ANALYZE_ENDPOINT)
            .body(form)
            .map_err(|e| AnalyzeError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| AnalyzeError::Request(e.to_string()))?;

        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AnalyzeError::from_status(resp.status(), &body));
        }

        let body = resp.text().await.map_err(|e| AnalyzeError::Request(e.to_string()))?;
        decode_analysis(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image;
        Err(AnalyzeError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

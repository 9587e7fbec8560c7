//! HTTP client for the remote menu API.
//!
//! Every request goes through [`request_text`]: it prefixes the configured
//! base URL, attaches the persisted bearer token, enforces the fixed request
//! timeout and maps non-2xx/timeout/network failures to a distinguishable
//! [`ApiError`]. There is no retry, backoff or request queuing.
//!
//! Menu endpoints wrap payloads in the `{ success, data, message }` envelope
//! (`*_json`); the auth endpoints respond with a top-level body (`*_value`).

use contracts::shared::api::ApiEnvelope;
use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AbortController;

use super::{config, storage};

/// Failure taxonomy of a single API call. Call sites convert these to the
/// message strings stored in provider state.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request timeout - please try again")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Envelope endpoints
// ---------------------------------------------------------------------------

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<ApiEnvelope<T>, ApiError> {
    decode(request_text(Method::GET, path, None).await?)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<ApiEnvelope<T>, ApiError> {
    decode(request_text(Method::POST, path, Some(encode_body(body)?)).await?)
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<ApiEnvelope<T>, ApiError> {
    decode(request_text(Method::PUT, path, Some(encode_body(body)?)).await?)
}

pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<ApiEnvelope<T>, ApiError> {
    decode(request_text(Method::DELETE, path, None).await?)
}

// ---------------------------------------------------------------------------
// Top-level body endpoints (auth)
// ---------------------------------------------------------------------------

pub async fn get_value<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(request_text(Method::GET, path, None).await?)
}

pub async fn post_value<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(request_text(Method::POST, path, Some(encode_body(body)?)).await?)
}

// ---------------------------------------------------------------------------
// Core
// ---------------------------------------------------------------------------

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(text: String) -> Result<T, ApiError> {
    serde_json::from_str::<T>(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send one request and return the successful response body as text.
async fn request_text(
    method: Method,
    path: &str,
    body: Option<String>,
) -> Result<String, ApiError> {
    let url = config::api_url(path);

    let mut builder = RequestBuilder::new(&url)
        .method(method)
        .header("Accept", "application/json");

    if let Some(token) = storage::get_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    // Abort the fetch when the deadline fires; the flag distinguishes a
    // deliberate timeout from an ordinary network failure afterwards.
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    builder = builder.abort_signal(signal.as_ref());

    let timed_out = Rc::new(Cell::new(false));
    let timer = controller.as_ref().and_then(|c| {
        let controller = c.clone();
        let timed_out = timed_out.clone();
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(move || {
            timed_out.set(true);
            controller.abort();
        }) as Box<dyn FnMut()>);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                config::REQUEST_TIMEOUT_MS,
            )
            .ok()?;
        Some((closure, handle))
    });

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(json)
            .map_err(|e| ApiError::Network(e.to_string())),
        None => builder.build().map_err(|e| ApiError::Network(e.to_string())),
    };

    let sent = match request {
        Ok(request) => request.send().await,
        Err(e) => {
            clear_timer(timer);
            return Err(e);
        }
    };

    let response = match sent {
        Ok(response) => response,
        Err(e) => {
            clear_timer(timer);
            return if timed_out.get() {
                Err(ApiError::Timeout)
            } else {
                Err(ApiError::Network(e.to_string()))
            };
        }
    };

    clear_timer(timer);

    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !ok {
        // Prefer the body's message for the user-facing error text.
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text)
            .ok()
            .and_then(|env| env.message)
            .unwrap_or_else(|| "Something went wrong".to_string());
        return Err(ApiError::Status { status, message });
    }

    Ok(text)
}

fn clear_timer(timer: Option<(Closure<dyn FnMut()>, i32)>) {
    if let Some((_closure, handle)) = timer {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle);
        }
        // _closure dropped here, after the timer can no longer fire
    }
}

//! API utilities for talking to the REST backend.
//!
//! Builds request URLs from the current window location and wraps the
//! `web_sys` fetch dance into typed helpers with a small error taxonomy.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location, using
/// port 3000 for the backend server. Empty string if no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with `/`).
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Transport / server error taxonomy.
///
/// Read failures on critical paths escalate to a page-level fallback;
/// write failures surface as a transient notification and the user
/// retries manually.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The fetch itself failed: no response at all.
    Unreachable,
    NotFound,
    /// Non-2xx response other than 404.
    Status(u16),
    /// 2xx response whose body did not decode.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable => write!(f, "Server unreachable"),
            Self::NotFound => write!(f, "Not found"),
            Self::Status(code) => write!(f, "Server error (HTTP {})", code),
            Self::Decode(e) => write!(f, "Bad response: {}", e),
        }
    }
}

async fn fetch(method: &str, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(json) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(&api_url(path), &opts)
        .map_err(|_| ApiError::Unreachable)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|_| ApiError::Unreachable)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| ApiError::Unreachable)?;

    let window = web_sys::window().ok_or(ApiError::Unreachable)?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::Unreachable)?;
    let resp: Response = resp_value.dyn_into().map_err(|_| ApiError::Unreachable)?;

    if resp.status() == 404 {
        return Err(ApiError::NotFound);
    }
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let text = wasm_bindgen_futures::JsFuture::from(
        resp.text().map_err(|_| ApiError::Unreachable)?,
    )
    .await
    .map_err(|_| ApiError::Unreachable)?;
    let text: String = text.as_string().ok_or(ApiError::Unreachable)?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET path`, decoding the JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    read_json(fetch("GET", path, None).await?).await
}

/// Send a JSON body and decode the JSON response.
pub async fn send_json<T: DeserializeOwned, B: Serialize>(
    method: &str,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    read_json(fetch(method, path, Some(json)).await?).await
}

/// Send a JSON body, ignoring the response body.
pub async fn send_json_no_content<B: Serialize>(
    method: &str,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    fetch(method, path, Some(json)).await.map(|_| ())
}

/// `DELETE path` (hard delete).
pub async fn delete(path: &str) -> Result<(), ApiError> {
    fetch("DELETE", path, None).await.map(|_| ())
}

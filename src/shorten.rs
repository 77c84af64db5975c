/// Client for the public TinyURL create endpoint
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

pub const CREATE_ENDPOINT: &str = "https://tinyurl.com/api-create.php";

/// Why a shorten request failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShortenError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("Could not reach the shortening service: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("The shortening service rejected the request (status {0})")]
    Service(u16),

    /// The service answered 2xx but the body was unusable.
    #[error("The shortening service returned an empty response")]
    EmptyBody,
}

/// Build the request URL with `long_url` percent-encoded into the query.
pub fn request_url(long_url: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("url", long_url)
        .finish();
    format!("{CREATE_ENDPOINT}?{query}")
}

/// Shorten `long_url` with a single GET request. No retry, no caching,
/// no client-side timeout; the transport default applies.
pub async fn shorten(long_url: &str) -> Result<String, ShortenError> {
    let window =
        web_sys::window().ok_or_else(|| ShortenError::Network("no window".to_string()))?;

    let response_value = JsFuture::from(window.fetch_with_str(&request_url(long_url)))
        .await
        .map_err(|e| ShortenError::Network(js_error_message(&e)))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| ShortenError::Network("unexpected fetch return value".to_string()))?;

    if !response.ok() {
        return Err(ShortenError::Service(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|e| ShortenError::Network(js_error_message(&e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| ShortenError::Network(js_error_message(&e)))?;

    parse_body(&body.as_string().unwrap_or_default())
}

/// The response body is the short URL as plain text.
fn parse_body(body: &str) -> Result<String, ShortenError> {
    let short_url = body.trim();
    if short_url.is_empty() {
        Err(ShortenError::EmptyBody)
    } else {
        Ok(short_url.to_string())
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

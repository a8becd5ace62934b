use std::borrow::Cow;

use hyper::body::Bytes;
use hyper::{HeaderMap, StatusCode};

use crate::rate_limit::RateLimit;

/// The raw HTTP response of an API call.
///
/// The body is buffered in full before it is decoded, so it remains readable after the typed
/// result has been produced.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the numeric HTTP status code.
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns the HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Returns the status line text, e.g. `404 Not Found`.
    pub fn status_text(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {}", self.status.as_str(), reason),
            None => self.status.as_str().to_string(),
        }
    }

    /// Returns all response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the value of a single header, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Returns the buffered response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the response body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns the rate limit information the API attached to this response.
    pub fn rate_limit(&self) -> RateLimit {
        RateLimit::from_headers(&self.headers)
    }

    pub(crate) fn is_success(&self) -> bool {
        self.status.as_u16() < 300
    }
}

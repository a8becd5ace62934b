use thiserror::Error as ThisError;

use crate::models::ApiErrorBody;
use crate::response::ApiResponse;
use crate::transport::TransportError;

/// Error type returned by every API operation.
///
/// Nothing in this crate retries or suppresses a failure; each variant describes exactly one
/// way a call can go wrong and is handed back to the caller unchanged.
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum Error {
    /// A parameter the operation declares as required was never supplied. No request was sent.
    #[error("{0} is required and must be specified")]
    ParameterRequired(&'static str),

    /// The HTTP request could not be assembled, typically because of an invalid URL or a
    /// header value containing characters HTTP does not allow.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The transport failed before a response was received (connect, TLS, IO, ...).
    #[error("request failed: {0}")]
    Transport(#[source] TransportError),

    /// The response body could not be decoded into the expected type. This is reported for
    /// success responses as well as for error bodies that do not match their declared shape.
    #[error("failed to decode response body ({}): {source}", .response.status_text())]
    Decode {
        /// The buffered response whose body failed to decode.
        response: ApiResponse,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a status the operation declares, and the body decoded into the
    /// matching error shape.
    #[error("{}: {body}", .response.status_text())]
    Api {
        /// The buffered response.
        response: ApiResponse,
        /// The decoded, status-specific error payload.
        body: ApiErrorBody,
    },

    /// The API answered with an error status the operation does not declare.
    #[error("unexpected response status {}", .response.status_text())]
    Http {
        /// The buffered response, including the raw body.
        response: ApiResponse,
    },
}

impl Error {
    /// Returns the HTTP response associated with this error, if the server answered.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            Error::Decode { response, .. } | Error::Api { response, .. } | Error::Http { response } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// Returns the HTTP status code associated with this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        self.response().map(ApiResponse::status)
    }

    /// Returns the decoded error payload for [Error::Api].
    pub fn body(&self) -> Option<&ApiErrorBody> {
        match self {
            Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

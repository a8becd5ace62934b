use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Body of a `400 Bad Request` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRequestErrorRep {
    /// Specific error code encountered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Description of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a `401 Unauthorized` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnauthorizedErrorRep {
    /// Specific error code encountered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Description of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a `403 Forbidden` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenErrorRep {
    /// Specific error code encountered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Description of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a `404 Not Found` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundErrorRep {
    /// Specific error code encountered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Description of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a `405 Method Not Allowed` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNotAllowedErrorRep {
    /// Specific error code encountered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Description of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a `409 Conflict` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConflictErrorRep {
    /// Specific error code encountered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Description of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a `422 Unprocessable Entity` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnprocessableEntityErrorRep {
    /// Specific error code encountered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Description of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a `429 Too Many Requests` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitedErrorRep {
    /// Specific error code encountered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Description of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The generic error envelope, used by operations that do not declare a more specific shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericErrorRep {
    /// Specific error code encountered.
    pub code: String,
    /// Description of the error.
    pub message: String,
    /// Identifier of the failed request, useful when contacting support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Error shapes an operation can declare for a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// [InvalidRequestErrorRep]
    InvalidRequest,
    /// [UnauthorizedErrorRep]
    Unauthorized,
    /// [ForbiddenErrorRep]
    Forbidden,
    /// [NotFoundErrorRep]
    NotFound,
    /// [MethodNotAllowedErrorRep]
    MethodNotAllowed,
    /// [StatusConflictErrorRep]
    StatusConflict,
    /// [UnprocessableEntityErrorRep]
    UnprocessableEntity,
    /// [RateLimitedErrorRep]
    RateLimited,
    /// [GenericErrorRep]
    Generic,
}

impl ErrorKind {
    pub(crate) fn decode(self, body: &[u8]) -> Result<ApiErrorBody, serde_json::Error> {
        Ok(match self {
            ErrorKind::InvalidRequest => ApiErrorBody::InvalidRequest(serde_json::from_slice(body)?),
            ErrorKind::Unauthorized => ApiErrorBody::Unauthorized(serde_json::from_slice(body)?),
            ErrorKind::Forbidden => ApiErrorBody::Forbidden(serde_json::from_slice(body)?),
            ErrorKind::NotFound => ApiErrorBody::NotFound(serde_json::from_slice(body)?),
            ErrorKind::MethodNotAllowed => {
                ApiErrorBody::MethodNotAllowed(serde_json::from_slice(body)?)
            }
            ErrorKind::StatusConflict => ApiErrorBody::StatusConflict(serde_json::from_slice(body)?),
            ErrorKind::UnprocessableEntity => {
                ApiErrorBody::UnprocessableEntity(serde_json::from_slice(body)?)
            }
            ErrorKind::RateLimited => ApiErrorBody::RateLimited(serde_json::from_slice(body)?),
            ErrorKind::Generic => ApiErrorBody::Generic(serde_json::from_slice(body)?),
        })
    }
}

/// A decoded error payload, typed by the status code it was returned with.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiErrorBody {
    /// `400 Bad Request`
    InvalidRequest(InvalidRequestErrorRep),
    /// `401 Unauthorized`
    Unauthorized(UnauthorizedErrorRep),
    /// `403 Forbidden`
    Forbidden(ForbiddenErrorRep),
    /// `404 Not Found`
    NotFound(NotFoundErrorRep),
    /// `405 Method Not Allowed`
    MethodNotAllowed(MethodNotAllowedErrorRep),
    /// `409 Conflict`
    StatusConflict(StatusConflictErrorRep),
    /// `422 Unprocessable Entity`
    UnprocessableEntity(UnprocessableEntityErrorRep),
    /// `429 Too Many Requests`
    RateLimited(RateLimitedErrorRep),
    /// Any status the operation maps to the generic envelope.
    Generic(GenericErrorRep),
}

impl ApiErrorBody {
    /// Returns the shape of this payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiErrorBody::InvalidRequest(_) => ErrorKind::InvalidRequest,
            ApiErrorBody::Unauthorized(_) => ErrorKind::Unauthorized,
            ApiErrorBody::Forbidden(_) => ErrorKind::Forbidden,
            ApiErrorBody::NotFound(_) => ErrorKind::NotFound,
            ApiErrorBody::MethodNotAllowed(_) => ErrorKind::MethodNotAllowed,
            ApiErrorBody::StatusConflict(_) => ErrorKind::StatusConflict,
            ApiErrorBody::UnprocessableEntity(_) => ErrorKind::UnprocessableEntity,
            ApiErrorBody::RateLimited(_) => ErrorKind::RateLimited,
            ApiErrorBody::Generic(_) => ErrorKind::Generic,
        }
    }

    /// Returns the error code reported by the API.
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiErrorBody::InvalidRequest(rep) => rep.code.as_deref(),
            ApiErrorBody::Unauthorized(rep) => rep.code.as_deref(),
            ApiErrorBody::Forbidden(rep) => rep.code.as_deref(),
            ApiErrorBody::NotFound(rep) => rep.code.as_deref(),
            ApiErrorBody::MethodNotAllowed(rep) => rep.code.as_deref(),
            ApiErrorBody::StatusConflict(rep) => rep.code.as_deref(),
            ApiErrorBody::UnprocessableEntity(rep) => rep.code.as_deref(),
            ApiErrorBody::RateLimited(rep) => rep.code.as_deref(),
            ApiErrorBody::Generic(rep) => Some(rep.code.as_str()),
        }
    }

    /// Returns the error message reported by the API.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiErrorBody::InvalidRequest(rep) => rep.message.as_deref(),
            ApiErrorBody::Unauthorized(rep) => rep.message.as_deref(),
            ApiErrorBody::Forbidden(rep) => rep.message.as_deref(),
            ApiErrorBody::NotFound(rep) => rep.message.as_deref(),
            ApiErrorBody::MethodNotAllowed(rep) => rep.message.as_deref(),
            ApiErrorBody::StatusConflict(rep) => rep.message.as_deref(),
            ApiErrorBody::UnprocessableEntity(rep) => rep.message.as_deref(),
            ApiErrorBody::RateLimited(rep) => rep.message.as_deref(),
            ApiErrorBody::Generic(rep) => Some(rep.message.as_str()),
        }
    }
}

impl Display for ApiErrorBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (self.code(), self.message()) {
            (Some(code), Some(message)) => write!(f, "{}: {}", code, message),
            (Some(code), None) => write!(f, "{}", code),
            (None, Some(message)) => write!(f, "{}", message),
            (None, None) => write!(f, "{:?}", self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ErrorKind::InvalidRequest)]
    #[test_case(ErrorKind::Unauthorized)]
    #[test_case(ErrorKind::Forbidden)]
    #[test_case(ErrorKind::NotFound)]
    #[test_case(ErrorKind::MethodNotAllowed)]
    #[test_case(ErrorKind::StatusConflict)]
    #[test_case(ErrorKind::UnprocessableEntity)]
    #[test_case(ErrorKind::RateLimited)]
    #[test_case(ErrorKind::Generic)]
    fn decodes_into_the_requested_shape(kind: ErrorKind) {
        let body = br#"{"code": "some_code", "message": "Something happened", "id": "req-1"}"#;
        let decoded = kind.decode(body).expect("body should decode");

        assert_eq!(kind, decoded.kind());
        assert_eq!(Some("some_code"), decoded.code());
        assert_eq!(Some("Something happened"), decoded.message());
    }

    #[test]
    fn generic_shape_requires_code_and_message() {
        assert!(ErrorKind::Generic.decode(br#"{"message": "oops"}"#).is_err());
        assert!(ErrorKind::NotFound.decode(br#"{"message": "oops"}"#).is_ok());
    }

    #[test]
    fn malformed_bodies_fail_to_decode() {
        assert!(ErrorKind::NotFound.decode(b"<html>gateway</html>").is_err());
    }

    #[test]
    fn display_prefers_code_and_message() {
        let body = ApiErrorBody::RateLimited(RateLimitedErrorRep {
            code: Some("rate_limited".into()),
            message: Some("You've exceeded the API rate limit".into()),
        });
        assert_eq!("rate_limited: You've exceeded the API rate limit", body.to_string());

        let empty = ApiErrorBody::Forbidden(ForbiddenErrorRep::default());
        assert_eq!("Forbidden", empty.to_string());
    }
}

/// Trait which supplies the value of the `Authorization` header.
///
/// A provider is attached to the client when it is built and consulted once per request.
/// Returning `None` sends the request without an `Authorization` header; the API will then
/// answer with `401 Unauthorized`.
pub trait CredentialProvider: Send + Sync {
    /// Returns the full `Authorization` header value, if any.
    fn authorization(&self) -> Option<String>;
}

/// A LaunchDarkly access token, optionally preceded by a scheme prefix.
///
/// Personal and service access tokens are sent as-is:
/// ```
/// # use launchdarkly_api_client::{ApiKey, CredentialProvider};
/// let key = ApiKey::new("api-0123");
/// assert_eq!(Some("api-0123".to_string()), key.authorization());
/// ```
///
/// A prefix is separated from the key by a single space:
/// ```
/// # use launchdarkly_api_client::{ApiKey, CredentialProvider};
/// let key = ApiKey::new("api-0123").with_prefix("Bearer");
/// assert_eq!(Some("Bearer api-0123".to_string()), key.authorization());
/// ```
#[derive(Clone)]
pub struct ApiKey {
    key: String,
    prefix: Option<String>,
}

impl ApiKey {
    /// Create a new [ApiKey] which sends `key` without a prefix.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prefix: None,
        }
    }

    /// Set the prefix placed before the key.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl CredentialProvider for ApiKey {
    fn authorization(&self) -> Option<String> {
        if self.key.is_empty() {
            return None;
        }

        match &self.prefix {
            Some(prefix) if !prefix.is_empty() => Some(format!("{} {}", prefix, self.key)),
            _ => Some(self.key.clone()),
        }
    }
}

// Keys are secrets; keep them out of debug output.
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("key", &"[redacted]")
            .field("prefix", &self.prefix)
            .finish()
    }
}

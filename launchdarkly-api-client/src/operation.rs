use hyper::Method;

use crate::models::ErrorKind;

pub(crate) const APPLICATION_JSON: &str = "application/json";
pub(crate) const SEMANTIC_PATCH: &str =
    "application/json; domain-model=launchdarkly.semanticpatch";

/// Static description of one REST endpoint.
///
/// Each request builder owns a `static` instance. The dispatcher reads everything it needs
/// from here: how to route the call, what to negotiate and which error shape belongs to
/// which status code.
#[derive(Debug)]
pub(crate) struct Operation {
    /// Operation ID, as used for per-operation base URL overrides.
    pub id: &'static str,
    pub method: Method,
    /// Path template with `{name}` placeholders.
    pub path: &'static str,
    pub accepts: &'static [&'static str],
    pub content_types: &'static [&'static str],
    pub errors: &'static [(u16, ErrorKind)],
}

impl Operation {
    pub(crate) fn error_kind(&self, status: u16) -> Option<ErrorKind> {
        self.errors
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, kind)| *kind)
    }

    pub(crate) fn accept_header(&self) -> Option<String> {
        if self.accepts.is_empty() {
            return None;
        }
        if self.accepts.contains(&APPLICATION_JSON) {
            return Some(APPLICATION_JSON.to_string());
        }
        Some(self.accepts.join(","))
    }

    /// Picks the content type for a request body: the requested one if the operation declares
    /// it, otherwise JSON when declared, otherwise the first declared type.
    pub(crate) fn content_type(&self, requested: Option<&'static str>) -> Option<&'static str> {
        if let Some(requested) = requested {
            if self.content_types.contains(&requested) {
                return Some(requested);
            }
        }
        if self.content_types.contains(&APPLICATION_JSON) {
            return Some(APPLICATION_JSON);
        }
        self.content_types.first().copied()
    }
}

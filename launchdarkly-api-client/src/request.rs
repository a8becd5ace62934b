use serde::Serialize;

use crate::error::Error;
use crate::query::QueryParams;

/// Body bytes plus the content type the builder asked for.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RequestBody {
    pub content_type: Option<&'static str>,
    pub bytes: Vec<u8>,
}

/// Everything a request builder contributes to a call: the expanded path, the query string,
/// operation specific headers and the body.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ApiRequest {
    pub path: String,
    pub query: QueryParams,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    pub(crate) fn new(path: String) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub(crate) fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub(crate) fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub(crate) fn json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, Error> {
        self.encode_body(None, body)
    }

    pub(crate) fn json_as<T: Serialize + ?Sized>(
        self,
        content_type: &'static str,
        body: &T,
    ) -> Result<Self, Error> {
        self.encode_body(Some(content_type), body)
    }

    fn encode_body<T: Serialize + ?Sized>(
        mut self,
        content_type: Option<&'static str>,
        body: &T,
    ) -> Result<Self, Error> {
        let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
        self.body = Some(RequestBody {
            content_type,
            bytes,
        });
        Ok(self)
    }

    /// The path followed by the encoded query string, if any.
    pub(crate) fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.encode())
        }
    }
}

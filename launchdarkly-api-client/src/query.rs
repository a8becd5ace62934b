//! Query string assembly.
//!
//! Request builders hold their query parameters as optional fields. [QueryParams] lets every
//! builder add them uniformly, in the order the operation declares them, skipping the ones that
//! were never set.

use std::fmt::Display;

use percent_encoding::utf8_percent_encode;

use crate::path::PATH_SEGMENT_ENCODE_SET;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(mut self, name: &'static str, value: impl Display) -> Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    pub(crate) fn push_opt<T: Display>(self, name: &'static str, value: &Option<T>) -> Self {
        match value {
            Some(value) => self.push(name, value),
            None => self,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    name,
                    utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET)
                )
            })
            .collect::<Vec<String>>()
            .join("&")
    }
}

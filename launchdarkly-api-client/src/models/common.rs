use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A hypermedia link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target of the link, relative to the API base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Media type of the target.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl Link {
    /// Create a link to `href` with the JSON media type.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            r#type: Some("application/json".to_string()),
        }
    }
}

/// Collection responses which wrap their items in a pagination envelope.
///
/// The client does not follow links on its own. To fetch the next page, pass the next
/// `offset` to the list operation, or read [Paginated::next_link] and issue the request
/// yourself.
pub trait Paginated {
    /// Type of the items in the collection.
    type Item;

    /// Returns the items on this page.
    fn items(&self) -> &[Self::Item];

    /// Returns the links of the envelope, keyed by relation (`self`, `next`, `prev`, `first`,
    /// `last`).
    fn links(&self) -> Option<&HashMap<String, Link>>;

    /// Returns the target of the link with the given relation.
    fn link(&self, relation: &str) -> Option<&str> {
        self.links()
            .and_then(|links| links.get(relation))
            .and_then(|link| link.href.as_deref())
    }

    /// Returns the target of the `next` link, if there is another page.
    fn next_link(&self) -> Option<&str> {
        self.link("next")
    }
}

/// Details on the allowed and denied actions for a resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
    /// Actions denied to the caller.
    pub denied: Vec<AccessDenied>,
    /// Actions allowed to the caller.
    pub allowed: Vec<AccessAllowed>,
}

/// An action denied to the caller, with the policy statement that denies it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDenied {
    /// The denied action.
    pub action: String,
    /// The policy statement responsible.
    pub reason: AccessReason,
}

/// An action allowed to the caller, with the policy statement that allows it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessAllowed {
    /// The allowed action.
    pub action: String,
    /// The policy statement responsible.
    pub reason: AccessReason,
}

/// A policy statement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReason {
    /// Resource specifiers the statement applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    /// Resource specifiers the statement does not apply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_resources: Option<Vec<String>>,
    /// Actions the statement applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    /// Actions the statement does not apply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_actions: Option<Vec<String>>,
    /// Whether the statement allows or denies access.
    pub effect: String,
    /// Key of the role the statement belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

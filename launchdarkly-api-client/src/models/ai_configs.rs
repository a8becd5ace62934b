use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Link, Nullable, Paginated};

/// A chat message sent to the model as part of an AI Config variation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The message text. May contain `{{ variable }}` placeholders.
    pub content: String,
    /// One of `system`, `user` or `assistant`.
    pub role: String,
}

impl Message {
    /// Create a new message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: role.into(),
        }
    }
}

/// A reference to the model configuration a variation uses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfigRef {
    /// Key of the model configuration.
    pub key: String,
    /// Human readable name of the model configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Identifier of the model at the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
}

/// The member or team responsible for an AI Config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AiConfigMaintainer {
    /// An account member.
    #[serde(rename_all = "camelCase")]
    Member {
        /// ID of the member.
        #[serde(rename = "_id")]
        id: String,
        /// Email address of the member.
        email: String,
        /// First name of the member.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first_name: Option<String>,
        /// Last name of the member.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
        /// Built-in role of the member.
        role: String,
    },
    /// A team.
    Team {
        /// Key of the team.
        key: String,
        /// Name of the team.
        name: String,
    },
}

/// A variation of an AI Config: the prompt and model a context is served.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfigVariation {
    /// Hypermedia links.
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
    /// Unique identifier of the variation.
    #[serde(rename = "_id")]
    pub id: String,
    /// Key of the variation, unique within the AI Config.
    pub key: String,
    /// Human readable name of the variation.
    pub name: String,
    /// Messages sent to the model, in order.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Model parameters, such as `temperature` or `maxTokens`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub model: HashMap<String, Value>,
    /// Key of the model configuration used by the variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_config_key: Option<String>,
    /// The referenced model configuration, when expanded.
    #[serde(rename = "_modelConfig", skip_serializing_if = "Option::is_none")]
    pub model_config: Option<ModelConfigRef>,
    /// Version of the variation.
    pub version: i32,
    /// When the variation was created, in epoch milliseconds.
    pub created_at: i64,
    /// Lifecycle state of the variation, e.g. `published`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// When the variation was archived, in epoch milliseconds.
    #[serde(rename = "_archivedAt", skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<i64>,
    /// When the variation was published, in epoch milliseconds.
    #[serde(rename = "_publishedAt", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<i64>,
}

/// A single AI Config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    /// Hypermedia links.
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
    /// Details on the allowed and denied actions for the AI Config.
    #[serde(rename = "_access", skip_serializing_if = "Option::is_none")]
    pub access: Option<super::Access>,
    /// Key of the AI Config, unique within the project.
    pub key: String,
    /// Human readable name of the AI Config.
    pub name: String,
    /// Description of the AI Config.
    #[serde(default)]
    pub description: String,
    /// Tags attached to the AI Config.
    #[serde(default)]
    pub tags: Vec<String>,
    /// The member or team responsible for the AI Config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<AiConfigMaintainer>,
    /// Version of the AI Config.
    pub version: i32,
    /// Variations of the AI Config.
    #[serde(default)]
    pub variations: Vec<AiConfigVariation>,
    /// When the AI Config was created, in epoch milliseconds.
    pub created_at: i64,
    /// When the AI Config was last updated, in epoch milliseconds.
    pub updated_at: i64,
}

/// A page of AI Configs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfigs {
    /// The AI Configs on this page.
    pub items: Vec<AiConfig>,
    /// Total number of AI Configs matching the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    /// Pagination links.
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
}

impl Paginated for AiConfigs {
    type Item = AiConfig;

    fn items(&self) -> &[AiConfig] {
        &self.items
    }

    fn links(&self) -> Option<&HashMap<String, Link>> {
        self.links.as_ref()
    }
}

/// Variations of an AI Config sharing a key, one per version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfigVariationsResponse {
    /// The variations.
    pub items: Vec<AiConfigVariation>,
    /// Total number of variations.
    pub total_count: i32,
    /// Hypermedia links.
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
}

/// Request body for creating an AI Config.
///
/// ```
/// # use launchdarkly_api_client::models::AiConfigPost;
/// let body = AiConfigPost::new("chat-bot", "Chat bot")
///     .set_description("Support assistant")
///     .set_tags(["support", "beta"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfigPost {
    /// Key of the new AI Config.
    pub key: String,
    /// Human readable name of the new AI Config.
    pub name: String,
    /// Description of the AI Config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ID of the member responsible for the AI Config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_id: Option<String>,
    /// Key of the team responsible for the AI Config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_team_key: Option<String>,
    /// Tags to attach to the AI Config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl AiConfigPost {
    /// Create a new instance with the required fields.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the [description][Self::description] field.
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the [maintainer_id][Self::maintainer_id] field.
    pub fn set_maintainer_id(mut self, maintainer_id: impl Into<String>) -> Self {
        self.maintainer_id = Some(maintainer_id.into());
        self
    }

    /// Set the [maintainer_team_key][Self::maintainer_team_key] field.
    pub fn set_maintainer_team_key(mut self, maintainer_team_key: impl Into<String>) -> Self {
        self.maintainer_team_key = Some(maintainer_team_key.into());
        self
    }

    /// Set the [tags][Self::tags] field.
    pub fn set_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// A JSON merge patch for an AI Config.
///
/// Fields left [Nullable::Absent] are not changed. The maintainer fields accept an explicit
/// `null` to clear the maintainer.
///
/// ```
/// # use launchdarkly_api_client::models::AiConfigPatch;
/// let patch = AiConfigPatch::new()
///     .set_name("Chat bot v2")
///     .clear_maintainer();
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfigPatch {
    /// New description.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub description: Nullable<String>,
    /// New name.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    /// ID of the new maintainer, or `null` to remove the member maintainer.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub maintainer_id: Nullable<String>,
    /// Key of the new maintainer team, or `null` to remove the team maintainer.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub maintainer_team_key: Nullable<String>,
    /// Replacement tag list.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub tags: Nullable<Vec<String>>,
}

impl AiConfigPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [description][Self::description] field.
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description.set(description.into());
        self
    }

    /// Set the [name][Self::name] field.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name.set(name.into());
        self
    }

    /// Set the [maintainer_id][Self::maintainer_id] field.
    pub fn set_maintainer_id(mut self, maintainer_id: impl Into<String>) -> Self {
        self.maintainer_id.set(maintainer_id.into());
        self
    }

    /// Set the [maintainer_team_key][Self::maintainer_team_key] field.
    pub fn set_maintainer_team_key(mut self, maintainer_team_key: impl Into<String>) -> Self {
        self.maintainer_team_key.set(maintainer_team_key.into());
        self
    }

    /// Send an explicit `null` for both maintainer fields.
    pub fn clear_maintainer(mut self) -> Self {
        self.maintainer_id.set_null();
        self.maintainer_team_key.set_null();
        self
    }

    /// Set the [tags][Self::tags] field.
    pub fn set_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.set(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// Request body for creating a variation of an AI Config.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfigVariationPost {
    /// Key of the new variation.
    pub key: String,
    /// Human readable name of the new variation.
    pub name: String,
    /// Messages sent to the model, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    /// Model parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<HashMap<String, Value>>,
    /// Key of the model configuration to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_config_key: Option<String>,
}

impl AiConfigVariationPost {
    /// Create a new instance with the required fields.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the [messages][Self::messages] field.
    pub fn set_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Set the [model][Self::model] field.
    pub fn set_model(mut self, model: HashMap<String, Value>) -> Self {
        self.model = Some(model);
        self
    }

    /// Set the [model_config_key][Self::model_config_key] field.
    pub fn set_model_config_key(mut self, model_config_key: impl Into<String>) -> Self {
        self.model_config_key = Some(model_config_key.into());
        self
    }
}

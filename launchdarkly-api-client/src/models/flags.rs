use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Access, Link, Nullable, Paginated, PatchOperation, PatchWithComment, SemanticPatch};

/// One of the values a flag can serve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    /// ID of the variation. Assigned by the API.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The value served.
    pub value: Value,
    /// Description of the variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Human readable name of the variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Variation {
    /// Create a variation serving `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            id: None,
            value: value.into(),
            description: None,
            name: None,
        }
    }

    /// Set the [name][Self::name] field.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the [description][Self::description] field.
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Which client-side SDKs may evaluate a flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSideAvailability {
    /// Whether mobile SDKs can evaluate the flag.
    pub using_mobile_key: bool,
    /// Whether client-side JavaScript SDKs can evaluate the flag.
    pub using_environment_id: bool,
}

/// Variations served by a boolean flag when it is on and off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    /// Index of the variation served when targeting is on.
    pub on_variation: i32,
    /// Index of the variation served when targeting is off.
    pub off_variation: i32,
}

/// The configuration of a flag in one environment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagConfig {
    /// Whether targeting is on.
    pub on: bool,
    /// Whether the flag is archived in this environment.
    pub archived: bool,
    /// Salt used for percentage rollouts.
    pub salt: String,
    /// Salt used to evaluate the flag on the server.
    pub sel: String,
    /// When the configuration was last modified, in epoch milliseconds.
    pub last_modified: i64,
    /// Version of the configuration.
    pub version: i32,
    /// Individual targets, by variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Value>>,
    /// Individual context targets, by variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_targets: Option<Vec<Value>>,
    /// Targeting rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Value>>,
    /// Variation or rollout served when no rule matches.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub fallthrough: Nullable<Value>,
    /// Index of the variation served when targeting is off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_variation: Option<i32>,
    /// Prerequisite flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<Value>>,
    /// Hypermedia link to the environment.
    #[serde(rename = "_site")]
    pub site: Link,
    /// Details on the allowed and denied actions for the configuration.
    #[serde(rename = "_access", skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
    /// Name of the environment.
    #[serde(rename = "_environmentName")]
    pub environment_name: String,
    /// Whether the flag's events are sent for every evaluation.
    pub track_events: bool,
    /// Whether fallthrough evaluations are tracked.
    pub track_events_fallthrough: bool,
    /// Evaluation summary, when requested with `summary=true`.
    #[serde(rename = "_summary", default, skip_serializing_if = "Nullable::is_absent")]
    pub summary: Nullable<Value>,
}

/// A feature flag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    /// Human readable name of the flag.
    pub name: String,
    /// Kind of the flag: `boolean` or `multivariate`.
    pub kind: String,
    /// Description of the flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Key of the flag.
    pub key: String,
    /// Version of the flag.
    #[serde(rename = "_version")]
    pub version: i32,
    /// When the flag was created, in epoch milliseconds.
    pub creation_date: i64,
    /// Whether the flag is included in client-side SDK payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_in_snippet: Option<bool>,
    /// Which client-side SDKs may evaluate the flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_side_availability: Option<ClientSideAvailability>,
    /// The values the flag can serve.
    pub variations: Vec<Variation>,
    /// Whether the flag is temporary.
    pub temporary: bool,
    /// Tags attached to the flag.
    pub tags: Vec<String>,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
    /// ID of the member who maintains the flag.
    #[serde(rename = "_maintainerId", skip_serializing_if = "Option::is_none")]
    pub maintainer_id: Option<String>,
    /// Key of the team that maintains the flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_team_key: Option<String>,
    /// Custom properties, keyed by property key.
    pub custom_properties: HashMap<String, Value>,
    /// Whether the flag is archived.
    pub archived: bool,
    /// When the flag was archived, in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_date: Option<i64>,
    /// Whether the flag is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Variations served when the flag is on and off, for boolean flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Defaults>,
    /// Per-environment configurations, keyed by environment key.
    pub environments: HashMap<String, FeatureFlagConfig>,
}

/// A page of feature flags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    /// The flags on this page.
    pub items: Vec<FeatureFlag>,
    /// Pagination links.
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
    /// Total number of flags matching the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    /// Total number of flags matching the request, ignoring the filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count_with_differences: Option<i32>,
}

impl Paginated for FeatureFlags {
    type Item = FeatureFlag;

    fn items(&self) -> &[FeatureFlag] {
        &self.items
    }

    fn links(&self) -> Option<&HashMap<String, Link>> {
        Some(&self.links)
    }
}

/// Request body for creating a feature flag.
///
/// ```
/// # use launchdarkly_api_client::models::{FeatureFlagBody, Variation};
/// let body = FeatureFlagBody::new("New checkout", "new-checkout")
///     .set_variations(vec![Variation::new(true), Variation::new(false)])
///     .set_temporary(true);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagBody {
    /// Human readable name of the flag.
    pub name: String,
    /// Key of the flag. Cannot be changed after creation.
    pub key: String,
    /// Description of the flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the flag is included in client-side SDK payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_in_snippet: Option<bool>,
    /// Which client-side SDKs may evaluate the flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_side_availability: Option<ClientSideAvailability>,
    /// The values the flag can serve. Defaults to `true` and `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<Variation>>,
    /// Whether the flag is temporary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,
    /// Tags to attach to the flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Custom properties, keyed by property key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<HashMap<String, Value>>,
    /// Variations served when the flag is on and off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Defaults>,
    /// ID of the member who maintains the flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_id: Option<String>,
    /// Key of the team that maintains the flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainer_team_key: Option<String>,
}

impl FeatureFlagBody {
    /// Create a new instance with the required fields.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    /// Set the [description][Self::description] field.
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the [include_in_snippet][Self::include_in_snippet] field.
    pub fn set_include_in_snippet(mut self, include_in_snippet: bool) -> Self {
        self.include_in_snippet = Some(include_in_snippet);
        self
    }

    /// Set the [client_side_availability][Self::client_side_availability] field.
    pub fn set_client_side_availability(mut self, availability: ClientSideAvailability) -> Self {
        self.client_side_availability = Some(availability);
        self
    }

    /// Set the [variations][Self::variations] field.
    pub fn set_variations(mut self, variations: Vec<Variation>) -> Self {
        self.variations = Some(variations);
        self
    }

    /// Set the [temporary][Self::temporary] field.
    pub fn set_temporary(mut self, temporary: bool) -> Self {
        self.temporary = Some(temporary);
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

    /// Set the [custom_properties][Self::custom_properties] field.
    pub fn set_custom_properties(mut self, custom_properties: HashMap<String, Value>) -> Self {
        self.custom_properties = Some(custom_properties);
        self
    }

    /// Set the [defaults][Self::defaults] field.
    pub fn set_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = Some(defaults);
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
}

/// An update to a feature flag.
///
/// Flags accept either a JSON Patch document or a semantic patch. The two are sent with
/// different content types.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureFlagPatch {
    /// A JSON Patch document, with an optional comment.
    Json(PatchWithComment),
    /// A list of semantic patch instructions.
    Semantic(SemanticPatch),
}

impl From<PatchWithComment> for FeatureFlagPatch {
    fn from(patch: PatchWithComment) -> Self {
        FeatureFlagPatch::Json(patch)
    }
}

impl From<Vec<PatchOperation>> for FeatureFlagPatch {
    fn from(patch: Vec<PatchOperation>) -> Self {
        FeatureFlagPatch::Json(PatchWithComment::new(patch))
    }
}

impl From<SemanticPatch> for FeatureFlagPatch {
    fn from(patch: SemanticPatch) -> Self {
        FeatureFlagPatch::Semantic(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Instruction;
    use crate::test_common::{assert_round_trips, basic_flag};
    use assert_json_diff::assert_json_eq;

    #[test]
    fn flag_body_keeps_false_distinct_from_unset() {
        let body = FeatureFlagBody::new("New checkout", "new-checkout")
            .set_variations(vec![
                Variation::new(true).set_name("On"),
                Variation::new(false),
            ])
            .set_temporary(false);

        assert_json_eq!(
            json!({
                "name": "New checkout",
                "key": "new-checkout",
                "variations": [{"value": true, "name": "On"}, {"value": false}],
                "temporary": false
            }),
            serde_json::to_value(&body).unwrap()
        );
    }

    #[test]
    fn decodes_flag_with_environment_configuration() {
        let flag: FeatureFlag = serde_json::from_value(json!({
            "name": "New checkout",
            "kind": "boolean",
            "key": "new-checkout",
            "_version": 4,
            "creationDate": 1700000000000i64,
            "variations": [
                {"_id": "e432f62b-55f6-49dd-a02f-eb24acf39d05", "value": true},
                {"_id": "a00bf58d-d252-476c-b915-15a74becacb4", "value": false}
            ],
            "temporary": true,
            "tags": ["checkout"],
            "_links": {"self": {"href": "/api/v2/flags/default/new-checkout", "type": "application/json"}},
            "customProperties": {},
            "archived": false,
            "environments": {
                "production": {
                    "on": true,
                    "archived": false,
                    "salt": "61eddeadbeef4da1facecafe3a60a397",
                    "sel": "810edeadbeef4844facecafe438f2999492",
                    "lastModified": 1700000005000i64,
                    "version": 12,
                    "offVariation": 1,
                    "_site": {"href": "/default/production/features/new-checkout", "type": "text/html"},
                    "_environmentName": "Production",
                    "trackEvents": false,
                    "trackEventsFallthrough": false
                }
            }
        }))
        .unwrap();

        assert_eq!(4, flag.version);
        assert_eq!(json!(true), flag.variations[0].value);
        assert_eq!(None, flag.description);
        let production = &flag.environments["production"];
        assert!(production.on);
        assert_eq!(Some(1), production.off_variation);
        assert_eq!("Production", production.environment_name);
    }

    #[test]
    fn patch_conversions_pick_the_right_format() {
        let json: FeatureFlagPatch = vec![PatchOperation::replace("/temporary", false)].into();
        assert!(matches!(json, FeatureFlagPatch::Json(_)));

        let semantic: FeatureFlagPatch =
            SemanticPatch::new(vec![Instruction::new("turnFlagOn")]).into();
        assert!(matches!(semantic, FeatureFlagPatch::Semantic(_)));
    }

    fn environment(name: &str) -> FeatureFlagConfig {
        FeatureFlagConfig {
            on: true,
            salt: "61eddeadbeef4da1facecafe3a60a397".into(),
            sel: "810edeadbeef4844facecafe438f2999492".into(),
            last_modified: 1700000005000,
            version: 7,
            site: Link::new(format!("/default/{}/features/new-checkout", name)),
            environment_name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn null_fallthrough_is_kept_distinct_from_missing() {
        let config: FeatureFlagConfig = serde_json::from_value(json!({
            "on": false,
            "archived": false,
            "salt": "s",
            "sel": "t",
            "lastModified": 1,
            "version": 1,
            "fallthrough": null,
            "_site": {"href": "/default/test/features/x"},
            "_environmentName": "Test",
            "trackEvents": false,
            "trackEventsFallthrough": false
        }))
        .unwrap();

        assert!(config.fallthrough.is_null());
        assert!(config.summary.is_absent());
        assert_eq!(json!(null), serde_json::to_value(&config).unwrap()["fallthrough"]);
        assert!(serde_json::to_value(&config).unwrap().get("_summary").is_none());
    }

    #[test]
    fn environment_configurations_round_trip() {
        let mut production = environment("Production");
        production.fallthrough = Nullable::Value(json!({"variation": 0}));
        production.rules = Some(vec![]);
        production.off_variation = Some(1);
        production.summary = Nullable::Value(json!({"variations": {"0": {"rules": 0}}}));

        let mut staging = environment("Staging");
        staging.fallthrough = Nullable::Null;
        staging.targets = Some(vec![json!({"values": ["alice"], "variation": 0})]);

        assert_round_trips(&production);
        assert_round_trips(&staging);
        assert_round_trips(&environment("Test"));
    }

    #[test]
    fn flags_round_trip_with_mixed_optionals() {
        let mut flag: FeatureFlag = serde_json::from_value(basic_flag("new-checkout")).unwrap();
        flag.description = Some("Checkout rework".into());
        flag.maintainer_id = Some("569f183514f4432160000007".into());
        flag.variations[1] = Variation::new(Value::Null).set_name("Unset");
        flag.custom_properties
            .insert("jira".into(), json!({"name": "Jira", "value": ["CHK-1"]}));
        flag.environments
            .insert("production".into(), environment("Production"));

        assert_round_trips(&flag);

        let page = FeatureFlags {
            items: vec![flag],
            links: HashMap::new(),
            total_count: Some(1),
            total_count_with_differences: None,
        };
        assert_round_trips(&page);

        assert_round_trips(
            &FeatureFlagBody::new("New checkout", "new-checkout")
                .set_temporary(false)
                .set_defaults(Defaults {
                    on_variation: 0,
                    off_variation: 1,
                }),
        );
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Nullable;

/// One operation of a JSON Patch (RFC 6902) document.
///
/// ```
/// # use launchdarkly_api_client::models::PatchOperation;
/// let patch = vec![
///     PatchOperation::replace("/name", "Checkout v2"),
///     PatchOperation::remove("/tags/0"),
/// ];
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    /// The type of operation to perform.
    pub op: String,
    /// A JSON Pointer to the target location.
    pub path: String,
    /// The value to add, replace, or test against. `null` is a valid value and is kept
    /// distinct from an operation without a value.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub value: Nullable<Value>,
    /// Source location for `move` and `copy` operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl PatchOperation {
    fn new(op: &str, path: impl Into<String>) -> Self {
        Self {
            op: op.to_string(),
            path: path.into(),
            value: Nullable::Absent,
            from: None,
        }
    }

    fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = match value.into() {
            Value::Null => Nullable::Null,
            value => Nullable::Value(value),
        };
        self
    }

    /// An `add` operation.
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new("add", path).with_value(value)
    }

    /// A `replace` operation.
    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new("replace", path).with_value(value)
    }

    /// A `test` operation. The whole patch fails if the value at `path` differs.
    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new("test", path).with_value(value)
    }

    /// A `remove` operation.
    pub fn remove(path: impl Into<String>) -> Self {
        Self::new("remove", path)
    }

    /// A `move` operation.
    pub fn move_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            ..Self::new("move", path)
        }
    }

    /// A `copy` operation.
    pub fn copy_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            ..Self::new("copy", path)
        }
    }
}

/// A JSON Patch document with an optional comment recorded in the audit log.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchWithComment {
    /// The operations to apply, in order.
    pub patch: Vec<PatchOperation>,
    /// Optional comment describing the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PatchWithComment {
    /// Create a new instance.
    pub fn new(patch: Vec<PatchOperation>) -> Self {
        Self {
            patch,
            comment: None,
        }
    }

    /// Set the [comment][Self::comment] field.
    pub fn set_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A semantic patch: a list of domain specific instructions applied all-or-nothing.
///
/// Semantic patches are sent with the
/// `application/json; domain-model=launchdarkly.semanticpatch` content type.
///
/// ```
/// # use launchdarkly_api_client::models::{Instruction, SemanticPatch};
/// let patch = SemanticPatch::new(vec![Instruction::new("turnFlagOn")])
///     .set_environment_key("production")
///     .set_comment("launch day");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticPatch {
    /// Optional comment describing the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Environment the instructions apply to, for environment specific instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_key: Option<String>,
    /// The instructions to apply, in order.
    pub instructions: Vec<Instruction>,
}

impl SemanticPatch {
    /// Create a new instance.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            comment: None,
            environment_key: None,
            instructions,
        }
    }

    /// Set the [comment][Self::comment] field.
    pub fn set_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the [environment_key][Self::environment_key] field.
    pub fn set_environment_key(mut self, environment_key: impl Into<String>) -> Self {
        self.environment_key = Some(environment_key.into());
        self
    }
}

/// A single semantic patch instruction: a `kind` and its parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The instruction kind, e.g. `turnFlagOn` or `addTargets`.
    pub kind: String,
    /// Parameters of the instruction, serialized next to `kind`.
    #[serde(flatten)]
    pub parameters: Map<String, Value>,
}

impl Instruction {
    /// Create an instruction without parameters.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            parameters: Map::new(),
        }
    }

    /// Add a parameter to the instruction.
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that can be absent, explicitly `null`, or hold a value.
///
/// `Option<T>` is enough for most optional fields, because the API treats a missing key and
/// a `null` value the same way. Some request bodies (merge patches in particular) give `null`
/// its own meaning, e.g. "remove the maintainer". Those fields use [Nullable] together with
/// `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`:
///
/// | state | encoded as | decoded from |
/// |---|---|---|
/// | [Nullable::Absent] | key omitted | key missing |
/// | [Nullable::Null] | `null` | `null` |
/// | [Nullable::Value] | the value | any other value |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// The field is not present.
    Absent,
    /// The field is present with the value `null`.
    Null,
    /// The field is present with a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns true when the field is not present.
    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    /// Returns true when the field is present with the value `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// Returns true when the field is present, whether `null` or not.
    pub fn is_set(&self) -> bool {
        !self.is_absent()
    }

    /// Returns the value, if there is one.
    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Set the field to a value.
    pub fn set(&mut self, value: T) {
        *self = Nullable::Value(value);
    }

    /// Set the field to an explicit `null`.
    pub fn set_null(&mut self) {
        *self = Nullable::Null;
    }

    /// Remove the field.
    pub fn unset(&mut self) {
        *self = Nullable::Absent;
    }

    /// Converts into an `Option`, losing the distinction between absent and `null`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Nullable::Value(value),
            None => Nullable::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Nullable::Value(value) => value.serialize(serializer),
            // Absent fields are skipped by `skip_serializing_if`; if they are not, null is the
            // closest encoding available.
            Nullable::Null | Nullable::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}

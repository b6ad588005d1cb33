//! The JSON syntax tree.
//!
//! Every node keeps its source range so diagnostics and hover can
//! point back at the text, and a list of [`Expectation`]s describing
//! what shapes could legally stand at its position. Nodes are built
//! by the parser in [`crate::parser`] and annotated by checkers.

use lodestone_foundation::Range;

use crate::expectation::Expectation;

/// One parsed JSON value with its source range and annotations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JsonNode {
    /// The source range the value occupies.
    pub range: Range,
    /// The value itself.
    pub value: JsonValue,
    /// Shapes that could satisfy this position, filled in by checkers.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub expectations: Vec<Expectation>,
}

impl JsonNode {
    /// Creates a node with no expectations attached yet.
    #[must_use]
    pub fn new(range: Range, value: JsonValue) -> Self {
        Self {
            range,
            value,
            expectations: Vec::new(),
        }
    }

    /// Creates a null placeholder node, used where a value is missing.
    #[must_use]
    pub fn null(range: Range) -> Self {
        Self::new(range, JsonValue::Null)
    }

    /// The kind of this node's value.
    #[must_use]
    pub fn kind(&self) -> JsonKind {
        self.value.kind()
    }

    /// Looks up a property value by key, for object nodes.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&JsonNode> {
        match &self.value {
            JsonValue::Object(properties) => properties
                .iter()
                .find(|property| property.key == key)
                .and_then(|property| property.value.as_ref()),
            _ => None,
        }
    }
}

/// The value held by a [`JsonNode`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JsonValue {
    /// An object; properties keep their source order.
    Object(Vec<JsonProperty>),
    /// An array of values.
    Array(Vec<JsonNode>),
    /// A string, with escapes already resolved.
    String(String),
    /// A number. `integer` records whether the literal had no
    /// fraction or exponent, so integer-only checks can tell `1`
    /// from `1.0`.
    Number {
        /// The numeric value.
        value: f64,
        /// Whether the literal was written in integer form.
        integer: bool,
    },
    /// A boolean.
    Boolean(bool),
    /// A null, or a placeholder where a value was missing.
    Null,
}

impl JsonValue {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Object(_) => JsonKind::Object,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Number { .. } => JsonKind::Number,
            JsonValue::Boolean(_) => JsonKind::Boolean,
            JsonValue::Null => JsonKind::Null,
        }
    }
}

/// One `key: value` entry of an object.
///
/// The value is optional: when the parser recovers from a missing
/// value (`{"a": }`) the property survives with `value: None` so the
/// key still participates in completion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JsonProperty {
    /// The range of the whole entry, key through value.
    pub range: Range,
    /// The property key, with escapes resolved.
    pub key: String,
    /// The range of the key literal alone.
    pub key_range: Range,
    /// The value, absent when the parser recovered past a hole.
    pub value: Option<JsonNode>,
}

/// The six JSON value kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum JsonKind {
    /// `{ ... }`
    Object,
    /// `[ ... ]`
    Array,
    /// `"..."`
    String,
    /// Integer or floating-point.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
}

impl std::fmt::Display for JsonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let doc = match self {
            JsonKind::Object => "an object",
            JsonKind::Array => "an array",
            JsonKind::String => "a string",
            JsonKind::Number => "a number",
            JsonKind::Boolean => "a boolean",
            JsonKind::Null => "null",
        };
        write!(f, "{doc}")
    }
}

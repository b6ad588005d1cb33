//! Expectations: what shape of value could satisfy a position.
//!
//! Checkers attach expectations to the nodes they visit, whether or
//! not the value matched. Completion and hover read them afterwards;
//! the parser never does. When ambiguity is resolved, a node carries
//! the union of every attempted shape's expectations, not just the
//! winner's, so completion reflects every plausible shape.

use crate::node::JsonKind;

/// A lightweight descriptor of one acceptable value shape.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expectation {
    /// The JSON kind this shape has.
    pub kind: JsonKind,
    /// Human-readable description, e.g. `a string` or `"flat"`.
    pub doc: String,
    /// The resource category a string names, when it names one.
    /// Colorization and completion treat such strings specially.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub resource: Option<String>,
    /// Known property keys, for object shapes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub keys: Option<Vec<String>>,
    /// Element shapes, for array shapes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub items: Option<Vec<Expectation>>,
}

impl Expectation {
    /// Creates an expectation of the given kind and description.
    #[must_use]
    pub fn new(kind: JsonKind, doc: impl Into<String>) -> Self {
        Self {
            kind,
            doc: doc.into(),
            resource: None,
            keys: None,
            items: None,
        }
    }

    /// Marks the expected string as naming a resource of a category.
    #[must_use]
    pub fn with_resource(mut self, category: impl Into<String>) -> Self {
        self.resource = Some(category.into());
        self
    }

    /// Records the known property keys of an expected object.
    #[must_use]
    pub fn with_keys(mut self, keys: Vec<String>) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Records the element shapes of an expected array.
    #[must_use]
    pub fn with_items(mut self, items: Vec<Expectation>) -> Self {
        self.items = Some(items);
        self
    }
}

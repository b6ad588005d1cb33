//! The command-grammar tree model.
//!
//! A grammar is a rooted tree of `TreeNode`s describing every valid
//! command shape, loaded from JSON once per engine configuration and
//! shared read-only by all passes. Children are kept in declaration
//! order because sibling order is the ambiguity tie-break.

use indexmap::IndexMap;
use lodestone_foundation::DEFAULT_PERMISSION_LEVEL;
use serde::{Deserialize, Serialize};

/// Open bag of parser-specific configuration carried by argument nodes.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// What a grammar node matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The tree root; matches nothing itself.
    Root,
    /// Matches one fixed keyword (the node's name among its siblings).
    #[default]
    Literal,
    /// Matches via a named parser implementation.
    Argument,
}

/// One node of the command grammar.
///
/// Every field except `type` is optional in the JSON input, so partial
/// grammars from any content version load. Unknown `parser`
/// identifiers are kept verbatim; they degrade to the unknown-parser
/// stub at dispatch time, never to a load failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// What this node matches.
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Children keyed by sibling-unique name, in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub children: IndexMap<String, TreeNode>,
    /// Whether a command may legally end at this node.
    #[serde(default)]
    pub executable: bool,
    /// Minimum caller permission level; `None` means the default (2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<u8>,
    /// Path whose node's children replace this node's own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Vec<String>>,
    /// Identifier of the argument parser implementation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    /// Parser-specific configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

/// A node's children split by branch kind, in declaration order.
#[derive(Debug)]
pub struct Branches<'t> {
    /// Fixed-keyword children.
    pub literals: Vec<(&'t str, &'t TreeNode)>,
    /// Parser-driven children.
    pub arguments: Vec<(&'t str, &'t TreeNode)>,
}

impl TreeNode {
    /// Creates an empty root node.
    #[must_use]
    pub fn root() -> Self {
        Self {
            kind: NodeKind::Root,
            ..Self::default()
        }
    }

    /// Creates a literal node.
    #[must_use]
    pub fn literal() -> Self {
        Self::default()
    }

    /// Creates an argument node using the given parser identifier.
    #[must_use]
    pub fn argument(parser: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Argument,
            parser: Some(parser.into()),
            ..Self::default()
        }
    }

    /// Adds a child under the given sibling-unique name.
    #[must_use]
    pub fn with_child(mut self, name: impl Into<String>, child: TreeNode) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    /// Marks this node as a legal command end.
    #[must_use]
    pub fn with_executable(mut self) -> Self {
        self.executable = true;
        self
    }

    /// Sets the minimum caller permission level.
    #[must_use]
    pub fn with_permission(mut self, level: u8) -> Self {
        self.permission = Some(level);
        self
    }

    /// Redirects this node's children to the node at the given path.
    #[must_use]
    pub fn with_redirect<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.redirect = Some(path.into_iter().map(Into::into).collect());
        self
    }

    /// Sets one parser-specific property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value);
        self
    }

    /// Returns the minimum caller permission level, defaulting to 2.
    #[must_use]
    pub fn required_permission(&self) -> u8 {
        self.permission.unwrap_or(DEFAULT_PERMISSION_LEVEL)
    }

    /// Returns a parser-specific property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Returns a parser-specific property as a float.
    #[must_use]
    pub fn property_f64(&self, key: &str) -> Option<f64> {
        self.property(key)?.as_f64()
    }

    /// Returns a parser-specific property as an integer.
    #[must_use]
    pub fn property_i64(&self, key: &str) -> Option<i64> {
        self.property(key)?.as_i64()
    }

    /// Returns a parser-specific property as a string.
    #[must_use]
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.property(key)?.as_str()
    }

    /// Splits the children into literal and argument branches,
    /// preserving declaration order within each group.
    ///
    /// Children of kind root are skipped; a root below the root is a
    /// grammar defect the engine tolerates.
    #[must_use]
    pub fn branches(&self) -> Branches<'_> {
        let mut literals = Vec::new();
        let mut arguments = Vec::new();
        for (name, child) in &self.children {
            match child.kind {
                NodeKind::Literal => literals.push((name.as_str(), child)),
                NodeKind::Argument => arguments.push((name.as_str(), child)),
                NodeKind::Root => {}
            }
        }
        Branches {
            literals,
            arguments,
        }
    }

    /// Walks children by name and returns the node at the path, if any.
    #[must_use]
    pub fn descendant<'a>(&self, path: impl IntoIterator<Item = &'a str>) -> Option<&TreeNode> {
        let mut current = self;
        for name in path {
            current = current.children.get(name)?;
        }
        Some(current)
    }
}

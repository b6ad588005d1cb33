//! Grammar loading and validation.
//!
//! Grammars arrive as JSON dumps from the configuration layer, one
//! per content version. Loading is tolerant: every field except the
//! root's `type` is optional, and unknown parser identifiers are kept
//! verbatim. Validation is the opposite: a strict walk for callers
//! that prefer to fail at configuration time instead of seeing
//! redirect diagnostics at dispatch time.

use lodestone_foundation::{Error, Result};

use crate::node::{NodeKind, TreeNode};
use crate::path::TreePath;
use crate::resolve::resolve_parent;

/// Loads a grammar tree from JSON text.
///
/// # Errors
///
/// Returns [`Error::MalformedGrammar`] when the JSON does not
/// deserialize or the top-level node is not of type `root`.
pub fn from_json_str(text: &str) -> Result<TreeNode> {
    tracing::debug!(bytes = text.len(), "loading grammar tree");
    let node: TreeNode =
        serde_json::from_str(text).map_err(|e| Error::malformed_grammar(e.to_string()))?;
    require_root(node)
}

/// Loads a grammar tree from an already-parsed JSON value.
///
/// # Errors
///
/// Returns [`Error::MalformedGrammar`] when the value does not match
/// the tree shape or the top-level node is not of type `root`.
pub fn from_json_value(value: serde_json::Value) -> Result<TreeNode> {
    let node: TreeNode =
        serde_json::from_value(value).map_err(|e| Error::malformed_grammar(e.to_string()))?;
    require_root(node)
}

/// Walks the whole tree and rejects unresolvable redirects.
///
/// # Errors
///
/// Returns the first [`Error::RedirectMissing`] or
/// [`Error::RedirectCycle`] found, in declaration order.
pub fn validate(root: &TreeNode) -> Result<()> {
    walk(root, &TreePath::new(), &mut |node, path| {
        if node.redirect.is_some() {
            resolve_parent(root, node, path)?;
        }
        Ok(())
    })
}

fn require_root(node: TreeNode) -> Result<TreeNode> {
    if node.kind == NodeKind::Root {
        Ok(node)
    } else {
        Err(Error::malformed_grammar(
            "top-level node must have type \"root\"",
        ))
    }
}

fn walk<'t>(
    node: &'t TreeNode,
    path: &TreePath,
    visit: &mut impl FnMut(&'t TreeNode, &TreePath) -> Result<()>,
) -> Result<()> {
    visit(node, path)?;
    for (name, child) in &node.children {
        let child_path = path.push(name.as_str());
        walk(child, &child_path, visit)?;
    }
    Ok(())
}

//! Redirect resolution.
//!
//! A node's `redirect` borrows another node's children, which is how
//! upstream grammars reuse whole subtrees without duplicating them.
//! Redirects are stored as paths, never as references, so the walk
//! here is the only place cycles can occur; a visited set bounds it.

use std::collections::HashSet;

use lodestone_foundation::{Error, Result};

use crate::node::TreeNode;
use crate::path::TreePath;

/// The concrete node a dispatch step descends into, plus the logical
/// path that now addresses it.
///
/// After following a redirect, the logical path becomes the redirect
/// target path; diagnostics and permission checks refer to the
/// logical path, not to the chain of physical nodes crossed.
#[derive(Debug)]
pub struct ResolvedParent<'t> {
    /// The node whose children the dispatcher partitions next.
    pub node: &'t TreeNode,
    /// The logical path addressing that node.
    pub path: TreePath,
}

/// Resolves a node through its redirect chain to a concrete node.
///
/// A node with no children, no redirect, and no `executable` flag
/// chains back to the root; upstream grammars use that shape for
/// `execute ... run`-style continuation nodes.
///
/// # Errors
///
/// Returns [`Error::RedirectMissing`] when a redirect path has no node
/// and [`Error::RedirectCycle`] when the chain revisits a target.
pub fn resolve_parent<'t>(
    root: &'t TreeNode,
    node: &'t TreeNode,
    path: &TreePath,
) -> Result<ResolvedParent<'t>> {
    let mut current = node;
    let mut logical = path.clone();
    let mut visited: HashSet<String> = HashSet::new();
    loop {
        if let Some(target) = &current.redirect {
            let key = target.join(" ");
            if !visited.insert(key.clone()) {
                return Err(Error::redirect_cycle(key));
            }
            current = root
                .descendant(target.iter().map(String::as_str))
                .ok_or_else(|| Error::redirect_missing(key.clone()))?;
            logical = target.iter().map(String::as_str).collect();
            tracing::trace!(target = %logical, "followed grammar redirect");
        } else if current.children.is_empty()
            && !current.executable
            && !std::ptr::eq(current, root)
        {
            current = root;
            logical = TreePath::new();
            tracing::trace!("childless non-executable node chains to root");
        } else {
            return Ok(ResolvedParent {
                node: current,
                path: logical,
            });
        }
    }
}

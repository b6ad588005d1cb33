//! Command-grammar trees for Lodestone.
//!
//! This crate provides:
//! - [`TreeNode`] - The grammar tree model, deserialized from JSON dumps
//! - [`TreePath`] - Persistent logical paths through the tree
//! - [`resolve`] - Redirect-chain resolution with cycle detection
//! - [`load`] - Tolerant loading plus strict validation
//!
//! The tree is loaded once per engine configuration and shared
//! read-only by every parse pass.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod load;
pub mod node;
pub mod path;
pub mod resolve;

// Re-export main types for convenience
pub use load::{from_json_str, from_json_value, validate};
pub use node::{Branches, NodeKind, Properties, TreeNode};
pub use path::TreePath;
pub use resolve::{ResolvedParent, resolve_parent};

//! Command-line parsing over data-driven grammar trees.
//!
//! This crate provides:
//! - A dispatcher that walks a grammar tree and parses one command
//!   line into a complete syntax tree with diagnostics
//! - Built-in argument parsers for the stock value kinds, plus a
//!   registry for engine extensions
//! - Graceful degradation for unknown parsers, trailing text, and
//!   permission failures, so editor tooling always gets a full tree

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod argument;
pub mod builtin;
pub mod dispatch;
pub mod node;

// Re-export main types for convenience
pub use argument::{ArgumentParser, ParserRegistry};
pub use dispatch::CommandDispatcher;
pub use node::{ArgumentValue, ChildNode, ChildValue, CommandNode};

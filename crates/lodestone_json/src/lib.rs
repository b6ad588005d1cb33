//! Recovering JSON parsing and structural checking for Lodestone.
//!
//! This crate provides:
//! - A JSON parser that always yields a tree, reporting problems as
//!   diagnostics instead of failing
//! - Source-ranged nodes that carry expectations for completion
//! - Composable structural checkers with width-scored ambiguity
//!   resolution
//! - The built-in rich text shape

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod checker;
pub mod expectation;
pub mod node;
pub mod parser;
pub mod schema;

// Re-export main types for convenience
pub use checker::{
    CheckAttempt, Checker, MAX_PROBE_DEPTH, any_of, attempt, expectations_of, lazy,
};
pub use expectation::Expectation;
pub use node::{JsonKind, JsonNode, JsonProperty, JsonValue};
pub use parser::{MAX_NESTING_DEPTH, parse_str, parse_value};
pub use schema::rich_text;

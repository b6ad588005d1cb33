//! Lodestone - Grammar-driven command parsing with recovering diagnostics
//!
//! This crate re-exports all layers of the Lodestone system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: lodestone_command    - Command dispatch, built-in argument parsers
//! Layer 1: lodestone_tree       - Command tree grammar, redirect resolution
//!          lodestone_json       - Recovering JSON parser, structural checkers
//! Layer 0: lodestone_foundation - Cursor, diagnostics, speculation, messages
//! ```

pub use lodestone_command as command;
pub use lodestone_foundation as foundation;
pub use lodestone_json as json;
pub use lodestone_tree as tree;

//! Foundation layer for Lodestone: ranges, the reader, diagnostics,
//! localized messages, the parse context, and the ambiguity-resolving
//! parse contract.
//!
//! This crate provides:
//! - [`Range`] - Half-open byte ranges locating nodes and diagnostics
//! - [`Reader`] - Copyable cursor with bounded lookahead and line-bounded reads
//! - [`Reporter`] - Ordered diagnostic list with sandbox absorption
//! - [`MessageBundle`] - Keyed, overridable diagnostic message templates
//! - [`Context`] - Per-pass state: reporter, permission level, probe depth
//! - [`parse`] - The `Parse` contract plus `attempt`/`any`/`optional`
//! - [`Error`] - Engine configuration errors (grammar load, redirects)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod diagnostic;
pub mod error;
pub mod localize;
pub mod parse;
pub mod range;
pub mod reader;

// Re-export main types for convenience
pub use context::{Context, DEFAULT_PERMISSION_LEVEL};
pub use diagnostic::{Diagnostic, Reporter, Severity};
pub use error::{Error, Result};
pub use localize::{MessageBundle, quote};
pub use parse::{Failure, Parse, ParseResult, Probe, any, attempt, optional};
pub use range::Range;
pub use reader::{Checkpoint, Reader};

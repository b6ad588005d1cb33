//! Engine-level error types.
//!
//! Malformed *input* never raises an error; it becomes diagnostics.
//! These errors cover configuration problems: a grammar that does not
//! deserialize, or redirect paths that cannot resolve.

use thiserror::Error;

/// The main error type for engine configuration problems.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The grammar tree could not be loaded.
    #[error("malformed grammar: {0}")]
    MalformedGrammar(String),

    /// A redirect names a path that is not in the tree.
    #[error("redirect target {path} does not exist")]
    RedirectMissing {
        /// The unresolvable path, space-joined.
        path: String,
    },

    /// Following redirects revisits a node.
    #[error("redirect at {path} forms a cycle")]
    RedirectCycle {
        /// The path at which the cycle closed, space-joined.
        path: String,
    },
}

impl Error {
    /// Creates a malformed-grammar error.
    #[must_use]
    pub fn malformed_grammar(message: impl Into<String>) -> Self {
        Self::MalformedGrammar(message.into())
    }

    /// Creates a missing-redirect-target error.
    #[must_use]
    pub fn redirect_missing(path: impl Into<String>) -> Self {
        Self::RedirectMissing { path: path.into() }
    }

    /// Creates a cyclic-redirect error.
    #[must_use]
    pub fn redirect_cycle(path: impl Into<String>) -> Self {
        Self::RedirectCycle { path: path.into() }
    }
}

/// Result alias for engine configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

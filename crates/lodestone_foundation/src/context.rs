//! Per-pass parse and check context.
//!
//! A `Context` carries the live diagnostic reporter plus the
//! configuration view a pass needs: the caller's permission level, the
//! message bundle, and the speculative-probe depth. Sandboxing swaps
//! the reporter for a fresh one while sharing the configuration, which
//! is what isolates an attempt's diagnostics from the live pass.

use std::sync::Arc;

use crate::diagnostic::Reporter;
use crate::localize::MessageBundle;

/// Permission level assumed when neither the grammar nor the caller
/// specifies one.
pub const DEFAULT_PERMISSION_LEVEL: u8 = 2;

/// Mutable state and configuration for one parse or check pass.
#[derive(Debug)]
pub struct Context {
    /// The live diagnostic reporter for this pass.
    pub err: Reporter,
    /// The caller's permission level.
    pub permission_level: u8,
    /// Message templates for diagnostic text.
    pub messages: Arc<MessageBundle>,
    /// Nesting depth of speculative what-if probes.
    pub depth: usize,
}

impl Context {
    /// Creates a context with default configuration: an empty reporter,
    /// permission level [`DEFAULT_PERMISSION_LEVEL`], built-in
    /// messages, and depth zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            err: Reporter::new(),
            permission_level: DEFAULT_PERMISSION_LEVEL,
            messages: Arc::new(MessageBundle::new()),
            depth: 0,
        }
    }

    /// Sets the caller's permission level.
    #[must_use]
    pub fn with_permission_level(mut self, level: u8) -> Self {
        self.permission_level = level;
        self
    }

    /// Sets the message bundle.
    #[must_use]
    pub fn with_messages(mut self, messages: Arc<MessageBundle>) -> Self {
        self.messages = messages;
        self
    }

    /// Creates a sandboxed view of this context: a fresh, empty
    /// reporter over the same configuration.
    ///
    /// The sandbox is exclusively owned by the speculative attempt that
    /// created it until the attempt is committed (its reporter absorbed
    /// into the live one) or discarded.
    #[must_use]
    pub fn sandbox(&self) -> Self {
        Self {
            err: Reporter::new(),
            permission_level: self.permission_level,
            messages: Arc::clone(&self.messages),
            depth: self.depth,
        }
    }

    /// Formats a localized message; see [`MessageBundle::localize`].
    #[must_use]
    pub fn localize(&self, key: &str, args: &[&dyn std::fmt::Display]) -> String {
        self.messages.localize(key, args)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

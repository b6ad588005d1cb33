//! Localized diagnostic messages.
//!
//! Diagnostic text never hard-codes message strings at report sites.
//! Call sites name a message key and positional arguments; the
//! `MessageBundle` resolves the key to a template (a built-in English
//! one, or a registered override) and substitutes each `{}` in order.

use std::collections::HashMap;
use std::fmt::Write;

/// Resolves message keys to formatted diagnostic text.
#[derive(Clone, Debug, Default)]
pub struct MessageBundle {
    overrides: HashMap<String, String>,
}

impl MessageBundle {
    /// Creates a bundle with only the built-in messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an override template for a message key.
    ///
    /// Overrides shadow built-ins, so a host can ship its own locale
    /// without touching the engine.
    pub fn register(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.overrides.insert(key.into(), template.into());
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.register(key, template);
        self
    }

    /// Returns the template for a key, if any.
    #[must_use]
    pub fn template(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .map(String::as_str)
            .or_else(|| builtin(key))
    }

    /// Formats the message for a key, replacing each `{}` in the
    /// template with the next argument.
    ///
    /// Unknown keys degrade to the key text followed by the arguments,
    /// so a missing translation is visible rather than fatal.
    #[must_use]
    pub fn localize(&self, key: &str, args: &[&dyn std::fmt::Display]) -> String {
        match self.template(key) {
            Some(template) => substitute(template, args),
            None => {
                let mut out = String::from(key);
                for arg in args {
                    let _ = write!(out, " {arg}");
                }
                out
            }
        }
    }
}

/// Wraps text in double quotes for embedding in a message.
#[must_use]
pub fn quote(text: impl std::fmt::Display) -> String {
    format!("\"{text}\"")
}

fn substitute(template: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    let mut args = args.iter();
    while let Some(slot) = rest.find("{}") {
        out.push_str(&rest[..slot]);
        match args.next() {
            Some(arg) => {
                let _ = write!(out, "{arg}");
            }
            // Unfilled slots stay visible.
            None => out.push_str("{}"),
        }
        rest = &rest[slot + 2..];
    }
    out.push_str(rest);
    out
}

/// Built-in English templates.
fn builtin(key: &str) -> Option<&'static str> {
    Some(match key {
        "expected" => "expected {}",
        "command.trailing" => "trailing data found: {}",
        "command.unknown-parser" => "unknown parser {}",
        "command.no-permission" => "permission level {} is required, but the caller has level {}",
        "command.unexpected-end" => "expected more arguments but found the end of the command",
        "command.expected-space" => "expected a space",
        "command.redirect-cycle" => "grammar redirect at {} forms a cycle",
        "command.redirect-missing" => "grammar redirect target {} does not exist",
        "argument.number-too-low" => "the number must not be less than {}, found {}",
        "argument.number-too-high" => "the number must not be more than {}, found {}",
        "argument.invalid-number" => "invalid number {}",
        "argument.unclosed-string" => "unclosed quoted string",
        "argument.invalid-escape" => "invalid escape sequence {}",
        "json.expected-value" => "expected a JSON value",
        "json.expected-key" => "expected a property key",
        "json.expected-colon" => "expected a colon",
        "json.unclosed-object" => "expected a comma or a closing brace",
        "json.unclosed-array" => "expected a comma or a closing bracket",
        "json.unclosed-string" => "unclosed string",
        "json.invalid-escape" => "invalid escape sequence {}",
        "json.invalid-number" => "invalid number {}",
        "json.too-deep" => "value nesting is too deep",
        "json.trailing" => "trailing data found: {}",
        "check.unknown-key" => "unknown property {}",
        "check.missing-key" => "missing required property {}",
        _ => return None,
    })
}

//! The built-in checker vocabulary.
//!
//! Scalars, literals, resource names, lists, and keyed objects.
//! Every checker attaches its expectation to the node whether or not
//! the value matched, so completion works on wrong values too.

use std::sync::Arc;

use lodestone_foundation::quote;

use crate::checker::{Checker, expectations_of};
use crate::expectation::Expectation;
use crate::node::{JsonKind, JsonValue};

fn shaped(expectation: Expectation, accepts: impl Fn(&JsonValue) -> bool + Send + Sync + 'static) -> Checker {
    Arc::new(move |node, ctx| {
        if !accepts(&node.value) {
            let doc = expectation.doc.clone();
            let message = ctx.localize("expected", &[&doc]);
            ctx.err.error(message, node.range);
        }
        node.expectations = vec![expectation.clone()];
    })
}

/// Accepts `true` or `false`.
#[must_use]
pub fn boolean() -> Checker {
    shaped(
        Expectation::new(JsonKind::Boolean, "a boolean"),
        |value| matches!(value, JsonValue::Boolean(_)),
    )
}

/// Accepts numbers written in integer form. `1` fits, `1.0` does not.
#[must_use]
pub fn integer() -> Checker {
    shaped(
        Expectation::new(JsonKind::Number, "an integer"),
        |value| matches!(value, JsonValue::Number { integer: true, .. }),
    )
}

/// Accepts any number.
#[must_use]
pub fn float() -> Checker {
    shaped(
        Expectation::new(JsonKind::Number, "a number"),
        |value| matches!(value, JsonValue::Number { .. }),
    )
}

/// Accepts any string.
#[must_use]
pub fn string() -> Checker {
    shaped(
        Expectation::new(JsonKind::String, "a string"),
        |value| matches!(value, JsonValue::String(_)),
    )
}

/// Accepts only `null`.
#[must_use]
pub fn null() -> Checker {
    shaped(Expectation::new(JsonKind::Null, "null"), |value| {
        matches!(value, JsonValue::Null)
    })
}

/// Accepts exactly the string `text`.
#[must_use]
pub fn literal(text: impl Into<String>) -> Checker {
    let text = text.into();
    let expectation = Expectation::new(JsonKind::String, quote(&text));
    shaped(expectation, move |value| {
        matches!(value, JsonValue::String(s) if *s == text)
    })
}

/// Accepts any string, marking it as naming a resource of `category`.
#[must_use]
pub fn resource(category: impl Into<String>) -> Checker {
    let expectation = Expectation::new(JsonKind::String, "a string").with_resource(category);
    shaped(expectation, |value| matches!(value, JsonValue::String(_)))
}

/// Accepts an array whose every element fits `item`.
#[must_use]
pub fn list_of(item: Checker) -> Checker {
    Arc::new(move |node, ctx| {
        let items = expectations_of(&item, ctx);
        let expectation = Expectation::new(JsonKind::Array, "a list").with_items(items);
        let range = node.range;
        match &mut node.value {
            JsonValue::Array(elements) => {
                for element in elements {
                    item(element, ctx);
                }
            }
            _ => {
                let doc = expectation.doc.clone();
                let message = ctx.localize("expected", &[&doc]);
                ctx.err.error(message, range);
            }
        }
        node.expectations = vec![expectation];
    })
}

/// One property of an [`object`] shape.
pub struct PropertyShape {
    key: String,
    checker: Checker,
    required: bool,
}

impl PropertyShape {
    /// A property that must be present.
    #[must_use]
    pub fn required(key: impl Into<String>, checker: Checker) -> Self {
        Self {
            key: key.into(),
            checker,
            required: true,
        }
    }

    /// A property that may be absent.
    #[must_use]
    pub fn optional(key: impl Into<String>, checker: Checker) -> Self {
        Self {
            key: key.into(),
            checker,
            required: false,
        }
    }

    /// The property key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Accepts an object with the given properties.
///
/// Unknown keys are warnings, not errors: newer data may carry keys
/// an older shape does not know. Missing required keys are errors
/// reported over the whole object.
#[must_use]
pub fn object(shape: Vec<PropertyShape>) -> Checker {
    Arc::new(move |node, ctx| {
        let keys: Vec<String> = shape.iter().map(|property| property.key.clone()).collect();
        let expectation = Expectation::new(JsonKind::Object, "an object").with_keys(keys);
        let range = node.range;
        match &mut node.value {
            JsonValue::Object(properties) => {
                for property in properties.iter_mut() {
                    match shape.iter().find(|candidate| candidate.key == property.key) {
                        Some(candidate) => {
                            if let Some(value) = property.value.as_mut() {
                                (candidate.checker)(value, ctx);
                            }
                        }
                        None => {
                            let key = quote(&property.key);
                            let message = ctx.localize("check.unknown-key", &[&key]);
                            ctx.err.warning(message, property.key_range);
                        }
                    }
                }
                for candidate in shape.iter().filter(|candidate| candidate.required) {
                    if !properties.iter().any(|property| property.key == candidate.key) {
                        let key = quote(&candidate.key);
                        let message = ctx.localize("check.missing-key", &[&key]);
                        ctx.err.error(message, range);
                    }
                }
            }
            _ => {
                let doc = expectation.doc.clone();
                let message = ctx.localize("expected", &[&doc]);
                ctx.err.error(message, range);
            }
        }
        node.expectations = vec![expectation];
    })
}

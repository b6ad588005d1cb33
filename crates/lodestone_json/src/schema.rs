//! Shapes for the JSON payloads commands carry.

use crate::checker::primitives::{PropertyShape, boolean, float, list_of, object, resource, string};
use crate::checker::{Checker, any_of, lazy};

/// The rich text shape: a string, a boolean, a number, a list of
/// rich text, or a styled object whose `extra` nests more rich text.
///
/// The recursion goes through [`lazy`], so probing the shape for
/// expectations stays finite.
#[must_use]
pub fn rich_text() -> Checker {
    any_of(vec![
        string(),
        boolean(),
        float(),
        list_of(lazy(rich_text)),
        object(vec![
            PropertyShape::optional("text", string()),
            PropertyShape::optional("color", string()),
            PropertyShape::optional("font", resource("font")),
            PropertyShape::optional("bold", boolean()),
            PropertyShape::optional("italic", boolean()),
            PropertyShape::optional("extra", list_of(lazy(rich_text))),
        ]),
    ])
}

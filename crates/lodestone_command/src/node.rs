//! The parsed command syntax tree.
//!
//! One [`CommandNode`] per line, one [`ChildNode`] per consumed
//! segment. The tree is complete even for broken input: unknown
//! parsers and trailing text become their own segments so editor
//! tooling always has something to hang ranges on.

use lodestone_foundation::Range;
use lodestone_json::JsonNode;
use lodestone_tree::TreePath;

/// A parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandNode {
    /// The range of the whole command, leading slash included.
    pub range: Range,
    /// The leading slash, when one was written.
    pub slash: Option<Range>,
    /// One child per consumed segment, in source order.
    pub children: Vec<ChildNode>,
}

/// One consumed segment of a command.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildNode {
    /// The source range the segment occupies.
    pub range: Range,
    /// The logical grammar path of the matched branch. Empty for
    /// trailing segments, which match no branch.
    pub path: TreePath,
    /// The segment payload.
    pub value: ChildValue,
}

impl ChildNode {
    /// The matched keyword, when this segment is a literal.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match &self.value {
            ChildValue::Literal { text } => Some(text),
            _ => None,
        }
    }

    /// The parsed value, when this segment is an argument.
    #[must_use]
    pub fn argument(&self) -> Option<&ArgumentValue> {
        match &self.value {
            ChildValue::Argument { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// The payload of one command segment.
#[derive(Clone, Debug, PartialEq)]
pub enum ChildValue {
    /// A matched fixed keyword.
    Literal {
        /// The keyword as written.
        text: String,
    },
    /// A parsed argument.
    Argument {
        /// The branch name from the grammar.
        name: String,
        /// The parsed value.
        value: ArgumentValue,
    },
    /// Text consumed by the placeholder for an unimplemented parser.
    Unknown {
        /// The parser identifier the grammar asked for.
        parser_id: String,
        /// The raw text consumed.
        raw: String,
    },
    /// Text left over after the grammar was exhausted.
    Trailing {
        /// The raw text consumed.
        raw: String,
    },
}

/// A parsed argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentValue {
    /// From `brigadier:bool`.
    Boolean(bool),
    /// From `brigadier:integer`.
    Integer(i32),
    /// From `brigadier:float`.
    Float(f32),
    /// From `brigadier:double`.
    Double(f64),
    /// From `brigadier:string`.
    String(String),
    /// From `pack:rich_text`: the checked JSON tree.
    Json(JsonNode),
}

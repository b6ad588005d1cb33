//! Argument parser resolution.
//!
//! Grammar data names argument parsers by identifier; the registry
//! maps those identifiers to implementations. Identifiers the
//! registry does not know are not an error here: the dispatcher
//! degrades them to a placeholder at parse time, so a grammar from a
//! newer content version still loads and mostly works.

use std::collections::HashMap;

use lodestone_foundation::{Context, ParseResult, Reader};
use lodestone_tree::TreeNode;

use crate::builtin::{
    BoolParser, DoubleParser, FloatParser, IntegerParser, RichTextParser, StringParser,
};
use crate::node::ArgumentValue;

/// Parses one argument value, configured by its grammar node.
pub trait ArgumentParser: Send + Sync {
    /// Parses a value at the reader's position.
    ///
    /// `node` supplies parser-specific properties. On failure the
    /// reader is left where it started and nothing has been reported;
    /// on success diagnostics may have been reported for recoverable
    /// problems with the consumed text.
    fn parse(
        &self,
        node: &TreeNode,
        reader: &mut Reader<'_>,
        ctx: &mut Context,
    ) -> ParseResult<ArgumentValue>;
}

/// Maps grammar parser identifiers to implementations.
pub struct ParserRegistry {
    parsers: HashMap<String, Box<dyn ArgumentParser>>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Creates a registry with every built-in parser registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("brigadier:bool", BoolParser);
        registry.register("brigadier:double", DoubleParser);
        registry.register("brigadier:float", FloatParser);
        registry.register("brigadier:integer", IntegerParser);
        registry.register("brigadier:string", StringParser);
        registry.register("pack:rich_text", RichTextParser);
        registry
    }

    /// Registers a parser under an identifier, replacing any previous
    /// registration.
    pub fn register(&mut self, id: impl Into<String>, parser: impl ArgumentParser + 'static) {
        self.parsers.insert(id.into(), Box::new(parser));
    }

    /// Looks up a parser by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn ArgumentParser> {
        self.parsers.get(id).map(|parser| &**parser)
    }

    /// Resolves the parser an argument node asks for, if any.
    #[must_use]
    pub fn resolve(&self, node: &TreeNode) -> Option<&dyn ArgumentParser> {
        self.get(node.parser.as_deref()?)
    }

    /// Returns the number of registered parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns true if no parsers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! The command dispatcher.
//!
//! Walks a grammar tree one segment at a time: resolve the current
//! node through redirects, partition its children into branches,
//! parse the next segment via the best-fitting branch, then recurse
//! into the matched child. Parsing never aborts; every problem
//! becomes a diagnostic and the walk recovers as far as it can.

use lodestone_foundation::{
    Context, Diagnostic, Error, Failure, Parse, ParseResult, Range, Reader, any, quote,
};
use lodestone_tree::{NodeKind, TreeNode, TreePath, resolve_parent};

use crate::argument::{ArgumentParser, ParserRegistry};
use crate::node::{ChildNode, ChildValue, CommandNode};

/// Parses command lines against a grammar tree.
///
/// The dispatcher owns the grammar and the parser registry; one
/// dispatcher serves any number of parses, including concurrent ones,
/// since parsing never mutates either.
pub struct CommandDispatcher {
    root: TreeNode,
    registry: ParserRegistry,
}

impl CommandDispatcher {
    /// Creates a dispatcher with the built-in argument parsers.
    #[must_use]
    pub fn new(root: TreeNode) -> Self {
        Self::with_registry(root, ParserRegistry::with_builtins())
    }

    /// Creates a dispatcher with a custom parser registry.
    #[must_use]
    pub fn with_registry(root: TreeNode, registry: ParserRegistry) -> Self {
        Self { root, registry }
    }

    /// The grammar root.
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Parses one command line.
    ///
    /// Always returns a tree; problems are reported through `ctx`.
    /// A leading `/` is recorded but does not affect dispatch.
    pub fn parse(&self, reader: &mut Reader<'_>, ctx: &mut Context) -> CommandNode {
        let start = reader.offset();
        let slash = if reader.try_skip("/") {
            Some(Range::new(start, reader.offset()))
        } else {
            None
        };

        let mut children = Vec::new();
        self.step(&mut children, reader, ctx, TreePath::new(), &self.root);

        if reader.can_read_in_line() {
            let trailing_start = reader.offset();
            let raw = reader.read_until_line_end().to_string();
            let range = Range::new(trailing_start, reader.offset());
            let quoted = quote(&raw);
            let message = ctx.localize("command.trailing", &[&quoted]);
            ctx.err.error(message, range);
            children.push(ChildNode {
                range,
                path: TreePath::new(),
                value: ChildValue::Trailing { raw },
            });
        }

        CommandNode {
            range: Range::new(start, reader.offset()),
            slash,
            children,
        }
    }

    /// Parses `line` under the given caller permission level and
    /// returns the tree with the diagnostics of the pass.
    #[must_use]
    pub fn parse_str(&self, line: &str, permission_level: u8) -> (CommandNode, Vec<Diagnostic>) {
        let mut reader = Reader::new(line);
        let mut ctx = Context::new().with_permission_level(permission_level);
        let node = self.parse(&mut reader, &mut ctx);
        (node, ctx.err.into_diagnostics())
    }

    fn step(
        &self,
        out: &mut Vec<ChildNode>,
        reader: &mut Reader<'_>,
        ctx: &mut Context,
        path: TreePath,
        node: &TreeNode,
    ) {
        let resolved = match resolve_parent(&self.root, node, &path) {
            Ok(resolved) => resolved,
            Err(error) => {
                let (key, detail) = match error {
                    Error::RedirectCycle { path } => ("command.redirect-cycle", path),
                    Error::RedirectMissing { path } | Error::MalformedGrammar(path) => {
                        ("command.redirect-missing", path)
                    }
                };
                let detail = quote(detail);
                let message = ctx.localize(key, &[&detail]);
                ctx.err.error(message, Range::at(reader.offset()));
                return;
            }
        };
        let parent = resolved.node;
        let path = resolved.path;
        if parent.children.is_empty() {
            return;
        }

        let branches = parent.branches();
        let mut candidates: Vec<Candidate<'_>> = branches
            .arguments
            .iter()
            .map(|(name, node)| Candidate::Argument {
                name,
                node,
                parser: self.registry.resolve(node),
            })
            .collect();
        if !branches.literals.is_empty() {
            candidates.push(Candidate::Literals {
                names: branches.literals.iter().map(|(name, _)| *name).collect(),
            });
        }
        if candidates.is_empty() {
            return;
        }

        let start = reader.offset();
        let outcome = if candidates.len() > 1 {
            any(&candidates, reader, ctx).map(|(_, taken)| taken)
        } else {
            candidates[0].parse(reader, ctx)
        };

        let Ok((taken, value)) = outcome else {
            let summary = expected_summary(parent);
            let message = ctx.localize("expected", &[&summary]);
            ctx.err.error(message, Range::at(reader.offset()));
            return;
        };
        tracing::trace!(branch = %taken, at = start, "matched command branch");

        let range = Range::new(start, reader.offset());
        let child_path = path.push(taken.as_str());
        let is_unknown = matches!(value, ChildValue::Unknown { .. });
        out.push(ChildNode {
            range,
            path: child_path.clone(),
            value,
        });

        let Some(child_node) = parent.children.get(taken.as_str()) else {
            return;
        };

        let required = child_node.required_permission();
        if ctx.permission_level < required {
            let actual = ctx.permission_level;
            let message = ctx.localize("command.no-permission", &[&required, &actual]);
            ctx.err.error(message, range);
        }

        if is_unknown {
            // Nothing past an unimplemented parser is structurally
            // known; the stub already consumed the rest of the line.
            return;
        }

        if reader.can_read_in_line() {
            if !reader.try_skip(" ") {
                let message = ctx.localize("command.expected-space", &[]);
                ctx.err.error(message, Range::at(reader.offset()));
            }
            self.step(out, reader, ctx, child_path, child_node);
        } else if !child_node.executable {
            let message = ctx.localize("command.unexpected-end", &[]);
            ctx.err.error(message, Range::at(reader.offset()));
        }
    }
}

/// One branch alternative at a dispatch step.
///
/// Argument branches come first in declaration order, then a single
/// candidate covering every literal sibling; ambiguity ties resolve
/// in that order.
enum Candidate<'t> {
    Argument {
        name: &'t str,
        node: &'t TreeNode,
        parser: Option<&'t dyn ArgumentParser>,
    },
    Literals {
        names: Vec<&'t str>,
    },
}

impl Parse<(String, ChildValue)> for Candidate<'_> {
    fn parse(
        &self,
        reader: &mut Reader<'_>,
        ctx: &mut Context,
    ) -> ParseResult<(String, ChildValue)> {
        match self {
            Candidate::Argument {
                name,
                node,
                parser: Some(parser),
            } => {
                let value = parser.parse(node, reader, ctx)?;
                Ok((
                    (*name).to_string(),
                    ChildValue::Argument {
                        name: (*name).to_string(),
                        value,
                    },
                ))
            }
            Candidate::Argument {
                name,
                node,
                parser: None,
            } => {
                // The grammar references a parser this engine does not
                // implement. Consume the rest of the line so the tree
                // stays complete, and say so quietly.
                let start = reader.offset();
                let raw = reader.read_until_line_end().to_string();
                let range = Range::new(start, reader.offset());
                let parser_id = node.parser.clone().unwrap_or_default();
                let quoted = quote(&parser_id);
                let message = ctx.localize("command.unknown-parser", &[&quoted]);
                ctx.err.hint(message, range);
                Ok((
                    (*name).to_string(),
                    ChildValue::Unknown { parser_id, raw },
                ))
            }
            Candidate::Literals { names } => {
                let checkpoint = reader.checkpoint();
                let text = reader.read_unquoted();
                if text.is_empty() || !names.iter().any(|name| *name == text) {
                    reader.restore(checkpoint);
                    return Err(Failure);
                }
                Ok((
                    text.to_string(),
                    ChildValue::Literal {
                        text: text.to_string(),
                    },
                ))
            }
        }
    }
}

/// Renders a node's children as the alternatives a failed dispatch
/// expected. Listings longer than five entries show the first three
/// and last two around an ellipsis, so messages stay bounded no
/// matter the grammar fan-out.
fn expected_summary(parent: &TreeNode) -> String {
    let descriptors: Vec<String> = parent
        .children
        .iter()
        .map(|(name, child)| describe_branch(name, child))
        .collect();
    if descriptors.len() > 5 {
        let mut bounded: Vec<&str> = descriptors[..3].iter().map(String::as_str).collect();
        bounded.push("...");
        bounded.extend(descriptors[descriptors.len() - 2..].iter().map(String::as_str));
        bounded.join("|")
    } else {
        descriptors.join("|")
    }
}

fn describe_branch(name: &str, node: &TreeNode) -> String {
    match node.kind {
        NodeKind::Argument => format!("<{name}>"),
        _ => name.to_string(),
    }
}

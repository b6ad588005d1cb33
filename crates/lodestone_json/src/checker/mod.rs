//! Structural checkers and ambiguity resolution over parsed JSON.
//!
//! A [`Checker`] walks a [`JsonNode`], reports mismatches, and
//! attaches [`Expectation`]s describing what would fit. Checkers
//! never fail: a wrong value produces diagnostics and the walk
//! continues. Where several shapes are legal, [`any_of`] tries each
//! against its own copy of the node, keeps the one whose diagnostics
//! cover the least text, and attaches the union of every attempted
//! shape's expectations.

use std::sync::Arc;

use lodestone_foundation::{Context, Range, Reporter};

use crate::expectation::Expectation;
use crate::node::JsonNode;

pub mod primitives;

/// A structural check over one JSON node.
pub type Checker = Arc<dyn Fn(&mut JsonNode, &mut Context) + Send + Sync>;

/// Probe depth past which [`expectations_of`] stops recursing.
///
/// Recursive shapes probe themselves while describing themselves;
/// the cap keeps that regress finite.
pub const MAX_PROBE_DEPTH: usize = 8;

/// One checker run against a private copy of a node.
///
/// Nothing has been committed yet: the node copy and the diagnostics
/// are dropped unless [`CheckAttempt::commit`] adopts them.
pub struct CheckAttempt {
    node: JsonNode,
    reporter: Reporter,
}

impl CheckAttempt {
    /// Total source width covered by this attempt's diagnostics.
    #[must_use]
    pub fn width(&self) -> usize {
        self.reporter.total_width()
    }

    /// The expectations the checker attached at the top level.
    #[must_use]
    pub fn expectations(&self) -> &[Expectation] {
        &self.node.expectations
    }

    /// Adopts this attempt: its diagnostics flow into `ctx` and its
    /// node copy, annotations included, replaces `node`.
    pub fn commit(self, node: &mut JsonNode, ctx: &mut Context) {
        ctx.err.absorb(self.reporter);
        *node = self.node;
    }
}

/// Runs `checker` against a copy of `node` under a sandboxed context.
///
/// The original node and context are untouched regardless of what
/// the checker reports or rewrites.
#[must_use]
pub fn attempt(checker: &Checker, node: &JsonNode, ctx: &Context) -> CheckAttempt {
    let mut copy = node.clone();
    let mut sandbox = ctx.sandbox();
    checker(&mut copy, &mut sandbox);
    CheckAttempt {
        node: copy,
        reporter: sandbox.err,
    }
}

/// A checker accepting any of several shapes.
///
/// Every candidate runs against its own copy of the node. The
/// candidate whose diagnostics cover the least text wins and is
/// committed; on ties the earliest candidate wins. The node's
/// expectations afterwards are the union over all candidates, so
/// completion sees every acceptable shape.
///
/// # Panics
///
/// Panics when `checkers` is empty. A choice between zero shapes is
/// a bug in the schema, not in the input.
#[must_use]
pub fn any_of(checkers: Vec<Checker>) -> Checker {
    assert!(!checkers.is_empty(), "any_of requires at least one checker");
    Arc::new(move |node, ctx| {
        let mut attempts: Vec<CheckAttempt> = checkers
            .iter()
            .map(|checker| attempt(checker, node, ctx))
            .collect();
        let union: Vec<Expectation> = attempts
            .iter()
            .flat_map(|candidate| candidate.expectations().iter().cloned())
            .collect();
        let mut best = 0;
        for (index, candidate) in attempts.iter().enumerate().skip(1) {
            if candidate.width() < attempts[best].width() {
                best = index;
            }
        }
        tracing::trace!(
            candidates = attempts.len(),
            winner = best,
            width = attempts[best].width(),
            "resolved ambiguous value"
        );
        let winner = attempts.swap_remove(best);
        winner.commit(node, ctx);
        node.expectations = union;
    })
}

/// Defers construction of a checker until it runs.
///
/// Recursive shapes cannot name themselves while being built;
/// `lazy(shape)` breaks the knot.
#[must_use]
pub fn lazy(supplier: fn() -> Checker) -> Checker {
    Arc::new(move |node, ctx| {
        let checker = supplier();
        checker(node, ctx);
    })
}

/// Asks a checker what it would accept, without any input.
///
/// Runs the checker against a throwaway null node in a sandbox and
/// returns the expectations it attaches. Returns nothing once the
/// probe depth cap is reached.
#[must_use]
pub fn expectations_of(checker: &Checker, ctx: &Context) -> Vec<Expectation> {
    if ctx.depth >= MAX_PROBE_DEPTH {
        return Vec::new();
    }
    let mut probe = JsonNode::null(Range::at(0));
    let mut sandbox = ctx.sandbox();
    sandbox.depth = ctx.depth + 1;
    checker(&mut probe, &mut sandbox);
    probe.expectations
}

//! The parse contract and ambiguity resolver.
//!
//! Every parser has the same shape: given a reader and a context, it
//! either produces a value or fails hard. Sequencing is expressed with
//! `?` on [`ParseResult`]; [`optional`] adopts a speculative parse only
//! on success; [`any`] tries several candidates from the same position
//! and commits the one whose diagnostics explain the input best.
//!
//! Ranking uses total diagnostic width (the sum of `end - start` over
//! every diagnostic an attempt produced). A narrow mismatch explains
//! more of the input than a wide one, so lower width wins. Ties go to
//! the earliest-declared candidate; this is a contract, not an
//! accident, and grammar authors order ambiguous siblings accordingly.

use crate::context::Context;
use crate::diagnostic::Reporter;
use crate::reader::{Checkpoint, Reader};

/// Hard parse failure: the candidate matched nothing at the cursor.
///
/// Failure carries no payload. Parsers that fail must leave the
/// caller's cursor untouched and report nothing to the live context;
/// the caller decides what to report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Failure;

/// Result of one parse step.
pub type ParseResult<T> = Result<T, Failure>;

/// The uniform parser contract.
///
/// Implementors are plain types (an enum of branch parsers, a struct
/// holding configuration) so candidates can be collected in slices and
/// probed uniformly.
pub trait Parse<T> {
    /// Parses one value at the reader's position.
    ///
    /// On success the reader sits after the consumed input. On failure
    /// the reader is restored to where it started and nothing has been
    /// reported.
    fn parse(&self, reader: &mut Reader<'_>, ctx: &mut Context) -> ParseResult<T>;
}

/// The outcome of one speculative attempt, not yet committed.
///
/// Holds the value (or failure), the reader position the attempt
/// reached, and the sandboxed diagnostics it produced. Dropping a
/// probe discards the attempt with no effect on the live pass.
#[derive(Debug)]
pub struct Probe<T> {
    outcome: ParseResult<T>,
    end: Checkpoint,
    sandbox: Reporter,
}

impl<T> Probe<T> {
    /// Returns true if the attempt produced a value.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns the total diagnostic width of the attempt.
    #[must_use]
    pub fn width(&self) -> usize {
        self.sandbox.total_width()
    }

    /// Returns the diagnostics the attempt produced.
    #[must_use]
    pub fn diagnostics(&self) -> &Reporter {
        &self.sandbox
    }

    /// Commits the attempt: on success, absorbs its diagnostics into
    /// the live reporter and advances the reader to where the attempt
    /// ended. A failed attempt commits nothing.
    pub fn commit(self, reader: &mut Reader<'_>, ctx: &mut Context) -> ParseResult<T> {
        match self.outcome {
            Ok(value) => {
                ctx.err.absorb(self.sandbox);
                reader.restore(self.end);
                Ok(value)
            }
            Err(failure) => Err(failure),
        }
    }
}

/// Runs a parser speculatively, isolated from the live pass.
///
/// The parser runs on a copy of the reader against a sandboxed
/// context, so neither the caller's cursor nor the live reporter
/// changes until the returned probe is committed.
#[must_use]
pub fn attempt<T>(parser: &impl Parse<T>, reader: &Reader<'_>, ctx: &Context) -> Probe<T> {
    let mut speculative = *reader;
    let mut sandbox = ctx.sandbox();
    let outcome = parser.parse(&mut speculative, &mut sandbox);
    Probe {
        outcome,
        end: speculative.checkpoint(),
        sandbox: sandbox.err,
    }
}

/// Tries every candidate from the same position and commits the best.
///
/// Successful attempts rank before failed ones; among successes, the
/// lowest total diagnostic width wins, with ties going to the
/// earliest-declared candidate. Only the winner's diagnostics reach
/// the live reporter; every other sandbox is dropped. Returns the
/// winning candidate's index alongside its value, or [`Failure`] with
/// nothing committed when every candidate failed.
///
/// # Panics
///
/// Panics if `candidates` is empty. Resolving zero alternatives is a
/// programming error, not an input error.
pub fn any<T>(
    candidates: &[impl Parse<T>],
    reader: &mut Reader<'_>,
    ctx: &mut Context,
) -> ParseResult<(usize, T)> {
    assert!(!candidates.is_empty(), "any requires at least one candidate");
    let mut probes: Vec<(usize, Probe<T>)> = candidates
        .iter()
        .map(|candidate| attempt(candidate, reader, ctx))
        .enumerate()
        .collect();
    // Stable sort: equal-width candidates keep declaration order.
    probes.sort_by_key(|(_, probe)| (!probe.succeeded(), probe.width()));
    let (index, best) = probes.remove(0);
    let value = best.commit(reader, ctx)?;
    Ok((index, value))
}

/// Tries one parser and adopts the result only on success.
///
/// On failure the cursor stays put, nothing is reported, and `None` is
/// returned.
pub fn optional<T>(
    parser: &impl Parse<T>,
    reader: &mut Reader<'_>,
    ctx: &mut Context,
) -> Option<T> {
    attempt(parser, reader, ctx).commit(reader, ctx).ok()
}

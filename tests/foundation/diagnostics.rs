//! Integration tests for the diagnostic reporter
//!
//! Tests report ordering, severities, width accounting, and sandbox
//! absorption.

use lodestone_foundation::{Context, Range, Reporter, Severity};

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn diagnostics_keep_report_order() {
    let mut reporter = Reporter::new();
    reporter.error("first", Range::new(0, 3));
    reporter.hint("second", Range::at(4));
    reporter.warning("third", Range::new(5, 9));

    let messages: Vec<&str> = reporter
        .diagnostics()
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[test]
fn severities_are_recorded_per_report() {
    let mut reporter = Reporter::new();
    reporter.error("e", Range::at(0));
    reporter.warning("w", Range::at(0));
    reporter.hint("h", Range::at(0));

    let severities: Vec<Severity> = reporter
        .diagnostics()
        .iter()
        .map(|d| d.severity)
        .collect();
    assert_eq!(
        severities,
        vec![Severity::Error, Severity::Warning, Severity::Hint]
    );
}

#[test]
fn absorb_appends_after_own_reports() {
    let mut live = Reporter::new();
    live.error("live first", Range::at(0));

    let mut sandbox = Reporter::new();
    sandbox.error("sandbox first", Range::at(1));
    sandbox.warning("sandbox second", Range::at(2));

    live.absorb(sandbox);

    let messages: Vec<&str> = live
        .diagnostics()
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec!["live first", "sandbox first", "sandbox second"]
    );
}

// =============================================================================
// Width Accounting
// =============================================================================

#[test]
fn total_width_sums_every_range() {
    let mut reporter = Reporter::new();
    reporter.error("a", Range::new(0, 3));
    reporter.warning("b", Range::new(5, 10));
    reporter.hint("c", Range::at(12));

    assert_eq!(reporter.total_width(), 8);
}

#[test]
fn point_diagnostics_have_zero_width() {
    let mut reporter = Reporter::new();
    reporter.error("at a point", Range::at(7));

    assert_eq!(reporter.total_width(), 0);
    assert_eq!(reporter.len(), 1);
}

// =============================================================================
// Sandboxing Through Context
// =============================================================================

#[test]
fn sandbox_reports_stay_isolated_until_absorbed() {
    let mut ctx = Context::new();
    ctx.err.error("live", Range::new(0, 2));

    let mut sandbox = ctx.sandbox();
    sandbox.err.error("speculative", Range::new(2, 4));
    assert_eq!(ctx.err.len(), 1);

    ctx.err.absorb(sandbox.err);
    assert_eq!(ctx.err.len(), 2);
    assert_eq!(ctx.err.diagnostics()[1].message, "speculative");
}

#[test]
fn discarded_sandbox_leaves_no_trace() {
    let ctx = Context::new();

    {
        let mut sandbox = ctx.sandbox();
        sandbox.err.error("never seen", Range::at(0));
    }

    assert!(ctx.err.is_empty());
}

#[test]
fn into_diagnostics_drains_in_order() {
    let mut reporter = Reporter::new();
    reporter.error("one", Range::at(0));
    reporter.error("two", Range::at(1));

    let diagnostics = reporter.into_diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].message, "one");
    assert_eq!(diagnostics[1].message, "two");
}

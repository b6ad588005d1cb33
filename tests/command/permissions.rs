//! Integration tests for permission gating
//!
//! Permission failures are soft: the gate reports once over the
//! offending segment and the walk keeps going, so editor tooling sees
//! the full tree either way.

use lodestone_command::CommandDispatcher;
use lodestone_foundation::{Range, Severity};
use lodestone_tree::from_json_str;

fn ban_dispatcher() -> CommandDispatcher {
    let tree = from_json_str(
        r#"{
            "type": "root",
            "children": {
                "ban": {
                    "type": "literal",
                    "permission": 3,
                    "children": {
                        "target": {
                            "type": "argument",
                            "parser": "brigadier:string",
                            "permission": 1,
                            "executable": true
                        }
                    }
                }
            }
        }"#,
    )
    .unwrap();
    CommandDispatcher::new(tree)
}

// =============================================================================
// Single Gates
// =============================================================================

#[test]
fn a_closed_gate_reports_once_and_keeps_the_subtree() {
    let (node, diagnostics) = ban_dispatcher().parse_str("ban griefer", 1);

    // Only `ban` itself gates above the caller; `target` sits at 1.
    assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
    assert_eq!(
        diagnostics[0].message,
        "permission level 3 is required, but the caller has level 1"
    );
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[0].range, Range::new(0, 3));

    // The walk continued past the gate.
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[1].path.to_string(), "ban target");
}

#[test]
fn elevated_callers_pass_every_gate() {
    let (node, diagnostics) = ban_dispatcher().parse_str("ban griefer", 4);

    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    assert_eq!(node.children.len(), 2);
}

#[test]
fn the_default_gate_is_level_two() {
    let dispatcher = CommandDispatcher::new(
        from_json_str(
            r#"{
                "type": "root",
                "children": {
                    "op": {"type": "literal", "executable": true}
                }
            }"#,
        )
        .unwrap(),
    );

    let (_, diagnostics) = dispatcher.parse_str("op", 1);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "permission level 2 is required, but the caller has level 1"
    );

    let (_, diagnostics) = dispatcher.parse_str("op", 2);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

// =============================================================================
// Stacked Gates
// =============================================================================

#[test]
fn stacked_gates_report_each_closed_level() {
    let dispatcher = CommandDispatcher::new(
        from_json_str(
            r#"{
                "type": "root",
                "children": {
                    "sudo": {
                        "type": "literal",
                        "permission": 3,
                        "children": {
                            "really": {
                                "type": "literal",
                                "permission": 4,
                                "children": {
                                    "go": {
                                        "type": "literal",
                                        "permission": 1,
                                        "executable": true
                                    }
                                }
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap(),
    );

    let (node, diagnostics) = dispatcher.parse_str("sudo really go", 2);

    assert_eq!(diagnostics.len(), 2, "{diagnostics:?}");
    assert_eq!(diagnostics[0].range, Range::new(0, 4));
    assert_eq!(diagnostics[1].range, Range::new(5, 11));
    assert!(
        diagnostics
            .iter()
            .all(|d| d.message.contains("is required"))
    );
    assert_eq!(node.children.len(), 3);
}

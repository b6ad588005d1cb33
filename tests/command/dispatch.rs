//! Integration tests for command dispatch
//!
//! Tests full walks over grammars in the upstream dump shape: clean
//! commands, trailing input, failed dispatch listings, and redirects.

use lodestone_command::{ChildValue, CommandDispatcher};
use lodestone_foundation::Range;
use lodestone_tree::from_json_str;

fn dispatcher(grammar: &str) -> CommandDispatcher {
    CommandDispatcher::new(from_json_str(grammar).unwrap())
}

fn say_dispatcher() -> CommandDispatcher {
    dispatcher(
        r#"{
            "type": "root",
            "children": {
                "say": {
                    "type": "literal",
                    "children": {
                        "message": {
                            "type": "argument",
                            "parser": "brigadier:string",
                            "properties": {"type": "word"},
                            "executable": true
                        }
                    }
                },
                "stop": {"type": "literal", "executable": true}
            }
        }"#,
    )
}

// =============================================================================
// Clean Walks
// =============================================================================

#[test]
fn a_clean_command_produces_no_diagnostics() {
    let (node, diagnostics) = say_dispatcher().parse_str("say hi", 2);

    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[0].path.to_string(), "say");
    assert_eq!(node.children[0].literal(), Some("say"));
    assert_eq!(node.children[1].path.to_string(), "say message");
    assert!(node.children[1].argument().is_some());
    assert_eq!(node.range, Range::new(0, 6));
}

#[test]
fn a_leading_slash_is_recorded_not_dispatched() {
    let (node, diagnostics) = say_dispatcher().parse_str("/stop", 2);

    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    assert_eq!(node.slash, Some(Range::new(0, 1)));
    assert_eq!(node.children.len(), 1);
    assert_eq!(node.children[0].range, Range::new(1, 5));
}

#[test]
fn an_empty_grammar_accepts_only_emptiness() {
    let empty = dispatcher(r#"{"type": "root"}"#);

    let (node, diagnostics) = empty.parse_str("", 2);
    assert!(diagnostics.is_empty());
    assert!(node.children.is_empty());

    let (node, diagnostics) = empty.parse_str("anything", 2);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "trailing data found: \"anything\""
    );
    assert!(matches!(
        node.children[0].value,
        ChildValue::Trailing { .. }
    ));
}

// =============================================================================
// Trailing Input
// =============================================================================

#[test]
fn trailing_input_is_reported_and_kept() {
    let (node, diagnostics) = say_dispatcher().parse_str("say hi extra junk", 2);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "trailing data found: \"extra junk\"");
    assert_eq!(diagnostics[0].range, Range::new(7, 17));

    let trailing = node.children.last().unwrap();
    assert!(trailing.path.is_empty());
    assert_eq!(
        trailing.value,
        ChildValue::Trailing {
            raw: "extra junk".to_string()
        }
    );
    // The segments before the junk still dispatched normally.
    assert_eq!(node.children.len(), 3);
}

#[test]
fn incomplete_commands_ask_for_more() {
    let grammar = dispatcher(
        r#"{
            "type": "root",
            "children": {
                "wait": {
                    "type": "literal",
                    "children": {
                        "ticks": {
                            "type": "argument",
                            "parser": "brigadier:integer",
                            "executable": true
                        }
                    }
                }
            }
        }"#,
    );

    let (node, diagnostics) = grammar.parse_str("wait", 2);

    assert_eq!(node.children.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "expected more arguments but found the end of the command"
    );
    assert_eq!(diagnostics[0].range, Range::at(4));
}

// =============================================================================
// Failed Dispatch
// =============================================================================

#[test]
fn failed_dispatch_lists_alternatives_in_declared_order() {
    let (node, diagnostics) = say_dispatcher().parse_str("shout hi", 2);

    // "shout" matches neither branch; the listing follows the dump.
    assert_eq!(diagnostics[0].message, "expected say|stop");
    assert_eq!(diagnostics[0].range, Range::at(0));
    assert!(node.children.iter().all(|c| matches!(
        c.value,
        ChildValue::Trailing { .. }
    )));
}

#[test]
fn long_listings_are_bounded() {
    let grammar = dispatcher(
        r#"{
            "type": "root",
            "children": {
                "tp": {"type": "literal", "executable": true},
                "tell": {"type": "literal", "executable": true},
                "time": {"type": "literal", "executable": true},
                "team": {"type": "literal", "executable": true},
                "title": {"type": "literal", "executable": true},
                "weather": {"type": "literal", "executable": true},
                "angle": {
                    "type": "argument",
                    "parser": "brigadier:float",
                    "executable": true
                }
            }
        }"#,
    );

    let (_, diagnostics) = grammar.parse_str("?", 2);

    assert_eq!(
        diagnostics[0].message,
        "expected tp|tell|time|...|weather|<angle>"
    );
}

// =============================================================================
// Redirects
// =============================================================================

#[test]
fn continuation_nodes_replay_the_root() {
    let grammar = dispatcher(
        r#"{
            "type": "root",
            "children": {
                "execute": {
                    "type": "literal",
                    "children": {
                        "run": {"type": "literal"}
                    }
                },
                "stop": {"type": "literal", "executable": true}
            }
        }"#,
    );

    let (node, diagnostics) = grammar.parse_str("execute run stop", 2);

    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    let paths: Vec<String> = node.children.iter().map(|c| c.path.to_string()).collect();
    assert_eq!(paths, vec!["execute", "execute run", "stop"]);
}

#[test]
fn redirect_cycles_end_the_walk_with_a_diagnostic() {
    let grammar = dispatcher(
        r#"{
            "type": "root",
            "children": {
                "ping": {"type": "literal", "redirect": ["pong"]},
                "pong": {"type": "literal", "redirect": ["ping"]}
            }
        }"#,
    );

    let (node, diagnostics) = grammar.parse_str("ping x", 2);

    assert_eq!(node.children[0].literal(), Some("ping"));
    assert!(
        diagnostics
            .iter()
            .any(|d| d.message.contains("forms a cycle"))
    );
}

#[test]
fn dangling_redirects_report_their_target() {
    let grammar = dispatcher(
        r#"{
            "type": "root",
            "children": {
                "jump": {"type": "literal", "redirect": ["gone"]}
            }
        }"#,
    );

    let (_, diagnostics) = grammar.parse_str("jump up", 2);

    assert!(
        diagnostics
            .iter()
            .any(|d| d.message == "grammar redirect target \"gone\" does not exist")
    );
}

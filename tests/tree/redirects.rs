//! Integration tests for redirect resolution
//!
//! Tests redirect chains over dump-loaded grammars, the logical-path
//! rewrite, root chaining, and cycle rejection.

use lodestone_foundation::Error;
use lodestone_tree::{TreeNode, TreePath, from_json_str, resolve_parent};

fn execute_grammar() -> TreeNode {
    from_json_str(
        r#"{
            "type": "root",
            "children": {
                "execute": {
                    "type": "literal",
                    "children": {
                        "as": {
                            "type": "literal",
                            "children": {
                                "targets": {
                                    "type": "argument",
                                    "parser": "pack:entity",
                                    "redirect": ["execute"]
                                }
                            }
                        },
                        "run": {"type": "literal"}
                    }
                },
                "say": {"type": "literal", "executable": true}
            }
        }"#,
    )
    .unwrap()
}

// =============================================================================
// Redirect Following
// =============================================================================

#[test]
fn redirects_rewrite_the_logical_path() {
    let root = execute_grammar();
    let targets = root.descendant(["execute", "as", "targets"]).unwrap();
    let path: TreePath = ["execute", "as", "targets"].into_iter().collect();

    let resolved = resolve_parent(&root, targets, &path).unwrap();

    // Dispatch continues under `execute`, not under the physical node.
    assert!(std::ptr::eq(
        resolved.node,
        root.descendant(["execute"]).unwrap()
    ));
    assert_eq!(resolved.path.to_string(), "execute");
}

#[test]
fn empty_redirect_targets_the_root() {
    let root = from_json_str(
        r#"{
            "type": "root",
            "children": {
                "loopback": {"type": "literal", "redirect": []}
            }
        }"#,
    )
    .unwrap();
    let loopback = root.descendant(["loopback"]).unwrap();
    let path: TreePath = ["loopback"].into_iter().collect();

    let resolved = resolve_parent(&root, loopback, &path).unwrap();

    assert!(std::ptr::eq(resolved.node, &root));
    assert!(resolved.path.is_empty());
}

#[test]
fn continuation_nodes_chain_to_root() {
    let root = execute_grammar();
    let run = root.descendant(["execute", "run"]).unwrap();
    let path: TreePath = ["execute", "run"].into_iter().collect();

    let resolved = resolve_parent(&root, run, &path).unwrap();

    assert!(std::ptr::eq(resolved.node, &root));
    assert!(resolved.path.is_empty());
}

#[test]
fn executable_leaves_do_not_chain() {
    let root = execute_grammar();
    let say = root.descendant(["say"]).unwrap();
    let path: TreePath = ["say"].into_iter().collect();

    let resolved = resolve_parent(&root, say, &path).unwrap();

    assert!(std::ptr::eq(resolved.node, say));
    assert_eq!(resolved.path.to_string(), "say");
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn two_step_cycles_are_detected() {
    let root = from_json_str(
        r#"{
            "type": "root",
            "children": {
                "ping": {"type": "literal", "redirect": ["pong"]},
                "pong": {"type": "literal", "redirect": ["ping"]}
            }
        }"#,
    )
    .unwrap();
    let ping = root.descendant(["ping"]).unwrap();
    let path: TreePath = ["ping"].into_iter().collect();

    let err = resolve_parent(&root, ping, &path).unwrap_err();
    assert!(matches!(err, Error::RedirectCycle { .. }));
}

#[test]
fn dangling_targets_are_reported_with_their_path() {
    let root = TreeNode::root()
        .with_child("jump", TreeNode::literal().with_redirect(["over", "there"]));
    let jump = root.descendant(["jump"]).unwrap();
    let path: TreePath = ["jump"].into_iter().collect();

    assert_eq!(
        resolve_parent(&root, jump, &path).unwrap_err(),
        Error::redirect_missing("over there")
    );
}

//! Determinism properties over the whole pipeline
//!
//! The same line against the same grammar must always produce the same
//! tree and the same diagnostics, no matter how mangled the input is,
//! and machine-generated documents must parse without noise.

use lodestone::command::CommandDispatcher;
use lodestone::foundation::Range;
use lodestone::json::parse_str;
use lodestone::tree::TreeNode;
use proptest::prelude::*;
use serde_json::json;

fn pipeline_dispatcher() -> CommandDispatcher {
    let tree = TreeNode::root()
        .with_child(
            "say",
            TreeNode::literal().with_child(
                "message",
                TreeNode::argument("brigadier:string")
                    .with_property("type", json!("greedy"))
                    .with_executable(),
            ),
        )
        .with_child(
            "wait",
            TreeNode::literal().with_child(
                "ticks",
                TreeNode::argument("brigadier:integer")
                    .with_property("min", json!(0))
                    .with_executable(),
            ),
        )
        .with_child(
            "title",
            TreeNode::literal().with_child(
                "payload",
                TreeNode::argument("pack:rich_text").with_executable(),
            ),
        )
        .with_child("stop", TreeNode::literal().with_executable());
    CommandDispatcher::new(tree)
}

/// Lines made of grammar keywords, plausible arguments, and junk.
fn command_line() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("say".to_string()),
        Just("wait".to_string()),
        Just("title".to_string()),
        Just("stop".to_string()),
        Just("-12".to_string()),
        Just("{\"text\":".to_string()),
        Just("{\"bold\": 3}".to_string()),
        Just(String::new()),
        "[a-z]{1,6}",
    ];
    prop::collection::vec(word, 0..6).prop_map(|words| words.join(" "))
}

/// Valid JSON documents, rendered by serde_json.
fn json_document() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i32>().prop_map(serde_json::Value::from),
        (-1.0e6..1.0e6f64).prop_map(serde_json::Value::from),
        "[a-z ]{0,12}".prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|properties| serde_json::Value::Object(properties.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn the_pipeline_is_deterministic(line in command_line(), level in 0..=4u8) {
        let dispatcher = pipeline_dispatcher();
        let first = dispatcher.parse_str(&line, level);
        let second = dispatcher.parse_str(&line, level);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn generated_documents_parse_clean(value in json_document()) {
        let text = value.to_string();
        let (node, diagnostics) = parse_str(&text);
        prop_assert!(diagnostics.is_empty(), "{}: {:?}", text, diagnostics);
        prop_assert_eq!(node.range, Range::new(0, text.len()));
    }
}

//! Property-based tests for the escaped-quote rewrite
//!
//! These tests verify invariants that should hold for all inputs to
//! `string_replace_all`, driven through the public factory path.

use proptest::prelude::*;
use serde_json::Value;
use telex_core::{FunctionContext, StandardStringGetter};
use telex_funcs::{string_replace_all_factory, StringReplaceAllArguments};

/// Run the function over a fixed input and return the rewritten string
fn unescape(input: &str) -> String {
    let factory = string_replace_all_factory::<()>();
    let fctx = FunctionContext::new("string_replace_all");
    let owned = input.to_string();
    let args = StringReplaceAllArguments {
        target: StandardStringGetter::new(move |_: &()| Ok(Value::String(owned.clone()))).boxed(),
    };
    let func = factory
        .create_function(&fctx, Box::new(args))
        .expect("creation should succeed");
    match func(&()).expect("function should succeed") {
        Value::String(s) => s,
        other => panic!("expected string output, got {:?}", other),
    }
}

proptest! {
    /// Property: strings without an escaped quote pass through unchanged
    #[test]
    fn prop_no_match_means_identity(input in "[a-zA-Z0-9 {}:,./+=-]{0,64}") {
        prop_assert_eq!(unescape(&input), input);
    }

    /// Property: escaped separators between clean parts become bare quotes
    #[test]
    fn prop_rewrites_separators_between_parts(
        parts in proptest::collection::vec("[a-zA-Z0-9 {}:,./+=-]{0,16}", 0..8)
    ) {
        let input = parts.join(r#"\""#);
        let expected = parts.join("\"");
        prop_assert_eq!(unescape(&input), expected);
    }

    /// Property: each non-overlapping match loses exactly one byte
    #[test]
    fn prop_length_drops_by_match_count(input in r#"[a-z\\"]{0,64}"#) {
        let matches = input.matches(r#"\""#).count();
        prop_assert_eq!(unescape(&input).len(), input.len() - matches);
    }

    /// Property: the number of quote characters never changes
    #[test]
    fn prop_quote_count_is_preserved(input in r#"[a-z\\"]{0,64}"#) {
        let quotes = |s: &str| s.chars().filter(|c| *c == '"').count();
        prop_assert_eq!(quotes(&unescape(&input)), quotes(&input));
    }

    /// Property: the rewrite never panics over printable input
    #[test]
    fn prop_never_panics(input in "[ -~]{0,128}") {
        let _ = unescape(&input);
    }
}

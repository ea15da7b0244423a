//! Literal rewrite of escaped quotes in string values
//!
//! `string_replace_all` rewrites every `\"` sequence in the target string to
//! a bare `"`. Log bodies that arrive with JSON escaped inside a string field
//! can be unescaped in place before downstream parsing.
//!
//! Copyright (c) 2025 Telex Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use telex_core::{
    ArgumentKind, ArgumentSpec, Arguments, BoxedStringGetter, Error, ExprFunc, FunctionContext,
    FunctionFactory, Result,
};

const NAME: &str = "string_replace_all";

const ARGUMENTS: &[ArgumentSpec] = &[ArgumentSpec {
    name: "target",
    kind: ArgumentKind::StringGetter,
}];

/// Arguments for `string_replace_all`
pub struct StringReplaceAllArguments<K> {
    /// Accessor producing the string to rewrite
    pub target: BoxedStringGetter<K>,
}

/// Factory for the `string_replace_all` function
pub fn string_replace_all_factory<K: 'static>() -> FunctionFactory<K> {
    FunctionFactory::new(NAME, ARGUMENTS, create_string_replace_all_function::<K>)
}

fn create_string_replace_all_function<K: 'static>(
    fctx: &FunctionContext,
    args: Arguments,
) -> Result<ExprFunc<K>> {
    let args = args
        .downcast::<StringReplaceAllArguments<K>>()
        .map_err(|_| {
            Error::invalid_arguments(
                fctx.name(),
                "arguments must be of type StringReplaceAllArguments",
            )
        })?;
    Ok(string_replace_all_func(args.target))
}

/// Build the expression function over a resolved target accessor
///
/// The rewrite is a single left-to-right pass over non-overlapping matches;
/// replaced output is never rescanned.
fn string_replace_all_func<K: 'static>(target: BoxedStringGetter<K>) -> ExprFunc<K> {
    Box::new(move |tctx: &K| {
        let value = target
            .get(tctx)
            .map_err(|err| Error::function(NAME, format!("failed to get value: {}", err), err))?;
        Ok(Value::String(value.replace(r#"\""#, "\"")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use telex_core::StandardStringGetter;

    const ESCAPED_LOG: &str = r#"{\"host\":\"154.89.54.124\",\"user-identifier\":\"mckenzie1244\",\"datetime\":\"05/Oct/2024:16:25:26 +0000\",\"method\":\"HEAD\",\"request\":\"/leading-edge/systems\",\"protocol\":\"HTTP/1.1\",\"status\":201,\"bytes\":5520,\"referer\":\"https://www.nationalportals.com/grow/transform\"}"#;
    const UNESCAPED_LOG: &str = r#"{"host":"154.89.54.124","user-identifier":"mckenzie1244","datetime":"05/Oct/2024:16:25:26 +0000","method":"HEAD","request":"/leading-edge/systems","protocol":"HTTP/1.1","status":201,"bytes":5520,"referer":"https://www.nationalportals.com/grow/transform"}"#;
    const CLEAN_LOG: &str = r#"{"host":"154.89.54.124","user-identifier":"mckenzie1244","datetime":"05/Oct/2024:16:25:26 +0000","method":"HEAD","request":"/leading-edge/systems","protocol":"HTTP/1.1","status":304,"bytes":5520,"referer":"https://www.nationalportals.com/grow/transform"}"#;

    fn constant_target(value: &'static str) -> BoxedStringGetter<()> {
        StandardStringGetter::new(move |_: &()| Ok(Value::String(value.to_string()))).boxed()
    }

    #[test]
    fn test_unquote_empty_string() {
        let func = string_replace_all_func(constant_target(""));
        assert_eq!(func(&()).unwrap(), Value::String(String::new()));
    }

    #[test]
    fn test_unquote_escaped_json_string() {
        let func = string_replace_all_func(constant_target(ESCAPED_LOG));
        assert_eq!(func(&()).unwrap(), Value::String(UNESCAPED_LOG.to_string()));
    }

    #[test]
    fn test_json_string_no_op_unquote() {
        let func = string_replace_all_func(constant_target(CLEAN_LOG));
        assert_eq!(func(&()).unwrap(), Value::String(CLEAN_LOG.to_string()));
    }

    #[test]
    fn test_escaped_backslash_quote_collapses_once() {
        // The input holds an escaped backslash before the quote; only the
        // final two characters form a match and the output is not rescanned.
        let func = string_replace_all_func(constant_target(r#"\\""#));
        assert_eq!(func(&()).unwrap(), Value::String(r#"\""#.to_string()));
    }

    #[test]
    fn test_reads_target_from_record_context() {
        let target =
            StandardStringGetter::new(|record: &Value| Ok(record["body"].clone())).boxed();
        let func = string_replace_all_func(target);
        let record = json!({ "body": r#"{\"a\":1}"# });
        assert_eq!(func(&record).unwrap(), Value::String(r#"{"a":1}"#.to_string()));
    }

    #[test]
    fn test_getter_failure_is_wrapped() {
        let target = StandardStringGetter::new(|_: &()| Ok(Value::Bool(true))).boxed();
        let func = string_replace_all_func(target);
        let err = func(&()).unwrap_err();
        assert!(matches!(err, Error::Function { .. }));
        assert_eq!(
            err.to_string(),
            "Function 'string_replace_all' failed: failed to get value: Type mismatch in string getter: expected string, found boolean"
        );
    }

    #[test]
    fn test_factory_exposes_name_and_schema() {
        let factory = string_replace_all_factory::<()>();
        assert_eq!(factory.name(), "string_replace_all");
        assert_eq!(factory.arguments().len(), 1);
        assert_eq!(factory.arguments()[0].name, "target");
        assert_eq!(factory.arguments()[0].kind, ArgumentKind::StringGetter);
    }

    #[test]
    fn test_create_builds_runnable_function() {
        let factory = string_replace_all_factory::<()>();
        let fctx = FunctionContext::new("string_replace_all");
        let args = StringReplaceAllArguments {
            target: constant_target(ESCAPED_LOG),
        };
        let func = factory.create_function(&fctx, Box::new(args)).unwrap();
        assert_eq!(func(&()).unwrap(), Value::String(UNESCAPED_LOG.to_string()));
    }

    #[test]
    fn test_create_rejects_foreign_arguments() {
        let factory = string_replace_all_factory::<()>();
        let fctx = FunctionContext::new("string_replace_all");
        let err = factory
            .create_function(&fctx, Box::new(42_u32))
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArguments { .. }));
        assert!(err.to_string().contains("StringReplaceAllArguments"));
    }
}

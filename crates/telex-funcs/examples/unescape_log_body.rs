// Unescape an access-log body carried as an escaped JSON string
// Usage: cargo run --example unescape_log_body

use serde_json::{json, Value};
use telex_core::{FunctionRegistry, StandardStringGetter};
use telex_funcs::{factories, StringReplaceAllArguments};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = FunctionRegistry::with_factories(factories::<Value>())?;

    // Read the body field of whichever record the function runs against
    let args = StringReplaceAllArguments {
        target: StandardStringGetter::new(|record: &Value| Ok(record["body"].clone())).boxed(),
    };
    let unescape = registry.create("string_replace_all", Box::new(args))?;

    let records = vec![
        json!({
            "resource": {"service.name": "edge-proxy"},
            "body": r#"{\"method\":\"HEAD\",\"request\":\"/leading-edge/systems\",\"status\":201}"#,
        }),
        json!({
            "resource": {"service.name": "edge-proxy"},
            "body": r#"{"method":"GET","request":"/health","status":304}"#,
        }),
    ];

    for record in &records {
        let rewritten = unescape(record)?;
        println!("before: {}", record["body"]);
        println!("after:  {}", rewritten);
        println!();
    }

    Ok(())
}

//! Function plugins for the telex expression layer
//!
//! Each module contributes one factory; [`factories`] collects the full set
//! so hosts can register everything in one call.
//!
//! # Quick Start
//!
//! ```
//! use serde_json::{json, Value};
//! use telex_core::{FunctionRegistry, StandardStringGetter};
//! use telex_funcs::{factories, StringReplaceAllArguments};
//!
//! # fn main() -> telex_core::Result<()> {
//! let registry = FunctionRegistry::with_factories(factories::<Value>())?;
//!
//! let args = StringReplaceAllArguments {
//!     target: StandardStringGetter::new(|record: &Value| Ok(record["body"].clone())).boxed(),
//! };
//! let unescape = registry.create("string_replace_all", Box::new(args))?;
//!
//! let record = json!({ "body": r#"{\"status\":201}"# });
//! assert_eq!(unescape(&record)?, json!(r#"{"status":201}"#));
//! # Ok(())
//! # }
//! ```

pub mod string_replace_all;

pub use string_replace_all::{string_replace_all_factory, StringReplaceAllArguments};

use telex_core::FunctionFactory;

/// All function factories shipped by this crate
pub fn factories<K: 'static>() -> Vec<FunctionFactory<K>> {
    vec![string_replace_all_factory::<K>()]
}

//! Telex Core - seams for the telex expression-function layer
//!
//! This crate provides the host-side plumbing that expression functions
//! plug into when transforming telemetry records: the getter abstraction
//! for reading values out of a record context, the factory mechanism that
//! binds a function name to its argument schema and execution logic, and
//! the registry hosts resolve function names through.
//!
//! # Main Components
//!
//! - **Error Handling**: Error types using `thiserror` and `anyhow`
//! - **Getters**: Context-bound accessors yielding typed values
//! - **Factories**: Name + argument schema + creation logic per function
//! - **Registry**: Name-indexed factory lookup and function creation
//!
//! # Example
//!
//! ```
//! use serde_json::{json, Value};
//! use telex_core::{
//!     ArgumentKind, ArgumentSpec, Arguments, ExprFunc, FunctionContext,
//!     FunctionFactory, FunctionRegistry, Result,
//! };
//!
//! const PASSTHROUGH_ARGUMENTS: &[ArgumentSpec] = &[];
//!
//! fn create_passthrough(_fctx: &FunctionContext, _args: Arguments) -> Result<ExprFunc<Value>> {
//!     Ok(Box::new(|tctx: &Value| Ok(tctx.clone())))
//! }
//!
//! fn example() -> Result<()> {
//!     let mut registry = FunctionRegistry::new();
//!     registry.register(FunctionFactory::new(
//!         "passthrough",
//!         PASSTHROUGH_ARGUMENTS,
//!         create_passthrough,
//!     ))?;
//!
//!     let func = registry.create("passthrough", Box::new(()))?;
//!     let record = json!({ "body": "hello" });
//!     assert_eq!(func(&record)?, record);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod factory;
pub mod getter;
pub mod registry;
pub mod value;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use factory::{
    ArgumentKind, ArgumentSpec, Arguments, CreateFunction, ExprFunc, FunctionContext,
    FunctionFactory,
};
pub use getter::{BoxedStringGetter, Getter, StandardStringGetter, StringGetter};
pub use registry::FunctionRegistry;
pub use value::ValueKind;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Function factories and creation-time plumbing
//!
//! A factory binds a function name to its argument schema and execution
//! logic. The host resolves a factory by name, hands it an arguments
//! payload, and receives back a compiled expression function bound to
//! those arguments.
//!
//! Copyright (c) 2025 Telex Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::fmt;

/// Compiled expression function, ready to run against a transform context
pub type ExprFunc<K> = Box<dyn Fn(&K) -> Result<Value> + Send + Sync>;

/// Type-erased arguments payload handed to a factory
///
/// Each function defines a concrete arguments struct holding the getters
/// it resolves its inputs through; its factory downcasts at creation time
/// and rejects payloads of the wrong type.
pub type Arguments = Box<dyn Any + Send + Sync>;

/// Creation function binding an arguments payload into an expression function
pub type CreateFunction<K> = fn(&FunctionContext, Arguments) -> Result<ExprFunc<K>>;

/// Kinds of argument slots a function can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArgumentKind {
    /// A string-typed accessor bound to the record context
    StringGetter,
}

/// One declared argument slot in a function's schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgumentSpec {
    /// Slot name as written in statements
    pub name: &'static str,
    /// Kind of value the slot accepts
    pub kind: ArgumentKind,
}

/// Creation-time context handed to factories
#[derive(Debug, Clone, Default)]
pub struct FunctionContext {
    name: String,
}

impl FunctionContext {
    /// Create a context for the given invocation name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name under which the function was invoked
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A named function factory
///
/// Binds a function name to its declared argument schema and its creation
/// logic.
pub struct FunctionFactory<K> {
    name: &'static str,
    arguments: &'static [ArgumentSpec],
    create: CreateFunction<K>,
}

impl<K> FunctionFactory<K> {
    /// Create a new factory
    pub fn new(
        name: &'static str,
        arguments: &'static [ArgumentSpec],
        create: CreateFunction<K>,
    ) -> Self {
        Self {
            name,
            arguments,
            create,
        }
    }

    /// The function name this factory is registered under
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared argument schema
    pub fn arguments(&self) -> &'static [ArgumentSpec] {
        self.arguments
    }

    /// Create the expression function from an arguments payload
    pub fn create_function(&self, fctx: &FunctionContext, args: Arguments) -> Result<ExprFunc<K>> {
        (self.create)(fctx, args)
    }
}

impl<K> Clone for FunctionFactory<K> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            arguments: self.arguments,
            create: self.create,
        }
    }
}

impl<K> fmt::Debug for FunctionFactory<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionFactory")
            .field("name", &self.name)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

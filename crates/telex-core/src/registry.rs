//! Name-indexed registry of function factories
//!
//! Hosts assemble a registry from the factory sets they ship, then create
//! expression functions by name when statements reference them.
//!
//! Copyright (c) 2025 Telex Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::factory::{Arguments, ExprFunc, FunctionContext, FunctionFactory};
use std::collections::HashMap;
use std::fmt;

/// Registry mapping function names to their factories
pub struct FunctionRegistry<K> {
    factories: HashMap<&'static str, FunctionFactory<K>>,
}

impl<K> FunctionRegistry<K> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry from a factory collection
    ///
    /// Fails on the first duplicate name.
    pub fn with_factories<I>(factories: I) -> Result<Self>
    where
        I: IntoIterator<Item = FunctionFactory<K>>,
    {
        let mut registry = Self::new();
        for factory in factories {
            registry.register(factory)?;
        }
        Ok(registry)
    }

    /// Register a factory under its name
    ///
    /// Duplicate names are rejected so a later registration can never
    /// silently shadow an earlier one.
    pub fn register(&mut self, factory: FunctionFactory<K>) -> Result<()> {
        let name = factory.name();
        if self.factories.contains_key(name) {
            return Err(Error::registry(format!(
                "function '{}' is already registered",
                name
            )));
        }
        log::debug!("Registered function factory '{}'", name);
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Look up a factory by name
    pub fn factory(&self, name: &str) -> Option<&FunctionFactory<K>> {
        self.factories.get(name)
    }

    /// Create an expression function by name
    ///
    /// Resolves the factory, builds a creation context carrying the
    /// invocation name, and delegates to the factory.
    pub fn create(&self, name: &str, args: Arguments) -> Result<ExprFunc<K>> {
        let factory = self.factories.get(name).ok_or_else(|| {
            Error::registry(format!("no function named '{}' is registered", name))
        })?;
        let fctx = FunctionContext::new(name);
        factory.create_function(&fctx, args)
    }

    /// All registered function names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry holds no factories
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<K> Default for FunctionRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for FunctionRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("names", &self.names())
            .finish()
    }
}

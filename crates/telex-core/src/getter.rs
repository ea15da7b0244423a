//! Context-bound accessors for record values
//!
//! A getter is the read seam between an expression function and whatever
//! record context the host is processing: given a context, it yields a
//! dynamic value or an error. String-typed functions resolve their inputs
//! through [`StringGetter`], which enforces that the value is a string.
//!
//! Copyright (c) 2025 Telex Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::value::ValueKind;
use serde_json::Value;
use std::fmt;

/// Yields a dynamic value from a transform context
pub trait Getter<K> {
    /// Resolve the value against the given context
    fn get(&self, tctx: &K) -> Result<Value>;
}

impl<K, F> Getter<K> for F
where
    F: Fn(&K) -> Result<Value>,
{
    fn get(&self, tctx: &K) -> Result<Value> {
        self(tctx)
    }
}

/// Yields a string from a transform context, failing on any other kind
pub trait StringGetter<K> {
    /// Resolve the string value against the given context
    fn get(&self, tctx: &K) -> Result<String>;
}

/// Boxed string getter, as carried inside function argument structs
pub type BoxedStringGetter<K> = Box<dyn StringGetter<K> + Send + Sync>;

/// Standard string getter over any raw getter
///
/// Delegates to the wrapped getter and returns the payload when the
/// resolved value is a string. Any other kind, including null, is a
/// type-mismatch error; raw getter failures propagate unchanged.
pub struct StandardStringGetter<K> {
    getter: Box<dyn Getter<K> + Send + Sync>,
}

impl<K> StandardStringGetter<K> {
    /// Wrap a raw getter
    pub fn new<G>(getter: G) -> Self
    where
        G: Getter<K> + Send + Sync + 'static,
    {
        Self {
            getter: Box::new(getter),
        }
    }

    /// Box this getter for use in an argument struct
    pub fn boxed(self) -> BoxedStringGetter<K>
    where
        K: 'static,
    {
        Box::new(self)
    }
}

impl<K> StringGetter<K> for StandardStringGetter<K> {
    fn get(&self, tctx: &K) -> Result<String> {
        match self.getter.get(tctx)? {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch(
                "string",
                ValueKind::of(&other).name(),
                "string getter",
            )),
        }
    }
}

impl<K> fmt::Debug for StandardStringGetter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardStringGetter").finish_non_exhaustive()
    }
}

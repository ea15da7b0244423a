//! Error types for the telex core library
//!
//! This module defines the error handling system shared by the expression
//! seams and the function plugins, using thiserror for ergonomic error
//! definitions and anyhow for flexible wrapped sources.

use thiserror::Error;

/// Main error type for telex operations
#[derive(Error, Debug)]
pub enum Error {
    /// A named function failed while being created or evaluated
    #[error("Function '{function}' failed: {message}")]
    Function {
        function: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A getter produced a value of an unexpected type
    #[error("Type mismatch in {context}: expected {expected}, found {found}")]
    TypeMismatch {
        expected: String,
        found: String,
        context: String,
    },

    /// A factory was handed arguments of the wrong concrete type
    #[error("Invalid arguments for function '{function}': {message}")]
    InvalidArguments {
        function: String,
        message: String,
    },

    /// Registration or lookup failure in the function registry
    #[error("Registry error: {message}")]
    Registry {
        message: String,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a function error wrapping an underlying failure
    pub fn function(
        function: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Function {
            function: function.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        expected: impl Into<String>,
        found: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
            context: context.into(),
        }
    }

    /// Create an invalid arguments error
    pub fn invalid_arguments(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            function: function.into(),
            message: message.into(),
        }
    }

    /// Create a registry error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}

//! Error types for template comparisons and function calls.

use thiserror::Error;

/// Errors raised by the comparison functions.
///
/// Each one aborts the conditional being evaluated; the paired boolean is
/// never meaningful when an error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    /// A value has no comparison kind, or its kind does not support the
    /// requested operation (ordering booleans, for example).
    #[error("invalid type for comparison")]
    InvalidType,

    /// Two values of different kinds were compared.
    #[error("incompatible types for comparison")]
    Incompatible,

    /// Equality was requested without any candidate.
    #[error("missing argument for comparison")]
    MissingArgument,
}

/// Errors raised when calling a function through a [`FuncMap`](crate::functions::FuncMap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuncError {
    /// The comparison itself failed.
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// No function is registered under this name.
    #[error("function \"{0}\" not defined")]
    UnknownFunction(String),

    /// The function was called with the wrong number of arguments.
    #[error("wrong number of args for {name}: want {expected} got {got}")]
    ArgumentCount {
        /// Function name.
        name: String,
        /// Human readable expectation (e.g. "2" or "at least 1").
        expected: String,
        /// Number of arguments supplied.
        got: usize,
    },

    /// An argument had the wrong shape for the function.
    #[error("wrong type for argument {index} of {name}: expected {expected}")]
    ArgumentType {
        /// Function name.
        name: String,
        /// Zero-based argument position.
        index: usize,
        /// Expected argument shape.
        expected: &'static str,
    },
}

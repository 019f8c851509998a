#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<ListError> for GenericError {
    fn from(value: ListError) -> Self {
        Self(value.to_string())
    }
}

/// Specifies why a list algorithm refused its input.
///
/// Empty lists and "not found" answers (e.g. `k` larger than the list) are not errors: they are
/// reported as `Ok(None)` by the corresponding functions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// A traversal which requires a terminated chain made more steps than the arena has nodes.
    CyclicInput {
        /// Steps made before the guard stopped the traversal.
        steps: usize,
    },

    /// Recursive algorithm would exceed the allowed call depth.
    RecursionLimit {
        /// Required depth (list length).
        depth: usize,
        /// Configured limit.
        limit: usize,
    },

    /// A node value lies outside of `0..value_count`.
    ValueOutOfRange {
        /// Offending value.
        value: i32,
        /// Exclusive upper bound of allowed values.
        value_count: usize,
    },

    /// Requested value alphabet is too large to allocate one bucket per value.
    ValueCountLimit {
        /// Requested alphabet size.
        value_count: usize,
        /// Largest accepted alphabet size.
        limit: usize,
    },

    /// A position is beyond the end of the list.
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Actual list length.
        length: usize,
    },
}

/// A type alias for result type with `ListError`.
pub type ListResult<T> = Result<T, ListError>;

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::CyclicInput { steps } => {
                write!(f, "list is cyclic: traversal stopped after {steps} steps")
            }
            ListError::RecursionLimit { depth, limit } => {
                write!(f, "recursion depth {depth} exceeds the limit of {limit}")
            }
            ListError::ValueOutOfRange { value, value_count } => {
                write!(f, "value {value} is outside of expected range [0, {value_count})")
            }
            ListError::ValueCountLimit { value_count, limit } => {
                write!(f, "value count {value_count} exceeds the limit of {limit}")
            }
            ListError::IndexOutOfBounds { index, length } => {
                write!(f, "index {index} is out of bounds for list of length {length}")
            }
        }
    }
}

impl std::error::Error for ListError {}

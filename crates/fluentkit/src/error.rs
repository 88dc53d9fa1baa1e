use core::fmt;

use thiserror::Error;

/// Result alias used by every fallible operation in this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The semantic type of a checked value, used to phrase null and undefined
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A string argument or held string.
    String,
    /// A numeric argument.
    Number,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => f.write_str("String"),
            ValueKind::Number => f.write_str("Number"),
        }
    }
}

/// Which side of a bounded extraction was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    /// The inclusive start index.
    Start,
    /// The exclusive end index.
    End,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundKind::Start => f.write_str("start"),
            BoundKind::End => f.write_str("end"),
        }
    }
}

/// Every way a builder, comparator or evaluator call can be rejected.
///
/// Failures are raised at the point of violation and never recovered
/// internally; the caller decides whether to continue.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A required value was explicitly null.
    #[error("{0} value cannot be null")]
    Null(ValueKind),
    /// A required value was not supplied.
    #[error("{0} value cannot be undefined")]
    Undefined(ValueKind),
    /// A string that must be non-empty was empty.
    #[error("string value{} cannot be empty", describe_argument(.argument))]
    EmptyString {
        /// Which argument was empty, when the call takes more than one.
        argument: Option<&'static str>,
    },
    /// Input to the evaluator fell outside its grammar.
    #[error("value is not a valid math expression: {0:?}")]
    InvalidExpression(String),
    /// A slice or substring bound was negative.
    #[error("{0} cannot be negative")]
    NegativeBound(BoundKind),
    /// A slice or substring end came before its start.
    #[error("end ({end}) cannot be less than start ({start})")]
    BoundOrder {
        /// The requested start index.
        start: i64,
        /// The requested end index.
        end: i64,
    },
    /// A repeat count was negative.
    #[error("count cannot be negative, got {0}")]
    NegativeCount(i64),
    /// A split limit was negative.
    #[error("limit cannot be negative, got {0}")]
    NegativeLimit(i64),
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A literal could not be compiled into a regex.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// Repeating the value `count` times would not fit in memory.
    #[error("repeating {count} times overflows the maximum string length")]
    LengthOverflow {
        /// The requested repeat count.
        count: i64,
    },
}

#[cfg(test)]
impl Error {
    pub(crate) fn empty(argument: &'static str) -> Self {
        Error::EmptyString {
            argument: Some(argument),
        }
    }
}

#[allow(clippy::ref_option)]
fn describe_argument(argument: &Option<&'static str>) -> String {
    argument.map_or_else(String::new, |name| format!(" \"{name}\""))
}

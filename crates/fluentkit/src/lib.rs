//! Fluent, validated builders over string and number values.
//!
//! The crate centres on two owned value holders, [`StringBuilder`] and
//! [`NumberBuilder`], whose operations validate their arguments before acting
//! and either return a new value or `&mut Self` for chaining. Around them sit
//! a stateless string [`compare`] module, the safe two-operand arithmetic
//! evaluator in [`expression`] and a few helpers.
//!
//! ```rust
//! use fluentkit::{Case, StringBuilder};
//!
//! let mut greeting = StringBuilder::new("world");
//! greeting.prepend("hello, ")?.append("!")?.upper_case_first()?;
//! assert_eq!(greeting.as_str(), "Hello, world!");
//! assert!(greeting.starts_with("HELLO", Case::Insensitive, None)?);
//! assert_eq!(greeting.math("6*7")?, 42.0);
//! # Ok::<(), fluentkit::Error>(())
//! ```
//!
//! Arguments that a loosely typed host might leave out are taken as
//! `impl Into<Nullable<T>>`: plain values just work, while [`Nullable::Null`]
//! and [`Nullable::Undefined`] are rejected with the matching [`Error`].

mod builder;
pub mod compare;
mod error;
pub mod expression;
mod nullable;
mod number;
mod options;
mod string;
mod util;
pub mod validate;

#[cfg(test)]
mod tests;

pub use builder::Builder;
pub use error::{BoundKind, Error, Result, ValueKind};
pub use expression::{Expression, Operator, evaluate};
pub use nullable::Nullable;
pub use number::NumberBuilder;
pub use options::Case;
pub use string::{ESCAPE_SEQUENCES, Pattern, StringBuilder};
pub use util::{ExitStatus, ParseExitStatusError, print_lines, render_lines, uppercase_first};

/// Re-exported so callers can build [`Pattern::Regex`] values.
pub use regex::Regex;

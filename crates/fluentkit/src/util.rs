//! Free-standing helpers around the builders.
//!
//! None of these perform process-level side effects on their own: rendering
//! produces a string, printing writes to a caller-provided sink, and
//! [`ExitStatus`] only maps an outcome to a code for the host to act on.

use core::{fmt, str::FromStr};
use std::{io, process::ExitCode};

use thiserror::Error;

use crate::{Nullable, StringBuilder, error::Result, validate::check_str};

/// Uppercases the first character of `value`, leaving the rest untouched.
///
/// # Errors
///
/// `value` must be present and non-empty.
///
/// # Examples
///
/// ```rust
/// assert_eq!(fluentkit::uppercase_first("hello").unwrap(), "Hello");
/// ```
pub fn uppercase_first<'a>(value: impl Into<Nullable<&'a str>>) -> Result<String> {
    let value = check_str(value)?;
    let mut chars = value.chars();
    let mut out = String::with_capacity(value.len());
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    out.push_str(chars.as_str());
    Ok(out)
}

/// Renders each value on its own line, in order, as one string.
pub fn render_lines<T: fmt::Display>(values: impl IntoIterator<Item = T>) -> String {
    let mut out = StringBuilder::default();
    for value in values {
        // Writing into a builder cannot fail.
        let _ = fmt::Write::write_fmt(&mut out, format_args!("{value}\n"));
    }
    out.into_string()
}

/// Hands the [`render_lines`] output to `sink` in a single write.
///
/// # Errors
///
/// Whatever the sink reports.
pub fn print_lines<W, T>(sink: &mut W, values: impl IntoIterator<Item = T>) -> io::Result<()>
where
    W: io::Write + ?Sized,
    T: fmt::Display,
{
    sink.write_all(render_lines(values).as_bytes())?;
    sink.flush()
}

/// How a host program should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExitStatus {
    /// Exit code 0.
    Success,
    /// Exit code 1.
    Failure,
    /// Exit code 2.
    Error,
}

impl ExitStatus {
    /// The conventional process exit code: 0, 1 or 2.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }

    /// The lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ExitStatus::Success => "success",
            ExitStatus::Failure => "failure",
            ExitStatus::Error => "error",
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`ExitStatus`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown exit status {0:?}, expected success, failure or error")]
pub struct ParseExitStatusError(String);

impl FromStr for ExitStatus {
    type Err = ParseExitStatusError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "success" => Ok(ExitStatus::Success),
            "failure" => Ok(ExitStatus::Failure),
            "error" => Ok(ExitStatus::Error),
            other => Err(ParseExitStatusError(other.to_owned())),
        }
    }
}

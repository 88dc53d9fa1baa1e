//! Validation primitives.
//!
//! Every other component funnels its argument checks through these guards so
//! that failures are reported the same way everywhere: null and undefined
//! first, emptiness second.

use crate::{
    Nullable,
    error::{Error, Result, ValueKind},
};

/// Rejects a null or undefined value, yielding the present one.
///
/// # Errors
///
/// [`Error::Null`] or [`Error::Undefined`], phrased with `kind`.
pub fn check<T>(value: Nullable<T>, kind: ValueKind) -> Result<T> {
    match value {
        Nullable::Present(value) => Ok(value),
        Nullable::Null => Err(Error::Null(kind)),
        Nullable::Undefined => Err(Error::Undefined(kind)),
    }
}

/// [`check`] for strings, additionally rejecting the empty string.
///
/// # Errors
///
/// [`Error::Null`], [`Error::Undefined`] or [`Error::EmptyString`].
pub fn check_str<'a>(value: impl Into<Nullable<&'a str>>) -> Result<&'a str> {
    let value = check(value.into(), ValueKind::String)?;
    if value.is_empty() {
        return Err(Error::EmptyString { argument: None });
    }
    Ok(value)
}

/// Rejects an empty string, naming `argument` in the failure when given.
///
/// # Errors
///
/// [`Error::EmptyString`].
pub fn check_non_empty(value: &str, argument: Option<&'static str>) -> Result<()> {
    if value.is_empty() {
        Err(Error::EmptyString { argument })
    } else {
        Ok(())
    }
}

/// Converts a signed count into a `usize`, mapping negatives through `err`.
pub(crate) fn non_negative(value: i64, err: impl FnOnce(i64) -> Error) -> Result<usize> {
    usize::try_from(value).map_err(|_| err(value))
}

//! Stateless pairwise string comparison.
//!
//! Both operands are validated (not null, not undefined, not empty) before
//! anything is compared. An empty operand is reported by name, `a` taking
//! precedence when both are empty.

use core::cmp::Ordering;

use crate::{
    Case, Nullable,
    error::{Result, ValueKind},
    validate::{check, check_non_empty},
};

/// Orders `a` against `b` after folding both according to `case`.
///
/// # Errors
///
/// [`Error::Null`](crate::Error::Null),
/// [`Error::Undefined`](crate::Error::Undefined) or
/// [`Error::EmptyString`](crate::Error::EmptyString) naming `a` or `b`.
pub fn ordering<'a, 'b>(
    a: impl Into<Nullable<&'a str>>,
    b: impl Into<Nullable<&'b str>>,
    case: Case,
) -> Result<Ordering> {
    let a = check(a.into(), ValueKind::String)?;
    let b = check(b.into(), ValueKind::String)?;
    check_non_empty(a, Some("a"))?;
    check_non_empty(b, Some("b"))?;

    Ok(case.fold(a).cmp(&case.fold(b)))
}

/// Whether `a` equals `b`.
///
/// # Errors
///
/// See [`ordering`].
pub fn equal<'a, 'b>(
    a: impl Into<Nullable<&'a str>>,
    b: impl Into<Nullable<&'b str>>,
    case: Case,
) -> Result<bool> {
    ordering(a, b, case).map(Ordering::is_eq)
}

/// Whether `a` sorts after `b`.
///
/// # Errors
///
/// See [`ordering`].
pub fn greater<'a, 'b>(
    a: impl Into<Nullable<&'a str>>,
    b: impl Into<Nullable<&'b str>>,
    case: Case,
) -> Result<bool> {
    ordering(a, b, case).map(Ordering::is_gt)
}

/// Whether `a` sorts before `b`.
///
/// # Errors
///
/// See [`ordering`].
pub fn less<'a, 'b>(
    a: impl Into<Nullable<&'a str>>,
    b: impl Into<Nullable<&'b str>>,
    case: Case,
) -> Result<bool> {
    ordering(a, b, case).map(Ordering::is_lt)
}

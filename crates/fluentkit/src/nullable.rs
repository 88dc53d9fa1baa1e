//! An input slot that may be explicitly null or undefined.
//!
//! Hosts that hand values across a loosely typed boundary can pass "nothing"
//! in two different ways. [`Nullable`] keeps that distinction so the
//! validation layer can report which one it saw. Plain values convert into
//! [`Nullable::Present`] through [`From`], so callers that always have a value
//! never spell the wrapper out.

/// A value that is either present, or missing as `Null` or `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nullable<T> {
    /// The host passed an explicit null.
    Null,
    /// The host passed nothing at all.
    #[default]
    Undefined,
    /// A real value.
    Present(T),
}

impl<T> Nullable<T> {
    /// Maps `None` to [`Nullable::Null`] and `Some(v)` to
    /// [`Nullable::Present`].
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Nullable::Null, Nullable::Present)
    }

    /// Returns the present value, if any.
    pub fn present(self) -> Option<T> {
        match self {
            Nullable::Present(value) => Some(value),
            Nullable::Null | Nullable::Undefined => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Present(value)
    }
}

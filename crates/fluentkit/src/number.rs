//! The number builder.

use core::fmt;

use crate::{
    Builder, Nullable,
    error::{Error, Result, ValueKind},
    expression::Operator,
    validate::check,
};

/// A mutable number with chainable arithmetic and comparisons against the
/// held value.
///
/// # Examples
///
/// ```rust
/// use fluentkit::NumberBuilder;
///
/// let mut n = NumberBuilder::new(10.0);
/// n.add(5.0)?.times(2.0)?.divide(3.0)?;
/// assert_eq!(n.value(), 10.0);
/// assert!(n.greater(9.5)?);
/// # Ok::<(), fluentkit::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NumberBuilder {
    value: f64,
}

impl NumberBuilder {
    /// Creates a builder holding `value`.
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Creates a builder from a value that may be missing.
    ///
    /// # Errors
    ///
    /// [`Error::Null`] or [`Error::Undefined`].
    pub fn try_new(value: Nullable<f64>) -> Result<Self> {
        check(value, ValueKind::Number).map(Self::new)
    }

    /// The held value.
    pub fn value(&self) -> f64 {
        self.value
    }

    fn apply(&mut self, op: Operator, value: Nullable<f64>) -> Result<&mut Self> {
        let operand = check(value, ValueKind::Number)?;
        self.value = op.apply(self.value, operand)?;
        log::trace!("{op} {operand} -> {}", self.value);
        Ok(self)
    }

    /// Adds `value` to the held number.
    ///
    /// # Errors
    ///
    /// `value` must be present.
    pub fn add(&mut self, value: impl Into<Nullable<f64>>) -> Result<&mut Self> {
        self.apply(Operator::Add, value.into())
    }

    /// Subtracts `value` from the held number.
    ///
    /// # Errors
    ///
    /// `value` must be present.
    pub fn minus(&mut self, value: impl Into<Nullable<f64>>) -> Result<&mut Self> {
        self.apply(Operator::Subtract, value.into())
    }

    /// Multiplies the held number by `value`.
    ///
    /// # Errors
    ///
    /// `value` must be present.
    pub fn times(&mut self, value: impl Into<Nullable<f64>>) -> Result<&mut Self> {
        self.apply(Operator::Multiply, value.into())
    }

    /// Divides the held number by `value`.
    ///
    /// # Errors
    ///
    /// `value` must be present; [`Error::DivisionByZero`] when it is zero. The
    /// held number is left unchanged on failure.
    pub fn divide(&mut self, value: impl Into<Nullable<f64>>) -> Result<&mut Self> {
        self.apply(Operator::Divide, value.into())
    }

    /// Resets the held number to zero.
    pub fn clear(&mut self) -> &mut Self {
        self.value = 0.0;
        self
    }

    /// Whether the held number equals `value`.
    ///
    /// # Errors
    ///
    /// `value` must be present.
    #[allow(clippy::float_cmp)]
    pub fn equal(&self, value: impl Into<Nullable<f64>>) -> Result<bool> {
        let value = check(value.into(), ValueKind::Number)?;
        Ok(self.value == value)
    }

    /// Whether the held number is greater than `value`.
    ///
    /// # Errors
    ///
    /// `value` must be present.
    pub fn greater(&self, value: impl Into<Nullable<f64>>) -> Result<bool> {
        let value = check(value.into(), ValueKind::Number)?;
        Ok(self.value > value)
    }

    /// Whether the held number is less than `value`.
    ///
    /// # Errors
    ///
    /// `value` must be present.
    pub fn less(&self, value: impl Into<Nullable<f64>>) -> Result<bool> {
        let value = check(value.into(), ValueKind::Number)?;
        Ok(self.value < value)
    }
}

impl Builder for NumberBuilder {
    type Value = f64;

    fn default_value(&self) -> &f64 {
        &self.value
    }

    fn type_of(&self) -> &'static str {
        "number"
    }
}

impl fmt::Display for NumberBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<f64> for NumberBuilder {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<NumberBuilder> for f64 {
    fn from(builder: NumberBuilder) -> Self {
        builder.value
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn arithmetic_chains() {
        let mut n = NumberBuilder::new(1.0);
        n.add(2.0).unwrap().times(4.0).unwrap().minus(2.0).unwrap();
        assert_eq!(n.value(), 10.0);
        n.divide(4.0).unwrap();
        assert_eq!(n.value(), 2.5);
    }

    #[test]
    fn divide_by_zero_keeps_the_value() {
        let mut n = NumberBuilder::new(8.0);
        assert_eq!(n.divide(0.0).unwrap_err(), Error::DivisionByZero);
        assert_eq!(n.divide(-0.0).unwrap_err(), Error::DivisionByZero);
        assert_eq!(n.value(), 8.0);
    }

    #[test]
    fn missing_operands_are_rejected() {
        let mut n = NumberBuilder::new(1.0);
        assert_eq!(
            n.add(Nullable::<f64>::Null).unwrap_err(),
            Error::Null(ValueKind::Number)
        );
        assert_eq!(
            n.times(Nullable::<f64>::Undefined).unwrap_err(),
            Error::Undefined(ValueKind::Number)
        );
        assert_eq!(
            n.equal(Nullable::<f64>::from_option(None)),
            Err(Error::Null(ValueKind::Number))
        );
        assert_eq!(n.value(), 1.0);
    }

    #[test]
    fn clear_resets_to_zero() {
        let mut n = NumberBuilder::new(42.0);
        assert_eq!(n.clear().value(), 0.0);
    }

    #[test]
    fn comparisons_against_the_held_value() {
        let n = NumberBuilder::new(5.0);
        assert_eq!(n.equal(5.0), Ok(true));
        assert_eq!(n.greater(4.0), Ok(true));
        assert_eq!(n.greater(5.0), Ok(false));
        assert_eq!(n.less(6.0), Ok(true));
        assert_eq!(n.less(f64::NAN), Ok(false));
    }

    #[test]
    fn reports_its_type() {
        let n = NumberBuilder::try_new(Nullable::Present(3.0)).unwrap();
        assert_eq!(n.type_of(), "number");
        assert_eq!(*n.default_value(), 3.0);
        assert_eq!(n.to_string(), "3");
        assert_eq!(
            NumberBuilder::try_new(Nullable::Undefined),
            Err(Error::Undefined(ValueKind::Number))
        );
    }

    #[quickcheck]
    fn exactly_one_relation_for_finite_values(held: i32, other: i32) -> bool {
        let n = NumberBuilder::new(f64::from(held));
        let other = f64::from(other);
        let relations = [n.equal(other), n.greater(other), n.less(other)];
        relations.iter().filter(|r| **r == Ok(true)).count() == 1
    }
}

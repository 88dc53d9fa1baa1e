//! A safe evaluator for two-operand arithmetic.
//!
//! The accepted grammar is deliberately tiny:
//!
//! ```text
//! expression := digits? operator? digits
//! operator   := '+' | '-' | '*' | '/'
//! digits     := [0-9]+
//! ```
//!
//! There is no whitespace, no chaining, no parentheses and no identifiers.
//! Input is scanned into an [`Expression`] first and only a successfully
//! parsed `Expression` can be evaluated, so anything that is not plain
//! arithmetic is rejected before any computation happens.
//!
//! A missing left operand is read as a sign (`"-5"`, `"+5"`) and is rejected
//! for `*` and `/`.

use core::fmt;

use crate::{
    error::{Error, Result},
    validate::check_non_empty,
};

/// One of the four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Operator::Add),
            b'-' => Some(Operator::Subtract),
            b'*' => Some(Operator::Multiply),
            b'/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The operator as written in an expression.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Applies the operator.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when dividing by zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide if rhs == 0.0 => {
                log::debug!("refusing to divide {lhs} by zero");
                Err(Error::DivisionByZero)
            }
            Operator::Divide => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A validated arithmetic expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expression {
    /// A bare number such as `42`.
    Number(f64),
    /// A signed number such as `-5`. Only `Add` and `Subtract` appear here.
    Signed {
        /// The leading sign.
        sign: Operator,
        /// The unsigned magnitude.
        operand: f64,
    },
    /// Two operands and one operator, such as `10*2`.
    Binary {
        /// Left operand.
        lhs: f64,
        /// The operator between the operands.
        op: Operator,
        /// Right operand.
        rhs: f64,
    },
}

impl Expression {
    /// Scans `input` against the restricted grammar.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyString`] for empty input and [`Error::InvalidExpression`]
    /// for anything outside the grammar.
    pub fn parse(input: &str) -> Result<Self> {
        check_non_empty(input, None)?;

        let bytes = input.as_bytes();
        let lhs_end = digit_run(bytes, 0);
        if lhs_end == bytes.len() {
            return Ok(Expression::Number(operand(input, &input[..lhs_end])?));
        }

        let Some(op) = Operator::from_byte(bytes[lhs_end]) else {
            return Err(reject(input));
        };

        let rhs_start = lhs_end + 1;
        let rhs_end = digit_run(bytes, rhs_start);
        if rhs_end == rhs_start || rhs_end != bytes.len() {
            return Err(reject(input));
        }
        let rhs = operand(input, &input[rhs_start..])?;

        if lhs_end == 0 {
            return match op {
                Operator::Add | Operator::Subtract => Ok(Expression::Signed { sign: op, operand: rhs }),
                Operator::Multiply | Operator::Divide => Err(reject(input)),
            };
        }

        let lhs = operand(input, &input[..lhs_end])?;
        Ok(Expression::Binary { lhs, op, rhs })
    }

    /// Computes the value of the expression.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when the right operand of `/` is zero.
    pub fn evaluate(&self) -> Result<f64> {
        match *self {
            Expression::Number(value) => Ok(value),
            Expression::Signed { sign, operand } => sign.apply(0.0, operand),
            Expression::Binary { lhs, op, rhs } => op.apply(lhs, rhs),
        }
    }
}

/// Parses and evaluates `input` in one step.
///
/// # Errors
///
/// See [`Expression::parse`] and [`Expression::evaluate`].
///
/// # Examples
///
/// ```rust
/// assert_eq!(fluentkit::evaluate("2+3"), Ok(5.0));
/// assert!(fluentkit::evaluate("2+3*4").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64> {
    Expression::parse(input)?.evaluate()
}

fn digit_run(bytes: &[u8], start: usize) -> usize {
    let len = bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count());
    start + len
}

fn operand(input: &str, digits: &str) -> Result<f64> {
    digits.parse().map_err(|_| reject(input))
}

fn reject(input: &str) -> Error {
    log::debug!("rejected math expression {input:?}");
    Error::InvalidExpression(input.to_owned())
}

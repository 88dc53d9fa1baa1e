#![no_main]

use arbitrary::Arbitrary;
use fluentkit::{Error, Expression, evaluate};
use libfuzzer_sys::fuzz_target;

/// Either raw bytes or something shaped like an expression, so the fuzzer
/// spends time on both sides of the allow-list.
#[derive(Debug, Arbitrary)]
enum Input {
    Raw(String),
    Shaped { lhs: Option<u32>, op: u8, rhs: u32, tail: String },
}

impl Input {
    fn render(&self) -> String {
        match self {
            Input::Raw(s) => s.clone(),
            Input::Shaped { lhs, op, rhs, tail } => {
                let op = ['+', '-', '*', '/', '%', ' '][usize::from(*op) % 6];
                let lhs = lhs.map(|n| n.to_string()).unwrap_or_default();
                format!("{lhs}{op}{rhs}{tail}")
            }
        }
    }
}

/// Whether `s` is `digits* [+-*/]? digits+` and nothing else.
fn allowed(s: &str) -> bool {
    let ops = s.chars().filter(|c| matches!(c, '+' | '-' | '*' | '/')).count();
    let rest_digits = s.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/'));
    rest_digits && ops <= 1 && s.ends_with(|c: char| c.is_ascii_digit())
}

fuzz_target!(|input: Input| {
    let s = input.render();
    match evaluate(&s) {
        Ok(_) | Err(Error::DivisionByZero) => {
            assert!(allowed(&s), "accepted outside the allow-list: {s:?}");
            assert!(Expression::parse(&s).is_ok());
        }
        Err(Error::EmptyString { .. }) => assert!(s.is_empty()),
        Err(Error::InvalidExpression(rejected)) => assert_eq!(rejected, s),
        Err(other) => panic!("unexpected error {other:?} for {s:?}"),
    }
});

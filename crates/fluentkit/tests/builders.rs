#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use fluentkit::{
    BoundKind, Builder, Case, Error, ExitStatus, Nullable, NumberBuilder, Regex, StringBuilder,
    ValueKind, compare, evaluate, print_lines,
};
use rstest::rstest;

#[test]
fn fluent_string_session() -> Result<(), Error> {
    common::init_logging();

    let mut builder = StringBuilder::new("core");
    builder.append(".rs")?.prepend("src/")?;
    assert_eq!(builder.to_string(), "src/core.rs");
    assert!(builder.ends_with(".RS", Case::Insensitive, None)?);
    assert_eq!(builder.substring_after_last("/", Case::Sensitive)?, "core.rs");
    assert_eq!(builder.substring_before(".", Case::Sensitive)?, "src/core");
    assert_eq!(builder.split("/", None)?, vec!["src", "core.rs"]);
    assert_eq!(builder.type_of(), "string");

    builder.clear();
    assert_eq!(builder.len(), 0);
    Ok(())
}

#[rstest]
#[case("2+3", Ok(5.0))]
#[case("10*2", Ok(20.0))]
#[case("", Err(Error::EmptyString { argument: None }))]
#[case("2+3*4", Err(Error::InvalidExpression("2+3*4".into())))]
#[case("alert(1)", Err(Error::InvalidExpression("alert(1)".into())))]
#[case("8/0", Err(Error::DivisionByZero))]
fn evaluator_contract(#[case] input: &str, #[case] expected: Result<f64, Error>) {
    common::init_logging();
    assert_eq!(evaluate(input), expected);
    assert_eq!(StringBuilder::new("x").math(input), expected);
}

#[test]
fn extraction_edge_cases() {
    let builder = StringBuilder::new("ab");
    assert_eq!(builder.repeat(3).unwrap(), "ababab");
    assert_eq!(builder.repeat(-1), Err(Error::NegativeCount(-1)));

    let builder = StringBuilder::new("hello world");
    assert_eq!(
        builder.slice(5, Some(2)),
        Err(Error::BoundOrder { start: 5, end: 2 })
    );
    assert_eq!(
        builder.slice(-1, None),
        Err(Error::NegativeBound(BoundKind::Start))
    );
    assert_eq!(builder.split(" ", Some(-3)), Err(Error::NegativeLimit(-3)));
}

#[test]
fn comparator_is_case_aware() {
    assert_eq!(compare::equal("ABC", "abc", Case::Insensitive), Ok(true));
    assert_eq!(compare::equal("ABC", "abc", Case::Sensitive), Ok(false));
    assert_eq!(
        compare::greater("x", "", Case::Sensitive),
        Err(Error::EmptyString { argument: Some("b") })
    );
}

#[test]
fn regex_patterns_pass_through() -> Result<(), Error> {
    let builder = StringBuilder::new("2024-01-15");
    let digits = Regex::new(r"\d+")?;
    assert_eq!(builder.match_all(&digits), vec!["2024", "01", "15"]);
    assert_eq!(builder.replace_all(&digits, "#")?, "#-#-#");
    assert_eq!(builder.replace_all("-", "/")?, "2024/01/15");
    Ok(())
}

#[test]
fn number_builder_session() -> Result<(), Error> {
    let mut n = NumberBuilder::new(3.0);
    n.times(4.0)?.minus(2.0)?;
    assert!(n.equal(10.0)?);
    assert!(n.less(11.0)?);
    assert_eq!(n.divide(0.0).unwrap_err(), Error::DivisionByZero);
    assert_eq!(n.clear().value(), 0.0);
    assert_eq!(
        n.add(Nullable::<f64>::Undefined).unwrap_err(),
        Error::Undefined(ValueKind::Number)
    );
    Ok(())
}

#[test]
fn builders_share_the_builder_trait() {
    fn describe<B: Builder>(builder: &B) -> &'static str {
        builder.type_of()
    }

    assert_eq!(describe(&StringBuilder::new("s")), "string");
    assert_eq!(describe(&NumberBuilder::new(1.0)), "number");
}

#[test]
fn host_surfaces() {
    let mut out = Vec::new();
    print_lines(&mut out, ["first", "second"]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "first\nsecond\n");
    assert_eq!(ExitStatus::Error.code(), 2);
}

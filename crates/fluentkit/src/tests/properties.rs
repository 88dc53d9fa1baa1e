use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::arbitrary::NonEmpty;
use crate::{Case, Error, StringBuilder, compare};

fn tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: `append(x).prepend(y)` on `s` renders as `y + s + x`.
#[test]
fn append_then_prepend_composes() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: String, x: NonEmpty, y: NonEmpty) -> bool {
        let mut builder = StringBuilder::new(s.clone());
        let Ok(builder) = builder
            .append(x.0.as_str())
            .and_then(|b| b.prepend(y.0.as_str()))
        else {
            return false;
        };
        builder.to_string() == format!("{}{s}{}", y.0, x.0)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, NonEmpty, NonEmpty) -> bool);
}

/// Property: a fresh builder renders exactly its initial value.
#[quickcheck]
fn round_trips_before_mutation(s: String) -> bool {
    StringBuilder::new(s.clone()).to_string() == s
}

/// Property: after `clear` the builder reports the empty state.
#[quickcheck]
fn clear_reaches_the_empty_state(s: String) -> bool {
    let mut builder = StringBuilder::new(s);
    let builder = builder.clear();
    builder.is_empty()
        && builder.len() == 0
        && builder.trim().is_empty()
        && builder.repeat(3).is_ok_and(|r| r.is_empty())
}

/// Property: the self-comparator agrees with the stateless comparator.
#[quickcheck]
fn self_comparison_matches_pairwise(held: NonEmpty, other: NonEmpty, case: Case) -> bool {
    let builder = StringBuilder::new(held.0.as_str());
    builder.equal(other.0.as_str(), case) == compare::equal(held.0.as_str(), other.0.as_str(), case)
        && builder.greater(other.0.as_str(), case)
            == compare::greater(held.0.as_str(), other.0.as_str(), case)
        && builder.less(other.0.as_str(), case)
            == compare::less(held.0.as_str(), other.0.as_str(), case)
}

/// Property: `repeat(n)` has `n` times the characters.
#[quickcheck]
fn repeat_multiplies_length(s: NonEmpty, n: u8) -> bool {
    let builder = StringBuilder::new(s.0);
    builder
        .repeat(i64::from(n))
        .is_ok_and(|r| r.chars().count() == builder.len() * usize::from(n))
}

/// Property: negative bounds are rejected before anything is extracted.
#[quickcheck]
fn negative_bounds_never_extract(s: String, start: i64, end: i64) -> bool {
    let builder = StringBuilder::new(s);
    match builder.slice(start, Some(end)) {
        Ok(_) => start >= 0 && end >= start,
        Err(Error::NegativeBound(_)) => start < 0 || end < 0,
        Err(Error::BoundOrder { .. }) => start >= 0 && end >= 0 && end < start,
        Err(_) => false,
    }
}

/// Property: a case-insensitive search finds what the lowercased value holds.
#[quickcheck]
fn insensitive_includes_agrees_with_lowercase(s: String, needle: NonEmpty) -> bool {
    let builder = StringBuilder::new(s.as_str());
    let expected = s.to_lowercase().contains(&needle.0.to_lowercase());
    // Final sigma lowercases by context, and some chars grow when folded;
    // positions are only reported at source char boundaries.
    if s.contains(['Σ', 'ς'])
        || needle.0.contains(['Σ', 'ς'])
        || s.chars().any(|c| c.to_lowercase().count() > 1)
    {
        return true;
    }
    builder.includes(needle.0.as_str(), Case::Insensitive, None) == Ok(expected)
}

//! The string builder.
//!
//! [`StringBuilder`] owns a `String` and exposes chainable mutators
//! ([`append`](StringBuilder::append), [`prepend`](StringBuilder::prepend),
//! [`clear`](StringBuilder::clear)) alongside queries that leave the value
//! untouched. Every operation validates its arguments first.
//!
//! Positions and lengths are counted in `char`s, never bytes, so no query can
//! split a code point. Case-aware searches fold both the held value and the
//! needle; reported positions always refer to the unfolded value.

use core::{cmp::Ordering, fmt};
use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::{
    Builder, Case, Nullable,
    error::{BoundKind, Error, Result, ValueKind},
    expression,
    util::uppercase_first,
    validate::{check, check_non_empty, check_str, non_negative},
};

/// Symbolic names for the escape characters a builder can insert.
pub const ESCAPE_SEQUENCES: [(&str, char); 10] = [
    ("null", '\0'),
    ("single_quote", '\''),
    ("double_quote", '"'),
    ("back_slash", '\\'),
    ("new_line", '\n'),
    ("carriage_return", '\r'),
    ("vertical_tab", '\u{0B}'),
    ("tab", '\t'),
    ("backspace", '\u{08}'),
    ("form_feed", '\u{0C}'),
];

/// What to look for in search, replace and split operations.
///
/// A literal is matched verbatim. Plain `&str` and `&Regex` arguments convert
/// into a `Pattern`, so call sites read `builder.replace("a", "b")` or
/// `builder.replace(&re, "b")`.
#[derive(Debug, Clone, Copy)]
pub enum Pattern<'p> {
    /// Matched verbatim.
    Literal(&'p str),
    /// Matched as a regular expression.
    Regex(&'p Regex),
}

impl<'p> From<&'p str> for Pattern<'p> {
    fn from(literal: &'p str) -> Self {
        Pattern::Literal(literal)
    }
}

impl<'p> From<&'p String> for Pattern<'p> {
    fn from(literal: &'p String) -> Self {
        Pattern::Literal(literal)
    }
}

impl<'p> From<&'p Regex> for Pattern<'p> {
    fn from(regex: &'p Regex) -> Self {
        Pattern::Regex(regex)
    }
}

/// A mutable string with fluent, validated operations.
///
/// # Examples
///
/// ```rust
/// use fluentkit::StringBuilder;
///
/// let mut builder = StringBuilder::new("world");
/// builder.append("!")?.prepend("hello ")?;
/// assert_eq!(builder.to_string(), "hello world!");
/// # Ok::<(), fluentkit::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StringBuilder {
    value: String,
}

impl StringBuilder {
    /// Creates a builder holding `value`. The empty string is allowed.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Creates a builder from a value that may be missing.
    ///
    /// # Errors
    ///
    /// [`Error::Null`] or [`Error::Undefined`].
    pub fn try_new<S: Into<String>>(value: Nullable<S>) -> Result<Self> {
        check(value, ValueKind::String).map(Self::new)
    }

    // ── mutators ────────────────────────────────────────────────────────────

    /// Appends `value` to the end.
    ///
    /// # Errors
    ///
    /// `value` must be present and non-empty.
    pub fn append<'v>(&mut self, value: impl Into<Nullable<&'v str>>) -> Result<&mut Self> {
        let value = check_str(value)?;
        self.value.push_str(value);
        log::trace!("appended {} bytes", value.len());
        Ok(self)
    }

    /// Inserts `value` at the beginning.
    ///
    /// # Errors
    ///
    /// `value` must be present and non-empty.
    pub fn prepend<'v>(&mut self, value: impl Into<Nullable<&'v str>>) -> Result<&mut Self> {
        let value = check_str(value)?;
        self.value.insert_str(0, value);
        log::trace!("prepended {} bytes", value.len());
        Ok(self)
    }

    /// Resets the value to the empty string.
    pub fn clear(&mut self) -> &mut Self {
        self.value.clear();
        self
    }

    /// Uppercases the first character of the held value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyString`] when the held value is empty.
    pub fn upper_case_first(&mut self) -> Result<&mut Self> {
        self.value = uppercase_first(self.value.as_str())?;
        Ok(self)
    }

    // ── character access ────────────────────────────────────────────────────

    /// The character at `index`, if there is one.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.value.chars().nth(index)
    }

    /// The Unicode scalar value of the character at `index`.
    pub fn char_code_at(&self, index: usize) -> Option<u32> {
        self.char_at(index).map(u32::from)
    }

    /// Number of characters held.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Whether the held value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The held value followed by every piece, in order.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyString`] if any piece is empty.
    pub fn concat(&self, pieces: &[&str]) -> Result<String> {
        let mut out = self.value.clone();
        for piece in pieces {
            out.push_str(check_str(*piece)?);
        }
        Ok(out)
    }

    // ── searching ───────────────────────────────────────────────────────────

    /// Whether the value, viewed from character `position` on, begins with
    /// `search`.
    ///
    /// # Errors
    ///
    /// `search` must be present and non-empty.
    pub fn starts_with<'s>(
        &self,
        search: impl Into<Nullable<&'s str>>,
        case: Case,
        position: Option<usize>,
    ) -> Result<bool> {
        let needle = Folded::needle(check_str(search)?, case);
        let haystack = Folded::new(&self.value, case);
        let start = haystack.folded_byte(position.unwrap_or(0));
        Ok(haystack.text[start..].starts_with(&*needle))
    }

    /// Whether the first `end_position` characters (all of them by default)
    /// end with `search`.
    ///
    /// # Errors
    ///
    /// `search` must be present and non-empty.
    pub fn ends_with<'s>(
        &self,
        search: impl Into<Nullable<&'s str>>,
        case: Case,
        end_position: Option<usize>,
    ) -> Result<bool> {
        let needle = Folded::needle(check_str(search)?, case);
        let haystack = Folded::new(&self.value, case);
        let end = haystack.folded_byte(end_position.unwrap_or(usize::MAX));
        Ok(haystack.text[..end].ends_with(&*needle))
    }

    /// Whether `search` occurs at or after character `position`.
    ///
    /// # Errors
    ///
    /// `search` must be present and non-empty.
    pub fn includes<'s>(
        &self,
        search: impl Into<Nullable<&'s str>>,
        case: Case,
        position: Option<usize>,
    ) -> Result<bool> {
        self.index_of(search, case, position).map(|found| found.is_some())
    }

    /// Character index of the first occurrence of `search` at or after
    /// `start`.
    ///
    /// # Errors
    ///
    /// `search` must be present and non-empty.
    pub fn index_of<'s>(
        &self,
        search: impl Into<Nullable<&'s str>>,
        case: Case,
        start: Option<usize>,
    ) -> Result<Option<usize>> {
        let needle = Folded::needle(check_str(search)?, case);
        let start = start.unwrap_or(0);
        Ok(Folded::new(&self.value, case)
            .positions(&needle)
            .find(|&at| at >= start))
    }

    /// Character index of the last occurrence of `search` that begins at or
    /// before `from`.
    ///
    /// # Errors
    ///
    /// `search` must be present and non-empty.
    pub fn last_index_of<'s>(
        &self,
        search: impl Into<Nullable<&'s str>>,
        case: Case,
        from: Option<usize>,
    ) -> Result<Option<usize>> {
        let needle = Folded::needle(check_str(search)?, case);
        Ok(Folded::new(&self.value, case)
            .positions(&needle)
            .take_while(|&at| from.is_none_or(|from| at <= from))
            .last())
    }

    /// Orders the held value against `value` the way a human sorts words:
    /// letters compare without regard to case first, and only equal words are
    /// then ordered lowercase before uppercase.
    ///
    /// # Errors
    ///
    /// `value` must be present and non-empty.
    pub fn locale_compare<'v>(
        &self,
        value: impl Into<Nullable<&'v str>>,
        case: Case,
    ) -> Result<Ordering> {
        let value = check_str(value)?;
        let (held, value) = (case.fold(&self.value), case.fold(value));
        Ok(held
            .to_lowercase()
            .cmp(&value.to_lowercase())
            .then_with(|| value.cmp(&held)))
    }

    /// Every non-overlapping match of `regex`, in order.
    pub fn match_all<'a>(&'a self, regex: &Regex) -> Vec<&'a str> {
        regex.find_iter(&self.value).map(|m| m.as_str()).collect()
    }

    /// Character index of the first match of `pattern`.
    ///
    /// # Errors
    ///
    /// A literal pattern must be non-empty.
    pub fn search<'p>(&self, pattern: impl Into<Pattern<'p>>) -> Result<Option<usize>> {
        let byte = match pattern.into() {
            Pattern::Literal(literal) => self.value.find(check_str(literal)?),
            Pattern::Regex(regex) => regex.find(&self.value).map(|m| m.start()),
        };
        Ok(byte.map(|byte| self.value[..byte].chars().count()))
    }

    // ── transforming ────────────────────────────────────────────────────────

    /// Replaces the first match of `pattern` with `replacement`.
    ///
    /// For regex patterns `$name` and `$1` in `replacement` expand to capture
    /// groups; literal patterns insert `replacement` verbatim.
    ///
    /// # Errors
    ///
    /// A literal pattern and `replacement` must be non-empty.
    pub fn replace<'p>(&self, pattern: impl Into<Pattern<'p>>, replacement: &str) -> Result<String> {
        let pattern = pattern.into();
        if let Pattern::Literal(literal) = pattern {
            check_str(literal)?;
        }
        let replacement = check_str(replacement)?;

        Ok(match pattern {
            Pattern::Literal(literal) => self.value.replacen(literal, replacement, 1),
            Pattern::Regex(regex) => regex.replace(&self.value, replacement).into_owned(),
        })
    }

    /// Replaces every match of `pattern` with `replacement`.
    ///
    /// A literal is first turned into an escaped, global regex. Expansion of
    /// `replacement` follows [`replace`](Self::replace).
    ///
    /// # Errors
    ///
    /// A literal pattern and `replacement` must be non-empty;
    /// [`Error::InvalidPattern`] if the literal cannot be compiled.
    pub fn replace_all<'p>(
        &self,
        pattern: impl Into<Pattern<'p>>,
        replacement: &str,
    ) -> Result<String> {
        let pattern = pattern.into();
        if let Pattern::Literal(literal) = pattern {
            check_str(literal)?;
        }
        let replacement = check_str(replacement)?;

        Ok(match pattern {
            Pattern::Literal(literal) => Regex::new(&regex::escape(literal))?
                .replace_all(&self.value, NoExpand(replacement))
                .into_owned(),
            Pattern::Regex(regex) => regex.replace_all(&self.value, replacement).into_owned(),
        })
    }

    /// The held value repeated `count` times.
    ///
    /// # Errors
    ///
    /// [`Error::NegativeCount`] when `count` is negative and
    /// [`Error::LengthOverflow`] when the result would exceed `isize::MAX`
    /// bytes.
    pub fn repeat(&self, count: i64) -> Result<String> {
        if count < 0 {
            return Err(Error::NegativeCount(count));
        }
        let fits = usize::try_from(count)
            .ok()
            .and_then(|times| Some((times, self.value.len().checked_mul(times)?)))
            .filter(|&(_, len)| isize::try_from(len).is_ok());
        match fits {
            Some((times, _)) => Ok(self.value.repeat(times)),
            None => Err(Error::LengthOverflow { count }),
        }
    }

    /// Characters from `start` up to, not including, `end` (the end of the
    /// value by default). Bounds past the end are clamped.
    ///
    /// # Errors
    ///
    /// [`Error::NegativeBound`] for a negative bound and
    /// [`Error::BoundOrder`] when `end` is less than `start`.
    pub fn slice(&self, start: i64, end: Option<i64>) -> Result<String> {
        let (start, end) = bounds(start, end)?;
        Ok(self.chars_between(start, end))
    }

    /// Same contract as [`slice`](Self::slice).
    ///
    /// # Errors
    ///
    /// See [`slice`](Self::slice).
    pub fn substring(&self, start: i64, end: Option<i64>) -> Result<String> {
        let (start, end) = bounds(start, end)?;
        Ok(self.chars_between(start, end))
    }

    fn chars_between(&self, start: usize, end: Option<usize>) -> String {
        let chars = self.value.chars().skip(start);
        match end {
            Some(end) => chars.take(end - start).collect(),
            None => chars.collect(),
        }
    }

    /// Splits around `separator`, keeping at most `limit` pieces.
    ///
    /// # Errors
    ///
    /// A literal separator must be non-empty; [`Error::NegativeLimit`] for a
    /// negative limit.
    pub fn split<'p>(
        &self,
        separator: impl Into<Pattern<'p>>,
        limit: Option<i64>,
    ) -> Result<Vec<&str>> {
        let separator = separator.into();
        if let Pattern::Literal(literal) = separator {
            check_str(literal)?;
        }
        let limit = match limit {
            Some(limit) => non_negative(limit, Error::NegativeLimit)?,
            None => usize::MAX,
        };

        Ok(match separator {
            Pattern::Literal(literal) => self.value.split(literal).take(limit).collect(),
            Pattern::Regex(regex) => regex.split(&self.value).take(limit).collect(),
        })
    }

    /// Everything before the first occurrence of `search`, or the whole value
    /// when it does not occur.
    ///
    /// # Errors
    ///
    /// `search` must be present and non-empty.
    pub fn substring_before<'s>(
        &self,
        search: impl Into<Nullable<&'s str>>,
        case: Case,
    ) -> Result<&str> {
        let needle = Folded::needle(check_str(search)?, case);
        let haystack = Folded::new(&self.value, case);
        Ok(match haystack.positions(&needle).next() {
            Some(at) => &self.value[..haystack.source_byte(at)],
            None => &self.value,
        })
    }

    /// Everything after the first occurrence of `search`, or the whole value
    /// when it does not occur.
    ///
    /// # Errors
    ///
    /// `search` must be present and non-empty.
    pub fn substring_after<'s>(
        &self,
        search: impl Into<Nullable<&'s str>>,
        case: Case,
    ) -> Result<&str> {
        let needle = Folded::needle(check_str(search)?, case);
        let haystack = Folded::new(&self.value, case);
        Ok(match haystack.positions(&needle).next() {
            Some(at) => &self.value[haystack.match_end(at, needle.len())..],
            None => &self.value,
        })
    }

    /// Everything after the last occurrence of `search`, or the whole value
    /// when it does not occur.
    ///
    /// # Errors
    ///
    /// `search` must be present and non-empty.
    pub fn substring_after_last<'s>(
        &self,
        search: impl Into<Nullable<&'s str>>,
        case: Case,
    ) -> Result<&str> {
        let needle = Folded::needle(check_str(search)?, case);
        let haystack = Folded::new(&self.value, case);
        Ok(match haystack.positions(&needle).last() {
            Some(at) => &self.value[haystack.match_end(at, needle.len())..],
            None => &self.value,
        })
    }

    /// The held value, lowercased.
    pub fn to_lower_case(&self) -> String {
        self.value.to_lowercase()
    }

    /// The held value, uppercased.
    pub fn to_upper_case(&self) -> String {
        self.value.to_uppercase()
    }

    /// Lowercases using the Unicode default mapping, which is what every
    /// locale without special casing rules uses.
    pub fn to_locale_lower_case(&self) -> String {
        self.to_lower_case()
    }

    /// Uppercases using the Unicode default mapping.
    pub fn to_locale_upper_case(&self) -> String {
        self.to_upper_case()
    }

    /// The held value without leading or trailing whitespace.
    pub fn trim(&self) -> &str {
        self.value.trim()
    }

    // ── misc ────────────────────────────────────────────────────────────────

    /// Evaluates a two-operand arithmetic expression.
    ///
    /// # Errors
    ///
    /// See [`expression::evaluate`].
    pub fn math(&self, expression: &str) -> Result<f64> {
        expression::evaluate(expression)
    }

    /// The escape-sequence table.
    pub fn escape_sequences(&self) -> &'static [(&'static str, char)] {
        &ESCAPE_SEQUENCES
    }

    /// Looks up an escape character by its symbolic name, e.g. `"tab"`.
    pub fn escape_sequence(&self, name: &str) -> Option<char> {
        ESCAPE_SEQUENCES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|&(_, ch)| ch)
    }

    /// The held value.
    pub fn value_of(&self) -> &str {
        &self.value
    }

    /// Same as [`value_of`](Self::value_of).
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Unwraps the held value.
    pub fn into_string(self) -> String {
        self.value
    }

    // ── comparing against the held value ────────────────────────────────────

    fn compare_default<'v>(
        &self,
        value: impl Into<Nullable<&'v str>>,
        case: Case,
    ) -> Result<Ordering> {
        let value = check(value.into(), ValueKind::String)?;
        // Only the held value has to be non-empty.
        check_non_empty(&self.value, None)?;
        Ok(case.fold(&self.value).cmp(&case.fold(value)))
    }

    /// Whether the held value equals `value`.
    ///
    /// # Errors
    ///
    /// `value` must be present; the held value must be non-empty.
    pub fn equal<'v>(&self, value: impl Into<Nullable<&'v str>>, case: Case) -> Result<bool> {
        self.compare_default(value, case).map(Ordering::is_eq)
    }

    /// Whether the held value sorts after `value`.
    ///
    /// # Errors
    ///
    /// See [`equal`](Self::equal).
    pub fn greater<'v>(&self, value: impl Into<Nullable<&'v str>>, case: Case) -> Result<bool> {
        self.compare_default(value, case).map(Ordering::is_gt)
    }

    /// Whether the held value sorts before `value`.
    ///
    /// # Errors
    ///
    /// See [`equal`](Self::equal).
    pub fn less<'v>(&self, value: impl Into<Nullable<&'v str>>, case: Case) -> Result<bool> {
        self.compare_default(value, case).map(Ordering::is_lt)
    }
}

fn bounds(start: i64, end: Option<i64>) -> Result<(usize, Option<usize>)> {
    let start = non_negative(start, |_| Error::NegativeBound(BoundKind::Start))?;
    let Some(end) = end else {
        return Ok((start, None));
    };
    let end_index = non_negative(end, |_| Error::NegativeBound(BoundKind::End))?;
    if end_index < start {
        return Err(Error::BoundOrder {
            start: i64::try_from(start).unwrap_or(i64::MAX),
            end,
        });
    }
    Ok((start, Some(end_index)))
}

impl Builder for StringBuilder {
    type Value = str;

    fn default_value(&self) -> &str {
        &self.value
    }

    fn type_of(&self) -> &'static str {
        "string"
    }
}

impl fmt::Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Write for StringBuilder {
    /// Writes bypass validation; an empty write is a no-op.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.value.push_str(s);
        Ok(())
    }
}

impl AsRef<str> for StringBuilder {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<String> for StringBuilder {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl From<&str> for StringBuilder {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<StringBuilder> for String {
    fn from(builder: StringBuilder) -> Self {
        builder.value
    }
}

/// A case-folded view of a string that remembers where each source character
/// landed, so matches found in the folded text map back to the original.
struct Folded<'a> {
    text: Cow<'a, str>,
    /// `(source byte, folded byte)` for each source char, plus an end entry.
    spans: Vec<(usize, usize)>,
}

impl<'a> Folded<'a> {
    fn new(source: &'a str, case: Case) -> Self {
        let mut spans = Vec::with_capacity(source.len() + 1);
        let text = match case {
            Case::Sensitive => {
                spans.extend(source.char_indices().map(|(byte, _)| (byte, byte)));
                Cow::Borrowed(source)
            }
            Case::Insensitive => {
                let mut text = String::with_capacity(source.len());
                for (byte, ch) in source.char_indices() {
                    spans.push((byte, text.len()));
                    text.extend(ch.to_lowercase());
                }
                Cow::Owned(text)
            }
        };
        spans.push((source.len(), text.len()));
        Self { text, spans }
    }

    fn needle(search: &'a str, case: Case) -> Cow<'a, str> {
        Self::new(search, case).text
    }

    fn char_count(&self) -> usize {
        self.spans.len() - 1
    }

    /// Folded byte offset of source char `index`, clamped to the end.
    fn folded_byte(&self, index: usize) -> usize {
        self.spans[index.min(self.char_count())].1
    }

    fn source_byte(&self, index: usize) -> usize {
        self.spans[index.min(self.char_count())].0
    }

    /// Source char indices, ascending, at which `needle` begins. Overlapping
    /// occurrences are all reported.
    fn positions<'n>(&'n self, needle: &'n str) -> impl Iterator<Item = usize> + 'n {
        self.spans[..self.char_count()]
            .iter()
            .enumerate()
            .filter(move |(_, (_, folded))| self.text[*folded..].starts_with(needle))
            .map(|(index, _)| index)
    }

    /// Source byte offset just past a match of `len` folded bytes at `index`.
    fn match_end(&self, index: usize, len: usize) -> usize {
        let end = self.spans[index].1 + len;
        self.spans[index..]
            .iter()
            .find(|(_, folded)| *folded >= end)
            .map_or(self.spans[self.char_count()].0, |(source, _)| *source)
    }
}

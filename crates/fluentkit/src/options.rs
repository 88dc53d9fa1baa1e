use std::borrow::Cow;

/// How case-aware operations treat letter case.
///
/// Every comparison, containment and search operation takes a `Case`. With
/// [`Case::Insensitive`] both operands are folded to lowercase before they are
/// compared, so `"ABC"` and `"abc"` are equal.
///
/// # Examples
///
/// ```rust
/// use fluentkit::{Case, compare};
///
/// assert!(!compare::equal("ABC", "abc", Case::Sensitive).unwrap());
/// assert!(compare::equal("ABC", "abc", Case::Insensitive).unwrap());
/// ```
///
/// # Default
///
/// [`Case::Sensitive`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Case {
    /// Compare values exactly as written.
    #[default]
    Sensitive,
    /// Lowercase both operands before comparing.
    Insensitive,
}

impl Case {
    /// Folds `value` according to this mode, borrowing when nothing changes.
    pub fn fold<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Case::Sensitive => Cow::Borrowed(value),
            Case::Insensitive => Cow::Owned(value.to_lowercase()),
        }
    }

    /// Whether folding is requested.
    pub fn is_insensitive(self) -> bool {
        matches!(self, Case::Insensitive)
    }
}

impl From<bool> for Case {
    /// `true` means "ignore case".
    fn from(ignore_case: bool) -> Self {
        if ignore_case {
            Case::Insensitive
        } else {
            Case::Sensitive
        }
    }
}

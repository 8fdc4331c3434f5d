use std::fmt;

use regex::Regex;

use crate::FieldValue;

/// A compiled regular expression used by `Rule::Pattern`.
///
/// Two patterns are equal when their source text is equal.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile a pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self)
    }

    /// The source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the text matches. The pattern carries its own anchors.
    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// A single validation rule attached to a field.
///
/// Each rule carries the message shown when it fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Fails on an empty text, choice or selection, or a missing value.
    Required { message: String },

    /// Fails when a non-empty text is shorter than `min` UTF-16 code units
    /// (the length a browser reports for the value).
    MinLength { min: usize, message: String },

    /// Fails when a non-empty text does not match the pattern.
    Pattern { pattern: Pattern, message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn pattern(pattern: impl Into<Pattern>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// The failure message of this rule.
    pub fn message(&self) -> &str {
        match self {
            Self::Required { message }
            | Self::MinLength { message, .. }
            | Self::Pattern { message, .. } => message,
        }
    }

    /// Check a value against this rule. `None` means the field is unset.
    ///
    /// Length and pattern rules only look at non-empty text; anything else
    /// passes them.
    pub fn check(&self, value: Option<&FieldValue>) -> Result<(), &str> {
        let passes = match self {
            Self::Required { .. } => value.is_some_and(|v| !v.is_empty()),
            Self::MinLength { min, .. } => match non_empty_text(value) {
                Some(text) => text.encode_utf16().count() >= *min,
                None => true,
            },
            Self::Pattern { pattern, .. } => match non_empty_text(value) {
                Some(text) => pattern.is_match(text),
                None => true,
            },
        };
        if passes { Ok(()) } else { Err(self.message()) }
    }
}

fn non_empty_text(value: Option<&FieldValue>) -> Option<&str> {
    value
        .and_then(FieldValue::as_text)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Pattern {
        Pattern::new(r"^[A-Za-z\s]+$").unwrap()
    }

    #[test]
    fn required_rejects_unset_and_empty() {
        let rule = Rule::required("needed");
        assert_eq!(rule.check(None), Err("needed"));
        assert_eq!(rule.check(Some(&"".into())), Err("needed"));
        assert_eq!(rule.check(Some(&FieldValue::selection(Vec::<String>::new()))), Err("needed"));
        assert_eq!(rule.check(Some(&"x".into())), Ok(()));
        assert_eq!(rule.check(Some(&FieldValue::Bool(false))), Ok(()));
    }

    #[test]
    fn min_length_counts_utf16_units() {
        let rule = Rule::min_length(3, "too short");
        assert_eq!(rule.check(Some(&"ab".into())), Err("too short"));
        assert_eq!(rule.check(Some(&"abc".into())), Ok(()));
        assert_eq!(rule.check(Some(&"äöü".into())), Ok(()));
    }

    #[test]
    fn min_length_counts_astral_chars_twice() {
        let rule = Rule::min_length(10, "too short");
        // Five emoji are ten UTF-16 code units.
        assert_eq!(rule.check(Some(&"😀😀😀😀😀".into())), Ok(()));
        assert_eq!(rule.check(Some(&"😀😀😀😀".into())), Err("too short"));
    }

    #[test]
    fn min_length_skips_empty_text() {
        let rule = Rule::min_length(3, "too short");
        assert_eq!(rule.check(Some(&"".into())), Ok(()));
        assert_eq!(rule.check(None), Ok(()));
    }

    #[test]
    fn pattern_matches_raw_text() {
        let rule = Rule::pattern(letters(), "letters only");
        assert_eq!(rule.check(Some(&"John Doe".into())), Ok(()));
        assert_eq!(rule.check(Some(&"John3".into())), Err("letters only"));
        assert_eq!(rule.check(Some(&"".into())), Ok(()));
    }

    #[test]
    fn pattern_equality_by_source() {
        assert_eq!(letters(), letters());
        assert_ne!(letters(), Pattern::new("^x$").unwrap());
    }
}

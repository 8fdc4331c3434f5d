use std::collections::BTreeSet;

use serde::Serialize;

/// The current value of a single form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A string value (from single-line or multi-line text inputs).
    Text(String),

    /// An integer value (from sliders).
    Int(i64),

    /// A floating-point value (from ratings).
    Float(f64),

    /// A boolean value (from checkboxes and switches).
    Bool(bool),

    /// The value of the chosen option of an exclusive toggle group.
    Choice(String),

    /// The chosen options of a multi-select.
    Selection(BTreeSet<String>),
}

impl FieldValue {
    /// Build a choice value.
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    /// Build a selection value from any iterator of option values.
    pub fn selection<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selection(values.into_iter().map(Into::into).collect())
    }

    /// Whether this value counts as unset for a `required` rule.
    ///
    /// Numbers and booleans always carry a value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) | Self::Choice(s) => s.is_empty(),
            Self::Selection(set) => set.is_empty(),
            Self::Int(_) | Self::Float(_) | Self::Bool(_) => false,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a chosen option.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(c) => Some(c),
            _ => None,
        }
    }

    /// Try to get this value as a set of chosen options.
    pub fn as_selection(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Selection(set) => Some(set),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Bool(_) => "Bool",
            Self::Choice(_) => "Choice",
            Self::Selection(_) => "Selection",
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<BTreeSet<String>> for FieldValue {
    fn from(set: BTreeSet<String>) -> Self {
        Self::Selection(set)
    }
}

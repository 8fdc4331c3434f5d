use std::fmt;

use crate::{Field, FieldValue};

/// What a surface needs to draw the step indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct StepperView {
    /// Step labels, in order.
    pub labels: Vec<String>,

    /// Index of the current step.
    pub current: usize,

    /// Per-step completed flags, parallel to `labels`.
    pub completed: Vec<bool>,
}

impl StepperView {
    /// Check if the step at `index` is the current one.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Check if the step at `index` is completed.
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }
}

/// A field together with its current value and error, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldView<'a> {
    pub field: &'a Field,
    pub value: Option<&'a FieldValue>,
    pub error: Option<&'a str>,
}

/// A displayable summary value.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Text(String),
    /// Shown as a check mark or a cross.
    Flag(bool),
}

/// One line of the submission summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub label: String,
    pub value: SummaryValue,
}

/// The submission formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub title: String,
    pub entries: Vec<SummaryEntry>,
}

impl SummaryView {
    /// Get the entry with the given label.
    pub fn entry(&self, label: &str) -> Option<&SummaryValue> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Flag(true) => write!(f, "✓"),
            Self::Flag(false) => write!(f, "✗"),
        }
    }
}

impl fmt::Display for SummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.label, entry.value)?;
        }
        Ok(())
    }
}

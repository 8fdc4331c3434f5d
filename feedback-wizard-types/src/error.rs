use crate::FieldName;

/// Error type for form definition lookups and field edits.
///
/// Validation failures are not errors; they are reported through
/// `ValidationErrors`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    /// The field does not belong to any step of the form.
    #[error("Unknown field: {0}")]
    UnknownField(FieldName),

    /// The step index is outside the form.
    #[error("Step {index} is out of range (form has {len} steps)")]
    UnknownStep { index: usize, len: usize },

    /// The value variant does not fit the field kind.
    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: FieldName,
        expected: &'static str,
        actual: &'static str,
    },

    /// A choice or selection names an option the field does not offer.
    #[error("Field '{field}' has no option '{option}'")]
    UnknownOption { field: FieldName, option: String },

    /// A rating or slider value is not finite, outside the field's bounds,
    /// or between two steps.
    #[error("Value {value} is out of range for field '{field}'")]
    OutOfRange { field: FieldName, value: String },
}

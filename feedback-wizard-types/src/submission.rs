use serde::Serialize;

use crate::{FieldName, FieldValue, FormValues};

/// The read-only record captured when the final step validates.
///
/// There are no mutating methods: once built, a submission never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Submission {
    values: FormValues,
}

impl Submission {
    /// Capture a snapshot of the given values.
    pub fn new(values: FormValues) -> Self {
        Self { values }
    }

    /// Get all captured values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Get a single captured value.
    pub fn get(&self, name: &FieldName) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Consume the submission, returning the captured values.
    pub fn into_values(self) -> FormValues {
        self.values
    }
}

use crate::{Field, FieldName};

/// One screen of the wizard: a label and the fields shown on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    label: String,
    fields: Vec<Field>,
}

impl Step {
    /// Create a new step with the given fields.
    pub fn new(label: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            label: label.into(),
            fields,
        }
    }

    /// Get the step label shown in the stepper.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the fields, in display order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field of this step by name.
    pub fn field(&self, name: &FieldName) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Check if the field belongs to this step.
    pub fn contains(&self, name: &FieldName) -> bool {
        self.field(name).is_some()
    }
}

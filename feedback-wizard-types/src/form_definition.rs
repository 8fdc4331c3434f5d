use crate::{
    Field, FieldKind, FieldName, FieldValue, FormError, FormValues, Step, Submission,
    SummaryEntry, SummaryValue, SummaryView, ValidationErrors,
};

const DEFAULT_SUMMARY_TITLE: &str = "Summary";

/// The ordered steps of a wizard form.
///
/// A form definition is presentation-agnostic and immutable once built. It can
/// be rendered by a terminal wizard, an HTML page, or driven by a test script.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefinition {
    /// Optional title shown above the form.
    pub title: Option<String>,

    /// Heading of the summary shown after submission.
    pub summary_title: String,

    steps: Vec<Step>,
}

impl FormDefinition {
    /// Create a new form definition with the given steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            title: None,
            summary_title: DEFAULT_SUMMARY_TITLE.to_string(),
            steps,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the summary heading.
    pub fn with_summary_title(mut self, title: impl Into<String>) -> Self {
        self.summary_title = title.into();
        self
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get a step by index.
    pub fn step(&self, index: usize) -> Result<&Step, FormError> {
        self.steps.get(index).ok_or(FormError::UnknownStep {
            index,
            len: self.steps.len(),
        })
    }

    /// Get the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the form has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step.
    pub fn last_step(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// All fields of all steps, in display order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.steps.iter().flat_map(Step::fields)
    }

    /// Look up a field by name.
    pub fn field(&self, name: &FieldName) -> Option<&Field> {
        self.fields().find(|field| field.name() == name)
    }

    /// Index of the step a field belongs to.
    pub fn step_of(&self, name: &FieldName) -> Option<usize> {
        self.steps.iter().position(|step| step.contains(name))
    }

    /// Initial values: every field at its default.
    pub fn default_values(&self) -> FormValues {
        self.fields()
            .map(|field| (field.name().clone(), field.default_value().clone()))
            .collect()
    }

    /// Validate every field of one step against the given values.
    ///
    /// Each field reports at most one message: the first rule that fails.
    pub fn check_step(
        &self,
        index: usize,
        values: &FormValues,
    ) -> Result<ValidationErrors, FormError> {
        let step = self.step(index)?;
        Ok(step
            .fields()
            .iter()
            .filter_map(|field| {
                field
                    .validate(values.get(field.name()))
                    .map(|message| (field.name().clone(), message))
            })
            .collect())
    }

    /// Format a submission for display, one entry per field in step order.
    pub fn summarize(&self, submission: &Submission) -> SummaryView {
        let entries = self
            .fields()
            .map(|field| SummaryEntry {
                label: field.summary_label().to_string(),
                value: summary_value(field.kind(), submission.get(field.name())),
            })
            .collect();
        SummaryView {
            title: self.summary_title.clone(),
            entries,
        }
    }
}

fn summary_value(kind: &FieldKind, value: Option<&FieldValue>) -> SummaryValue {
    let Some(value) = value else {
        return SummaryValue::Text(String::new());
    };
    match (kind, value) {
        (FieldKind::Checkbox | FieldKind::Switch, FieldValue::Bool(b)) => SummaryValue::Flag(*b),
        (FieldKind::Rating { max, .. }, FieldValue::Float(v)) => {
            SummaryValue::Text(format!("{v} / {max}"))
        }
        (FieldKind::Slider { unit, .. }, FieldValue::Int(v)) => {
            SummaryValue::Text(format!("{v}{}", unit.as_deref().unwrap_or_default()))
        }
        (FieldKind::MultiSelect { options }, FieldValue::Selection(chosen)) => {
            // Option order, not selection order.
            let labels: Vec<&str> = options
                .iter()
                .filter(|choice| chosen.contains(&choice.value))
                .map(|choice| choice.value.as_str())
                .collect();
            if labels.is_empty() {
                SummaryValue::Text("None".to_string())
            } else {
                SummaryValue::Text(labels.join(", "))
            }
        }
        (_, other) => SummaryValue::Text(display_value(other)),
    }
}

fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) | FieldValue::Choice(s) => s.clone(),
        FieldValue::Int(i) => i.to_string(),
        FieldValue::Float(f) => f.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Selection(set) => set.iter().cloned().collect::<Vec<_>>().join(", "),
    }
}

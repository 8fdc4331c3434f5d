//! The wizard form controller.
//!
//! Holds the field values, the current step and the error map, and moves
//! between the states `Editing(step)` and `Submitted`. Validation is pull-based:
//! it runs when a transition is attempted, never on every keystroke.

use feedback_wizard_types::{
    FieldName, FieldValue, FieldView, FormDefinition, FormError, FormSurface, FormValues, Step,
    StepperView, Submission, SummaryView, ValidationErrors,
};
use tracing::{debug, info};

use crate::{FormBackend, WizardError};

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Moved forward to the next step.
    Advanced { from: usize, to: usize },

    /// Moved back to the previous step.
    Retreated { from: usize, to: usize },

    /// The last step validated and the form is now submitted.
    Submitted,

    /// The current step failed validation; nothing moved.
    Blocked(ValidationErrors),

    /// The request does not apply in the current state.
    Ignored,
}

impl Transition {
    /// Check if the transition was blocked by validation.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

/// A user action forwarded by a rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The user changed a field.
    Edit { field: FieldName, value: FieldValue },

    /// Next on intermediate steps, Submit on the last one.
    Next,

    /// Back.
    Back,
}

impl FormEvent {
    pub fn edit(field: impl Into<FieldName>, value: impl Into<FieldValue>) -> Self {
        Self::Edit {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// The wizard form controller.
///
/// Created with every field at its default value on the first step. Once
/// submitted, the controller is read-only: edits and navigation are ignored
/// and the captured [`Submission`] never changes.
#[derive(Debug, Clone)]
pub struct Wizard {
    definition: FormDefinition,
    values: FormValues,
    errors: ValidationErrors,
    current_step: usize,
    /// Set once `go_next` has validated a step; from then on every edit
    /// re-validates the edited field.
    attempted: bool,
    submission: Option<Submission>,
}

impl Wizard {
    /// Start a new session of the given form.
    pub fn new(definition: FormDefinition) -> Self {
        let values = definition.default_values();
        Self {
            definition,
            values,
            errors: ValidationErrors::new(),
            current_step: 0,
            attempted: false,
            submission: None,
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    /// Current field values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Messages currently shown next to fields.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Index of the current step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The definition of the current step.
    pub fn current_step_definition(&self) -> Option<&Step> {
        self.definition.steps().get(self.current_step)
    }

    /// Check if the current step is the last one.
    pub fn is_last_step(&self) -> bool {
        self.current_step == self.definition.last_step()
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    /// The record captured on submission.
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Overwrite the value of a field.
    ///
    /// This does not validate the step. Once Next has been attempted, or while
    /// the field is showing an error, that field alone is re-validated so its
    /// error appears, changes or clears as the user types. After submission
    /// this is a no-op.
    pub fn update_field(
        &mut self,
        name: impl Into<FieldName>,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let name = name.into();
        if self.is_submitted() {
            debug!(field = %name, "ignoring edit after submission");
            return Ok(());
        }

        let field = self
            .definition
            .field(&name)
            .ok_or_else(|| FormError::UnknownField(name.clone()))?;
        let value = value.into();
        field.accepts(&value)?;

        if self.attempted || self.errors.contains(&name) {
            self.errors.set(&name, field.validate(Some(&value)));
        }
        debug!(field = %name, ?value, "field updated");
        self.values.insert(name, value);
        Ok(())
    }

    /// Validate every field of a step and publish the result to the error map.
    ///
    /// Returns the failures (empty when the step passes). Errors of fields on
    /// this step are replaced or cleared; other steps' errors are untouched.
    pub fn validate_step(&mut self, index: usize) -> Result<ValidationErrors, FormError> {
        let failures = self.definition.check_step(index, &self.values)?;
        let step = self.definition.step(index)?;
        for field in step.fields() {
            self.errors.set(field.name(), failures.get(field.name()));
        }
        Ok(failures)
    }

    /// Validate the current step, then advance, or submit on the last step.
    pub fn go_next(&mut self) -> Transition {
        if self.is_submitted() {
            return Transition::Ignored;
        }

        let from = self.current_step;
        let failures = match self.validate_step(from) {
            Ok(failures) => failures,
            Err(_) => return Transition::Ignored,
        };
        self.attempted = true;
        if !failures.is_empty() {
            debug!(step = from, failures = failures.len(), "transition blocked");
            return Transition::Blocked(failures);
        }

        if from < self.definition.last_step() {
            let to = from + 1;
            self.current_step = to;
            debug!(from, to, "advanced");
            Transition::Advanced { from, to }
        } else {
            self.submission = Some(Submission::new(self.values.clone()));
            info!(step = from, "form submitted");
            Transition::Submitted
        }
    }

    /// Final submit. Shares its handler with [`Wizard::go_next`]: on an
    /// intermediate step this advances instead.
    pub fn submit(&mut self) -> Transition {
        self.go_next()
    }

    /// Go back one step. Never validates.
    pub fn go_back(&mut self) -> Transition {
        if self.is_submitted() || self.current_step == 0 {
            return Transition::Ignored;
        }
        let from = self.current_step;
        let to = from - 1;
        self.current_step = to;
        debug!(from, to, "retreated");
        Transition::Retreated { from, to }
    }

    /// A step is completed when it lies behind the current one, or once the
    /// form is submitted.
    pub fn is_step_completed(&self, index: usize) -> bool {
        self.is_submitted() || index < self.current_step
    }

    /// Apply a user action. Edits yield no transition.
    pub fn handle(&mut self, event: FormEvent) -> Result<Option<Transition>, FormError> {
        match event {
            FormEvent::Edit { field, value } => {
                self.update_field(field, value)?;
                Ok(None)
            }
            FormEvent::Next => Ok(Some(self.go_next())),
            FormEvent::Back => Ok(Some(self.go_back())),
        }
    }

    /// Labels, current index and completed flags for the step indicator.
    pub fn stepper(&self) -> StepperView {
        StepperView {
            labels: self
                .definition
                .steps()
                .iter()
                .map(|step| step.label().to_string())
                .collect(),
            current: self.current_step,
            completed: (0..self.definition.len())
                .map(|index| self.is_step_completed(index))
                .collect(),
        }
    }

    /// The fields of the current step with their values and errors.
    pub fn current_fields(&self) -> Vec<FieldView<'_>> {
        self.current_step_definition()
            .map(|step| {
                step.fields()
                    .iter()
                    .map(|field| FieldView {
                        field,
                        value: self.values.get(field.name()),
                        error: self.errors.get(field.name()),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The submission formatted for display.
    pub fn summary(&self) -> Option<SummaryView> {
        self.submission
            .as_ref()
            .map(|submission| self.definition.summarize(submission))
    }

    /// Push the current state to a surface: stepper, the current step's
    /// fields with their errors, then the summary once submitted.
    pub fn render<S: FormSurface + ?Sized>(&self, surface: &mut S) {
        surface.render_stepper(&self.stepper());
        for view in self.current_fields() {
            surface.render_field(&view);
            if let Some(message) = view.error {
                surface.render_error(view.field.name(), message);
            }
        }
        if let Some(summary) = self.summary() {
            surface.render_summary(&summary);
        }
    }

    /// Hand the wizard to an interactive backend and wait for the submission.
    pub fn run<B: FormBackend>(mut self, backend: B) -> Result<Submission, WizardError> {
        backend.drive(&mut self).map_err(WizardError::backend)?;
        self.submission.ok_or(WizardError::Cancelled)
    }
}

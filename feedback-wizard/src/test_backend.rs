//! Backends and surfaces for exercising a wizard without a user.
//!
//! `ScriptedBackend` plays a fixed list of edits and navigation requests;
//! `RecordingSurface` captures every render call.
//!
//! # Example
//!
//! ```rust
//! use feedback_wizard::{FieldValue, ScriptedBackend, Wizard, feedback};
//!
//! let submission = Wizard::new(feedback::form())
//!     .run(
//!         ScriptedBackend::new()
//!             .with_text(feedback::PRODUCT_NAME, "Widget Pro")
//!             .next()
//!             .with_text(feedback::FEEDBACK, "Works great for my needs")
//!             .next()
//!             .with_text(feedback::EMAIL, "user@example.com")
//!             .next(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     submission.get(&feedback::EMAIL.into()),
//!     Some(&FieldValue::from("user@example.com"))
//! );
//! ```

use feedback_wizard_types::{
    FieldName, FieldValue, FieldView, FormError, FormSurface, StepperView, SummaryView,
    ValidationErrors,
};

use crate::{FormBackend, FormEvent, Transition, Wizard};

/// A backend that replays pre-configured events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    events: Vec<FormEvent>,
    tolerate_blocked: bool,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Rejected edit: {0}")]
    Edit(#[from] FormError),

    #[error("Validation failed on step {step} ({} field(s))", .errors.len())]
    ValidationFailed {
        step: usize,
        errors: ValidationErrors,
    },
}

impl ScriptedBackend {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary event.
    pub fn with_event(mut self, event: FormEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Append an edit of the given field.
    pub fn with_value(self, field: impl Into<FieldName>, value: impl Into<FieldValue>) -> Self {
        self.with_event(FormEvent::edit(field, value))
    }

    /// Append a text edit.
    pub fn with_text(self, field: impl Into<FieldName>, value: impl Into<String>) -> Self {
        self.with_value(field, FieldValue::Text(value.into()))
    }

    /// Append an integer edit.
    pub fn with_int(self, field: impl Into<FieldName>, value: i64) -> Self {
        self.with_value(field, FieldValue::Int(value))
    }

    /// Append a float edit.
    pub fn with_float(self, field: impl Into<FieldName>, value: f64) -> Self {
        self.with_value(field, FieldValue::Float(value))
    }

    /// Append a boolean edit.
    pub fn with_bool(self, field: impl Into<FieldName>, value: bool) -> Self {
        self.with_value(field, FieldValue::Bool(value))
    }

    /// Append a toggle-group edit.
    pub fn with_choice(self, field: impl Into<FieldName>, value: impl Into<String>) -> Self {
        self.with_value(field, FieldValue::Choice(value.into()))
    }

    /// Append a multi-select edit.
    pub fn with_selection<I, S>(self, field: impl Into<FieldName>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_value(field, FieldValue::selection(values))
    }

    /// Append a Next (or Submit, on the last step).
    pub fn next(self) -> Self {
        self.with_event(FormEvent::Next)
    }

    /// Append a Back.
    pub fn back(self) -> Self {
        self.with_event(FormEvent::Back)
    }

    /// Keep playing when a Next is blocked by validation instead of failing.
    pub fn tolerate_blocked(mut self) -> Self {
        self.tolerate_blocked = true;
        self
    }

    /// The events in play order.
    pub fn events(&self) -> &[FormEvent] {
        &self.events
    }
}

impl FormBackend for ScriptedBackend {
    type Error = ScriptError;

    fn drive(&self, wizard: &mut Wizard) -> Result<(), Self::Error> {
        for event in &self.events {
            let step = wizard.current_step();
            if let Some(Transition::Blocked(errors)) = wizard.handle(event.clone())?
                && !self.tolerate_blocked
            {
                return Err(ScriptError::ValidationFailed { step, errors });
            }
        }
        Ok(())
    }
}

/// One call received by a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Stepper(StepperView),
    Field {
        name: FieldName,
        value: Option<FieldValue>,
        error: Option<String>,
    },
    Error {
        name: FieldName,
        message: String,
    },
    Summary(SummaryView),
}

/// A surface that records what it was asked to draw.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call, in order.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Names of the fields drawn, in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Field { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The last summary drawn, if any.
    pub fn summary(&self) -> Option<&SummaryView> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Summary(summary) => Some(summary),
            _ => None,
        })
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl FormSurface for RecordingSurface {
    fn render_stepper(&mut self, stepper: &StepperView) {
        self.calls.push(SurfaceCall::Stepper(stepper.clone()));
    }

    fn render_field(&mut self, field: &FieldView<'_>) {
        self.calls.push(SurfaceCall::Field {
            name: field.field.name().clone(),
            value: field.value.cloned(),
            error: field.error.map(str::to_string),
        });
    }

    fn render_error(&mut self, field: &FieldName, message: &str) {
        self.calls.push(SurfaceCall::Error {
            name: field.clone(),
            message: message.to_string(),
        });
    }

    fn render_summary(&mut self, summary: &SummaryView) {
        self.calls.push(SurfaceCall::Summary(summary.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback;

    #[test]
    fn blocked_script_reports_step_and_errors() {
        let result = Wizard::new(feedback::form()).run(ScriptedBackend::new().next());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Validation failed on step 0"));
    }

    #[test]
    fn short_script_counts_as_cancelled() {
        let result = Wizard::new(feedback::form()).run(
            ScriptedBackend::new()
                .with_text(feedback::PRODUCT_NAME, "Widget")
                .next(),
        );
        assert!(result.unwrap_err().is_cancelled());
    }

    #[test]
    fn tolerated_block_keeps_playing() {
        let mut wizard = Wizard::new(feedback::form());
        ScriptedBackend::new()
            .next()
            .with_text(feedback::PRODUCT_NAME, "Widget")
            .next()
            .tolerate_blocked()
            .drive(&mut wizard)
            .unwrap();
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn rejected_edit_is_an_error() {
        let mut wizard = Wizard::new(feedback::form());
        let result = ScriptedBackend::new()
            .with_text(feedback::RATING, "five")
            .drive(&mut wizard);
        assert!(matches!(result, Err(ScriptError::Edit(FormError::TypeMismatch { .. }))));
    }

    #[test]
    fn recording_surface_sees_stepper_then_fields() {
        let wizard = Wizard::new(feedback::form());
        let mut surface = RecordingSurface::new();
        wizard.render(&mut surface);

        assert!(matches!(surface.calls()[0], SurfaceCall::Stepper(_)));
        assert_eq!(surface.field_names(), vec![feedback::PRODUCT_NAME, feedback::RATING]);
        assert!(surface.summary().is_none());
    }
}

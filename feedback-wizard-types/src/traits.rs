use crate::{FieldName, FieldView, StepperView, SummaryView};

/// A rendering surface that displays the wizard.
///
/// The controller pushes its state through these calls; the surface decides
/// how to draw it (terminal widgets, HTML, a test recorder, ...). User edits
/// travel the other way, as events handed back to the controller.
pub trait FormSurface {
    /// Draw the step indicator.
    fn render_stepper(&mut self, stepper: &StepperView);

    /// Draw an input for one field of the current step.
    fn render_field(&mut self, field: &FieldView<'_>);

    /// Show an error message next to a field.
    fn render_error(&mut self, field: &FieldName, message: &str);

    /// Show the submitted record.
    fn render_summary(&mut self, summary: &SummaryView);
}

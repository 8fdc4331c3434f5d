//! Core types for the feedback-wizard crate.
//!
//! This crate provides the foundational types for defining multi-step forms:
//! - `FormDefinition` and `Step` - The ordered steps of a wizard
//! - `Field`, `FieldKind` and `Rule` - Individual fields and their validators
//! - `FormValues` and `FieldName` - Current values keyed by field name
//! - `ValidationErrors` - Per-field error messages
//! - `Submission` - The read-only record captured on completion
//! - `FormSurface` trait - For implementing rendering surfaces

mod field_name;
pub use field_name::FieldName;

mod field_value;
pub use field_value::FieldValue;

mod form_values;
pub use form_values::FormValues;

mod rule;
pub use rule::{Pattern, Rule};

mod field;
pub use field::{Choice, Field, FieldKind};

mod step;
pub use step::Step;

mod form_definition;
pub use form_definition::FormDefinition;

mod validation_errors;
pub use validation_errors::ValidationErrors;

mod submission;
pub use submission::Submission;

mod view;
pub use view::{FieldView, StepperView, SummaryEntry, SummaryValue, SummaryView};

mod error;
pub use error::FormError;

mod traits;
pub use traits::FormSurface;

//! # feedback-wizard
//!
//! A multi-step feedback form: field values, per-step validation, linear
//! step navigation and a read-only record once the last step is submitted.
//! Rendering is left to surfaces implementing [`FormSurface`].
//!
//! ## Usage
//!
//! ```rust
//! use feedback_wizard::{FieldValue, Transition, Wizard, feedback};
//!
//! let mut wizard = Wizard::new(feedback::form());
//!
//! // Step 1 cannot be left while the product name is empty.
//! assert!(matches!(wizard.go_next(), Transition::Blocked(_)));
//!
//! wizard.update_field(feedback::PRODUCT_NAME, "Widget Pro").unwrap();
//! wizard.update_field(feedback::RATING, FieldValue::Float(4.5)).unwrap();
//! assert_eq!(wizard.go_next(), Transition::Advanced { from: 0, to: 1 });
//! ```
//!
//! ## Backends
//!
//! Interactive frontends implement [`FormBackend`] and drive the wizard
//! until it is submitted:
//! - `feedback-wizard-ratatui` - terminal wizard
//! - [`ScriptedBackend`] - plays a fixed list of events, for tests
//!
//! `feedback-wizard-html` renders the current state as an HTML document.

pub use feedback_wizard_types::*;

mod wizard;
pub use wizard::{FormEvent, Transition, Wizard};

mod backend;
pub use backend::{FormBackend, WizardError};

pub mod feedback;
pub use feedback::FeedbackRecord;

mod test_backend;
pub use test_backend::{RecordingSurface, ScriptError, ScriptedBackend, SurfaceCall};

mod logging;
pub use logging::init_tracing;

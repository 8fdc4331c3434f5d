//! Terminal frontend for the feedback wizard, built on ratatui.
//!
//! ```no_run
//! use feedback_wizard::{Wizard, feedback};
//! use feedback_wizard_ratatui::RatatuiBackend;
//!
//! let backend = RatatuiBackend::new().with_title("Product Feedback");
//! let submission = Wizard::new(feedback::form()).run(backend)?;
//! println!("{submission:?}");
//! # Ok::<(), feedback_wizard::WizardError>(())
//! ```

mod backend;
mod input;
mod surface;

pub use backend::{RatatuiBackend, RatatuiError, Theme};
pub use input::{KeyOutcome, UiState};
pub use surface::TuiSurface;

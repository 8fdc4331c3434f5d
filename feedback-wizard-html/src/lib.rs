//! HTML renderer for the feedback wizard.
//!
//! Renders the wizard's current state (step indicator, the current step's
//! inputs with their errors, and the summary once submitted) as an HTML
//! document or fragment.
//!
//! ```
//! use feedback_wizard::{Wizard, feedback};
//! use feedback_wizard_html::{HtmlOptions, to_html};
//!
//! let wizard = Wizard::new(feedback::form());
//! let html = to_html(&wizard, &HtmlOptions::new().full_document(false));
//! assert!(html.contains("Product Details"));
//! ```

mod generator;

pub use generator::{HtmlOptions, HtmlSurface, to_html};

use crate::Wizard;

/// Error type for running a wizard through a backend.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// The backend finished without the form being submitted
    /// (Esc, closed window, script ran out, etc.)
    #[error("Form cancelled before submission")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal setup, scripted validation failure, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl WizardError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Trait for interactive frontends that drive a wizard.
///
/// A backend renders the wizard (usually through a `FormSurface`), forwards
/// user input as edits and navigation, and returns once the form is submitted
/// or the user gives up. Returning `Ok(())` without a submission counts as
/// cancellation.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run the wizard until it is submitted or abandoned.
    fn drive(&self, wizard: &mut Wizard) -> Result<(), Self::Error>;
}

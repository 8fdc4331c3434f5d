//! Fill in the product feedback form in the terminal.
//!
//! Run with: cargo run -p feedback-wizard-ratatui --example feedback
//!
//! Set `RUST_LOG=feedback_wizard=debug` to see controller logs on stderr.

use feedback_wizard::{FeedbackRecord, Wizard, feedback, init_tracing};
use feedback_wizard_ratatui::RatatuiBackend;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let backend = RatatuiBackend::new();
    let submission = Wizard::new(feedback::form()).run(backend)?;
    let record = FeedbackRecord::from_submission(&submission)?;

    println!("\n=== Feedback Submitted ===");
    println!("{}", record.to_json()?);

    Ok(())
}

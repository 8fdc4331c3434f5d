//! Render the feedback form at each stage of a scripted session.
//!
//! Run with: cargo run -p feedback-wizard-html --example snapshot

use feedback_wizard::{Wizard, feedback};
use feedback_wizard_html::{HtmlOptions, to_html};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = HtmlOptions::new().with_title("Product Feedback");
    let mut wizard = Wizard::new(feedback::form());

    // First step with an error showing
    wizard.go_next();
    std::fs::write("feedback_step1.html", to_html(&wizard, &options))?;

    wizard.update_field(feedback::PRODUCT_NAME, "Widget Pro")?;
    wizard.go_next();
    wizard.update_field(feedback::FEEDBACK, "Works great for my needs")?;
    wizard.go_next();
    wizard.update_field(feedback::EMAIL, "user@example.com")?;
    wizard.submit();
    std::fs::write("feedback_submitted.html", to_html(&wizard, &options))?;

    println!("Generated feedback_step1.html and feedback_submitted.html");
    Ok(())
}

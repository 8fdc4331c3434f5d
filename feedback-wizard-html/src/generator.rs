//! HTML wizard renderer implementation.

use feedback_wizard::{
    FieldKind, FieldName, FieldValue, FieldView, FormSurface, StepperView, SummaryView, Wizard,
};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Title for the HTML document. Falls back to the form's title.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "wizard".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// A `FormSurface` that writes HTML markup.
///
/// Each render call appends to one of three sections: the step indicator,
/// the field list, and the summary.
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    prefix: String,
    stepper: String,
    fields: String,
    summary: String,
}

impl HtmlSurface {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// The step indicator markup.
    pub fn stepper(&self) -> &str {
        &self.stepper
    }

    /// Field and error markup, in render order.
    pub fn fields(&self) -> &str {
        &self.fields
    }

    /// Summary markup, empty until the form is submitted.
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl FormSurface for HtmlSurface {
    fn render_stepper(&mut self, stepper: &StepperView) {
        let prefix = &self.prefix;
        let mut html = format!("  <ol class=\"{prefix}-stepper\">\n");
        for (index, label) in stepper.labels.iter().enumerate() {
            let mut class = format!("{prefix}-step");
            if stepper.is_active(index) {
                class.push_str(&format!(" {prefix}-step-active"));
            }
            if stepper.is_completed(index) {
                class.push_str(&format!(" {prefix}-step-completed"));
            }
            let current = if stepper.is_active(index) {
                " aria-current=\"step\""
            } else {
                ""
            };
            html.push_str(&format!(
                "    <li class=\"{class}\"{current}>{}</li>\n",
                escape_html(label)
            ));
        }
        html.push_str("  </ol>\n");
        self.stepper = html;
    }

    fn render_field(&mut self, view: &FieldView<'_>) {
        let html = generate_field(view, &self.prefix);
        self.fields.push_str(&html);
    }

    fn render_error(&mut self, name: &FieldName, message: &str) {
        let prefix = &self.prefix;
        self.fields.push_str(&format!(
            "    <p id=\"{}-error\" class=\"{prefix}-error\" role=\"alert\">{}</p>\n",
            escape_html(name.as_str()),
            escape_html(message)
        ));
    }

    fn render_summary(&mut self, summary: &SummaryView) {
        let prefix = &self.prefix;
        let mut html = format!("  <section class=\"{prefix}-summary\">\n");
        html.push_str(&format!("    <h2>{}</h2>\n", escape_html(&summary.title)));
        html.push_str("    <dl>\n");
        for entry in &summary.entries {
            html.push_str(&format!(
                "      <dt>{}</dt><dd>{}</dd>\n",
                escape_html(&entry.label),
                escape_html(&entry.value.to_string())
            ));
        }
        html.push_str("    </dl>\n  </section>\n");
        self.summary = html;
    }
}

/// Render the wizard's current state as HTML.
pub fn to_html(wizard: &Wizard, options: &HtmlOptions) -> String {
    let mut surface = HtmlSurface::new(options.class_prefix.clone());
    wizard.render(&mut surface);

    let mut html = String::new();
    let prefix = &options.class_prefix;
    let title = options
        .title
        .as_ref()
        .or(wizard.definition().title.as_ref());

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<form class=\"{prefix}-form\" novalidate>\n"));

    if let Some(title) = title {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }

    html.push_str(surface.stepper());

    let step_label = wizard
        .current_step_definition()
        .map(|step| escape_html(step.label()))
        .unwrap_or_default();
    html.push_str(&format!(
        "  <fieldset class=\"{prefix}-step-fields\">\n    <legend>{step_label}</legend>\n"
    ));
    html.push_str(surface.fields());
    html.push_str("  </fieldset>\n");

    if !wizard.is_submitted() {
        html.push_str(&generate_buttons(wizard, prefix));
    }

    html.push_str(surface.summary());
    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

fn generate_buttons(wizard: &Wizard, prefix: &str) -> String {
    let back_disabled = if wizard.current_step() == 0 {
        " disabled"
    } else {
        ""
    };
    let (action, label) = if wizard.is_last_step() {
        ("submit", "Submit")
    } else {
        ("next", "Next")
    };
    format!(
        "  <div class=\"{prefix}-buttons\">\n    <button type=\"button\" name=\"action\" value=\"back\" class=\"{prefix}-back\"{back_disabled}>Back</button>\n    <button type=\"submit\" name=\"action\" value=\"{action}\" class=\"{prefix}-{action}\">{label}</button>\n  </div>\n"
    )
}

/// Generate HTML for a single field.
fn generate_field(view: &FieldView<'_>, prefix: &str) -> String {
    let field = view.field;
    let name = escape_html(field.name().as_str());
    let label = escape_html(field.label());
    let ind = "    ";

    let invalid = if view.error.is_some() {
        format!(" aria-invalid=\"true\" aria-describedby=\"{name}-error\"")
    } else {
        String::new()
    };
    let mut class = format!("{prefix}-field");
    if view.error.is_some() {
        class.push_str(&format!(" {prefix}-field-invalid"));
    }
    let placeholder = field
        .hint()
        .map(|hint| format!(" placeholder=\"{}\"", escape_html(hint)))
        .unwrap_or_default();

    let mut html = String::new();
    match field.kind() {
        FieldKind::Text => {
            let value = view
                .value
                .and_then(FieldValue::as_text)
                .map(escape_html)
                .unwrap_or_default();
            html.push_str(&format!("{ind}<div class=\"{class}\">\n"));
            html.push_str(&format!("{ind}  <label for=\"{name}\">{label}</label>\n"));
            html.push_str(&format!(
                "{ind}  <input type=\"text\" id=\"{name}\" name=\"{name}\" class=\"{prefix}-input\" value=\"{value}\"{placeholder}{invalid}>\n"
            ));
            html.push_str(&format!("{ind}</div>\n"));
        }

        FieldKind::Multiline { rows } => {
            let content = view
                .value
                .and_then(FieldValue::as_text)
                .map(escape_html)
                .unwrap_or_default();
            html.push_str(&format!("{ind}<div class=\"{class}\">\n"));
            html.push_str(&format!("{ind}  <label for=\"{name}\">{label}</label>\n"));
            html.push_str(&format!(
                "{ind}  <textarea id=\"{name}\" name=\"{name}\" rows=\"{rows}\" class=\"{prefix}-textarea\"{placeholder}{invalid}>{content}</textarea>\n"
            ));
            html.push_str(&format!("{ind}</div>\n"));
        }

        FieldKind::Rating { max, precision } => {
            let rating = view.value.and_then(FieldValue::as_float).unwrap_or(0.0);
            html.push_str(&format!("{ind}<div class=\"{class} {prefix}-rating\">\n"));
            html.push_str(&format!("{ind}  <label for=\"{name}\">{label}</label>\n"));
            html.push_str(&format!(
                "{ind}  <input type=\"number\" id=\"{name}\" name=\"{name}\" class=\"{prefix}-input\" min=\"0\" max=\"{max}\" step=\"{precision}\" value=\"{rating}\"{invalid}>\n"
            ));
            html.push_str(&format!("{ind}  <output for=\"{name}\">{rating} / {max}</output>\n"));
            html.push_str(&format!("{ind}</div>\n"));
        }

        FieldKind::Slider {
            min,
            max,
            step,
            unit,
        } => {
            let level = view.value.and_then(FieldValue::as_int).unwrap_or(*min);
            let unit = escape_html(unit.as_deref().unwrap_or_default());
            html.push_str(&format!("{ind}<div class=\"{class} {prefix}-slider\">\n"));
            html.push_str(&format!("{ind}  <label for=\"{name}\">{label}</label>\n"));
            html.push_str(&format!(
                "{ind}  <input type=\"range\" id=\"{name}\" name=\"{name}\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{level}\"{invalid}>\n"
            ));
            html.push_str(&format!("{ind}  <output for=\"{name}\">{level}{unit}</output>\n"));
            html.push_str(&format!("{ind}</div>\n"));
        }

        FieldKind::Toggle { options } => {
            let chosen = view.value.and_then(FieldValue::as_choice);
            html.push_str(&format!(
                "{ind}<fieldset class=\"{class} {prefix}-toggle\"{invalid}>\n"
            ));
            html.push_str(&format!("{ind}  <legend>{label}</legend>\n"));
            for (index, choice) in options.iter().enumerate() {
                let id = format!("{name}-{index}");
                let checked = if Some(choice.value.as_str()) == chosen {
                    " checked"
                } else {
                    ""
                };
                html.push_str(&format!(
                    "{ind}  <div class=\"{prefix}-radio-option\">\n{ind}    <input type=\"radio\" id=\"{id}\" name=\"{name}\" value=\"{}\"{checked}>\n{ind}    <label for=\"{id}\">{}</label>\n{ind}  </div>\n",
                    escape_html(&choice.value),
                    escape_html(&choice.label)
                ));
            }
            html.push_str(&format!("{ind}</fieldset>\n"));
        }

        FieldKind::MultiSelect { options } => {
            let selected = view.value.and_then(FieldValue::as_selection);
            html.push_str(&format!(
                "{ind}<fieldset class=\"{class} {prefix}-multiselect\"{invalid}>\n"
            ));
            html.push_str(&format!("{ind}  <legend>{label}</legend>\n"));
            for (index, choice) in options.iter().enumerate() {
                let id = format!("{name}-{index}");
                let checked = if selected.is_some_and(|set| set.contains(&choice.value)) {
                    " checked"
                } else {
                    ""
                };
                html.push_str(&format!(
                    "{ind}  <div class=\"{prefix}-checkbox-option\">\n{ind}    <input type=\"checkbox\" id=\"{id}\" name=\"{name}\" value=\"{}\"{checked}>\n{ind}    <label for=\"{id}\">{}</label>\n{ind}  </div>\n",
                    escape_html(&choice.value),
                    escape_html(&choice.label)
                ));
            }
            html.push_str(&format!("{ind}</fieldset>\n"));
        }

        FieldKind::Checkbox | FieldKind::Switch => {
            let checked = if view.value.and_then(FieldValue::as_bool).unwrap_or(false) {
                " checked"
            } else {
                ""
            };
            let role = if matches!(field.kind(), FieldKind::Switch) {
                " role=\"switch\""
            } else {
                ""
            };
            html.push_str(&format!("{ind}<div class=\"{class} {prefix}-checkbox\">\n"));
            html.push_str(&format!(
                "{ind}  <input type=\"checkbox\" id=\"{name}\" name=\"{name}\"{role}{checked}{invalid}>\n"
            ));
            html.push_str(&format!("{ind}  <label for=\"{name}\">{label}</label>\n"));
            html.push_str(&format!("{ind}</div>\n"));
        }
    }

    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-form {{
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-stepper {{
      display: flex;
      justify-content: space-between;
      list-style: none;
      padding: 0;
      counter-reset: step;
    }}
    .{prefix}-step {{
      color: #888;
      counter-increment: step;
    }}
    .{prefix}-step::before {{
      content: counter(step) ". ";
    }}
    .{prefix}-step-active {{
      color: #0077cc;
      font-weight: bold;
    }}
    .{prefix}-step-completed {{
      color: #2e7d32;
    }}
    .{prefix}-step-completed::before {{
      content: "\2713  ";
    }}
    .{prefix}-step-fields {{
      border: none;
      padding: 0;
    }}
    .{prefix}-field {{
      margin: 0.5rem 0;
    }}
    .{prefix}-field label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-input, .{prefix}-textarea {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-field-invalid .{prefix}-input, .{prefix}-field-invalid .{prefix}-textarea {{
      border-color: #c62828;
    }}
    .{prefix}-error {{
      color: #c62828;
      margin: 0.25rem 0 0.5rem;
      font-size: 0.9rem;
    }}
    .{prefix}-checkbox {{
      display: flex;
      align-items: center;
      gap: 0.5rem;
    }}
    .{prefix}-checkbox label {{
      display: inline;
    }}
    .{prefix}-radio-option, .{prefix}-checkbox-option {{
      margin: 0.25rem 0;
    }}
    .{prefix}-buttons {{
      display: flex;
      justify-content: space-between;
      margin-top: 1rem;
    }}
    .{prefix}-buttons button {{
      padding: 0.5rem 1rem;
    }}
    .{prefix}-summary {{
      margin-top: 1rem;
      padding: 0.5rem 1rem;
      background: #f5f5f5;
    }}
    .{prefix}-summary dt {{
      font-weight: bold;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use feedback_wizard::feedback;

    use super::*;

    fn fragment(wizard: &Wizard) -> String {
        to_html(wizard, &HtmlOptions::new().full_document(false))
    }

    fn submitted() -> Wizard {
        let mut wizard = Wizard::new(feedback::form());
        wizard.update_field(feedback::PRODUCT_NAME, "Widget").unwrap();
        wizard.go_next();
        wizard
            .update_field(feedback::FEEDBACK, "Works great for me")
            .unwrap();
        wizard.go_next();
        wizard.update_field(feedback::EMAIL, "user@example.com").unwrap();
        wizard.submit();
        wizard
    }

    #[test]
    fn html_options_creation() {
        let _options = HtmlOptions::new();
        let _with_title = HtmlOptions::new().with_title("Test");
        let _with_styles = HtmlOptions::new().with_styles(true);
        let _full_doc = HtmlOptions::new().full_document(true);
        let _with_prefix = HtmlOptions::new().with_class_prefix("custom");
        let _default = HtmlOptions::default();
    }

    #[test]
    fn html_options_chaining() {
        let options = HtmlOptions::new()
            .with_title("Test Form")
            .with_styles(true)
            .full_document(true)
            .with_class_prefix("my-form");

        assert_eq!(options.title, Some("Test Form".to_string()));
        assert!(options.include_styles);
        assert!(options.full_document);
        assert_eq!(options.class_prefix, "my-form");
    }

    #[test]
    fn escape_html_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn user_text_is_escaped() {
        let mut wizard = Wizard::new(feedback::form());
        wizard
            .update_field(feedback::PRODUCT_NAME, "<script>alert(1)</script>")
            .unwrap();
        wizard.go_next();

        let html = fragment(&wizard);
        assert!(!html.contains("<script>"));
        assert!(html.contains("value=\"&lt;script&gt;alert(1)&lt;/script&gt;\""));
        assert!(!html.contains("Product name must be at least 3 characters long"));
        assert!(html.contains("Product name must only contain letters and spaces"));
    }

    #[test]
    fn full_document_uses_form_title_and_styles() {
        let wizard = Wizard::new(feedback::form());
        let html = to_html(&wizard, &HtmlOptions::new());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Product Feedback</title>"));
        assert!(html.contains(".wizard-stepper {"));
        assert!(html.ends_with("</html>\n"));

        let bare = to_html(
            &wizard,
            &HtmlOptions::new()
                .with_title("Custom")
                .with_styles(false)
                .with_class_prefix("fb"),
        );
        assert!(bare.contains("<title>Custom</title>"));
        assert!(!bare.contains("<style>"));
        assert!(bare.contains("<form class=\"fb-form\" novalidate>"));
    }

    #[test]
    fn stepper_classes_follow_progress() {
        let mut wizard = Wizard::new(feedback::form());
        wizard.update_field(feedback::PRODUCT_NAME, "Widget").unwrap();
        wizard.go_next();

        let html = fragment(&wizard);
        assert!(html.contains(
            "<li class=\"wizard-step wizard-step-completed\">Product Details</li>"
        ));
        assert!(html.contains(
            "<li class=\"wizard-step wizard-step-active\" aria-current=\"step\">Feedback Details</li>"
        ));
        assert!(html.contains("<li class=\"wizard-step\">Additional Information</li>"));
        assert!(html.contains("value=\"back\" class=\"wizard-back\">Back</button>"));
        assert!(html.contains(">Next</button>"));
    }

    #[test]
    fn errors_are_attached_to_their_field() {
        let mut wizard = Wizard::new(feedback::form());
        wizard.go_next();

        let html = fragment(&wizard);
        assert!(html.contains("<div class=\"wizard-field wizard-field-invalid\">"));
        assert!(html.contains("aria-describedby=\"productName-error\""));
        assert!(html.contains(
            "<p id=\"productName-error\" class=\"wizard-error\" role=\"alert\">Product name is required</p>"
        ));
        assert!(html.contains("value=\"back\" class=\"wizard-back\" disabled>Back</button>"));
    }

    #[test]
    fn last_step_shows_submit() {
        let mut wizard = Wizard::new(feedback::form());
        wizard.update_field(feedback::PRODUCT_NAME, "Widget").unwrap();
        wizard.go_next();
        wizard
            .update_field(feedback::FEEDBACK, "Works great for me")
            .unwrap();
        wizard.go_next();

        let html = fragment(&wizard);
        assert!(html.contains("value=\"submit\" class=\"wizard-submit\">Submit</button>"));
        assert!(html.contains("role=\"switch\" checked"));
        assert!(!html.contains("wizard-summary"));
    }

    #[test]
    fn summary_after_submission() {
        let html = fragment(&submitted());

        assert!(!html.contains("wizard-buttons"));
        assert!(html.contains("<h2>Submitted Feedback</h2>"));
        assert!(html.contains("<dt>Product Name</dt><dd>Widget</dd>"));
        assert!(html.contains("<dt>Rating</dt><dd>2.5 / 5</dd>"));
        assert!(html.contains("<dt>Satisfaction Level</dt><dd>50%</dd>"));
        assert!(html.contains("<dt>Favorite Features</dt><dd>None</dd>"));
        assert!(html.contains("<dt>Newsletter Subscription</dt><dd>✓</dd>"));
        assert!(html.contains("wizard-step wizard-step-active wizard-step-completed"));
    }
}

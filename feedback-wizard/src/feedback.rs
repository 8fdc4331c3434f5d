//! The three-step product feedback form.
//!
//! Step 1 asks about the product, step 2 collects the feedback itself and
//! step 3 gathers contact preferences. [`FeedbackRecord`] is the typed view of
//! a finished submission.

use std::collections::BTreeSet;

use feedback_wizard_types::{
    Choice, Field, FieldKind, FieldName, FieldValue, FormDefinition, FormError, Pattern, Rule,
    Step, Submission,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const PRODUCT_NAME: &str = "productName";
pub const RATING: &str = "rating";
pub const SATISFACTION: &str = "satisfaction";
pub const FEEDBACK: &str = "feedback";
pub const RECOMMEND: &str = "recommend";
pub const FEATURES: &str = "features";
pub const EMAIL: &str = "email";
pub const SUBSCRIBE: &str = "subscribe";
pub const PROMO_OPT_IN: &str = "promoOptIn";

/// Letters and whitespace only.
pub static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern is valid"));

pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Options offered by the favorite-features multi-select.
pub const FEATURE_OPTIONS: [&str; 4] = [
    "Ease of use",
    "Performance",
    "Value for money",
    "Customer Support",
];

/// Build the feedback form definition.
pub fn form() -> FormDefinition {
    FormDefinition::new(vec![product_step(), feedback_step(), additional_step()])
        .with_title("Product Feedback")
        .with_summary_title("Submitted Feedback")
}

fn product_step() -> Step {
    Step::new(
        "Product Details",
        vec![
            Field::new(PRODUCT_NAME, "Product Name", FieldKind::Text, "")
                .with_hint("Enter the product name")
                .with_rule(Rule::required("Product name is required"))
                .with_rule(Rule::min_length(
                    3,
                    "Product name must be at least 3 characters long",
                ))
                .with_rule(Rule::pattern(
                    Pattern::from(NAME_PATTERN.clone()),
                    "Product name must only contain letters and spaces",
                )),
            Field::new(
                RATING,
                "Rate Your Experience",
                FieldKind::Rating {
                    max: 5.0,
                    precision: 0.5,
                },
                2.5,
            )
            .with_summary_label("Rating"),
        ],
    )
}

fn feedback_step() -> Step {
    Step::new(
        "Feedback Details",
        vec![
            Field::new(
                SATISFACTION,
                "Satisfaction Level (0-100%)",
                FieldKind::Slider {
                    min: 0,
                    max: 100,
                    step: 10,
                    unit: Some("%".to_string()),
                },
                50,
            )
            .with_summary_label("Satisfaction Level"),
            Field::new(FEEDBACK, "Your Feedback", FieldKind::Multiline { rows: 4 }, "")
                .with_summary_label("Feedback")
                .with_rule(Rule::required("Feedback is required"))
                .with_rule(Rule::min_length(
                    10,
                    "Feedback must be at least 10 characters long",
                )),
            Field::new(
                RECOMMEND,
                "Would you recommend this product?",
                FieldKind::Toggle {
                    options: vec![Choice::new("yes", "Yes"), Choice::new("no", "No")],
                },
                FieldValue::choice("yes"),
            )
            .with_summary_label("Recommend"),
        ],
    )
}

fn additional_step() -> Step {
    Step::new(
        "Additional Information",
        vec![
            Field::new(
                FEATURES,
                "Favorite Features",
                FieldKind::MultiSelect {
                    options: FEATURE_OPTIONS.into_iter().map(Choice::plain).collect(),
                },
                FieldValue::selection(Vec::<String>::new()),
            )
            .with_hint("Select your favorite features"),
            Field::new(EMAIL, "Email Address", FieldKind::Text, "")
                .with_hint("Enter your email")
                .with_summary_label("Email")
                .with_rule(Rule::required("Email is required"))
                .with_rule(Rule::pattern(
                    Pattern::from(EMAIL_PATTERN.clone()),
                    "Invalid email address",
                )),
            Field::new(
                SUBSCRIBE,
                "Subscribe to our newsletter for the latest updates",
                FieldKind::Checkbox,
                true,
            )
            .with_summary_label("Newsletter Subscription"),
            Field::new(
                PROMO_OPT_IN,
                "Receive promotional emails about similar products",
                FieldKind::Switch,
                true,
            )
            .with_summary_label("Promotional Emails Opt-In"),
        ],
    )
}

/// A finished feedback submission as a plain struct.
///
/// Serializes with the same camelCase keys the form uses for its fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub product_name: String,
    pub rating: f64,
    pub feedback: String,
    pub recommend: String,
    pub features: BTreeSet<String>,
    pub email: String,
    pub subscribe: bool,
    pub satisfaction: i64,
    pub promo_opt_in: bool,
}

impl FeedbackRecord {
    /// Read a submission of [`form`] back into a typed record.
    pub fn from_submission(submission: &Submission) -> Result<Self, FormError> {
        let values = submission.values();
        Ok(Self {
            product_name: values.get_text(&FieldName::new(PRODUCT_NAME))?.to_string(),
            rating: values.get_float(&FieldName::new(RATING))?,
            feedback: values.get_text(&FieldName::new(FEEDBACK))?.to_string(),
            recommend: values.get_choice(&FieldName::new(RECOMMEND))?.to_string(),
            features: values.get_selection(&FieldName::new(FEATURES))?.clone(),
            email: values.get_text(&FieldName::new(EMAIL))?.to_string(),
            subscribe: values.get_bool(&FieldName::new(SUBSCRIBE))?,
            satisfaction: values.get_int(&FieldName::new(SATISFACTION))?,
            promo_opt_in: values.get_bool(&FieldName::new(PROMO_OPT_IN))?,
        })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl TryFrom<&Submission> for FeedbackRecord {
    type Error = FormError;

    fn try_from(submission: &Submission) -> Result<Self, Self::Error> {
        Self::from_submission(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_steps_in_order() {
        let form = form();
        let labels: Vec<_> = form.steps().iter().map(Step::label).collect();
        assert_eq!(
            labels,
            vec!["Product Details", "Feedback Details", "Additional Information"]
        );
    }

    #[test]
    fn fields_per_step() {
        let form = form();
        let names = |i: usize| -> Vec<String> {
            form.steps()[i]
                .fields()
                .iter()
                .map(|f| f.name().to_string())
                .collect()
        };
        assert_eq!(names(0), vec![PRODUCT_NAME, RATING]);
        assert_eq!(names(1), vec![SATISFACTION, FEEDBACK, RECOMMEND]);
        assert_eq!(names(2), vec![FEATURES, EMAIL, SUBSCRIBE, PROMO_OPT_IN]);
    }

    #[test]
    fn defaults() {
        let values = form().default_values();
        assert_eq!(values.len(), 9);
        assert_eq!(values.get_text(&PRODUCT_NAME.into()).unwrap(), "");
        assert_eq!(values.get_float(&RATING.into()).unwrap(), 2.5);
        assert_eq!(values.get_text(&FEEDBACK.into()).unwrap(), "");
        assert_eq!(values.get_choice(&RECOMMEND.into()).unwrap(), "yes");
        assert!(values.get_selection(&FEATURES.into()).unwrap().is_empty());
        assert_eq!(values.get_text(&EMAIL.into()).unwrap(), "");
        assert!(values.get_bool(&SUBSCRIBE.into()).unwrap());
        assert_eq!(values.get_int(&SATISFACTION.into()).unwrap(), 50);
        assert!(values.get_bool(&PROMO_OPT_IN.into()).unwrap());
    }

    #[test]
    fn patterns() {
        assert!(NAME_PATTERN.is_match("John Doe"));
        assert!(!NAME_PATTERN.is_match("John3"));
        assert!(EMAIL_PATTERN.is_match("a@b.co"));
        assert!(!EMAIL_PATTERN.is_match("a@b"));
    }

    #[test]
    fn record_serializes_with_form_keys() {
        let record = FeedbackRecord {
            product_name: "Widget Pro".to_string(),
            rating: 4.5,
            feedback: "Works great for my needs".to_string(),
            recommend: "yes".to_string(),
            features: BTreeSet::from(["Performance".to_string()]),
            email: "user@example.com".to_string(),
            subscribe: false,
            satisfaction: 70,
            promo_opt_in: true,
        };
        let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(json["productName"], "Widget Pro");
        assert_eq!(json["promoOptIn"], true);
        assert_eq!(json["features"][0], "Performance");
    }

    #[test]
    fn record_from_default_values() {
        let submission = Submission::new(form().default_values());
        let record = FeedbackRecord::try_from(&submission).unwrap();
        assert_eq!(record.rating, 2.5);
        assert_eq!(record.satisfaction, 50);
    }
}

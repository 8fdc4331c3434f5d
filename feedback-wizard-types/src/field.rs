use crate::{FieldName, FieldValue, FormError, Rule};

/// One option of a toggle group or multi-select.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// The stored value, e.g. `"yes"`.
    pub value: String,

    /// The text shown to the user, e.g. `"Yes"`.
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// An option whose label is its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// The kind of widget a field is rendered with.
///
/// Each kind accepts exactly one `FieldValue` variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line text input.
    Text,

    /// Multi-line text input.
    Multiline { rows: u16 },

    /// Star rating from 0 to `max` in steps of `precision`.
    Rating { max: f64, precision: f64 },

    /// Integer slider.
    Slider {
        min: i64,
        max: i64,
        step: i64,
        /// Suffix used in summaries, e.g. `"%"`.
        unit: Option<String>,
    },

    /// Exclusive toggle group; exactly one option is chosen.
    Toggle { options: Vec<Choice> },

    /// Any number of options.
    MultiSelect { options: Vec<Choice> },

    /// Checkbox.
    Checkbox,

    /// On/off switch.
    Switch,
}

impl FieldKind {
    /// The `FieldValue` type name this kind accepts.
    pub fn value_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Multiline { .. } => "Text",
            Self::Rating { .. } => "Float",
            Self::Slider { .. } => "Int",
            Self::Toggle { .. } => "Choice",
            Self::MultiSelect { .. } => "Selection",
            Self::Checkbox | Self::Switch => "Bool",
        }
    }

    /// The options of a toggle group or multi-select.
    pub fn options(&self) -> &[Choice] {
        match self {
            Self::Toggle { options } | Self::MultiSelect { options } => options,
            _ => &[],
        }
    }

    /// Check if this is a text kind (single or multi-line).
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text | Self::Multiline { .. })
    }

    fn has_option(&self, value: &str) -> bool {
        self.options().iter().any(|choice| choice.value == value)
    }
}

/// A single field of a form step.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: FieldName,
    label: String,
    summary_label: String,
    hint: Option<String>,
    kind: FieldKind,
    default: FieldValue,
    rules: Vec<Rule>,
}

impl Field {
    /// Create a new field. The summary label starts out equal to the label.
    pub fn new(
        name: impl Into<FieldName>,
        label: impl Into<String>,
        kind: FieldKind,
        default: impl Into<FieldValue>,
    ) -> Self {
        let label = label.into();
        Self {
            name: name.into(),
            summary_label: label.clone(),
            label,
            hint: None,
            kind,
            default: default.into(),
            rules: Vec::new(),
        }
    }

    /// Set the label used in the submission summary.
    pub fn with_summary_label(mut self, label: impl Into<String>) -> Self {
        self.summary_label = label.into();
        self
    }

    /// Set placeholder text for empty inputs.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Append a rule. Rules are evaluated in the order they were added.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn summary_label(&self) -> &str {
        &self.summary_label
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn default_value(&self) -> &FieldValue {
        &self.default
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run the rules in order and return the first failing message.
    pub fn validate(&self, value: Option<&FieldValue>) -> Option<&str> {
        self.rules.iter().find_map(|rule| rule.check(value).err())
    }

    /// Check that a value fits this field's kind, options and bounds.
    pub fn accepts(&self, value: &FieldValue) -> Result<(), FormError> {
        let expected = self.kind.value_type();
        if value.type_name() != expected {
            return Err(FormError::TypeMismatch {
                field: self.name.clone(),
                expected,
                actual: value.type_name(),
            });
        }

        if !self.in_range(value) {
            return Err(FormError::OutOfRange {
                field: self.name.clone(),
                value: match value {
                    FieldValue::Float(v) => v.to_string(),
                    FieldValue::Int(v) => v.to_string(),
                    other => format!("{other:?}"),
                },
            });
        }

        let unknown = match value {
            FieldValue::Choice(choice) if !choice.is_empty() => {
                Some(choice).filter(|c| !self.kind.has_option(c))
            }
            FieldValue::Selection(set) => set.iter().find(|v| !self.kind.has_option(v)),
            _ => None,
        };
        match unknown {
            Some(option) => Err(FormError::UnknownOption {
                field: self.name.clone(),
                option: option.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Ratings lie on `0..=max` in multiples of `precision`; slider values on
    /// `min..=max` in multiples of `step` from `min`.
    fn in_range(&self, value: &FieldValue) -> bool {
        match (&self.kind, value) {
            (FieldKind::Rating { max, precision }, FieldValue::Float(v)) => {
                if !v.is_finite() || *v < 0.0 || v > max {
                    return false;
                }
                if *precision <= 0.0 {
                    return true;
                }
                let units = v / precision;
                (units - units.round()).abs() < 1e-9
            }
            (FieldKind::Slider { min, max, step, .. }, FieldValue::Int(v)) => {
                (*min..=*max).contains(v) && (*step <= 0 || (v - min) % step == 0)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommend() -> Field {
        Field::new(
            "recommend",
            "Would you recommend this product?",
            FieldKind::Toggle {
                options: vec![Choice::new("yes", "Yes"), Choice::new("no", "No")],
            },
            FieldValue::choice("yes"),
        )
    }

    #[test]
    fn first_failing_rule_wins() {
        let field = Field::new("feedback", "Your Feedback", FieldKind::Text, "")
            .with_rule(Rule::required("Feedback is required"))
            .with_rule(Rule::min_length(10, "too short"));

        assert_eq!(field.validate(Some(&"".into())), Some("Feedback is required"));
        assert_eq!(field.validate(Some(&"short".into())), Some("too short"));
        assert_eq!(field.validate(Some(&"long enough text".into())), None);
    }

    #[test]
    fn field_without_rules_always_passes() {
        let field = Field::new("subscribe", "Subscribe", FieldKind::Checkbox, true);
        assert_eq!(field.validate(None), None);
    }

    #[test]
    fn accepts_checks_variant() {
        let field = recommend();
        assert!(field.accepts(&FieldValue::choice("no")).is_ok());
        assert!(matches!(
            field.accepts(&FieldValue::from("no")),
            Err(FormError::TypeMismatch {
                expected: "Choice",
                actual: "Text",
                ..
            })
        ));
    }

    #[test]
    fn accepts_checks_options() {
        let field = recommend();
        assert_eq!(
            field.accepts(&FieldValue::choice("maybe")),
            Err(FormError::UnknownOption {
                field: FieldName::new("recommend"),
                option: "maybe".to_string(),
            })
        );
    }

    fn rating() -> Field {
        Field::new(
            "rating",
            "Rate Your Experience",
            FieldKind::Rating {
                max: 5.0,
                precision: 0.5,
            },
            2.5,
        )
    }

    fn satisfaction() -> Field {
        Field::new(
            "satisfaction",
            "Satisfaction Level",
            FieldKind::Slider {
                min: 0,
                max: 100,
                step: 10,
                unit: Some("%".to_string()),
            },
            50,
        )
    }

    #[test]
    fn rating_must_be_finite_bounded_and_on_precision() {
        let field = rating();
        for ok in [0.0, 0.5, 4.5, 5.0] {
            assert!(field.accepts(&FieldValue::Float(ok)).is_ok(), "{ok}");
        }
        for bad in [f64::NAN, f64::INFINITY, -3.7, -0.5, 5.5, 4.3] {
            assert!(
                matches!(
                    field.accepts(&FieldValue::Float(bad)),
                    Err(FormError::OutOfRange { .. })
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn slider_must_be_bounded_and_on_step() {
        let field = satisfaction();
        assert!(field.accepts(&FieldValue::Int(0)).is_ok());
        assert!(field.accepts(&FieldValue::Int(70)).is_ok());
        assert!(field.accepts(&FieldValue::Int(100)).is_ok());
        assert_eq!(
            field.accepts(&FieldValue::Int(1000)),
            Err(FormError::OutOfRange {
                field: FieldName::new("satisfaction"),
                value: "1000".to_string(),
            })
        );
        assert!(field.accepts(&FieldValue::Int(-10)).is_err());
        assert!(field.accepts(&FieldValue::Int(55)).is_err());
    }

    #[test]
    fn summary_label_defaults_to_label() {
        let field = recommend();
        assert_eq!(field.summary_label(), field.label());
        let field = field.with_summary_label("Recommend");
        assert_eq!(field.summary_label(), "Recommend");
    }
}

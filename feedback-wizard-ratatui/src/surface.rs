//! A `FormSurface` that turns render calls into styled ratatui lines.

use feedback_wizard::{
    FieldKind, FieldName, FieldValue, FieldView, FormSurface, StepperView, SummaryView,
};
use ratatui::{
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
};

use crate::Theme;

/// Collects the stepper, field rows and summary as styled lines.
#[derive(Debug, Clone)]
pub struct TuiSurface {
    theme: Theme,
    focus: usize,
    option_cursor: usize,
    stepper: Line<'static>,
    body: Vec<Line<'static>>,
    summary: Vec<Line<'static>>,
    fields_seen: usize,
}

impl TuiSurface {
    pub fn new(theme: Theme, focus: usize, option_cursor: usize) -> Self {
        Self {
            theme,
            focus,
            option_cursor,
            stepper: Line::default(),
            body: Vec::new(),
            summary: Vec::new(),
            fields_seen: 0,
        }
    }

    pub fn stepper(&self) -> &Line<'static> {
        &self.stepper
    }

    /// Field rows and inline errors, in render order.
    pub fn body(&self) -> &[Line<'static>] {
        &self.body
    }

    /// Summary lines, empty until the form is submitted.
    pub fn summary(&self) -> &[Line<'static>] {
        &self.summary
    }

    fn value_lines(
        &self,
        kind: &FieldKind,
        value: Option<&FieldValue>,
        focused: bool,
    ) -> Vec<Line<'static>> {
        let text = Style::default().fg(self.theme.text);
        match (kind, value) {
            (FieldKind::Text | FieldKind::Multiline { .. }, value) => {
                let content = value.and_then(FieldValue::as_text).unwrap_or_default();
                let cursor = if focused { "█" } else { "" };
                let mut lines: Vec<Line<'static>> = content
                    .split('\n')
                    .map(|row| Line::styled(format!("    {row}"), text))
                    .collect();
                if let Some(last) = lines.last_mut() {
                    last.push_span(Span::styled(
                        cursor,
                        Style::default().fg(self.theme.highlight),
                    ));
                }
                lines
            }
            (FieldKind::Rating { max, precision }, value) => {
                let rating = value.and_then(FieldValue::as_float).unwrap_or(0.0);
                let full = rating.floor() as usize;
                let half = rating - rating.floor() >= *precision && *precision < 1.0;
                let total = max.ceil() as usize;
                let empty = total.saturating_sub(full + usize::from(half));
                let stars = format!(
                    "    {}{}{}  {rating} / {max}",
                    "★".repeat(full),
                    if half { "⯪" } else { "" },
                    "☆".repeat(empty),
                );
                vec![Line::styled(stars, Style::default().fg(self.theme.highlight))]
            }
            (FieldKind::Slider { min, max, unit, .. }, value) => {
                let level = value.and_then(FieldValue::as_int).unwrap_or(*min);
                let width = 20usize;
                let span = (max - min).max(1);
                let filled = ((level - min).clamp(0, span) as usize * width) / span as usize;
                let bar = format!(
                    "    {}{} {level}{}",
                    "━".repeat(filled),
                    "─".repeat(width - filled),
                    unit.as_deref().unwrap_or_default(),
                );
                vec![Line::styled(bar, Style::default().fg(self.theme.primary))]
            }
            (FieldKind::Toggle { options }, value) => {
                let chosen = value.and_then(FieldValue::as_choice);
                let mut line = Line::from("    ");
                for choice in options {
                    let label = format!(" {} ", choice.label);
                    if Some(choice.value.as_str()) == chosen {
                        line.push_span(Span::styled(
                            label,
                            Style::default().fg(self.theme.background).bg(self.theme.primary),
                        ));
                    } else {
                        line.push_span(Span::styled(label, text));
                    }
                }
                vec![line]
            }
            (FieldKind::MultiSelect { options }, value) => {
                let selected = value.and_then(FieldValue::as_selection);
                options
                    .iter()
                    .enumerate()
                    .map(|(index, choice)| {
                        let checked = selected.is_some_and(|set| set.contains(&choice.value));
                        let marker = if checked { "[x]" } else { "[ ]" };
                        let pointer = if focused && index == self.option_cursor {
                            "> "
                        } else {
                            "  "
                        };
                        let style = if checked {
                            Style::default().fg(self.theme.success)
                        } else {
                            text
                        };
                        Line::styled(format!("  {pointer}{marker} {}", choice.label), style)
                    })
                    .collect()
            }
            (FieldKind::Checkbox, value) => {
                let on = value.and_then(FieldValue::as_bool).unwrap_or(false);
                vec![Line::styled(
                    format!("    [{}]", if on { "x" } else { " " }),
                    text,
                )]
            }
            (FieldKind::Switch, value) => {
                let on = value.and_then(FieldValue::as_bool).unwrap_or(false);
                let style = if on {
                    Style::default().fg(self.theme.success)
                } else {
                    Style::default().fg(self.theme.border)
                };
                vec![Line::styled(if on { "    (●  ) on" } else { "    (  ●) off" }, style)]
            }
        }
    }
}

impl FormSurface for TuiSurface {
    fn render_stepper(&mut self, stepper: &StepperView) {
        let mut line = Line::default();
        for (index, label) in stepper.labels.iter().enumerate() {
            if index > 0 {
                line.push_span(Span::styled(" ── ", Style::default().fg(self.theme.border)));
            }
            let (marker, style) = if stepper.is_completed(index) {
                ("✓", Style::default().fg(self.theme.success))
            } else if stepper.is_active(index) {
                ("●", Style::default().fg(self.theme.primary).bold())
            } else {
                ("○", Style::default().fg(self.theme.border))
            };
            line.push_span(Span::styled(format!("{marker} {} {label}", index + 1), style));
        }
        self.stepper = line;
    }

    fn render_field(&mut self, view: &FieldView<'_>) {
        let focused = self.fields_seen == self.focus;
        self.fields_seen += 1;

        let label_style = if focused {
            Style::default()
                .fg(self.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.text)
        };
        let pointer = if focused { "▸ " } else { "  " };
        let mut label = Line::styled(format!("{pointer}{}", view.field.label()), label_style);
        if let Some(hint) = view.field.hint() {
            label.push_span(Span::styled(
                format!("  ({hint})"),
                Style::default().fg(self.theme.border),
            ));
        }
        self.body.push(label);

        let lines = self.value_lines(view.field.kind(), view.value, focused);
        self.body.extend(lines);
    }

    fn render_error(&mut self, _name: &FieldName, message: &str) {
        self.body.push(Line::styled(
            format!("    ✗ {message}"),
            Style::default().fg(self.theme.error),
        ));
    }

    fn render_summary(&mut self, summary: &SummaryView) {
        self.summary = summary
            .entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", entry.label),
                        Style::default().fg(self.theme.secondary).bold(),
                    ),
                    Span::styled(entry.value.to_string(), Style::default().fg(self.theme.text)),
                ])
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use feedback_wizard::{Wizard, feedback};

    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn rendered(wizard: &Wizard, focus: usize) -> TuiSurface {
        let mut surface = TuiSurface::new(Theme::default(), focus, 0);
        wizard.render(&mut surface);
        surface
    }

    #[test]
    fn stepper_marks_active_and_completed_steps() {
        let mut wizard = Wizard::new(feedback::form());
        wizard.update_field(feedback::PRODUCT_NAME, "Widget").unwrap();
        wizard.go_next();

        let surface = rendered(&wizard, 0);
        assert_eq!(
            plain(surface.stepper()),
            "✓ 1 Product Details ── ● 2 Feedback Details ── ○ 3 Additional Information"
        );
    }

    #[test]
    fn errors_follow_their_field() {
        let mut wizard = Wizard::new(feedback::form());
        wizard.go_next();

        let surface = rendered(&wizard, 0);
        let body: Vec<String> = surface.body().iter().map(plain).collect();
        assert_eq!(body[0], "▸ Product Name  (Enter the product name)");
        assert_eq!(body[1], "    █");
        assert_eq!(body[2], "    ✗ Product name is required");
        assert_eq!(body[3], "  Rate Your Experience");
        assert_eq!(body[4], "    ★★⯪☆☆  2.5 / 5");
        assert!(surface.summary().is_empty());
    }

    #[test]
    fn summary_lines_after_submission() {
        let mut wizard = Wizard::new(feedback::form());
        wizard.update_field(feedback::PRODUCT_NAME, "Widget").unwrap();
        wizard.go_next();
        wizard
            .update_field(feedback::FEEDBACK, "Works great for me")
            .unwrap();
        wizard.go_next();
        wizard.update_field(feedback::EMAIL, "user@example.com").unwrap();
        wizard.submit();

        let surface = rendered(&wizard, 0);
        let summary: Vec<String> = surface.summary().iter().map(plain).collect();
        assert_eq!(summary.len(), 9);
        assert_eq!(summary[0], "Product Name: Widget");
        assert!(summary.contains(&"Favorite Features: None".to_string()));
        assert!(summary.contains(&"Newsletter Subscription: ✓".to_string()));
    }
}

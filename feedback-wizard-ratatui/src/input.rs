//! Key handling for the terminal wizard.
//!
//! Kept free of any terminal I/O so it can be driven from tests with plain
//! `KeyEvent`s.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use feedback_wizard::{Field, FieldKind, FieldValue, FormError, Transition, Wizard};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    /// The user gave up before submitting.
    Cancel,
    /// The user closed the summary after submitting.
    Exit,
}

/// Focus and cursor state of the terminal UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Index of the focused field within the current step.
    focus: usize,
    /// Highlighted option of a focused multi-select.
    option: usize,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn option_cursor(&self) -> usize {
        self.option
    }

    /// The field that has focus on the current step.
    pub fn focused<'w>(&self, wizard: &'w Wizard) -> Option<&'w Field> {
        wizard
            .current_step_definition()
            .and_then(|step| step.fields().get(self.focus))
    }

    /// Apply one key press to the wizard.
    pub fn handle_key(
        &mut self,
        wizard: &mut Wizard,
        key: KeyEvent,
    ) -> Result<KeyOutcome, FormError> {
        if wizard.is_submitted() {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Enter => KeyOutcome::Exit,
                _ => KeyOutcome::Continue,
            });
        }

        match key.code {
            KeyCode::Esc => return Ok(KeyOutcome::Cancel),
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.newline(wizard)?;
            }
            KeyCode::Enter => self.next(wizard),
            KeyCode::PageUp => self.back(wizard),
            KeyCode::Tab => self.move_focus(wizard, 1),
            KeyCode::BackTab => self.move_focus(wizard, -1),
            KeyCode::Left => self.adjust(wizard, -1)?,
            KeyCode::Right => self.adjust(wizard, 1)?,
            KeyCode::Char(' ') if !self.focused(wizard).is_some_and(|f| f.kind().is_text()) => {
                self.toggle(wizard)?;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_text(wizard, |text| text.push(c))?;
            }
            KeyCode::Backspace => {
                self.edit_text(wizard, |text| {
                    text.pop();
                })?;
            }
            _ => {}
        }
        Ok(KeyOutcome::Continue)
    }

    fn next(&mut self, wizard: &mut Wizard) {
        match wizard.go_next() {
            Transition::Advanced { from, to } => {
                tracing::debug!(from, to, "moved to next step");
                self.reset();
            }
            Transition::Blocked(errors) => {
                // Jump to the first field that needs fixing.
                if let Some(index) = wizard.current_step_definition().and_then(|step| {
                    step.fields()
                        .iter()
                        .position(|field| errors.contains(field.name()))
                }) {
                    self.focus = index;
                    self.option = 0;
                }
            }
            _ => {}
        }
    }

    fn back(&mut self, wizard: &mut Wizard) {
        if let Transition::Retreated { from, to } = wizard.go_back() {
            tracing::debug!(from, to, "moved to previous step");
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.focus = 0;
        self.option = 0;
    }

    fn move_focus(&mut self, wizard: &Wizard, delta: isize) {
        let count = wizard
            .current_step_definition()
            .map_or(0, |step| step.fields().len());
        if count == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(count as isize) as usize;
        self.option = 0;
    }

    fn edit_text(
        &mut self,
        wizard: &mut Wizard,
        edit: impl FnOnce(&mut String),
    ) -> Result<(), FormError> {
        let Some(field) = self.focused(wizard).filter(|f| f.kind().is_text()) else {
            return Ok(());
        };
        let name = field.name().clone();
        let mut text = wizard
            .values()
            .get(&name)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
            .to_string();
        edit(&mut text);
        wizard.update_field(name, text)
    }

    fn newline(&mut self, wizard: &mut Wizard) -> Result<(), FormError> {
        if !matches!(
            self.focused(wizard).map(Field::kind),
            Some(FieldKind::Multiline { .. })
        ) {
            return Ok(());
        }
        self.edit_text(wizard, |text| text.push('\n'))
    }

    fn adjust(&mut self, wizard: &mut Wizard, delta: i64) -> Result<(), FormError> {
        let Some(field) = self.focused(wizard).cloned() else {
            return Ok(());
        };
        let current = wizard.values().get(field.name());

        let value = match field.kind() {
            FieldKind::Rating { max, precision } => {
                let rating = current.and_then(FieldValue::as_float).unwrap_or(0.0);
                FieldValue::Float((rating + delta as f64 * precision).clamp(0.0, *max))
            }
            FieldKind::Slider { min, max, step, .. } => {
                let level = current.and_then(FieldValue::as_int).unwrap_or(*min);
                FieldValue::Int((level + delta * step).clamp(*min, *max))
            }
            FieldKind::Toggle { options } if !options.is_empty() => {
                let chosen = current.and_then(FieldValue::as_choice);
                let index = options
                    .iter()
                    .position(|choice| Some(choice.value.as_str()) == chosen)
                    .unwrap_or(0) as i64;
                let next = (index + delta).rem_euclid(options.len() as i64) as usize;
                FieldValue::choice(options[next].value.clone())
            }
            FieldKind::MultiSelect { options } if !options.is_empty() => {
                let last = options.len() - 1;
                self.option = (self.option as i64 + delta).clamp(0, last as i64) as usize;
                return Ok(());
            }
            _ => return Ok(()),
        };
        wizard.update_field(field.name().clone(), value)
    }

    fn toggle(&mut self, wizard: &mut Wizard) -> Result<(), FormError> {
        let Some(field) = self.focused(wizard).cloned() else {
            return Ok(());
        };
        let current = wizard.values().get(field.name());

        let value = match field.kind() {
            FieldKind::Checkbox | FieldKind::Switch => {
                FieldValue::Bool(!current.and_then(FieldValue::as_bool).unwrap_or(false))
            }
            FieldKind::MultiSelect { options } => {
                let Some(option) = options.get(self.option) else {
                    return Ok(());
                };
                let mut selected = current
                    .and_then(FieldValue::as_selection)
                    .cloned()
                    .unwrap_or_default();
                if !selected.remove(&option.value) {
                    selected.insert(option.value.clone());
                }
                FieldValue::Selection(selected)
            }
            _ => return Ok(()),
        };
        wizard.update_field(field.name().clone(), value)
    }
}

#[cfg(test)]
mod tests {
    use feedback_wizard::{FieldName, feedback};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(state: &mut UiState, wizard: &mut Wizard, text: &str) {
        for c in text.chars() {
            state.handle_key(wizard, press(KeyCode::Char(c))).unwrap();
        }
    }

    fn value<'w>(wizard: &'w Wizard, name: &str) -> &'w FieldValue {
        wizard.values().get(&FieldName::new(name)).unwrap()
    }

    #[test]
    fn typing_edits_the_focused_text_field() {
        let mut wizard = Wizard::new(feedback::form());
        let mut state = UiState::new();

        type_str(&mut state, &mut wizard, "Widget Pro");
        state.handle_key(&mut wizard, press(KeyCode::Backspace)).unwrap();

        assert_eq!(value(&wizard, feedback::PRODUCT_NAME).as_text(), Some("Widget Pr"));
    }

    #[test]
    fn arrows_adjust_rating_within_bounds() {
        let mut wizard = Wizard::new(feedback::form());
        let mut state = UiState::new();
        state.handle_key(&mut wizard, press(KeyCode::Tab)).unwrap();
        assert_eq!(state.focus(), 1);

        state.handle_key(&mut wizard, press(KeyCode::Right)).unwrap();
        assert_eq!(value(&wizard, feedback::RATING).as_float(), Some(3.0));

        for _ in 0..20 {
            state.handle_key(&mut wizard, press(KeyCode::Left)).unwrap();
        }
        assert_eq!(value(&wizard, feedback::RATING).as_float(), Some(0.0));
    }

    #[test]
    fn enter_on_invalid_step_focuses_first_error() {
        let mut wizard = Wizard::new(feedback::form());
        let mut state = UiState::new();
        state.handle_key(&mut wizard, press(KeyCode::Tab)).unwrap();

        state.handle_key(&mut wizard, press(KeyCode::Enter)).unwrap();

        assert_eq!(wizard.current_step(), 0);
        assert_eq!(state.focus(), 0);
        assert_eq!(
            wizard.errors().get(&FieldName::new(feedback::PRODUCT_NAME)),
            Some("Product name is required")
        );
    }

    #[test]
    fn toggle_cycles_and_page_up_goes_back() {
        let mut wizard = Wizard::new(feedback::form());
        let mut state = UiState::new();
        type_str(&mut state, &mut wizard, "Widget");
        state.handle_key(&mut wizard, press(KeyCode::Enter)).unwrap();
        assert_eq!(wizard.current_step(), 1);

        // Satisfaction, feedback, recommend
        state.handle_key(&mut wizard, press(KeyCode::BackTab)).unwrap();
        assert_eq!(state.focus(), 2);
        state.handle_key(&mut wizard, press(KeyCode::Right)).unwrap();
        assert_eq!(value(&wizard, feedback::RECOMMEND).as_choice(), Some("no"));
        state.handle_key(&mut wizard, press(KeyCode::Right)).unwrap();
        assert_eq!(value(&wizard, feedback::RECOMMEND).as_choice(), Some("yes"));

        state.handle_key(&mut wizard, press(KeyCode::PageUp)).unwrap();
        assert_eq!(wizard.current_step(), 0);
        assert_eq!(state.focus(), 0);
    }

    #[test]
    fn alt_enter_adds_newline_to_multiline_only() {
        let mut wizard = Wizard::new(feedback::form());
        let mut state = UiState::new();
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);

        state.handle_key(&mut wizard, alt_enter).unwrap();
        assert_eq!(value(&wizard, feedback::PRODUCT_NAME).as_text(), Some(""));

        type_str(&mut state, &mut wizard, "Widget");
        state.handle_key(&mut wizard, press(KeyCode::Enter)).unwrap();
        state.handle_key(&mut wizard, press(KeyCode::Tab)).unwrap();
        type_str(&mut state, &mut wizard, "Good");
        state.handle_key(&mut wizard, alt_enter).unwrap();
        type_str(&mut state, &mut wizard, "overall");

        assert_eq!(
            value(&wizard, feedback::FEEDBACK).as_text(),
            Some("Good\noverall")
        );
    }

    #[test]
    fn space_toggles_multiselect_and_checkbox() {
        let mut wizard = Wizard::new(feedback::form());
        let mut state = UiState::new();
        type_str(&mut state, &mut wizard, "Widget");
        state.handle_key(&mut wizard, press(KeyCode::Enter)).unwrap();
        state.handle_key(&mut wizard, press(KeyCode::Tab)).unwrap();
        type_str(&mut state, &mut wizard, "Works great for me");
        state.handle_key(&mut wizard, press(KeyCode::Enter)).unwrap();
        assert_eq!(wizard.current_step(), 2);

        state.handle_key(&mut wizard, press(KeyCode::Right)).unwrap();
        assert_eq!(state.option_cursor(), 1);
        state.handle_key(&mut wizard, press(KeyCode::Char(' '))).unwrap();
        assert_eq!(
            value(&wizard, feedback::FEATURES),
            &FieldValue::selection(["Performance"])
        );

        state.handle_key(&mut wizard, press(KeyCode::Tab)).unwrap();
        state.handle_key(&mut wizard, press(KeyCode::Tab)).unwrap();
        state.handle_key(&mut wizard, press(KeyCode::Char(' '))).unwrap();
        assert_eq!(value(&wizard, feedback::SUBSCRIBE).as_bool(), Some(false));
    }

    #[test]
    fn esc_cancels_before_and_exits_after_submission() {
        let mut wizard = Wizard::new(feedback::form());
        let mut state = UiState::new();
        assert_eq!(
            state.handle_key(&mut wizard, press(KeyCode::Esc)).unwrap(),
            KeyOutcome::Cancel
        );

        type_str(&mut state, &mut wizard, "Widget");
        state.handle_key(&mut wizard, press(KeyCode::Enter)).unwrap();
        state.handle_key(&mut wizard, press(KeyCode::Tab)).unwrap();
        type_str(&mut state, &mut wizard, "Works great for me");
        state.handle_key(&mut wizard, press(KeyCode::Enter)).unwrap();
        state.handle_key(&mut wizard, press(KeyCode::Tab)).unwrap();
        type_str(&mut state, &mut wizard, "user@example.com");
        state.handle_key(&mut wizard, press(KeyCode::Enter)).unwrap();
        assert!(wizard.is_submitted());

        assert_eq!(
            state.handle_key(&mut wizard, press(KeyCode::Char('x'))).unwrap(),
            KeyOutcome::Continue
        );
        assert_eq!(
            state.handle_key(&mut wizard, press(KeyCode::Esc)).unwrap(),
            KeyOutcome::Exit
        );
    }
}

//! Ratatui backend implementation for the FormBackend trait.
//!
//! Shows one step at a time with a step indicator, inline errors and a
//! summary panel once the form is submitted.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use feedback_wizard::{FormBackend, Wizard};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Color, Style, Stylize},
    text::Text,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use thiserror::Error;

use crate::{KeyOutcome, TuiSurface, UiState};

/// Error type for the Ratatui backend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Ratatui-based TUI backend.
#[derive(Debug, Clone)]
pub struct RatatuiBackend {
    /// Title shown at the top of the wizard. Falls back to the form's title.
    title: Option<String>,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiBackend {
    /// Create a new Ratatui backend with default settings.
    pub fn new() -> Self {
        Self {
            title: None,
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the wizard.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn title_for(&self, wizard: &Wizard) -> String {
        self.title
            .clone()
            .or_else(|| wizard.definition().title.clone())
            .unwrap_or_else(|| "Form".to_string())
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        wizard: &mut Wizard,
    ) -> Result<KeyOutcome, RatatuiError> {
        let title = self.title_for(wizard);
        let mut state = UiState::new();

        loop {
            terminal.draw(|frame| draw_ui(frame, &title, &self.theme, wizard, &state))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match state.handle_key(wizard, key) {
                    Ok(KeyOutcome::Continue) => {}
                    Ok(outcome) => return Ok(outcome),
                    Err(err) => tracing::warn!(%err, "edit rejected"),
                }
            }
        }
    }
}

fn help_text(wizard: &Wizard) -> String {
    if wizard.is_submitted() {
        return "Enter/Esc: Exit".to_string();
    }
    let back = if wizard.current_step() > 0 {
        "PgUp: Back  "
    } else {
        ""
    };
    let next = if wizard.is_last_step() {
        "Enter: Submit"
    } else {
        "Enter: Next"
    };
    format!("Tab/Shift-Tab: Focus  ←/→: Adjust  Space: Toggle  {back}{next}  Esc: Cancel")
}

fn draw_ui(frame: &mut Frame, title: &str, theme: &Theme, wizard: &Wizard, state: &UiState) {
    let area = frame.area();

    let mut surface = TuiSurface::new(theme.clone(), state.focus(), state.option_cursor());
    wizard.render(&mut surface);

    let summary_height = if wizard.is_submitted() {
        surface.summary().len() as u16 + 2
    } else {
        0
    };

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Length(2),              // Stepper
            Constraint::Min(6),                 // Fields
            Constraint::Length(summary_height), // Summary
            Constraint::Length(3),              // Help
        ])
        .split(area);

    let header = Paragraph::new(title.to_string())
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    let stepper = Paragraph::new(surface.stepper().clone()).alignment(Alignment::Center);
    frame.render_widget(stepper, chunks[1]);

    let step_label = wizard
        .current_step_definition()
        .map(|step| format!(" {} ", step.label()))
        .unwrap_or_default();
    let fields = Paragraph::new(Text::from(surface.body().to_vec()))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(step_label)
                .title_style(Style::default().fg(theme.highlight)),
        );
    frame.render_widget(fields, chunks[2]);

    if let Some(summary) = wizard.summary() {
        let panel = Paragraph::new(Text::from(surface.summary().to_vec())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.success))
                .title(format!(" {} ", summary.title))
                .title_style(Style::default().fg(theme.success).bold()),
        );
        frame.render_widget(panel, chunks[3]);
    }

    let help = Paragraph::new(help_text(wizard))
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[4]);
}

impl FormBackend for RatatuiBackend {
    type Error = RatatuiError;

    fn drive(&self, wizard: &mut Wizard) -> Result<(), Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let outcome = self.event_loop(&mut terminal, wizard);
        self.restore_terminal(&mut terminal)?;

        // Leaving without a submission is reported as cancellation by `Wizard::run`.
        if outcome? == KeyOutcome::Cancel {
            tracing::info!("form cancelled from the terminal");
        }
        Ok(())
    }
}

// ============================================================
// Layer 1 — Terminal Form
// ============================================================
// Interactive front end: draws the form, feeds key presses to
// FormState and runs a prediction on every submission. A failed
// prediction is shown in place and the loop continues.

pub mod draw;
pub mod form;
pub mod theme;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::application::form_options::FormOptions;
use crate::application::predict_use_case::PredictUseCase;
use crate::domain::traits::PricePipeline;
use form::{FormAction, FormState};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the form until the user quits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run<P: PricePipeline>(use_case: &PredictUseCase<P>, options: FormOptions) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut state = FormState::new(options);

    loop {
        terminal.draw(|f| draw::draw(f, &state))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match state.handle_key(k.code) {
                    FormAction::Quit   => break,
                    FormAction::Submit => {
                        state.submit(use_case);
                    }
                    FormAction::None   => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

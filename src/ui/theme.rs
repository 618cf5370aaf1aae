// ============================================================
// Layer 1 — Form Theme
// ============================================================

use ratatui::style::{Color, Modifier, Style};

/// Plain light-on-dark palette for the price form.
pub struct Theme;

impl Theme {
    pub const FG: Color = Color::Rgb(220, 220, 220);
    pub const FG_DIM: Color = Color::Rgb(130, 130, 130);
    pub const ACCENT: Color = Color::Rgb(90, 170, 255);
    pub const SUCCESS: Color = Color::Rgb(80, 220, 120);
    pub const ERROR: Color = Color::Rgb(255, 90, 90);

    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Page title.
    pub fn title() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::FG)
    }

    /// Placeholder and hint text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// The control that currently has focus.
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .bg(Color::Rgb(20, 30, 45))
            .add_modifier(Modifier::BOLD)
    }

    /// Predicted price, shown as a heading.
    pub fn price() -> Style {
        Style::default().fg(Self::SUCCESS).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }
}

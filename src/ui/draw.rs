// ============================================================
// Layer 1 — Form Rendering
// ============================================================
// Title on top, one line per control, then the result area
// and a key hint at the bottom.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::form::{ControlView, Field, FormState};
use super::theme::Theme;
use crate::application::predict_use_case::PredictionOutcome;

const TITLE: &str = "Laptop Price Predictor";
const HINT: &str = "↑/↓ move · ←/→ change · type numbers · Enter predict · Esc quit";
const LABEL_WIDTH: usize = 22;

pub fn draw(f: &mut Frame, state: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(Field::ALL.len() as u16 + 2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.size());

    draw_title(f, chunks[0]);
    draw_controls(f, chunks[1], state);
    draw_result(f, chunks[2], state.outcome());

    f.render_widget(Paragraph::new(Span::styled(HINT, Theme::dim())), chunks[3]);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).border_style(Theme::border());
    let title = Paragraph::new(Span::styled(TITLE, Theme::title())).block(block);
    f.render_widget(title, area);
}

fn draw_controls(f: &mut Frame, area: Rect, state: &FormState) {
    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|&field| control_line(state, field))
        .collect();

    let block = Block::default().borders(Borders::ALL).border_style(Theme::border());
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn control_line(state: &FormState, field: Field) -> Line<'static> {
    let focused = state.focused() == field;
    let label = format!("{:<width$}", field.label(), width = LABEL_WIDTH);

    let value = match state.view(field) {
        ControlView::Select { value, position, total } if focused => {
            Span::styled(format!("◀ {value} ▶  ({position}/{total})"), Theme::focused())
        }
        ControlView::Select { value, .. } => Span::styled(format!("  {value}"), Theme::label()),
        ControlView::Number { text } if text.is_empty() => {
            let cursor = if focused { "_" } else { "" };
            Span::styled(format!("  0.00{cursor}"), if focused { Theme::focused() } else { Theme::dim() })
        }
        ControlView::Number { text } => {
            let cursor = if focused { "_" } else { "" };
            Span::styled(format!("  {text}{cursor}"), if focused { Theme::focused() } else { Theme::label() })
        }
    };

    let marker = if focused { "› " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Theme::title()),
        Span::styled(label, Theme::label()),
        value,
    ])
}

fn draw_result(f: &mut Frame, area: Rect, outcome: Option<&PredictionOutcome>) {
    let text = match outcome {
        None => Line::from(Span::styled("Press Enter to predict the price.", Theme::dim())),
        Some(o) => {
            let style = if o.is_error() { Theme::error() } else { Theme::price() };
            Line::from(Span::styled(o.to_string(), style))
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Result ");
    f.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
}

//! Keypad grid widget
//!
//! A static button grid mirroring the keyboard bindings. The labels use
//! the display glyphs (`×`, `÷`, `−`); the key handler canonicalizes them
//! before they reach the builder.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;

/// Button labels, laid out as rendered
pub const KEYPAD_ROWS: [[&str; 4]; 5] = [
    ["C", "(", ")", "\u{00F7}"],
    ["7", "8", "9", "\u{00D7}"],
    ["4", "5", "6", "\u{2212}"],
    ["1", "2", "3", "+"],
    ["0", ".", "\u{232B}", "="],
];

fn is_action_key(label: &str) -> bool {
    matches!(
        label,
        "C" | "(" | ")" | "+" | "=" | "\u{00F7}" | "\u{00D7}" | "\u{2212}" | "\u{232B}"
    )
}

/// Render the keypad grid
pub fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    let row_constraints: Vec<Constraint> = KEYPAD_ROWS
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row_area, labels) in rows.iter().zip(KEYPAD_ROWS.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
            ])
            .split(*row_area);

        for (cell_area, label) in cells.iter().zip(labels.iter()) {
            let style = if state.config.colors_enabled && is_action_key(label) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };

            let button = Paragraph::new(*label)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));

            frame.render_widget(button, *cell_area);
        }
    }
}

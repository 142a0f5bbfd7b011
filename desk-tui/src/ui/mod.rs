//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.

pub mod keypad;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Display
            Constraint::Length(15), // Keypad (5 rows of 3)
            Constraint::Min(3),     // Status bar
        ])
        .split(area);

    render_display(frame, chunks[0], state);
    keypad::render_keypad(frame, chunks[1], state);
    render_status_bar(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Render the expression display line
fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let border_style = if !state.config.colors_enabled {
        Style::default()
    } else if state.in_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let text_style = if state.in_error() && state.config.colors_enabled {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let display = Paragraph::new(Span::styled(state.calc.builder.display_text(), text_style))
        .block(
            Block::default()
                .title(" deskcalc ")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .alignment(Alignment::Right);

    frame.render_widget(display, area);
}

/// Render status bar with evaluation feedback and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = "Enter/=: evaluate | Esc: clear | Backspace | F1: help | q: quit";

    let status_line = if let Some(ref error) = state.calc.last_error {
        Line::from(vec![
            Span::styled(
                "\u{2717} ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(error.as_str()),
        ])
    } else if let Some(ref message) = state.status.message {
        Line::from(Span::styled(message.as_str(), Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::raw("Ready"))
    };

    let lines = vec![
        status_line,
        Line::from(Span::styled(hints, Style::default().fg(Color::Gray))),
    ];

    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, _state: &AppState) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  0-9 .      - Enter digits and decimal point"),
        Line::from("  + - * /    - Operators (replace a trailing operator)"),
        Line::from("  ( )        - Grouping; '(' after a value multiplies"),
        Line::from("  Enter, =   - Evaluate"),
        Line::from("  Backspace  - Remove last character"),
        Line::from("  Esc, Del   - Clear"),
        Line::from(""),
        Line::from("  F1         - Toggle help"),
        Line::from("  q          - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area); // Clear background
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

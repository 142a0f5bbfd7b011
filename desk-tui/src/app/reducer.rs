//! Pure reducer function for state transitions
//!
//! `(State, Action, now) -> State`: no I/O, no side effects, deterministic
//! for a given state, action and clock value. The expression builder is
//! part of the state and carries the calculator semantics; the reducer
//! wires key events to it and keeps the status bar in sync.

use std::time::Instant;

use super::actions::Action;
use super::state::{AppState, CalcState, StatusBarState};
use crossterm::event::{KeyCode, KeyModifiers};
use libdeskcalc::{eval, InputEvent};

/// Pure reducer function
///
/// `now` is passed in by the event loop so evaluation deadlines stay
/// deterministic and testable.
pub fn reduce(state: AppState, action: Action, now: Instant) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key, now),
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        Action::Tick => {
            let mut calc = state.calc.clone();
            if calc.builder.tick(now) {
                // sentinel auto-cleared; drop the stale error text too
                calc.last_error = None;
                AppState {
                    calc,
                    status: StatusBarState::default(),
                    ..state
                }
            } else {
                state
            }
        }

        // === Calculator ===
        Action::Input(event) => {
            let mut calc = CalcState {
                builder: state.calc.builder.clone(),
                last_error: None,
            };

            let outcome = calc.builder.apply(event, now);
            let status = match outcome {
                Some(Ok(value)) => StatusBarState {
                    message: Some(format!("= {}", eval::format_result(value))),
                },
                Some(Err(e)) => {
                    calc.last_error = Some(e.to_string());
                    StatusBarState::default()
                }
                None => StatusBarState::default(),
            };

            AppState {
                calc,
                status,
                ..state
            }
        }

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState::default(),
            ..state
        },
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: crossterm::event::KeyEvent, now: Instant) -> AppState {
    // Global keybindings
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return reduce(state, Action::Quit, now);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action, now);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp, now);
        }

        _ => {}
    }

    // Calculator input is suspended while the help overlay is up
    if state.help_visible {
        return state;
    }

    let event = match key.code {
        KeyCode::Enter => Some(InputEvent::Equals),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Esc | KeyCode::Delete => Some(InputEvent::Clear),
        // shifted characters ('(', ')', '*', '+') arrive with SHIFT set
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            InputEvent::from_char(c)
        }
        _ => None,
    };

    match event {
        Some(event) => reduce(state, Action::Input(event), now),
        None => state,
    }
}

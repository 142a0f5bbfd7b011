//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions: immutable values
//! describing what should happen. The reducer (see `reducer.rs`) applies
//! them to state.

use crossterm::event::KeyEvent;
use libdeskcalc::InputEvent;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick; drives the error auto-clear deadline
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Calculator ===
    /// A calculator input event (token or control action)
    Input(InputEvent),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

//! Application module
//!
//! Contains the core application architecture:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action, now) -> State

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::reduce;
pub use state::{AppState, CalcState, StatusBarState, UiConfig};

//! Error types for desk-tui
//!
//! Wraps core library errors and terminal/IO errors for unified handling
//! in the event loop.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Core library error
    #[error("Calculator error: {0}")]
    Calc(#[from] libdeskcalc::CalcError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

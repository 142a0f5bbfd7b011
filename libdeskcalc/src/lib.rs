//! Deskcalc - a terminal calculator toolkit
//!
//! This library provides the expression builder state machine, a bounded
//! arithmetic evaluator, and the shared config/logging/error plumbing used
//! by the desk-eval and desk-tui binaries.

pub mod builder;
pub mod config;
pub mod display;
pub mod error;
pub mod eval;
pub mod logging;
pub mod token;

// Re-export commonly used types
pub use builder::{ExpressionBuilder, DEFAULT_ERROR_CLEAR, ERROR_SENTINEL};
pub use config::Config;
pub use display::DisplaySink;
pub use error::{CalcError, EvalError, Result};
pub use token::{InputEvent, Operator, Token};

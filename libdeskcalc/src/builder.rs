//! Expression builder state machine
//!
//! Owns the expression string being typed and enforces the entry rules:
//! one decimal point per number, no unmatched closing parenthesis, implicit
//! multiplication before an opening parenthesis, operator replacement on
//! repeated operator entry. Malformed partial input is silently dropped;
//! only `evaluate` produces a visible failure (the `"Error"` sentinel).
//!
//! A failed evaluation arms a clear deadline. The deadline is explicit and
//! cancellable: any `ingest`, `backspace` or `reset` disarms it, and the
//! host event loop drives it through [`ExpressionBuilder::tick`].

use std::time::{Duration, Instant};

use tracing::debug;

use crate::display;
use crate::error::EvalError;
use crate::eval;
use crate::token::{InputEvent, Operator, Token};

/// Display value shown after a failed evaluation
pub const ERROR_SENTINEL: &str = "Error";

/// How long the sentinel stays on screen before auto-clearing
pub const DEFAULT_ERROR_CLEAR: Duration = Duration::from_millis(900);

const OPERATOR_CHARS: [char; 4] = ['+', '-', '*', '/'];
const BOUNDARY_CHARS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

/// The calculator's expression state machine.
#[derive(Debug, Clone)]
pub struct ExpressionBuilder {
    expr: String,
    clear_at: Option<Instant>,
    error_clear_delay: Duration,
}

impl Default for ExpressionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionBuilder {
    pub fn new() -> Self {
        Self::with_error_clear_delay(DEFAULT_ERROR_CLEAR)
    }

    /// Create a builder with a custom error auto-clear delay
    pub fn with_error_clear_delay(delay: Duration) -> Self {
        Self {
            expr: String::new(),
            clear_at: None,
            error_clear_delay: delay,
        }
    }

    /// The raw expression string (may be the `"Error"` sentinel)
    pub fn expression(&self) -> &str {
        &self.expr
    }

    pub fn is_empty(&self) -> bool {
        self.expr.is_empty()
    }

    /// Is the sentinel currently displayed?
    pub fn is_error(&self) -> bool {
        self.expr == ERROR_SENTINEL
    }

    /// Text for the display: `"0"` when empty, else the expression
    pub fn display_text(&self) -> &str {
        display::display_text(&self.expr)
    }

    /// Dispatch a complete input event.
    ///
    /// Returns the evaluation outcome for [`InputEvent::Equals`], `None`
    /// for everything else.
    pub fn apply(&mut self, event: InputEvent, now: Instant) -> Option<Result<f64, EvalError>> {
        match event {
            InputEvent::Token(token) => {
                self.ingest(token);
                None
            }
            InputEvent::Clear => {
                self.reset();
                None
            }
            InputEvent::Backspace => {
                self.backspace();
                None
            }
            InputEvent::Equals => self.evaluate(now),
        }
    }

    /// Ingest one expression token, enforcing the entry rules.
    ///
    /// Rejected tokens are a silent no-op. Any ingest disarms a pending
    /// auto-clear and replaces a displayed sentinel with fresh input.
    pub fn ingest(&mut self, token: Token) {
        self.clear_at = None;
        if self.is_error() {
            self.expr.clear();
        }

        match token {
            Token::Digit(d) => self.expr.push(d),

            Token::Decimal => {
                if self.current_number().contains('.') {
                    debug!(expr = %self.expr, "rejected second decimal point");
                    return;
                }
                self.expr.push('.');
            }

            Token::OpenParen => {
                let after_boundary = matches!(
                    self.last_char(),
                    Some('+' | '-' | '*' | '/' | '(')
                );
                if self.expr.is_empty() || after_boundary {
                    self.expr.push('(');
                } else {
                    // implicit multiplication: value followed by a group
                    self.expr.push_str("*(");
                }
            }

            Token::CloseParen => {
                let open = self.expr.matches('(').count();
                let close = self.expr.matches(')').count();
                let closable =
                    matches!(self.last_char(), Some(c) if c.is_ascii_digit() || c == ')');
                if open > close && closable {
                    self.expr.push(')');
                } else {
                    debug!(expr = %self.expr, "rejected closing parenthesis");
                }
            }

            Token::Op(op) => {
                if self.expr.is_empty() {
                    // only a leading negative sign is allowed
                    if op == Operator::Sub {
                        self.expr.push('-');
                    } else {
                        debug!(operator = %op, "rejected operator on empty expression");
                    }
                } else if matches!(self.last_char(), Some(c) if OPERATOR_CHARS.contains(&c)) {
                    // replace the trailing operator instead of appending
                    self.expr.pop();
                    self.expr.push(op.as_char());
                } else {
                    self.expr.push(op.as_char());
                }
            }
        }
    }

    /// Remove the last character.
    ///
    /// Never re-validates the remaining string; a dangling `(` is caught
    /// later by `evaluate`. Removes a displayed sentinel whole.
    pub fn backspace(&mut self) {
        self.clear_at = None;
        if self.is_error() {
            self.expr.clear();
            return;
        }
        self.expr.pop();
    }

    /// Clear the expression
    pub fn reset(&mut self) {
        self.clear_at = None;
        self.expr.clear();
    }

    /// Evaluate the current expression.
    ///
    /// Returns `None` when there is nothing to evaluate (empty expression,
    /// or nothing left after sanitization). On success the expression
    /// becomes the stringified result, so the next token chains off it.
    /// On failure the expression becomes the `"Error"` sentinel and the
    /// auto-clear deadline is armed.
    pub fn evaluate(&mut self, now: Instant) -> Option<Result<f64, EvalError>> {
        if self.expr.is_empty() {
            return None;
        }

        let trimmed = eval::strip_trailing_operators(&self.expr);
        let sanitized = eval::sanitize(trimmed);
        if sanitized.trim().is_empty() {
            return None;
        }

        match eval::evaluate(&sanitized) {
            Ok(value) => {
                self.expr = eval::format_result(value);
                Some(Ok(value))
            }
            Err(e) => {
                debug!(error = %e, expr = %self.expr, "evaluation failed");
                self.expr = ERROR_SENTINEL.to_string();
                self.clear_at = Some(now + self.error_clear_delay);
                Some(Err(e))
            }
        }
    }

    /// Advance the auto-clear deadline.
    ///
    /// Clears the expression once the deadline has elapsed. Returns whether
    /// state changed, so the caller knows to re-render.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.clear_at = None;
                self.expr.clear();
                true
            }
            _ => false,
        }
    }

    /// Is an auto-clear deadline armed?
    pub fn clear_pending(&self) -> bool {
        self.clear_at.is_some()
    }

    fn last_char(&self) -> Option<char> {
        self.expr.chars().last()
    }

    /// The number currently being typed: the substring after the last
    /// operator or parenthesis.
    fn current_number(&self) -> &str {
        let start = self
            .expr
            .rfind(BOUNDARY_CHARS)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.expr[start..]
    }
}

//! Typed input model for the calculator
//!
//! Input sources (keyboard, keypad buttons, argv) produce `InputEvent`s
//! rather than raw characters. Display glyphs for multiply, divide and
//! minus are mapped to their canonical ASCII operators at this boundary,
//! so the rest of the system only ever sees the canonical alphabet.

use std::fmt;

/// The four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Canonical ASCII character for this operator
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Parse an operator from a character.
    ///
    /// Accepts both the canonical ASCII characters and the display glyphs
    /// `×`, `÷` and `−` (U+2212).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '\u{2212}' => Some(Operator::Sub),
            '*' | '\u{00D7}' => Some(Operator::Mul),
            '/' | '\u{00F7}' => Some(Operator::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One atomic unit of expression input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A single digit `0`-`9`
    Digit(char),
    /// The decimal point
    Decimal,
    /// A binary operator
    Op(Operator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl Token {
    /// Parse an expression token from a character, mapping display glyphs
    /// to canonical operators. Returns `None` for anything outside the
    /// expression alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Token::Digit(c)),
            '.' => Some(Token::Decimal),
            '(' => Some(Token::OpenParen),
            ')' => Some(Token::CloseParen),
            _ => Operator::from_char(c).map(Token::Op),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(d) => write!(f, "{}", d),
            Token::Decimal => write!(f, "."),
            Token::Op(op) => write!(f, "{}", op),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
        }
    }
}

/// A complete input event: an expression token or a control action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Append-style input handled by `ExpressionBuilder::ingest`
    Token(Token),
    /// Clear the whole expression
    Clear,
    /// Remove the last character
    Backspace,
    /// Evaluate the expression
    Equals,
}

impl InputEvent {
    /// Map a character to an input event.
    ///
    /// `=` evaluates, `C`/`c` clears, everything else goes through
    /// `Token::from_char`. Backspace has no character form.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(InputEvent::Equals),
            'C' | 'c' => Some(InputEvent::Clear),
            _ => Token::from_char(c).map(InputEvent::Token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_as_char() {
        assert_eq!(Operator::Add.as_char(), '+');
        assert_eq!(Operator::Sub.as_char(), '-');
        assert_eq!(Operator::Mul.as_char(), '*');
        assert_eq!(Operator::Div.as_char(), '/');
    }

    #[test]
    fn test_operator_from_ascii() {
        assert_eq!(Operator::from_char('+'), Some(Operator::Add));
        assert_eq!(Operator::from_char('-'), Some(Operator::Sub));
        assert_eq!(Operator::from_char('*'), Some(Operator::Mul));
        assert_eq!(Operator::from_char('/'), Some(Operator::Div));
    }

    #[test]
    fn test_operator_from_display_glyphs() {
        assert_eq!(Operator::from_char('\u{00D7}'), Some(Operator::Mul));
        assert_eq!(Operator::from_char('\u{00F7}'), Some(Operator::Div));
        assert_eq!(Operator::from_char('\u{2212}'), Some(Operator::Sub));
    }

    #[test]
    fn test_operator_from_char_rejects_other() {
        assert_eq!(Operator::from_char('^'), None);
        assert_eq!(Operator::from_char('5'), None);
    }

    #[test]
    fn test_token_from_char_digits() {
        for c in '0'..='9' {
            assert_eq!(Token::from_char(c), Some(Token::Digit(c)));
        }
    }

    #[test]
    fn test_token_from_char_structure() {
        assert_eq!(Token::from_char('.'), Some(Token::Decimal));
        assert_eq!(Token::from_char('('), Some(Token::OpenParen));
        assert_eq!(Token::from_char(')'), Some(Token::CloseParen));
        assert_eq!(Token::from_char('*'), Some(Token::Op(Operator::Mul)));
        assert_eq!(Token::from_char('x'), None);
    }

    #[test]
    fn test_token_display_roundtrip() {
        for c in ['0', '9', '.', '+', '-', '*', '/', '(', ')'] {
            let token = Token::from_char(c).unwrap();
            assert_eq!(token.to_string(), c.to_string());
        }
    }

    #[test]
    fn test_input_event_from_char() {
        assert_eq!(InputEvent::from_char('='), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_char('C'), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_char('c'), Some(InputEvent::Clear));
        assert_eq!(
            InputEvent::from_char('7'),
            Some(InputEvent::Token(Token::Digit('7')))
        );
        assert_eq!(InputEvent::from_char('q'), None);
    }
}

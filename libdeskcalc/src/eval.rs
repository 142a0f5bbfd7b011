//! Arithmetic expression evaluation
//!
//! A bounded evaluator for the calculator's alphabet: numeric literals,
//! `+ - * /`, parentheses and unary sign. Evaluation is a char tokenizer
//! followed by recursive descent with conventional precedence (term and
//! factor levels), computing `f64` values directly without building an AST.
//!
//! All failure modes are enumerated in [`EvalError`]; see the variants for
//! the full taxonomy.

use std::iter::Peekable;

use crate::error::EvalError;

/// Replace the display glyphs `×`, `÷` and `−` with their canonical
/// ASCII operators.
pub fn canonicalize(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{00D7}' => '*',
            '\u{00F7}' => '/',
            '\u{2212}' => '-',
            other => other,
        })
        .collect()
}

/// Sanitize an expression for evaluation: canonicalize display glyphs,
/// then drop every character outside the allowed alphabet
/// (digits, `+ - * / ( ) .` and whitespace).
pub fn sanitize(input: &str) -> String {
    canonicalize(input)
        .chars()
        .filter(|c| {
            matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.') || c.is_whitespace()
        })
        .collect()
}

/// Strip the trailing run of operator and decimal-point characters.
///
/// Tolerates an expression left mid-entry: `"3+"` evaluates as `"3"`.
pub fn strip_trailing_operators(input: &str) -> &str {
    input.trim_end_matches(['+', '-', '*', '/', '.'])
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tok {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Tok {
    fn describe(self) -> String {
        match self {
            Tok::Num(n) => n.to_string(),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::LParen => "(".to_string(),
            Tok::RParen => ")".to_string(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Tok>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                tokens.push(Tok::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(Tok::Minus);
                chars.next();
            }
            '*' => {
                tokens.push(Tok::Star);
                chars.next();
            }
            '/' => {
                tokens.push(Tok::Slash);
                chars.next();
            }
            '(' => {
                tokens.push(Tok::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Tok::RParen);
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let text = &input[start..end];
                let value: f64 = text
                    .parse()
                    .map_err(|_| EvalError::InvalidNumber(text.to_string()))?;
                tokens.push(Tok::Num(value));
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

struct Parser<I: Iterator<Item = Tok>> {
    tokens: Peekable<I>,
}

impl<I: Iterator<Item = Tok>> Parser<I> {
    /// `expression := term (('+' | '-') term)*`
    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(&tok) = self.tokens.peek() {
            match tok {
                Tok::Plus => {
                    self.tokens.next();
                    value += self.term()?;
                }
                Tok::Minus => {
                    self.tokens.next();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// `term := factor (('*' | '/') factor)*`
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        while let Some(&tok) = self.tokens.peek() {
            match tok {
                Tok::Star => {
                    self.tokens.next();
                    value *= self.factor()?;
                }
                Tok::Slash => {
                    self.tokens.next();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivideByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// `factor := number | '-' factor | '+' factor | '(' expression ')'`
    fn factor(&mut self) -> Result<f64, EvalError> {
        match self.tokens.next() {
            Some(Tok::Num(n)) => Ok(n),
            Some(Tok::Minus) => Ok(-self.factor()?),
            Some(Tok::Plus) => self.factor(),
            Some(Tok::LParen) => {
                let value = self.expression()?;
                match self.tokens.next() {
                    Some(Tok::RParen) => Ok(value),
                    _ => Err(EvalError::UnmatchedParen),
                }
            }
            Some(Tok::RParen) => Err(EvalError::UnmatchedParen),
            Some(tok) => Err(EvalError::UnexpectedToken(tok.describe())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Evaluate a sanitized arithmetic expression.
///
/// # Errors
///
/// Returns an [`EvalError`] for malformed input, division by an exact zero,
/// or a non-finite result.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens: tokens.into_iter().peekable(),
    };
    let value = parser.expression()?;

    // The whole input must be consumed: "1 2" or "(1))" is an error.
    if let Some(&trailing) = parser.tokens.peek() {
        return Err(match trailing {
            Tok::RParen => EvalError::UnmatchedParen,
            other => EvalError::UnexpectedToken(other.describe()),
        });
    }

    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }

    Ok(value)
}

/// Format a result so it can seed the next expression.
///
/// Uses `f64`'s shortest `Display` form: `14`, `0.5`, `-2.25`. Negative
/// zero is normalized to `"0"`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_glyphs() {
        assert_eq!(canonicalize("3\u{00D7}4\u{00F7}2\u{2212}1"), "3*4/2-1");
        assert_eq!(canonicalize("1+2"), "1+2");
    }

    #[test]
    fn test_sanitize_strips_foreign_characters() {
        assert_eq!(sanitize("Error"), "");
        assert_eq!(sanitize("1+2x"), "1+2");
        assert_eq!(sanitize("3 \u{00D7} 4"), "3 * 4");
    }

    #[test]
    fn test_strip_trailing_operators() {
        assert_eq!(strip_trailing_operators("3+"), "3");
        assert_eq!(strip_trailing_operators("3+-*."), "3");
        assert_eq!(strip_trailing_operators("3"), "3");
        assert_eq!(strip_trailing_operators(""), "");
    }

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate("42").unwrap(), 42.0);
        assert_eq!(evaluate("3.5").unwrap(), 3.5);
        assert_eq!(evaluate(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("2*3+4").unwrap(), 10.0);
        assert_eq!(evaluate("10-4/2").unwrap(), 8.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("10-3-2").unwrap(), 5.0);
        assert_eq!(evaluate("16/4/2").unwrap(), 2.0);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
        assert_eq!(evaluate("((1+2)*(3+4))").unwrap(), 21.0);
    }

    #[test]
    fn test_unary_sign() {
        assert_eq!(evaluate("-5").unwrap(), -5.0);
        assert_eq!(evaluate("-5+3").unwrap(), -2.0);
        assert_eq!(evaluate("2*-3").unwrap(), -6.0);
        assert_eq!(evaluate("--4").unwrap(), 4.0);
        assert_eq!(evaluate("+7").unwrap(), 7.0);
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(evaluate(" 1 + 2 ").unwrap(), 3.0);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(evaluate("5/0"), Err(EvalError::DivideByZero));
        assert_eq!(evaluate("1/(2-2)"), Err(EvalError::DivideByZero));
    }

    #[test]
    fn test_unmatched_parens() {
        assert_eq!(evaluate("(1+2"), Err(EvalError::UnmatchedParen));
        assert_eq!(evaluate("1+2)"), Err(EvalError::UnmatchedParen));
        assert_eq!(evaluate("()"), Err(EvalError::UnmatchedParen));
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(
            evaluate("1.2.3"),
            Err(EvalError::InvalidNumber("1.2.3".to_string()))
        );
        assert_eq!(evaluate("."), Err(EvalError::InvalidNumber(".".to_string())));
    }

    #[test]
    fn test_unexpected_char() {
        assert_eq!(evaluate("1+x"), Err(EvalError::UnexpectedChar('x')));
    }

    #[test]
    fn test_dangling_operator_is_error() {
        // Trailing operators are stripped by the builder before evaluation;
        // the evaluator itself rejects them.
        assert_eq!(evaluate("3+"), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_trailing_input_rejected() {
        assert_eq!(
            evaluate("1 2"),
            Err(EvalError::UnexpectedToken("2".to_string()))
        );
    }

    #[test]
    fn test_empty_input_is_unexpected_end() {
        assert_eq!(evaluate(""), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_overflow_is_non_finite() {
        // 1e300 * 1e300 overflows to infinity
        let big = format!("1{}", "0".repeat(300));
        assert_eq!(
            evaluate(&format!("{}*{}", big, big)),
            Err(EvalError::NonFinite)
        );
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(14.0), "14");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(-2.25), "-2.25");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
    }
}

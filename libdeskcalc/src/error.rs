//! Error types for Deskcalc

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CalcError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::InvalidInput(_) => 3,
            CalcError::Eval(_) => 2,
            CalcError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failure modes of the arithmetic evaluator.
///
/// Every way an expression can fail to compute is enumerated here; there is
/// no opaque "evaluator threw" case.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unexpected character: '{0}'")]
    UnexpectedChar(char),

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Unmatched parenthesis")]
    UnmatchedParen,

    #[error("Division by zero")]
    DivideByZero,

    #[error("Result is not a finite number")]
    NonFinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = CalcError::InvalidInput("Empty expression".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_eval_error() {
        let error = CalcError::Eval(EvalError::DivideByZero);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_config_error() {
        let config_error = ConfigError::MissingField("ui.tick_rate_ms".to_string());
        let error = CalcError::Config(config_error);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = CalcError::InvalidInput("Expression cannot be empty".to_string());
        let message = format!("{}", error);
        assert_eq!(message, "Invalid input: Expression cannot be empty");
    }

    #[test]
    fn test_error_message_formatting_eval() {
        let error = CalcError::Eval(EvalError::UnmatchedParen);
        let message = format!("{}", error);
        assert_eq!(message, "Evaluation error: Unmatched parenthesis");
    }

    #[test]
    fn test_eval_error_variants_format() {
        assert_eq!(
            format!("{}", EvalError::UnexpectedChar('x')),
            "Unexpected character: 'x'"
        );
        assert_eq!(
            format!("{}", EvalError::InvalidNumber("1.2.3".to_string())),
            "Invalid number: '1.2.3'"
        );
        assert_eq!(
            format!("{}", EvalError::UnexpectedToken(")".to_string())),
            "Unexpected token: )"
        );
        assert_eq!(
            format!("{}", EvalError::UnexpectedEnd),
            "Unexpected end of expression"
        );
        assert_eq!(format!("{}", EvalError::DivideByZero), "Division by zero");
        assert_eq!(
            format!("{}", EvalError::NonFinite),
            "Result is not a finite number"
        );
    }

    #[test]
    fn test_error_conversion_from_eval_error() {
        let eval_error = EvalError::DivideByZero;
        let calc_error: CalcError = eval_error.into();

        match calc_error {
            CalcError::Eval(EvalError::DivideByZero) => {}
            _ => panic!("Expected CalcError::Eval"),
        }
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::MissingField("test".to_string());
        let calc_error: CalcError = config_error.into();

        match calc_error {
            CalcError::Config(_) => {}
            _ => panic!("Expected CalcError::Config"),
        }
    }

    #[test]
    fn test_eval_error_clone_and_eq() {
        let original = EvalError::UnexpectedChar('!');
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_err() -> Result<String> {
            Err(CalcError::InvalidInput("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}

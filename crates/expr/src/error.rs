use thiserror::Error;

/// Errors produced while parsing an expression.
///
/// Every variant carries the byte offset in the source where the problem
/// was detected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown identifier '{name}' at position {pos}")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("'{name}' is a function and must be called, at position {pos}")]
    MissingCall { name: String, pos: usize },

    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("expression is empty")]
    Empty,

    #[error("expression is nested too deeply at position {pos}")]
    TooDeep { pos: usize },
}

/// Errors produced while evaluating a parsed expression.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("{function}({arg}) is undefined")]
    Domain { function: &'static str, arg: f64 },

    #[error("division by zero ({numerator} / 0)")]
    DivisionByZero { numerator: f64 },

    #[error("{base}^{exponent} is undefined")]
    Power { base: f64, exponent: f64 },
}

use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while finding a root.
#[derive(Debug, Error)]
pub enum Error {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("numerical error: {0}")]
    Numerical(#[from] NumericalError),
}

/// The bracket cannot be used to search for a root.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("bracket has zero width: left and right are both {value}")]
    ZeroWidthBracket { value: f64 },

    #[error(
        "function must have opposite signs at the bracket endpoints: \
         f({left}) = {left_value}, f({right}) = {right_value}"
    )]
    NoSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },
}

/// The computation cannot continue without producing NaN or infinity.
#[derive(Debug, Error)]
pub enum NumericalError {
    #[error("function evaluation failed at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite function value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },

    #[error(
        "degenerate secant on [{left}, {right}]: \
         f({left}) = {left_value}, f({right}) = {right_value}"
    )]
    DegenerateSecant {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sign_change_reports_both_values() {
        let err = Error::from(DomainError::NoSignChange {
            left: 1.0,
            right: 2.0,
            left_value: 3.0,
            right_value: 4.5,
        });
        let message = err.to_string();
        assert!(message.contains("f(1) = 3"), "{message}");
        assert!(message.contains("f(2) = 4.5"), "{message}");
    }

    #[test]
    fn evaluation_error_keeps_source() {
        let err = NumericalError::Evaluation {
            x: 0.5,
            source: Box::new(std::fmt::Error),
        };
        assert!(StdError::source(&err).is_some());
    }
}

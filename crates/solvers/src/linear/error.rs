use thiserror::Error;

/// Errors that can occur while solving a linear system.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("singular matrix: {0}")]
    Singular(#[from] SingularMatrixError),

    #[error("numerical error: {0}")]
    Numerical(#[from] NumericalError),
}

/// The matrix cannot be used by the selected method.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SingularMatrixError {
    /// Every candidate pivot in the column is exactly zero.
    #[error("no nonzero pivot in column {column}")]
    ZeroPivot { column: usize },

    /// A diagonal entry is zero, so the row cannot be solved for its unknown.
    #[error("diagonal element A[{row}][{row}] is zero; Gauss-Seidel cannot be applied")]
    ZeroDiagonal { row: usize },
}

/// The computation produced NaN or infinity.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NumericalError {
    /// A Gauss-Seidel component left the finite range.
    #[error("iteration diverged in sweep {sweep}: x[{row}] = {value}")]
    Diverged { sweep: usize, row: usize, value: f64 },

    /// Back substitution overflowed.
    #[error("solution component x[{row}] = {value} is not finite")]
    NonFinite { row: usize, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_index() {
        let err = Error::from(SingularMatrixError::ZeroDiagonal { row: 2 });
        assert_eq!(
            err.to_string(),
            "singular matrix: diagonal element A[2][2] is zero; Gauss-Seidel cannot be applied"
        );

        let err = Error::from(NumericalError::Diverged {
            sweep: 4,
            row: 1,
            value: f64::INFINITY,
        });
        assert!(err.to_string().contains("sweep 4: x[1] = inf"));
    }
}

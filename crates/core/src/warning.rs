use std::fmt;

/// An advisory diagnostic attached to a solver result.
///
/// Warnings never abort a computation. They are returned alongside the
/// result so that callers can tell a converged answer from a best effort.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvergenceWarning {
    /// The iteration bound was exhausted before the tolerance was met.
    MaxItersReached {
        /// Number of iterations performed.
        iters: usize,
        /// Accuracy actually achieved (bracket width, step, or change norm).
        achieved: f64,
        /// Accuracy that was requested.
        requested: f64,
    },

    /// The matrix is not strictly diagonally dominant.
    ///
    /// Gauss-Seidel may still converge, but it is not guaranteed to.
    NotDiagonallyDominant {
        /// First row whose diagonal does not dominate its off-diagonal sum.
        row: usize,
        /// Magnitude of the diagonal entry.
        diagonal: f64,
        /// Sum of the off-diagonal magnitudes in that row.
        off_diagonal: f64,
    },
}

impl fmt::Display for ConvergenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxItersReached {
                iters,
                achieved,
                requested,
            } => write!(
                f,
                "tolerance {requested} not reached after {iters} iterations (achieved {achieved})"
            ),
            Self::NotDiagonallyDominant {
                row,
                diagonal,
                off_diagonal,
            } => write!(
                f,
                "matrix is not strictly diagonally dominant at row {row} \
                 (|a_ii| = {diagonal} <= {off_diagonal}); the method may not converge"
            ),
        }
    }
}

use ndarray::Array1;
use numlab_core::ConvergenceWarning;

/// Indicates how a linear solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Solved directly; no iteration was involved.
    Direct,

    /// The sweep change or the residual fell below the tolerance.
    Converged,

    /// Reached the sweep limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a linear solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The solution vector (or the last iterate).
    pub x: Array1<f64>,

    /// The iterate after each completed sweep. Empty for direct methods.
    pub history: Vec<Array1<f64>>,

    /// Number of completed sweeps.
    pub sweeps: usize,

    /// Non-fatal diagnostics.
    pub warnings: Vec<ConvergenceWarning>,
}

impl Solution {
    /// Creates the result of a direct solve.
    pub(super) fn direct(x: Array1<f64>) -> Self {
        Self {
            status: Status::Direct,
            x,
            history: Vec::new(),
            sweeps: 0,
            warnings: Vec::new(),
        }
    }
}

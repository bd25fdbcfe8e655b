use numlab_core::ConvergenceWarning;
use tracing::{debug, warn};

use crate::Config;

use super::Iteration;

/// Indicates why a root finder stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The metric fell to the tolerance or an exact root was hit.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root finder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub root: f64,

    /// Function value at `root`.
    pub f_value: f64,

    /// Accuracy achieved: the final bracket width or step size.
    pub tolerance: f64,

    /// Number of completed narrowing steps.
    pub iterations: usize,

    /// Every iteration record, in order, ending with the terminal state.
    pub history: Vec<Iteration>,

    /// Non-fatal diagnostics.
    pub warnings: Vec<ConvergenceWarning>,
}

impl Solution {
    /// Appends the terminal record and derives the status from it.
    pub(super) fn finish(
        method: &'static str,
        mut history: Vec<Iteration>,
        last: Iteration,
        iters: usize,
        stopped: bool,
        config: &Config,
    ) -> Self {
        history.push(last);

        let status = if stopped {
            Status::StoppedByObserver
        } else if last.is_exact_root() || last.metric <= config.tolerance() {
            Status::Converged
        } else {
            Status::MaxIters
        };

        let mut warnings = Vec::new();
        if status == Status::MaxIters {
            let warning = ConvergenceWarning::MaxItersReached {
                iters,
                achieved: last.metric,
                requested: config.tolerance(),
            };
            warn!(method, %warning);
            warnings.push(warning);
        }

        debug!(method, ?status, root = last.x, iters, "root finder finished");

        Self {
            status,
            root: last.x,
            f_value: last.fx,
            tolerance: last.metric,
            iterations: iters,
            history,
            warnings,
        }
    }
}

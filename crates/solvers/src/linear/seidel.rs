//! Gauss-Seidel iteration.
//!
//! # Algorithm
//!
//! Starting from `x = 0`, each sweep solves row `i` for `x[i]` using the
//! values already updated in this sweep for `j < i` and the previous sweep's
//! values for `j > i`. The iteration stops once the largest component change
//! or the largest residual entry falls below the tolerance.
//!
//! # Preconditions
//!
//! A zero diagonal entry makes a row unsolvable and is rejected before any
//! sweep. Strict diagonal dominance guarantees convergence; without it the
//! solver attaches a [`ConvergenceWarning::NotDiagonallyDominant`] and tries
//! anyway. A component that becomes NaN or infinite aborts the solve.

use ndarray::Array1;
use numlab_core::{ConvergenceWarning, Observer};
use tracing::{debug, trace, warn};

use crate::Config;

use super::{
    Action, Error, LinearSystem, NumericalError, SingularMatrixError, Solution, Status, Sweep,
};

const METHOD: &str = "seidel";

/// Solves the system by Gauss-Seidel iteration.
///
/// The observer receives a [`Sweep`] after each completed sweep and may
/// return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns [`SingularMatrixError::ZeroDiagonal`] if a diagonal entry is zero,
/// and [`NumericalError::Diverged`] if an iterate leaves the finite range.
pub fn solve<Obs>(system: &LinearSystem, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Sweep<'a>, Action>,
{
    let a = system.a();
    let b = system.b();
    let n = system.dim();

    if let Some(row) = (0..n).find(|&i| a[[i, i]] == 0.0) {
        return Err(SingularMatrixError::ZeroDiagonal { row }.into());
    }

    let mut warnings = Vec::new();
    if let Some((row, diagonal, off_diagonal)) = system.first_non_dominant_row() {
        let warning = ConvergenceWarning::NotDiagonallyDominant {
            row,
            diagonal,
            off_diagonal,
        };
        warn!(method = METHOD, %warning);
        warnings.push(warning);
    }

    debug!(method = METHOD, n, tolerance = config.tolerance(), "iteration started");

    let mut x = Array1::<f64>::zeros(n);
    let mut history = Vec::new();
    let mut status = Status::MaxIters;
    let mut change = f64::INFINITY;

    for sweep in 0..config.max_iters() {
        change = 0.0;
        for i in 0..n {
            let sum: f64 = (0..n).filter(|&j| j != i).map(|j| a[[i, j]] * x[j]).sum();
            let value = (b[i] - sum) / a[[i, i]];
            if !value.is_finite() {
                return Err(NumericalError::Diverged {
                    sweep,
                    row: i,
                    value,
                }
                .into());
            }
            change = change.max((value - x[i]).abs());
            x[i] = value;
        }

        let residual = system.residual_norm(&x);
        trace!(method = METHOD, sweep, change, residual);
        history.push(x.clone());

        let event = Sweep {
            index: sweep,
            x: &x,
            change,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            status = Status::StoppedByObserver;
            break;
        }

        if change < config.tolerance() || residual < config.tolerance() {
            status = Status::Converged;
            break;
        }
    }

    if status == Status::MaxIters {
        let warning = ConvergenceWarning::MaxItersReached {
            iters: history.len(),
            achieved: change,
            requested: config.tolerance(),
        };
        warn!(method = METHOD, %warning);
        warnings.push(warning);
    }

    debug!(method = METHOD, ?status, sweeps = history.len(), "iteration finished");

    Ok(Solution {
        status,
        x,
        sweeps: history.len(),
        history,
        warnings,
    })
}

/// Solves the system by Gauss-Seidel iteration without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(system: &LinearSystem, config: &Config) -> Result<Solution, Error> {
    solve(system, config, ())
}

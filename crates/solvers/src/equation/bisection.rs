//! Bisection on a sign-changing bracket.
//!
//! # Algorithm
//!
//! While the bracket is wider than the tolerance, evaluate the midpoint and
//! keep the half whose endpoints still differ in sign. The width halves every
//! step, so the number of iterations needed is `ceil(log2(width / tol))`.
//!
//! An exact zero at a midpoint stops the search immediately and collapses the
//! bracket onto it, so the reported width is zero. When the loop ends, one
//! final record is appended at the midpoint of the terminal bracket and that
//! midpoint is returned as the root.

use numlab_core::{Observer, ScalarFunction};
use tracing::{debug, trace};

use crate::Config;

use super::{Action, Error, Iteration, Solution, bracket::Bracket, evaluate::evaluate};

const METHOD: &str = "bisection";

/// Finds a root of `function` inside `bracket` by bisection.
///
/// The observer receives each loop [`Iteration`] before the bracket is
/// narrowed and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns a [`DomainError`](super::DomainError) if the bracket is invalid or
/// has no sign change, and a [`NumericalError`](super::NumericalError) if the
/// function fails or returns a non-finite value.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    Obs: Observer<Iteration, Action>,
{
    let mut bracket = Bracket::new(function, bracket)?;
    debug!(
        method = METHOD,
        left = bracket.left(),
        width = bracket.width(),
        tolerance = config.tolerance(),
        "root finder started"
    );

    let mut history = Vec::new();
    let mut iters = 0;
    let mut stopped = false;

    while bracket.width() > config.tolerance() && iters < config.max_iters() {
        let mid = bracket.midpoint();
        let f_mid = evaluate(function, mid)?;

        let record = bracket.record(iters, mid, f_mid, bracket.width());
        trace!(method = METHOD, ?record);
        history.push(record);

        if let Some(Action::StopEarly) = observer.observe(&record) {
            stopped = true;
            break;
        }
        if record.is_exact_root() {
            bracket.collapse(mid);
            break;
        }

        bracket.shrink(mid, f_mid);
        iters += 1;
    }

    let mid = bracket.midpoint();
    let last = bracket.record(iters, mid, evaluate(function, mid)?, bracket.width());

    Ok(Solution::finish(METHOD, history, last, iters, stopped, config))
}

/// Finds a root by bisection without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the function cannot be
/// evaluated.
pub fn solve_unobserved<F: ScalarFunction>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bracket, config, ())
}

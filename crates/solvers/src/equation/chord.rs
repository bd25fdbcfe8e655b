//! Chord method (false position) on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Each step draws the chord through `(a, f(a))` and `(b, f(b))` and takes
//! its root as the next approximation, then replaces the endpoint whose value
//! shares the sign of the new one. The bracket always keeps the sign change,
//! but unlike bisection one endpoint often stays fixed, so the bracket width
//! need not shrink to zero. The search stops on the step size instead.
//!
//! # Degenerate chords
//!
//! If `f(a) == f(b)` the chord is horizontal and has no root. The search then
//! fails with [`NumericalError::DegenerateSecant`](super::NumericalError::DegenerateSecant)
//! rather than continuing with NaN. The same error is returned when the chord
//! root overflows.

use numlab_core::{Observer, ScalarFunction};
use tracing::{debug, trace};

use crate::Config;

use super::{Action, Error, Iteration, Solution, bracket::Bracket, evaluate::evaluate};

const METHOD: &str = "chord";

/// Finds a root of `function` inside `bracket` by the chord method.
///
/// The observer receives each loop [`Iteration`] before the bracket is
/// narrowed and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns a [`DomainError`](super::DomainError) if the bracket is invalid or
/// has no sign change, and a [`NumericalError`](super::NumericalError) if the
/// function fails, returns a non-finite value, or the chord degenerates.
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

    let mut x_prev = bracket.left();
    let mut x = bracket.secant()?;
    let mut delta = (x - x_prev).abs();

    let mut history = Vec::new();
    let mut iters = 0;
    let mut stopped = false;

    while delta > config.tolerance() && iters < config.max_iters() {
        let fx = evaluate(function, x)?;

        let record = bracket.record(iters, x, fx, delta);
        trace!(method = METHOD, ?record);
        history.push(record);

        if let Some(Action::StopEarly) = observer.observe(&record) {
            stopped = true;
            break;
        }
        if record.is_exact_root() {
            bracket.collapse(x);
            delta = 0.0;
            break;
        }

        bracket.shrink(x, fx);
        x_prev = x;
        x = bracket.secant()?;
        delta = (x - x_prev).abs();
        iters += 1;
    }

    let last = bracket.record(iters, x, evaluate(function, x)?, delta);

    Ok(Solution::finish(METHOD, history, last, iters, stopped, config))
}

/// Finds a root by the chord method without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the function cannot be
/// evaluated, or the chord degenerates.
pub fn solve_unobserved<F: ScalarFunction>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bracket, config, ())
}

//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and used with both the root finders and the
//! Gauss-Seidel solver.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual (`f(x)` or `‖A·x − b‖∞`)
//! - [`HasStep`]: events that carry the convergence metric compared against
//!   the tolerance (bracket width, step size, or sweep change)
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numlab_core::Observer;
//! use numlab_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use numlab_solvers::{equation, linear};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries the metric a solver compares against its tolerance.
pub trait HasStep {
    /// Returns the convergence metric for this event.
    fn step(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- Root finder iterations ---

impl HasResidual for equation::Iteration {
    fn residual(&self) -> f64 {
        self.fx
    }
}

impl HasStep for equation::Iteration {
    fn step(&self) -> f64 {
        self.metric
    }
}

// --- Gauss-Seidel sweeps ---

impl HasResidual for linear::Sweep<'_> {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasStep for linear::Sweep<'_> {
    fn step(&self) -> f64 {
        self.change
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for equation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for linear::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numlab_core::Observer;
    use numlab_solvers::{
        Config,
        equation::{Status, bisection},
        linear::{LinearSystem, seidel},
    };

    /// Stops once the step falls below a threshold.
    struct StepBelow(f64);

    impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StepBelow {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.step() < self.0).then(A::stop_early)
        }
    }

    #[test]
    fn stops_a_root_finder() {
        let config = Config::new(100, 1e-12).unwrap();
        let solution =
            bisection::solve(&|x: f64| x * x - 2.0, [0.0, 2.0], &config, StepBelow(0.1)).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        // Widths 2, 1, 0.5, 0.25, 0.125, 0.0625.
        assert_relative_eq!(solution.tolerance, 0.0625);
    }

    #[test]
    fn stops_gauss_seidel() {
        let system = LinearSystem::from_rows(&[[4.0, 1.0], [1.0, 3.0]], &[1.0, 2.0]).unwrap();
        let config = Config::new(100, 1e-14).unwrap();
        let solution = seidel::solve(&system, &config, StepBelow(1e-3)).unwrap();

        assert_eq!(solution.status, linear::Status::StoppedByObserver);
        assert!(solution.history.len() < 100);
    }

    #[test]
    fn events_expose_their_values() {
        let record = equation::Iteration {
            iter: 0,
            a: 0.0,
            b: 2.0,
            fa: -2.0,
            fb: 2.0,
            x: 1.0,
            fx: -1.0,
            metric: 2.0,
        };
        assert_relative_eq!(record.residual(), -1.0);
        assert_relative_eq!(record.step(), 2.0);
    }
}

use std::{fmt, str::FromStr};

use ndarray::Array1;
use numlab_core::Observer;
use thiserror::Error;

use crate::Config;

use super::{Error, LinearSystem, Solution, gauss, seidel};

/// Control actions supported by the linear solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current sweep and return its iterate.
    StopEarly,
}

/// Event emitted after each completed Gauss-Seidel sweep.
#[derive(Debug, Clone, Copy)]
pub struct Sweep<'a> {
    /// Zero-based sweep index.
    pub index: usize,

    /// The iterate after this sweep.
    pub x: &'a Array1<f64>,

    /// Infinity norm of the change from the previous iterate.
    pub change: f64,

    /// Infinity norm of `A·x − b`.
    pub residual: f64,
}

/// A method for solving a [`LinearSystem`].
///
/// The trait is object safe so that solvers can be stored in a
/// [`MethodRegistry`](super::MethodRegistry) and selected by id.
pub trait LinearSolver: Send + Sync {
    /// Returns a stable lowercase identifier.
    fn id(&self) -> &str;

    /// Returns a human-readable name.
    fn display_name(&self) -> &str;

    /// Solves the system, reporting each sweep of an iterative method to the
    /// observer.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is singular for this method or the
    /// computation leaves the finite range.
    fn solve(
        &self,
        system: &LinearSystem,
        config: &Config,
        observer: &mut dyn for<'a> Observer<Sweep<'a>, Action>,
    ) -> Result<Solution, Error>;

    /// Solves the system without observer support.
    ///
    /// # Errors
    ///
    /// See [`solve`](Self::solve).
    fn solve_unobserved(&self, system: &LinearSystem, config: &Config) -> Result<Solution, Error> {
        self.solve(system, config, &mut ())
    }
}

/// The built-in linear solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Gauss,
    Seidel,
}

/// The name does not match any built-in linear solver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown linear method `{0}` (expected `gauss` or `seidel`)")]
pub struct UnknownMethod(pub String);

impl Method {
    /// Every built-in solver, in registration order.
    pub const ALL: [Self; 2] = [Self::Gauss, Self::Seidel];
}

impl LinearSolver for Method {
    fn id(&self) -> &str {
        match self {
            Self::Gauss => "gauss",
            Self::Seidel => "seidel",
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::Gauss => "Gauss elimination",
            Self::Seidel => "Gauss-Seidel iteration",
        }
    }

    fn solve(
        &self,
        system: &LinearSystem,
        config: &Config,
        observer: &mut dyn for<'a> Observer<Sweep<'a>, Action>,
    ) -> Result<Solution, Error> {
        match self {
            Self::Gauss => gauss::solve(system),
            Self::Seidel => seidel::solve(system, config, |sweep: &Sweep<'_>| {
                observer.observe(sweep)
            }),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use crate::linear::Status;

    fn system() -> LinearSystem {
        LinearSystem::from_rows(&[[4.0, 1.0], [1.0, 3.0]], &[1.0, 2.0]).unwrap()
    }

    #[test]
    fn trait_objects_dispatch() {
        let solvers: Vec<Box<dyn LinearSolver>> = vec![Box::new(Method::Gauss), Box::new(Method::Seidel)];
        let expected = array![1.0 / 11.0, 7.0 / 11.0];

        for solver in &solvers {
            let solution = solver.solve_unobserved(&system(), &Config::default()).unwrap();
            for (x, e) in solution.x.iter().zip(&expected) {
                assert_relative_eq!(*x, *e, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn observer_reaches_seidel_through_the_trait() {
        let mut count = 0;
        let mut observer = |_: &Sweep<'_>| {
            count += 1;
            (count == 2).then_some(Action::StopEarly)
        };

        let solution = Method::Seidel
            .solve(&system(), &Config::default(), &mut observer)
            .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.sweeps, 2);
        assert_eq!(count, 2);
    }

    #[test]
    fn parses_ids() {
        assert_eq!("gauss".parse(), Ok(Method::Gauss));
        assert_eq!("SEIDEL".parse(), Ok(Method::Seidel));
        assert!("jacobi".parse::<Method>().is_err());
    }
}

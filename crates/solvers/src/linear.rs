//! Solvers for linear systems `A·x = b`.
//!
//! A [`LinearSystem`] is validated once when it is built: square, non-empty,
//! matching right-hand side, finite entries. Solvers borrow it and never
//! mutate it.
//!
//! # Solvers
//!
//! - [`gauss`]: elimination with partial pivoting, exact up to rounding
//! - [`seidel`]: Gauss-Seidel iteration from the zero vector
//!
//! Both are also available through the [`LinearSolver`] trait, implemented by
//! the [`Method`] enum, and through a [`MethodRegistry`] that maps stable ids
//! to solvers for callers that select a method by name.
//!
//! # History
//!
//! The iterative solver appends one vector per completed sweep and reports
//! each sweep to the observer as a [`Sweep`] event. The direct solver leaves
//! the history empty.

mod error;
mod norm;
mod registry;
mod solution;
mod solver;
mod system;

pub mod gauss;
pub mod seidel;

pub use error::{Error, NumericalError, SingularMatrixError};
pub use registry::{MethodRegistry, RegistryError};
pub use solution::{Solution, Status};
pub use solver::{Action, LinearSolver, Method, Sweep, UnknownMethod};
pub use system::{LinearSystem, SystemError};

#[cfg(feature = "serde")]
pub use system::RawSystem;

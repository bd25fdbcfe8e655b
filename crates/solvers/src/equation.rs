//! Root finders for a scalar equation `f(x) = 0` on a bracket.
//!
//! Both methods need a bracket `[a, b]` on which `f` changes sign. The
//! precondition is checked once, before iterating; a bracket without a sign
//! change fails with [`DomainError::NoSignChange`] and produces no history.
//!
//! # Solvers
//!
//! - [`bisection`]: halves the bracket every step; linear convergence
//! - [`chord`]: false position, narrows the bracket at the secant root
//!
//! [`Method`] wraps both behind one entry point for callers that pick the
//! method at runtime.
//!
//! # History
//!
//! Every loop iteration appends one [`Iteration`] record *before* the
//! bracket is narrowed, and one final record describing the terminal bracket
//! is appended after the loop. Observers see each loop record as it is
//! produced and may return [`Action::StopEarly`].

mod action;
mod bracket;
mod error;
mod evaluate;
mod iteration;
mod method;
mod solution;

pub mod bisection;
pub mod chord;

pub use action::Action;
pub use bracket::opposite_signs;
pub use error::{DomainError, Error, NumericalError};
pub use iteration::Iteration;
pub use method::{Method, UnknownMethod};
pub use solution::{Solution, Status};

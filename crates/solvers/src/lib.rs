//! Bracketing root finders and linear-system solvers.
//!
//! Every solver returns its answer together with the full convergence
//! history, so that callers can render iteration tables and plots.
//!
//! # Modules
//!
//! - [`equation`]: roots of a scalar function on a bracket
//!   ([`equation::bisection`], [`equation::chord`])
//! - [`linear`]: solutions of `A·x = b`
//!   ([`linear::gauss`], [`linear::seidel`], [`linear::MethodRegistry`])

mod config;

pub mod equation;
pub mod linear;

pub use config::{Config, ConfigError};

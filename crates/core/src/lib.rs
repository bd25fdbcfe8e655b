//! Core traits and types for numlab.
//!
//! This crate defines the abstractions shared by every numlab solver:
//!
//! - [`ScalarFunction`]: a real-valued callable of one real variable
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`ConvergenceWarning`]: advisory, non-fatal solver diagnostics

mod function;
mod observer;
mod warning;

pub use function::ScalarFunction;
pub use observer::Observer;
pub use warning::ConvergenceWarning;

//! Reusable observers for the numlab solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the root finders and the Gauss-Seidel solver.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasStep`], [`CanStopEarly`])
//!
//! # Features
//!
//! - `plot`: enables [`PlotObserver`] and [`show_all`] for visualizing
//!   convergence via egui. Series are drawn as lines or markers, with
//!   reference lines for tolerances and bracket ends. This feature adds
//!   dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: numlab_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{Guide, Panel, PlotObserver, Plottable, Series, ShowConfig, Style, show_all};

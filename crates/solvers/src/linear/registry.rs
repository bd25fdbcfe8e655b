use std::fmt;

use thiserror::Error;

use super::{LinearSolver, Method};

/// An ordered table of linear solvers keyed by id.
///
/// The registry is filled once, then shared by reference with whatever
/// selects a method by name. Entries cannot be removed.
#[derive(Default)]
pub struct MethodRegistry {
    solvers: Vec<Box<dyn LinearSolver>>,
}

/// Errors that can occur when registering a solver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid method id `{0}`: expected lowercase ASCII letters, digits, or `_`")]
    InvalidId(String),

    #[error("method `{0}` is already registered")]
    Duplicate(String),
}

impl MethodRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in solvers, Gauss then Seidel.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            solvers: Method::ALL
                .into_iter()
                .map(|method| Box::new(method) as Box<dyn LinearSolver>)
                .collect(),
        }
    }

    /// Adds a solver under its own id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidId`] if the id is empty or contains
    /// anything other than lowercase ASCII letters, digits, and `_`, and
    /// [`RegistryError::Duplicate`] if the id is already taken.
    pub fn register<S: LinearSolver + 'static>(&mut self, solver: S) -> Result<(), RegistryError> {
        let id = solver.id();
        let valid = !id.is_empty()
            && id
                .bytes()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == b'_');
        if !valid {
            return Err(RegistryError::InvalidId(id.to_owned()));
        }
        if self.lookup(id).is_some() {
            return Err(RegistryError::Duplicate(id.to_owned()));
        }

        self.solvers.push(Box::new(solver));
        Ok(())
    }

    /// Returns the solver registered under `id`.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&dyn LinearSolver> {
        self.solvers
            .iter()
            .find(|solver| solver.id() == id)
            .map(|solver| solver.as_ref())
    }

    /// Returns `(id, display_name)` pairs in registration order.
    #[must_use]
    pub fn choices(&self) -> Vec<(&str, &str)> {
        self.solvers
            .iter()
            .map(|solver| (solver.id(), solver.display_name()))
            .collect()
    }

    /// Returns the number of registered solvers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Returns true if no solver is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

impl fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.solvers.iter().map(|solver| solver.id()))
            .finish()
    }
}

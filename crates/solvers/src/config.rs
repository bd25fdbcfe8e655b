use thiserror::Error;

/// Stopping criteria shared by the iterative solvers.
///
/// `tolerance` is compared against the method's own convergence metric:
/// bracket width for bisection, step size for the chord method, and the
/// change between sweeps for Gauss-Seidel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration bound.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of iterations (or sweeps).
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the requested tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

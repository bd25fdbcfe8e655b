/// One row of a root finder's convergence history.
///
/// For bisection `x` is the bracket midpoint and `metric` the bracket width.
/// For the chord method `x` is the secant root and `metric` the distance
/// from the previous approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration {
    /// Zero-based iteration index.
    pub iter: usize,

    /// Left bracket endpoint.
    pub a: f64,

    /// Right bracket endpoint.
    pub b: f64,

    /// Function value at `a`.
    pub fa: f64,

    /// Function value at `b`.
    pub fb: f64,

    /// Current approximation.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Convergence metric compared against the tolerance.
    pub metric: f64,
}

impl Iteration {
    /// Returns the bracket as `[a, b]`.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns true if `x` is an exact root.
    #[must_use]
    pub fn is_exact_root(&self) -> bool {
        self.fx == 0.0
    }
}

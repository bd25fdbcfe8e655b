use numlab_core::ScalarFunction;

use super::{DomainError, Error, Iteration, NumericalError, evaluate::evaluate};

/// Returns true if `a` and `b` have strictly opposite signs.
///
/// This is the bracketing test `a * b < 0` without the product, which can
/// underflow to zero for tiny values of opposite sign.
#[must_use]
pub fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}

/// Current bracket bounds and the function values at them.
///
/// The function is evaluated once per endpoint. Values are carried along as
/// the bracket shrinks so that no point is ever evaluated twice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_value: f64,
    right_value: f64,
}

impl Bracket {
    /// Validates the endpoints, evaluates the function at both, and checks
    /// that the values change sign.
    ///
    /// Reversed endpoints are swapped so that `left < right`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the endpoints are non-finite, equal, or
    /// do not bracket a sign change, and a [`NumericalError`] if the function
    /// cannot be evaluated at an endpoint.
    pub(super) fn new<F: ScalarFunction>(function: &F, bracket: [f64; 2]) -> Result<Self, Error> {
        let [a, b] = bracket;

        for value in [a, b] {
            if !value.is_finite() {
                return Err(DomainError::NonFiniteBracket { value }.into());
            }
        }

        if a == b {
            return Err(DomainError::ZeroWidthBracket { value: a }.into());
        }

        let (left, right) = if a < b { (a, b) } else { (b, a) };
        let left_value = evaluate(function, left)?;
        let right_value = evaluate(function, right)?;

        if !opposite_signs(left_value, right_value) {
            return Err(DomainError::NoSignChange {
                left,
                right,
                left_value,
                right_value,
            }
            .into());
        }

        Ok(Self {
            left,
            right,
            left_value,
            right_value,
        })
    }

    /// Returns the left endpoint.
    pub(super) fn left(&self) -> f64 {
        self.left
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the bracket width.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the root of the chord through both endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`NumericalError::DegenerateSecant`] if the endpoint values are
    /// equal (the chord is horizontal) or the intersection is not finite.
    pub(super) fn secant(&self) -> Result<f64, NumericalError> {
        let degenerate = || NumericalError::DegenerateSecant {
            left: self.left,
            right: self.right,
            left_value: self.left_value,
            right_value: self.right_value,
        };

        let slope_denominator = self.right_value - self.left_value;

        if slope_denominator == 0.0 {
            return Err(degenerate());
        }

        let x = self.left - self.left_value * self.width() / slope_denominator;
        if x.is_finite() { Ok(x) } else { Err(degenerate()) }
    }

    /// Replaces the endpoint whose value shares the sign of `value`.
    ///
    /// The sign is tested against the left value: if `value` has the opposite
    /// sign the right endpoint moves, otherwise the left one does.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if opposite_signs(value, self.left_value) {
            self.right = x;
            self.right_value = value;
        } else {
            self.left = x;
            self.left_value = value;
        }
    }

    /// Collapses the bracket onto an exact root.
    pub(super) fn collapse(&mut self, root: f64) {
        self.left = root;
        self.right = root;
        self.left_value = 0.0;
        self.right_value = 0.0;
    }

    /// Builds the history record for an approximation inside this bracket.
    pub(super) fn record(&self, iter: usize, x: f64, fx: f64, metric: f64) -> Iteration {
        Iteration {
            iter,
            a: self.left,
            b: self.right,
            fa: self.left_value,
            fb: self.right_value,
            x,
            fx,
            metric,
        }
    }
}

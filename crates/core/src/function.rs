use std::convert::Infallible;

/// A real-valued function of one real variable.
///
/// Root finders borrow a `ScalarFunction` and call it at the bracket
/// endpoints and at every new approximation. Implementations must not rely
/// on call order: the same `x` always maps to the same result.
///
/// Plain closures of type `Fn(f64) -> f64` implement this trait with an
/// [`Infallible`] error. Functions that can fail outside their domain
/// (`log` of a negative number, for example) implement it directly and
/// report the failure through [`ScalarFunction::Error`].
pub trait ScalarFunction {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is outside the function's domain.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

/// Blanket implementation for infallible closures.
impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    #[derive(Debug)]
    struct NegativeInput(f64);

    impl fmt::Display for NegativeInput {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "negative input {}", self.0)
        }
    }

    impl std::error::Error for NegativeInput {}

    /// Square root that rejects negative inputs.
    struct Sqrt;

    impl ScalarFunction for Sqrt {
        type Error = NegativeInput;

        fn call(&self, x: f64) -> Result<f64, Self::Error> {
            if x < 0.0 {
                Err(NegativeInput(x))
            } else {
                Ok(x.sqrt())
            }
        }
    }

    fn eval<F: ScalarFunction>(f: &F, x: f64) -> Result<f64, F::Error> {
        f.call(x)
    }

    #[test]
    fn closures_are_scalar_functions() {
        let cubic = |x: f64| x.powi(3) - 2.0;
        assert_eq!(eval(&cubic, 2.0).unwrap(), 6.0);
    }

    #[test]
    fn custom_functions_can_fail() {
        assert_eq!(eval(&Sqrt, 9.0).unwrap(), 3.0);
        let err = eval(&Sqrt, -1.0).unwrap_err();
        assert_eq!(err.to_string(), "negative input -1");
    }
}

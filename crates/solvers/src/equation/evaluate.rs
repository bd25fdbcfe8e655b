use numlab_core::ScalarFunction;

use super::NumericalError;

/// Evaluates `function` at `x`, rejecting failures and non-finite values.
///
/// # Errors
///
/// Returns [`NumericalError::Evaluation`] if the function fails and
/// [`NumericalError::NonFinite`] if it returns NaN or infinity.
pub(super) fn evaluate<F: ScalarFunction>(function: &F, x: f64) -> Result<f64, NumericalError> {
    let value = function
        .call(x)
        .map_err(|source| NumericalError::Evaluation {
            x,
            source: Box::new(source),
        })?;

    if !value.is_finite() {
        return Err(NumericalError::NonFinite { x, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outside domain")]
    struct OutsideDomain;

    struct Reciprocal;

    impl ScalarFunction for Reciprocal {
        type Error = OutsideDomain;

        fn call(&self, x: f64) -> Result<f64, Self::Error> {
            if x == 0.0 { Err(OutsideDomain) } else { Ok(1.0 / x) }
        }
    }

    #[test]
    fn passes_finite_values_through() {
        assert_eq!(evaluate(&Reciprocal, 4.0).unwrap(), 0.25);
    }

    #[test]
    fn wraps_function_errors() {
        let err = evaluate(&Reciprocal, 0.0).unwrap_err();
        assert!(matches!(err, NumericalError::Evaluation { x, .. } if x == 0.0));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = evaluate(&|x: f64| x.ln(), -1.0).unwrap_err();
        assert!(matches!(err, NumericalError::NonFinite { .. }));
    }
}

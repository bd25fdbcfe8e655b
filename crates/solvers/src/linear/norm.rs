/// Returns the infinity norm of `values`, or zero if there are none.
pub(super) fn max_abs<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    values.into_iter().fold(0.0, |max, v| max.max(v.abs()))
}

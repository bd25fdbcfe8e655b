//! Gaussian elimination with partial pivoting.
//!
//! For each column the row with the largest magnitude entry at or below the
//! diagonal is swapped into the pivot position (the first such row on ties),
//! and the entries below the pivot are eliminated. Back substitution then
//! recovers `x` from the upper-triangular system.
//!
//! The solver works on a private copy of `A` and `b`. It ignores the
//! tolerance and iteration bound, and its history is always empty.

use ndarray::Array1;
use tracing::debug;

use super::{Error, LinearSystem, NumericalError, SingularMatrixError, Solution};

/// Solves the system by Gaussian elimination.
///
/// # Errors
///
/// Returns [`SingularMatrixError::ZeroPivot`] if a column has no nonzero
/// pivot candidate, and [`NumericalError::NonFinite`] if back substitution
/// overflows.
pub fn solve(system: &LinearSystem) -> Result<Solution, Error> {
    let n = system.dim();
    let mut a = system.a().to_owned();
    let mut b = system.b().to_owned();

    for i in 0..n {
        let pivot = (i + 1..n).fold(i, |best, r| {
            if a[[r, i]].abs() > a[[best, i]].abs() { r } else { best }
        });

        if a[[pivot, i]] == 0.0 {
            return Err(SingularMatrixError::ZeroPivot { column: i }.into());
        }

        if pivot != i {
            for c in 0..n {
                a.swap([i, c], [pivot, c]);
            }
            b.swap(i, pivot);
        }

        for r in i + 1..n {
            let ratio = a[[r, i]] / a[[i, i]];
            for c in i..n {
                let delta = ratio * a[[i, c]];
                a[[r, c]] -= delta;
            }
            let delta = ratio * b[i];
            b[r] -= delta;
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let tail: f64 = (i + 1..n).map(|j| a[[i, j]] * x[j]).sum();
        let value = (b[i] - tail) / a[[i, i]];
        if !value.is_finite() {
            return Err(NumericalError::NonFinite { row: i, value }.into());
        }
        x[i] = value;
    }

    debug!(method = "gauss", n, "direct solve finished");
    Ok(Solution::direct(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    use crate::linear::Status;

    #[test]
    fn solves_identity() {
        let system = LinearSystem::new(Array2::eye(3), array![1.0, 1.0, 1.0]).unwrap();
        let solution = solve(&system).unwrap();

        assert_eq!(solution.status, Status::Direct);
        assert_eq!(solution.x, array![1.0, 1.0, 1.0]);
        assert!(solution.history.is_empty());
        assert_eq!(solution.sweeps, 0);
    }

    #[test]
    fn pivots_past_a_zero_diagonal() {
        // Without row exchange the first pivot would be zero.
        let rows = [[0.0, 2.0, 1.0], [1.0, 1.0, 1.0], [2.0, 1.0, 3.0]];
        let system = LinearSystem::from_rows(&rows, &[7.0, 6.0, 13.0]).unwrap();
        let solution = solve(&system).unwrap();

        let expected = array![1.0, 2.0, 3.0];
        for (x, e) in solution.x.iter().zip(&expected) {
            assert_relative_eq!(*x, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn leaves_the_system_untouched() {
        let system = LinearSystem::from_rows(&[[1.0, 2.0], [3.0, 4.0]], &[5.0, 6.0]).unwrap();
        let before = system.clone();
        solve(&system).unwrap();
        assert_eq!(system, before);
    }

    #[test]
    fn singular_matrix_has_zero_pivot() {
        let system = LinearSystem::from_rows(&[[1.0, 2.0], [2.0, 4.0]], &[1.0, 2.0]).unwrap();
        assert_eq!(
            solve(&system),
            Err(Error::Singular(SingularMatrixError::ZeroPivot { column: 1 }))
        );

        let system = LinearSystem::from_rows(&[[0.0, 1.0], [0.0, 1.0]], &[1.0, 2.0]).unwrap();
        assert_eq!(
            solve(&system),
            Err(Error::Singular(SingularMatrixError::ZeroPivot { column: 0 }))
        );
    }
}

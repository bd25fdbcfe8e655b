use ndarray::{Array1, Array2};
use thiserror::Error;

use super::norm::max_abs;

/// A validated linear system `A·x = b`.
///
/// `A` is square with at least one row, `b` has one entry per row, and every
/// entry is finite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSystem", into = "RawSystem")
)]
pub struct LinearSystem {
    a: Array2<f64>,
    b: Array1<f64>,
}

/// Errors that can occur when building a [`LinearSystem`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SystemError {
    #[error("the system has no equations")]
    Empty,

    #[error("matrix must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("right-hand side has {found} entries, expected {expected}")]
    RhsLength { expected: usize, found: usize },

    #[error("matrix entry A[{row}][{col}] is not finite")]
    NonFiniteMatrix { row: usize, col: usize },

    #[error("right-hand side entry b[{row}] is not finite")]
    NonFiniteRhs { row: usize },
}

impl LinearSystem {
    /// Creates a system from a coefficient matrix and a right-hand side.
    ///
    /// # Errors
    ///
    /// Returns a [`SystemError`] if the shapes disagree or an entry is not
    /// finite.
    pub fn new(a: Array2<f64>, b: Array1<f64>) -> Result<Self, SystemError> {
        let (rows, cols) = a.dim();
        if rows == 0 {
            return Err(SystemError::Empty);
        }
        if rows != cols {
            return Err(SystemError::NotSquare {
                row: 0,
                len: cols,
                expected: rows,
            });
        }
        if b.len() != rows {
            return Err(SystemError::RhsLength {
                expected: rows,
                found: b.len(),
            });
        }
        if let Some(((row, col), _)) = a.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(SystemError::NonFiniteMatrix { row, col });
        }
        if let Some(row) = b.iter().position(|v| !v.is_finite()) {
            return Err(SystemError::NonFiniteRhs { row });
        }

        Ok(Self { a, b })
    }

    /// Creates a system from row vectors.
    ///
    /// # Errors
    ///
    /// Returns a [`SystemError`] if a row has the wrong length, the
    /// right-hand side does not match, or an entry is not finite.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], b: &[f64]) -> Result<Self, SystemError> {
        let n = rows.len();
        if n == 0 {
            return Err(SystemError::Empty);
        }
        if let Some((row, len)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != n)
        {
            return Err(SystemError::NotSquare {
                row,
                len,
                expected: n,
            });
        }

        let a = Array2::from_shape_fn((n, n), |(i, j)| rows[i].as_ref()[j]);
        Self::new(a, Array1::from(b.to_vec()))
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Returns the coefficient matrix.
    #[must_use]
    pub fn a(&self) -> &Array2<f64> {
        &self.a
    }

    /// Returns the right-hand side.
    #[must_use]
    pub fn b(&self) -> &Array1<f64> {
        &self.b
    }

    /// Returns `A·x − b`.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have [`dim`](Self::dim) entries.
    #[must_use]
    pub fn residual(&self, x: &Array1<f64>) -> Array1<f64> {
        self.a.dot(x) - &self.b
    }

    /// Returns the infinity norm of the residual at `x`.
    #[must_use]
    pub fn residual_norm(&self, x: &Array1<f64>) -> f64 {
        max_abs(&self.residual(x))
    }

    /// Returns the first row that is not strictly diagonally dominant.
    ///
    /// The result is `(row, |a_ii|, sum of |a_ij| for j != i)`.
    #[must_use]
    pub fn first_non_dominant_row(&self) -> Option<(usize, f64, f64)> {
        self.a.rows().into_iter().enumerate().find_map(|(i, row)| {
            let diagonal = row[i].abs();
            let off_diagonal: f64 = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, v)| v.abs())
                .sum();
            (diagonal <= off_diagonal).then_some((i, diagonal, off_diagonal))
        })
    }
}

/// Plain nested-vector form of a system, used for (de)serialization.
///
/// ```toml
/// a = [[4.0, 1.0], [2.0, 5.0]]
/// b = [1.0, 2.0]
/// ```
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RawSystem {
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSystem> for LinearSystem {
    type Error = SystemError;

    fn try_from(raw: RawSystem) -> Result<Self, Self::Error> {
        Self::from_rows(&raw.a, &raw.b)
    }
}

#[cfg(feature = "serde")]
impl From<LinearSystem> for RawSystem {
    fn from(system: LinearSystem) -> Self {
        Self {
            a: system.a.rows().into_iter().map(|r| r.to_vec()).collect(),
            b: system.b.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn builds_from_rows() {
        let system = LinearSystem::from_rows(&[[4.0, 1.0], [2.0, 5.0]], &[1.0, 2.0]).unwrap();
        assert_eq!(system.dim(), 2);
        assert_eq!(system.a(), &array![[4.0, 1.0], [2.0, 5.0]]);
        assert_eq!(system.b(), &array![1.0, 2.0]);
    }

    #[test]
    fn rejects_bad_shapes() {
        let empty: [[f64; 0]; 0] = [];
        assert_eq!(
            LinearSystem::from_rows(&empty, &[]),
            Err(SystemError::Empty)
        );
        assert_eq!(
            LinearSystem::from_rows(&[vec![1.0, 2.0], vec![3.0]], &[1.0, 2.0]),
            Err(SystemError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            LinearSystem::new(Array2::zeros((2, 3)), Array1::zeros(2)),
            Err(SystemError::NotSquare {
                row: 0,
                len: 3,
                expected: 2
            })
        );
        assert_eq!(
            LinearSystem::from_rows(&[[1.0]], &[1.0, 2.0]),
            Err(SystemError::RhsLength {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_non_finite_entries() {
        assert_eq!(
            LinearSystem::from_rows(&[[1.0, 0.0], [f64::NAN, 1.0]], &[1.0, 2.0]),
            Err(SystemError::NonFiniteMatrix { row: 1, col: 0 })
        );
        assert_eq!(
            LinearSystem::from_rows(&[[1.0]], &[f64::INFINITY]),
            Err(SystemError::NonFiniteRhs { row: 0 })
        );
    }

    #[test]
    fn residual_of_exact_solution_is_zero() {
        let system = LinearSystem::from_rows(&[[2.0, 1.0], [1.0, 3.0]], &[3.0, 4.0]).unwrap();
        assert_relative_eq!(system.residual_norm(&array![1.0, 1.0]), 0.0);
        assert_relative_eq!(system.residual_norm(&array![0.0, 0.0]), 4.0);
    }

    #[test]
    fn finds_first_non_dominant_row() {
        let dominant = LinearSystem::from_rows(&[[4.0, 1.0], [2.0, 5.0]], &[1.0, 2.0]).unwrap();
        assert_eq!(dominant.first_non_dominant_row(), None);

        let weak = LinearSystem::from_rows(&[[4.0, 1.0], [5.0, 5.0]], &[1.0, 2.0]).unwrap();
        assert_eq!(weak.first_non_dominant_row(), Some((1, 5.0, 5.0)));
    }
}

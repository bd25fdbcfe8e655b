//! Shared fixtures for the numlab integration tests.

use ndarray::{Array1, Array2};
use numlab_solvers::linear::LinearSystem;

/// `x³ − 3x² + x + 5`, which has a single real root at `x = −1`.
pub fn cubic(x: f64) -> f64 {
    x.powi(3) - 3.0 * x.powi(2) + x + 5.0
}

/// A function whose chord through any symmetric bracket overflows.
pub fn steep(x: f64) -> f64 {
    1e308 * x
}

/// The `n × n` identity system with right-hand side `b`.
pub fn identity(b: &[f64]) -> LinearSystem {
    LinearSystem::new(Array2::eye(b.len()), Array1::from(b.to_vec()))
        .expect("identity system is valid")
}

/// Builds a strictly diagonally dominant system with known solution `x`.
///
/// Off-diagonal entries come from `entries` (row major, diagonal slots
/// ignored). Each diagonal is set to twice the row's off-diagonal sum plus
/// one, so Gauss-Seidel contracts by at least half per sweep.
pub fn dominant_system(n: usize, entries: &[f64], x: &[f64]) -> LinearSystem {
    let mut a = Array2::from_shape_fn((n, n), |(i, j)| entries[i * n + j]);
    for i in 0..n {
        let off: f64 = (0..n).filter(|&j| j != i).map(|j| a[[i, j]].abs()).sum();
        a[[i, i]] = 2.0 * off + 1.0;
    }
    let b = a.dot(&Array1::from(x.to_vec()));
    LinearSystem::new(a, b).expect("dominant system is valid")
}

/// A 3×3 system in the TOML file format accepted by the CLI.
pub const SYSTEM_TOML: &str = r#"
# 10x - y + 2z = 6, ...
a = [
  [10.0, -1.0, 2.0],
  [-1.0, 11.0, -1.0],
  [2.0, -1.0, 10.0],
]
b = [6.0, 25.0, -11.0]
"#;

/// The same system as [`SYSTEM_TOML`], in JSON.
pub const SYSTEM_JSON: &str = r#"{
  "a": [[10, -1, 2], [-1, 11, -1], [2, -1, 10]],
  "b": [6, 25, -11]
}"#;

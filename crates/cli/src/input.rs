use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use numlab_solvers::linear::LinearSystem;

use crate::args::LinearArgs;

/// Builds the system from either `--system` or `--matrix`/`--rhs`.
pub fn system_from_args(args: &LinearArgs) -> Result<LinearSystem> {
    match (&args.system, &args.matrix, &args.rhs) {
        (Some(path), _, _) => load_system(path),
        (None, Some(matrix), Some(rhs)) => {
            let rows = parse_matrix(matrix)?;
            let b = parse_vector(rhs).context("invalid --rhs")?;
            Ok(LinearSystem::from_rows(&rows, &b)?)
        }
        _ => bail!("either --system or both --matrix and --rhs are required"),
    }
}

/// Reads a system from a `.toml` or `.json` file.
pub fn load_system(path: &Path) -> Result<LinearSystem> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => toml::from_str(&text)
            .with_context(|| format!("invalid system in {}", path.display())),
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("invalid system in {}", path.display())),
        _ => bail!(
            "unsupported system file {}: expected a .toml or .json extension",
            path.display()
        ),
    }
}

/// Parses rows separated by `;` with entries separated by `,` or whitespace.
pub fn parse_matrix(s: &str) -> Result<Vec<Vec<f64>>> {
    s.split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(i, row)| parse_vector(row).with_context(|| format!("invalid matrix row {i}")))
        .collect()
}

/// Parses entries separated by `,` or whitespace.
pub fn parse_vector(s: &str) -> Result<Vec<f64>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<f64>()
                .with_context(|| format!("`{v}` is not a number"))
        })
        .collect()
}

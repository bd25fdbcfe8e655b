use std::io::Write;

use anyhow::Result;
use numlab_core::ConvergenceWarning;
use numlab_solvers::{
    equation::{self, Iteration},
    linear::{self, LinearSystem},
};
use serde::Serialize;

/// Everything the `root` command prints.
#[derive(Debug, Serialize)]
pub struct RootReport<'a> {
    pub method: &'a str,
    pub function: &'a str,
    #[serde(flatten)]
    pub solution: &'a equation::Solution,
}

/// Everything the `linear` command prints.
#[derive(Debug, Serialize)]
pub struct LinearReport<'a> {
    pub method: &'a str,
    pub status: linear::Status,
    pub x: Vec<f64>,
    pub residual: f64,
    pub sweeps: usize,
    pub history: Vec<Vec<f64>>,
    pub warnings: &'a [ConvergenceWarning],
}

impl<'a> LinearReport<'a> {
    pub fn new(method: &'a str, system: &LinearSystem, solution: &'a linear::Solution) -> Self {
        Self {
            method,
            status: solution.status,
            x: solution.x.to_vec(),
            residual: system.residual_norm(&solution.x),
            sweeps: solution.sweeps,
            history: solution.history.iter().map(|x| x.to_vec()).collect(),
            warnings: &solution.warnings,
        }
    }
}

pub fn write_json<T: Serialize>(out: &mut impl Write, report: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_root_table(out: &mut impl Write, report: &RootReport<'_>) -> Result<()> {
    let solution = report.solution;

    writeln!(out, "{} on f(x) = {}", report.method, report.function)?;
    writeln!(
        out,
        "{:>5} {:>14} {:>14} {:>14} {:>12} {:>12} {:>12} {:>12}",
        "iter", "a", "b", "x", "f(a)", "f(b)", "f(x)", "metric"
    )?;
    for record in &solution.history {
        write_iteration(out, record)?;
    }

    writeln!(out)?;
    writeln!(out, "status:     {:?}", solution.status)?;
    writeln!(out, "root:       {:.10}", solution.root)?;
    writeln!(out, "f(root):    {:.3e}", solution.f_value)?;
    writeln!(out, "tolerance:  {:.3e}", solution.tolerance)?;
    writeln!(out, "iterations: {}", solution.iterations)?;
    write_warnings(out, &solution.warnings)
}

fn write_iteration(out: &mut impl Write, r: &Iteration) -> Result<()> {
    writeln!(
        out,
        "{:>5} {:>14.8} {:>14.8} {:>14.8} {:>12.4e} {:>12.4e} {:>12.4e} {:>12.4e}",
        r.iter, r.a, r.b, r.x, r.fa, r.fb, r.fx, r.metric
    )?;
    Ok(())
}

pub fn write_linear_table(out: &mut impl Write, report: &LinearReport<'_>) -> Result<()> {
    writeln!(out, "{}", report.method)?;

    if !report.history.is_empty() {
        write!(out, "{:>5}", "sweep")?;
        for i in 0..report.x.len() {
            write!(out, " {:>14}", format!("x[{i}]"))?;
        }
        writeln!(out)?;

        for (sweep, x) in report.history.iter().enumerate() {
            write!(out, "{sweep:>5}")?;
            for value in x {
                write!(out, " {value:>14.8}")?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "status:   {:?}", report.status)?;
    for (i, value) in report.x.iter().enumerate() {
        writeln!(out, "x[{i}] = {value:.10}")?;
    }
    writeln!(out, "residual: {:.3e}", report.residual)?;
    if report.status != linear::Status::Direct {
        writeln!(out, "sweeps:   {}", report.sweeps)?;
    }
    write_warnings(out, report.warnings)
}

fn write_warnings(out: &mut impl Write, warnings: &[ConvergenceWarning]) -> Result<()> {
    for warning in warnings {
        writeln!(out, "warning:  {warning}")?;
    }
    Ok(())
}

//! Interactive visualizations of the numlab solvers.
//!
//! Each mode solves a small problem and opens an interactive plot window
//! showing what the solver did.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- bisect
//! cargo run --example plot --features plot -- chord
//! cargo run --example plot --features plot -- seidel
//! ```
//!
//! # Modes
//!
//! - **bisect**: find the Dottie number (the fixed point of cos x). The top
//!   panel shows the midpoints and the root on the curve of cos(x) - x; the
//!   bottom panel shows the bracket width halving on a log scale.
//! - **chord**: same function, solved by false position. The iterates creep
//!   in from one side because one endpoint never moves.
//! - **seidel**: a diagonally dominant 3×3 system. Residual and sweep change
//!   are shown on a log scale.

use std::error::Error;

use numlab_core::Observer;
use numlab_observers::{PlotObserver, Series, ShowConfig, show_all};
use numlab_solvers::{
    Config,
    equation::{Action, Iteration, Method},
    linear::{LinearSystem, seidel},
};

const BRACKET: [f64; 2] = [0.0, 1.5];
const SAMPLES: usize = 200;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "bisect".into());
    match mode.as_str() {
        "bisect" => root(Method::Bisection),
        "chord" => root(Method::Chord),
        "seidel" => sweeps(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [bisect|chord|seidel]");
            std::process::exit(1);
        }
    }
}

/// Residual cos(x) − x. Its root is the Dottie number ≈ 0.7391.
fn cos_minus_x(x: f64) -> f64 {
    x.cos() - x
}

/// Plots the iterates on the function curve above the convergence history.
#[allow(clippy::cast_precision_loss)]
fn root(method: Method) -> Result<(), Box<dyn Error>> {
    let mut curve = PlotObserver::new([Series::line("cos(x) - x"), Series::points("Iterates")]);
    let mut convergence = PlotObserver::new([
        Series::points("|f(x)|"),
        Series::line(method.metric_name()),
    ]);

    let [a, b] = BRACKET;
    for i in 0..=SAMPLES {
        let x = a + (b - a) * i as f64 / SAMPLES as f64;
        curve.record(x, [Some(cos_minus_x(x)), None]);
    }

    let config = Config::new(50, 1e-10)?;
    let solution = method.find_root(
        &cos_minus_x,
        BRACKET,
        &config,
        |record: &Iteration| -> Option<Action> {
            curve.record(record.x, [None, Some(record.fx)]);
            convergence.observe(record)
        },
    )?;
    println!(
        "{}: root = {:.12} after {} iterations ({:?})",
        method.display_name(),
        solution.root,
        solution.iterations,
        solution.status
    );

    curve.mark("Root", [solution.root, solution.f_value]);
    convergence.hline("Tolerance", config.tolerance());

    show_all(
        &format!("{} on [0, 1.5]", method.display_name()),
        vec![
            curve.into_panel(ShowConfig::new().title("Function").legend()),
            convergence.into_panel(
                ShowConfig::new()
                    .title("Convergence")
                    .x_label("Iteration")
                    .legend()
                    .log_y(),
            ),
        ],
    )?;
    Ok(())
}

/// Plots residual and change per sweep on a log scale.
fn sweeps() -> Result<(), Box<dyn Error>> {
    let system = LinearSystem::from_rows(
        &[[10.0, -1.0, 2.0], [-1.0, 11.0, -1.0], [2.0, -1.0, 10.0]],
        &[6.0, 25.0, -11.0],
    )?;
    let config = Config::new(50, 1e-12)?;

    let mut obs = PlotObserver::new([Series::points("Residual"), Series::line("Change")]);
    let solution = seidel::solve(&system, &config, &mut obs)?;
    println!("x = {} after {} sweeps", solution.x, solution.sweeps);
    obs.hline("Tolerance", config.tolerance());

    obs.show(
        ShowConfig::new()
            .title("Gauss-Seidel convergence")
            .legend()
            .log_y(),
    )?;
    Ok(())
}

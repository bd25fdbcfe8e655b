//! Command-line front end for the numlab solvers.
//!
//! ```text
//! numlab root -m bisection -e "x^3 - 3*x^2 + x + 5" -a -4 -b 4 --tol 1e-3
//! numlab linear -m seidel --matrix "10,-1,2;-1,11,-1;2,-1,10" --rhs "6,25,-11"
//! numlab linear -m gauss --system system.toml --format json
//! numlab methods
//! ```

mod args;
mod input;
mod report;

use std::io::{self, Write};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use numlab_solvers::linear::MethodRegistry;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::{Cli, Command, Format, LinearArgs, RootArgs};
use report::{LinearReport, RootReport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = MethodRegistry::with_defaults();
    let mut stdout = io::stdout().lock();
    run(cli.command, &registry, &mut stdout)
}

/// Installs the log subscriber on stderr; `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command, registry: &MethodRegistry, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Root(args) => root(&args, out),
        Command::Linear(args) => linear(&args, registry, out),
        Command::Methods => methods(registry, out),
    }
}

fn root(args: &RootArgs, out: &mut impl Write) -> Result<()> {
    let config = args.config().context("invalid stopping criteria")?;
    let bracket = [args.left, args.right];
    debug!(method = %args.method, function = %args.expr, ?bracket, "solving for a root");

    let solution = if args.output.plot {
        plot::root(args, &config)?
    } else {
        args.method.find_root(&args.expr, bracket, &config, ())?
    };

    let report = RootReport {
        method: args.method.display_name(),
        function: args.expr.source(),
        solution: &solution,
    };
    match args.output.format {
        Format::Table => report::write_root_table(out, &report),
        Format::Json => report::write_json(out, &report),
    }
}

fn linear(args: &LinearArgs, registry: &MethodRegistry, out: &mut impl Write) -> Result<()> {
    let solver = registry.lookup(&args.method).ok_or_else(|| {
        let known: Vec<_> = registry.choices().into_iter().map(|(id, _)| id).collect();
        anyhow!(
            "unknown linear method `{}` (expected one of: {})",
            args.method,
            known.join(", ")
        )
    })?;
    let config = args.config().context("invalid stopping criteria")?;
    let system = input::system_from_args(args)?;
    debug!(method = solver.id(), n = system.dim(), "solving linear system");

    let solution = if args.output.plot {
        plot::linear(solver, &system, &config)?
    } else {
        solver.solve_unobserved(&system, &config)?
    };

    let report = LinearReport::new(solver.display_name(), &system, &solution);
    match args.output.format {
        Format::Table => report::write_linear_table(out, &report),
        Format::Json => report::write_json(out, &report),
    }
}

fn methods(registry: &MethodRegistry, out: &mut impl Write) -> Result<()> {
    for (id, name) in registry.choices() {
        writeln!(out, "{id:<10} {name}")?;
    }
    Ok(())
}

#[cfg(feature = "plot")]
mod plot {
    use anyhow::{Result, anyhow};
    use numlab_core::Observer;
    use numlab_observers::{Panel, PlotObserver, Series, ShowConfig, show_all};
    use numlab_solvers::{
        Config,
        equation::{self, Action, Iteration},
        linear::{self, LinearSolver, LinearSystem},
    };

    use crate::args::RootArgs;

    const SAMPLES: usize = 200;

    /// Solves, then shows the function with its root above the convergence
    /// of the bracket width or step.
    pub fn root(args: &RootArgs, config: &Config) -> Result<equation::Solution> {
        let (solution, panels) = root_panels(args, config)?;
        let title = format!("{}: f(x) = {}", args.method.display_name(), args.expr);
        show_all(&title, panels).map_err(|e| anyhow!("failed to open plot window: {e}"))?;
        Ok(solution)
    }

    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn root_panels(
        args: &RootArgs,
        config: &Config,
    ) -> Result<(equation::Solution, Vec<Panel>)> {
        let mut curve = PlotObserver::new([Series::line("f(x)"), Series::points("Iterates")]);
        let mut convergence = PlotObserver::new([
            Series::points("|f(x)|"),
            Series::line(args.method.metric_name()),
        ]);

        let solution = args.method.find_root(
            &args.expr,
            [args.left, args.right],
            config,
            |record: &Iteration| -> Option<Action> {
                curve.record(record.x, [None, Some(record.fx)]);
                convergence.observe(record)
            },
        )?;

        let (a, b) = (args.left.min(args.right), args.left.max(args.right));
        for i in 0..=SAMPLES {
            let x = a + (b - a) * i as f64 / SAMPLES as f64;
            curve.record(x, [args.expr.eval(x).ok(), None]);
        }
        curve.mark(format!("Root x = {:.6}", solution.root), [solution.root, solution.f_value]);
        curve.vline(format!("a = {a}"), a);
        curve.vline(format!("b = {b}"), b);
        curve.hline("y = 0", 0.0);

        convergence.hline(
            format!("Achieved tolerance {:.3e}", solution.tolerance),
            solution.tolerance,
        );
        convergence.hline(
            format!("Requested tolerance {:.3e}", config.tolerance()),
            config.tolerance(),
        );

        let panels = vec![
            curve.into_panel(
                ShowConfig::new()
                    .title("Function")
                    .x_label("x")
                    .y_label("f(x)")
                    .legend(),
            ),
            convergence.into_panel(
                ShowConfig::new()
                    .title("Convergence")
                    .x_label("Iteration")
                    .legend()
                    .log_y(),
            ),
        ];
        Ok((solution, panels))
    }

    /// Solves while recording residual and change per sweep.
    pub fn linear(
        solver: &dyn LinearSolver,
        system: &LinearSystem,
        config: &Config,
    ) -> Result<linear::Solution> {
        let (solution, panel) = linear_panel(solver, system, config)?;

        if solution.history.is_empty() {
            tracing::warn!(method = solver.id(), "direct method has no sweeps to plot");
        } else {
            let title = format!("{} convergence", solver.display_name());
            show_all(&title, vec![panel])
                .map_err(|e| anyhow!("failed to open plot window: {e}"))?;
        }
        Ok(solution)
    }

    pub(crate) fn linear_panel(
        solver: &dyn LinearSolver,
        system: &LinearSystem,
        config: &Config,
    ) -> Result<(linear::Solution, Panel)> {
        let mut obs = PlotObserver::new([Series::points("Residual"), Series::line("Change")]);
        let solution = solver.solve(system, config, &mut obs)?;
        obs.hline(
            format!("Tolerance {:.3e}", config.tolerance()),
            config.tolerance(),
        );

        let panel = obs.into_panel(
            ShowConfig::new()
                .x_label("Sweep")
                .y_label("‖·‖∞")
                .legend()
                .log_y(),
        );
        Ok((solution, panel))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        use clap::Parser;
        use numlab_observers::{Guide, Style};
        use numlab_solvers::linear::Method;

        use crate::args::{Cli, Command};

        fn root_args(argv: &[&str]) -> RootArgs {
            let cli = Cli::try_parse_from(std::iter::once("numlab").chain(argv.iter().copied()))
                .unwrap();
            match cli.command {
                Command::Root(args) => args,
                _ => panic!("expected root command"),
            }
        }

        #[test]
        fn root_plot_marks_the_root_and_shows_convergence() {
            let args = root_args(&["root", "-e", "x^2 - 2", "-a", "0", "-b", "2", "--tol", "1e-3"]);
            let config = args.config().unwrap();
            let (solution, panels) = root_panels(&args, &config).unwrap();

            let [function, convergence] = panels.as_slice() else {
                panic!("expected two panels");
            };

            let root = function
                .series()
                .iter()
                .find(|s| s.name().starts_with("Root"))
                .unwrap();
            assert_eq!(root.style(), Style::Points);
            assert_eq!(root.data(), [[solution.root, solution.f_value]]);
            assert_eq!(function.series()[0].data().len(), SAMPLES + 1);
            assert_eq!(function.series()[1].data().len(), solution.history.len() - 1);

            assert!(convergence.is_log_y());
            let widths = convergence.series()[1].data();
            assert_eq!(widths.len(), solution.iterations);
            assert_eq!(widths[0], [0.0, 2.0]);
            assert!(convergence.guides().contains(&Guide::Horizontal {
                name: format!("Achieved tolerance {:.3e}", solution.tolerance),
                y: solution.tolerance,
            }));
        }

        #[test]
        fn seidel_plot_has_a_tolerance_line() {
            let system = LinearSystem::from_rows(&[[4.0, 1.0], [1.0, 3.0]], &[1.0, 2.0]).unwrap();
            let config = Config::new(50, 1e-8).unwrap();
            let (solution, panel) = linear_panel(&Method::Seidel, &system, &config).unwrap();

            assert_eq!(panel.series()[0].data().len(), solution.sweeps);
            assert!(matches!(
                panel.guides(),
                [Guide::Horizontal { y, .. }] if *y == 1e-8
            ));
        }
    }
}

#[cfg(not(feature = "plot"))]
mod plot {
    use anyhow::{Result, bail};
    use numlab_solvers::{
        Config, equation,
        linear::{self, LinearSolver, LinearSystem},
    };

    use crate::args::RootArgs;

    pub fn root(_args: &RootArgs, _config: &Config) -> Result<equation::Solution> {
        bail!("--plot requires numlab to be built with the `plot` feature")
    }

    pub fn linear(
        _solver: &dyn LinearSolver,
        _system: &LinearSystem,
        _config: &Config,
    ) -> Result<linear::Solution> {
        bail!("--plot requires numlab to be built with the `plot` feature")
    }
}

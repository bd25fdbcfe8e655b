use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use numlab_expr::Expression;
use numlab_solvers::{Config, ConfigError, equation::Method};

#[derive(Parser, Debug)]
#[command(name = "numlab")]
#[command(version, about = "Root finding and linear-system solving with convergence histories", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a root of f(x) on a bracket [a, b]
    Root(RootArgs),

    /// Solve the linear system A·x = b
    Linear(LinearArgs),

    /// List the registered linear methods
    Methods,
}

#[derive(Args, Debug)]
pub struct RootArgs {
    /// Root finding method (bisection or chord)
    #[arg(short, long, default_value_t = Method::Bisection)]
    pub method: Method,

    /// The function, e.g. "x^3 - 3*x^2 + x + 5"
    #[arg(short, long, allow_hyphen_values = true)]
    pub expr: Expression,

    /// Left end of the bracket
    #[arg(short = 'a', allow_negative_numbers = true)]
    pub left: f64,

    /// Right end of the bracket
    #[arg(short = 'b', allow_negative_numbers = true)]
    pub right: f64,

    /// Tolerance on the bracket width (bisection) or step size (chord)
    #[arg(long, default_value_t = 1e-3)]
    pub tol: f64,

    /// Maximum number of iterations
    #[arg(long = "max-iter", default_value_t = 100)]
    pub max_iter: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct LinearArgs {
    /// Registered method id (see `numlab methods`)
    #[arg(short, long, default_value = "gauss")]
    pub method: String,

    /// Matrix rows separated by `;`, entries by `,` or spaces, e.g. "4,1;2,5"
    #[arg(long, requires = "rhs", required_unless_present = "system", allow_hyphen_values = true)]
    pub matrix: Option<String>,

    /// Right-hand side entries separated by `,` or spaces, e.g. "1,2"
    #[arg(long, requires = "matrix", allow_hyphen_values = true)]
    pub rhs: Option<String>,

    /// TOML or JSON file with `a` (rows) and `b`
    #[arg(long, conflicts_with_all = ["matrix", "rhs"])]
    pub system: Option<PathBuf>,

    /// Tolerance on the sweep change or residual (Gauss-Seidel only)
    #[arg(long, default_value_t = 1e-6)]
    pub tol: f64,

    /// Maximum number of sweeps (Gauss-Seidel only)
    #[arg(long = "max-iter", default_value_t = 50)]
    pub max_iter: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl RootArgs {
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::new(self.max_iter, self.tol)
    }
}

impl LinearArgs {
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::new(self.max_iter, self.tol)
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Open a convergence plot window (requires the `plot` feature)
    #[arg(long)]
    pub plot: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_root_command_with_negative_bracket() {
        let cli = Cli::try_parse_from([
            "numlab", "root", "-m", "chord", "-e", "x^2 - 2", "-a", "-4", "-b", "4", "--tol",
            "1e-3",
        ])
        .unwrap();

        let Command::Root(args) = cli.command else {
            panic!("expected root command");
        };
        assert_eq!(args.method, Method::Chord);
        assert_eq!(args.left, -4.0);
        assert_eq!(args.right, 4.0);
        assert_eq!(args.tol, 1e-3);
        assert_eq!(args.max_iter, 100);
        assert_eq!(args.output.format, Format::Table);
    }

    #[test]
    fn rejects_unknown_root_method_and_bad_expression() {
        assert!(Cli::try_parse_from(["numlab", "root", "-m", "newton", "-e", "x", "-a", "0", "-b", "1"]).is_err());
        assert!(Cli::try_parse_from(["numlab", "root", "-e", "import(x)", "-a", "0", "-b", "1"]).is_err());
    }

    #[test]
    fn linear_inputs_are_exclusive() {
        assert!(Cli::try_parse_from(["numlab", "linear", "--matrix", "1", "--rhs", "1"]).is_ok());
        assert!(Cli::try_parse_from(["numlab", "linear", "--system", "s.toml"]).is_ok());
        assert!(Cli::try_parse_from(["numlab", "linear", "--matrix", "1"]).is_err());
        assert!(Cli::try_parse_from(["numlab", "linear"]).is_err());
        assert!(
            Cli::try_parse_from(["numlab", "linear", "--system", "s.toml", "--matrix", "1", "--rhs", "1"])
                .is_err()
        );
    }

    #[test]
    fn linear_defaults_differ_from_root() {
        let cli = Cli::try_parse_from(["numlab", "linear", "--system", "s.toml"]).unwrap();

        let Command::Linear(args) = cli.command else {
            panic!("expected linear command");
        };
        assert_eq!(args.method, "gauss");
        assert_eq!(args.tol, 1e-6);
        assert_eq!(args.max_iter, 50);
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["numlab", "-vv", "methods"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}

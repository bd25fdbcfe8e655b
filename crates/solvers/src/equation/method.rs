use std::{fmt, str::FromStr};

use numlab_core::{Observer, ScalarFunction};
use thiserror::Error;

use crate::Config;

use super::{Action, Error, Iteration, Solution, bisection, chord};

/// A root finder selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    Bisection,
    Chord,
}

/// The name does not match any root finder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown root finding method `{0}` (expected `bisection` or `chord`)")]
pub struct UnknownMethod(pub String);

impl Method {
    /// Every root finder, in presentation order.
    pub const ALL: [Self; 2] = [Self::Bisection, Self::Chord];

    /// Returns the stable lowercase identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Bisection => "bisection",
            Self::Chord => "chord",
        }
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bisection => "Bisection",
            Self::Chord => "Chord (false position)",
        }
    }

    /// Describes the metric each [`Iteration`] record carries.
    #[must_use]
    pub fn metric_name(self) -> &'static str {
        match self {
            Self::Bisection => "Bracket width b - a",
            Self::Chord => "Step |x_k - x_(k-1)|",
        }
    }

    /// Runs the selected root finder.
    ///
    /// # Errors
    ///
    /// See [`bisection::solve`] and [`chord::solve`].
    pub fn find_root<F, Obs>(
        self,
        function: &F,
        bracket: [f64; 2],
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: ScalarFunction,
        Obs: Observer<Iteration, Action>,
    {
        match self {
            Self::Bisection => bisection::solve(function, bracket, config, observer),
            Self::Chord => chord::solve(function, bracket, config, observer),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids() {
        assert_eq!("bisection".parse(), Ok(Method::Bisection));
        assert_eq!(" Chord ".parse(), Ok(Method::Chord));
        assert_eq!(
            "newton".parse::<Method>(),
            Err(UnknownMethod("newton".to_owned()))
        );
    }

    #[test]
    fn names_the_convergence_metric() {
        assert!(Method::Bisection.metric_name().contains("width"));
        assert!(Method::Chord.metric_name().contains("Step"));
    }

    #[test]
    fn dispatches_to_the_selected_solver() {
        let f = |x: f64| x * x - 2.0;
        let config = Config::default();

        for method in Method::ALL {
            let solution = method.find_root(&f, [0.0, 2.0], &config, ()).unwrap();
            let direct = match method {
                Method::Bisection => bisection::solve_unobserved(&f, [0.0, 2.0], &config),
                Method::Chord => chord::solve_unobserved(&f, [0.0, 2.0], &config),
            }
            .unwrap();
            assert_eq!(solution, direct);
        }
    }
}

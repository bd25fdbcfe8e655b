use std::{fmt, str::FromStr};

use numlab_core::ScalarFunction;

use crate::{
    ast::Node,
    error::{EvalError, ParseError},
    parser, token,
};

/// A parsed expression in the variable `x`.
///
/// Parsing happens once; [`Expression::eval`] walks the syntax tree and
/// never re-reads the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    /// Parses an expression.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the source uses anything outside the
    /// whitelisted grammar.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = token::tokenize(source)?;
        let root = parser::parse(&tokens)?;
        Ok(Self {
            source: source.trim().to_owned(),
            root,
        })
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if a subexpression leaves its real domain,
    /// such as `log(-1)`, `sqrt(-1)`, or a division by zero.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.root.eval(x)
    }

    /// Returns the source text the expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns a fully parenthesized rendering of the parsed tree.
    #[must_use]
    pub fn to_tree_string(&self) -> String {
        self.root.to_string()
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl ScalarFunction for Expression {
    type Error = EvalError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval(x)
    }
}

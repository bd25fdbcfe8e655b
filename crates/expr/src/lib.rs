//! A small, whitelisted expression language for scalar functions of `x`.
//!
//! Expressions are parsed into a syntax tree once and evaluated many times,
//! which is what a root finder needs. Only a fixed vocabulary is accepted:
//!
//! - numbers (`3`, `0.5`, `1.5e-3`) and the variable `x`
//! - constants `pi` and `e`
//! - binary `+ - * /`, power `^` (or `**`, right associative), unary `+`/`-`
//! - parentheses and calls to `sin cos tan exp log sqrt abs`
//!
//! Anything else is a [`ParseError`]. Nothing is ever evaluated dynamically.
//!
//! ```
//! use numlab_expr::Expression;
//!
//! let f: Expression = "x^3 - 3*x^2 + x + 5".parse().unwrap();
//! assert_eq!(f.eval(2.0).unwrap(), 3.0);
//! ```

mod ast;
mod error;
mod expression;
mod parser;
mod token;

pub use ast::Func;
pub use error::{EvalError, ParseError};
pub use expression::Expression;

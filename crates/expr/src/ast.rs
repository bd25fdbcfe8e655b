use std::{f64::consts, fmt};

use crate::error::EvalError;

/// The whitelisted functions an expression may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    /// Natural logarithm.
    Log,
    Sqrt,
    Abs,
}

impl Func {
    /// Looks up a function by its name in the expression language.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "exp" => Self::Exp,
            "log" => Self::Log,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            _ => return None,
        })
    }

    /// Returns the function's name in the expression language.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    /// Applies the function, rejecting arguments outside its real domain.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Domain`] for `log` of a non-positive value and
    /// `sqrt` of a negative value.
    pub fn apply(self, arg: f64) -> Result<f64, EvalError> {
        let domain = || EvalError::Domain {
            function: self.name(),
            arg,
        };
        match self {
            Self::Sin => Ok(arg.sin()),
            Self::Cos => Ok(arg.cos()),
            Self::Tan => Ok(arg.tan()),
            Self::Exp => Ok(arg.exp()),
            Self::Log if arg <= 0.0 => Err(domain()),
            Self::Log => Ok(arg.ln()),
            Self::Sqrt if arg < 0.0 => Err(domain()),
            Self::Sqrt => Ok(arg.sqrt()),
            Self::Abs => Ok(arg.abs()),
        }
    }
}

/// Named constants.
pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(EvalError::DivisionByZero { numerator: lhs }),
            Self::Div => Ok(lhs / rhs),
            Self::Pow => {
                let value = lhs.powf(rhs);
                if value.is_nan() && !lhs.is_nan() && !rhs.is_nan() {
                    Err(EvalError::Power {
                        base: lhs,
                        exponent: rhs,
                    })
                } else {
                    Ok(value)
                }
            }
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// A node of the parsed syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    Var,
    Neg(Box<Node>),
    Binary {
        op: BinOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call {
        func: Func,
        arg: Box<Node>,
    },
}

impl Node {
    pub(crate) fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Node::Number(value) => Ok(*value),
            Node::Var => Ok(x),
            Node::Neg(inner) => Ok(-inner.eval(x)?),
            Node::Binary { op, lhs, rhs } => op.apply(lhs.eval(x)?, rhs.eval(x)?),
            Node::Call { func, arg } => func.apply(arg.eval(x)?),
        }
    }
}

/// Fully parenthesized rendering, useful to check how a source string parsed.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(value) => write!(f, "{value}"),
            Node::Var => f.write_str("x"),
            Node::Neg(inner) => write!(f, "(-{inner})"),
            Node::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Node::Call { func, arg } => write!(f, "{}({arg})", func.name()),
        }
    }
}

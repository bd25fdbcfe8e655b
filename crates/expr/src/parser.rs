//! Recursive-descent parser over the token stream.
//!
//! ```text
//! expr    = term (('+' | '-') term)*
//! term    = unary (('*' | '/') unary)*
//! unary   = ('+' | '-') unary | power
//! power   = primary ('^' unary)?
//! primary = NUMBER | 'x' | CONST | FUNC '(' expr ')' | '(' expr ')'
//! ```
//!
//! Power binds tighter than a leading minus, so `-x^2` is `-(x^2)`, and is
//! right associative, so `2^3^2` is `2^(3^2)`.
//!
//! Every recursive path passes through `unary`, which caps the nesting depth
//! at [`MAX_DEPTH`] so that hostile input fails with an error instead of
//! exhausting the stack.

use crate::{
    ast::{self, BinOp, Func, Node},
    error::ParseError,
    token::{Spanned, Token},
};

/// Deepest nesting of unary operators, powers, calls, and parentheses.
pub(crate) const MAX_DEPTH: usize = 256;

pub(crate) fn parse(tokens: &[Spanned]) -> Result<Node, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let node = parser.expr()?;

    match parser.peek() {
        None => Ok(node),
        Some(spanned) => Err(unexpected(spanned)),
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn expr(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek_token() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek_token() {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs);
        }
    }

    fn unary(&mut self) -> Result<Node, ParseError> {
        if self.depth == MAX_DEPTH {
            let pos = self.peek().or(self.tokens.last()).map_or(0, |s| s.pos);
            return Err(ParseError::TooDeep { pos });
        }

        self.depth += 1;
        let node = self.prefixed();
        self.depth -= 1;
        node
    }

    fn prefixed(&mut self) -> Result<Node, ParseError> {
        match self.peek_token() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Node::Neg(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;
        if matches!(self.peek_token(), Some(Token::Caret)) {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(binary(BinOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let spanned = self.next().ok_or(ParseError::UnexpectedEnd)?;
        match &spanned.token {
            Token::Number(value) => Ok(Node::Number(*value)),
            Token::Ident(name) => self.identifier(name, spanned.pos),
            Token::LParen => {
                let inner = self.expr()?;
                self.expect_close()?;
                Ok(inner)
            }
            _ => Err(unexpected(spanned)),
        }
    }

    fn identifier(&mut self, name: &str, pos: usize) -> Result<Node, ParseError> {
        if name == "x" {
            return Ok(Node::Var);
        }
        if let Some(value) = ast::constant(name) {
            return Ok(Node::Number(value));
        }
        let Some(func) = Func::from_name(name) else {
            return Err(ParseError::UnknownIdentifier {
                name: name.to_owned(),
                pos,
            });
        };

        if !matches!(self.peek_token(), Some(Token::LParen)) {
            return Err(ParseError::MissingCall {
                name: name.to_owned(),
                pos,
            });
        }
        self.pos += 1;
        let arg = self.expr()?;
        self.expect_close()?;

        Ok(Node::Call {
            func,
            arg: Box::new(arg),
        })
    }

    fn expect_close(&mut self) -> Result<(), ParseError> {
        match self.next() {
            Some(Spanned {
                token: Token::RParen,
                ..
            }) => Ok(()),
            Some(spanned) => Err(unexpected(spanned)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<&'a Token> {
        self.peek().map(|s| &s.token)
    }

    fn next(&mut self) -> Option<&'a Spanned> {
        let spanned = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(spanned)
    }
}

fn binary(op: BinOp, lhs: Node, rhs: Node) -> Node {
    Node::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn unexpected(spanned: &Spanned) -> ParseError {
    ParseError::UnexpectedToken {
        found: spanned.token.to_string(),
        pos: spanned.pos,
    }
}

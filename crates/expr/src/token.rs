use std::fmt;

use crate::error::ParseError;

/// A lexical token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) pos: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {n}"),
            Token::Ident(name) => write!(f, "identifier '{name}'"),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::Caret => f.write_str("'^'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
        }
    }
}

/// Splits the source into tokens.
///
/// `**` is folded into [`Token::Caret`] so both power spellings parse the
/// same way.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let token = match bytes[pos] {
            b if b.is_ascii_whitespace() => {
                pos += 1;
                continue;
            }
            b'+' => {
                pos += 1;
                Token::Plus
            }
            b'-' => {
                pos += 1;
                Token::Minus
            }
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 2;
                Token::Caret
            }
            b'*' => {
                pos += 1;
                Token::Star
            }
            b'/' => {
                pos += 1;
                Token::Slash
            }
            b'^' => {
                pos += 1;
                Token::Caret
            }
            b'(' => {
                pos += 1;
                Token::LParen
            }
            b')' => {
                pos += 1;
                Token::RParen
            }
            b if b.is_ascii_digit() || b == b'.' => {
                pos = scan_number(bytes, pos);
                let text = &source[start..pos];
                let value = text.parse().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_owned(),
                    pos: start,
                })?;
                Token::Number(value)
            }
            b if b.is_ascii_alphabetic() || b == b'_' => {
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                Token::Ident(source[start..pos].to_owned())
            }
            _ => {
                let ch = source[start..].chars().next().unwrap_or_default();
                return Err(ParseError::UnexpectedChar { ch, pos: start });
            }
        };
        tokens.push(Spanned { token, pos: start });
    }

    Ok(tokens)
}

/// Returns the end offset of the number starting at `pos`.
///
/// An exponent is only consumed when digits follow it, so `2e` lexes as the
/// number `2` followed by the identifier `e`.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    let digits = |bytes: &[u8], mut pos: usize| {
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    };

    pos = digits(bytes, pos);
    if bytes.get(pos) == Some(&b'.') {
        pos = digits(bytes, pos + 1);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            pos = digits(bytes, exp);
        }
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("valid tokens")
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn lexes_operators_and_numbers() {
        assert_eq!(
            kinds("2.5*x - 1e-3"),
            vec![
                Token::Number(2.5),
                Token::Star,
                Token::Ident("x".into()),
                Token::Minus,
                Token::Number(1e-3),
            ]
        );
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            kinds("x**2"),
            vec![Token::Ident("x".into()), Token::Caret, Token::Number(2.0)]
        );
    }

    #[test]
    fn dangling_exponent_is_not_consumed() {
        assert_eq!(
            kinds("2e"),
            vec![Token::Number(2.0), Token::Ident("e".into())]
        );
    }

    #[test]
    fn records_positions() {
        let tokens = tokenize("  sin(x)").expect("valid tokens");
        let positions: Vec<_> = tokens.iter().map(|s| s.pos).collect();
        assert_eq!(positions, vec![2, 5, 6, 7]);
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            tokenize("x # 2"),
            Err(ParseError::UnexpectedChar { ch: '#', pos: 2 })
        );
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(matches!(
            tokenize("x + ."),
            Err(ParseError::InvalidNumber { pos: 4, .. })
        ));
    }
}

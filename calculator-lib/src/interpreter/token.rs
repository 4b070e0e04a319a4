use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// The source text of a number, with grouping commas already removed.
    Number(String),
    Operator(String),
    OpenParenthesis,
    CloseParenthesis,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(symbol) => write!(f, "{}", symbol),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            "+" | "-" | "*" | "/" | "^" | "**" => Ok(Token::Operator(input.into())),
            text if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || c == '.') => {
                Ok(Token::Number(text.into()))
            }
            _ => Err(()),
        }
    }
}

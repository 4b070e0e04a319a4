use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::token::Token;
use itertools::Itertools;
use std::iter::Peekable;

/// Splits an infix expression into tokens.
///
/// Whitespace is dropped before scanning, so `1 2` reads as the number `12`.
/// A run of digits with at most one decimal point becomes a single number token;
/// grouping commas inside the run are discarded without checking their placement.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// # use calculator::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use calculator::interpreter::lexer::tokenize;
/// use calculator::interpreter::token::Token;
///
/// let tokens = tokenize("1,000 * 2")?;
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Number("1000".into()),
///         Token::Operator("*".into()),
///         Token::Number("2".into()),
///     ]
/// );
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut characters = expression
        .char_indices()
        .filter(|(_, character)| !character.is_whitespace())
        .peekable();
    let mut tokens = Vec::new();

    while let Some(&(position, character)) = characters.peek() {
        if is_number_character(character) {
            tokens.push(read_number(&mut characters));
            continue;
        }
        characters.next();

        let symbol = match character {
            '*' if characters.next_if(|(_, next)| *next == '*').is_some() => "**".to_string(),
            character => character.to_string(),
        };
        let token = symbol
            .parse::<Token>()
            .map_err(|_| EvaluationError::InvalidCharacter {
                character,
                position,
            })?;
        tokens.push(token);
    }

    Ok(tokens)
}

fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.' || character == ','
}

fn read_number(characters: &mut Peekable<impl Iterator<Item = (usize, char)>>) -> Token {
    let mut seen_decimal_point = false;
    let text = characters
        .peeking_take_while(|&(_, character)| match character {
            '.' if seen_decimal_point => false,
            '.' => {
                seen_decimal_point = true;
                true
            }
            character => is_number_character(character),
        })
        .filter(|&(_, character)| character != ',')
        .map(|(_, character)| character)
        .collect();
    Token::Number(text)
}

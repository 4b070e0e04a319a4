use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::operator::{OperatorTable, PrecedenceOrdering};
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// How many held operators an incoming operator may pop off the operator stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PrecedenceMode {
    /// Keep popping while the held operator binds at least as tight.
    #[default]
    Standard,
    /// Check and pop at most one held operator. Chains of mixed precedence such as
    /// `1 - 2 * 3 + 4` group differently than in [`PrecedenceMode::Standard`].
    SinglePop,
}

pub(crate) fn infix_to_postfix(
    original_tokens: Vec<Token>,
    table: &OperatorTable,
    mode: PrecedenceMode,
) -> Result<Vec<Token>> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    let mut follows_open_parenthesis = false;
    while let Some(token) = tokens.pop_front() {
        let opens_group = token == Token::OpenParenthesis;
        match token {
            Token::Number(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(token),
            Token::Operator(ref symbol) => {
                parse_operator_token(&mut operators, &mut output, symbol, table, mode)?;
                operators.push_front(token);
            }
            Token::CloseParenthesis if follows_open_parenthesis => {
                return Err(EvaluationError::MalformedExpression(
                    "Parentheses must enclose an expression".into(),
                ));
            }
            Token::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
        follows_open_parenthesis = opens_group;
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvaluationError::UnbalancedParentheses(
                    "An opening parenthesis is never closed".into(),
                ));
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop_front() {
            None => {
                return Err(EvaluationError::UnbalancedParentheses(
                    "A closing parenthesis has no matching opening parenthesis".into(),
                ));
            }
            // Discard the open parenthesis.
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

/// Moves held operators that must be applied before `symbol` into the output.
/// The caller pushes `symbol` itself afterwards.
fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    symbol: &str,
    table: &OperatorTable,
    mode: PrecedenceMode,
) -> Result<()> {
    let operator = table.lookup(symbol)?;

    while let Some(Token::Operator(top_of_operator_stack)) = operators.front() {
        let other_operator = table.lookup(top_of_operator_stack)?;
        let applies_first = match other_operator.compare(operator) {
            PrecedenceOrdering::Higher => true,
            PrecedenceOrdering::Equal => operator.is_left_associative(),
            PrecedenceOrdering::Lower => false,
        };
        if !applies_first {
            break;
        }

        if let Some(other_operator_token) = operators.pop_front() {
            output.push(other_operator_token);
        }
        if mode == PrecedenceMode::SinglePop {
            break;
        }
    }

    Ok(())
}

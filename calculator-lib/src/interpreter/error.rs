use thiserror::Error;

pub type Result<T, E = EvaluationError> = std::result::Result<T, E>;

/// Every way an evaluation can fail. All of them abort the whole evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// A character that is neither part of a number, an operator nor a parenthesis.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// An operator symbol missing from the operator table. Points to an internal
    /// inconsistency rather than bad input.
    #[error("operator '{0}' is not present in the operator table")]
    Configuration(String),

    #[error("unbalanced parentheses: {0}")]
    UnbalancedParentheses(String),

    /// Operand and operator counts do not line up, e.g. `2 + * 3`.
    #[error("malformed expression: {0}")]
    MalformedExpression(String),

    #[error("could not parse '{0}' as a number")]
    NumberFormat(String),

    #[error("division by zero")]
    DivisionByZero,
}

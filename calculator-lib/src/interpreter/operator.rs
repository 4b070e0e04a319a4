use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl BinaryOperator {
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide if b == 0.0 => Err(EvaluationError::DivisionByZero),
            BinaryOperator::Divide => Ok(a / b),
            BinaryOperator::Exponentiate => Ok(a.powf(b)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// How two operators relate when deciding which one binds first.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrecedenceOrdering {
    Higher,
    Lower,
    Equal,
}

/// Everything the parser needs to know about one operator symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub symbol: &'static str,
    pub operator: BinaryOperator,
    /// A lower rank binds tighter.
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorDescriptor {
    const fn new(
        symbol: &'static str,
        operator: BinaryOperator,
        precedence: u8,
        associativity: Associativity,
    ) -> OperatorDescriptor {
        OperatorDescriptor {
            symbol,
            operator,
            precedence,
            associativity,
        }
    }

    /// Compares by rank only. Since lower ranks bind tighter, a smaller rank
    /// reports as [`PrecedenceOrdering::Higher`].
    pub fn compare(&self, other: &OperatorDescriptor) -> PrecedenceOrdering {
        if self.precedence < other.precedence {
            PrecedenceOrdering::Higher
        } else if self.precedence > other.precedence {
            PrecedenceOrdering::Lower
        } else {
            PrecedenceOrdering::Equal
        }
    }

    pub fn is_left_associative(&self) -> bool {
        self.associativity == Associativity::Left
    }

    pub fn token(&self) -> Token {
        Token::Operator(self.symbol.to_string())
    }
}

impl fmt::Display for OperatorDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// The fixed set of operators an expression may use.
///
/// Built once and never mutated afterwards, so a single table can be shared
/// between any number of evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTable {
    descriptors: Vec<OperatorDescriptor>,
}

impl OperatorTable {
    /// `^` and `**` bind tightest and group to the right, then `*` and `/`,
    /// then `+` and `-`.
    pub fn standard() -> OperatorTable {
        OperatorTable {
            descriptors: vec![
                OperatorDescriptor::new("^", BinaryOperator::Exponentiate, 1, Associativity::Right),
                OperatorDescriptor::new(
                    "**",
                    BinaryOperator::Exponentiate,
                    1,
                    Associativity::Right,
                ),
                OperatorDescriptor::new("*", BinaryOperator::Multiply, 2, Associativity::Left),
                OperatorDescriptor::new("/", BinaryOperator::Divide, 2, Associativity::Left),
                OperatorDescriptor::new("+", BinaryOperator::Add, 3, Associativity::Left),
                OperatorDescriptor::new("-", BinaryOperator::Subtract, 3, Associativity::Left),
            ],
        }
    }

    pub fn lookup(&self, symbol: &str) -> Result<&OperatorDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.symbol == symbol)
            .ok_or_else(|| EvaluationError::Configuration(symbol.to_string()))
    }

    pub fn compare(&self, a: &str, b: &str) -> Result<PrecedenceOrdering> {
        Ok(self.lookup(a)?.compare(self.lookup(b)?))
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        OperatorTable::standard()
    }
}

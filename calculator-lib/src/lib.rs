//! Evaluates arithmetic expressions such as `(2 + 3) * 4` or `1,234.5 / 2^3`.
//!
//! The text is tokenized, reordered into postfix with the shunting-yard algorithm,
//! built into an expression tree and then evaluated bottom-up.
pub mod interpreter;

pub use interpreter::error::{EvaluationError, Result};
pub use interpreter::{evaluate, evaluate_with, Settings};

pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::error::Result;
use crate::interpreter::evaluator::evaluate_tree;
use crate::interpreter::operator::OperatorTable;
use crate::interpreter::parser::PrecedenceMode;
use crate::interpreter::token::Token;
use log::{debug, log_enabled, trace, Level};
use std::string::FromUtf8Error;
use string_builder::Builder;
use syntax::expression_tree::Node;

/// The configuration an expression is evaluated under.
///
/// Never changes once built; one instance can be shared by any number of evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    operators: OperatorTable,
    precedence_mode: PrecedenceMode,
}

impl Settings {
    pub fn new(operators: OperatorTable, precedence_mode: PrecedenceMode) -> Settings {
        Settings {
            operators,
            precedence_mode,
        }
    }

    pub fn with_precedence_mode(precedence_mode: PrecedenceMode) -> Settings {
        Settings::new(OperatorTable::standard(), precedence_mode)
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    pub fn precedence_mode(&self) -> PrecedenceMode {
        self.precedence_mode
    }
}

/// Evaluates the given arithmetic expression using the default settings.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("1,234.5 + 1").unwrap(), 1235.5);
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    evaluate_with(expression, &Settings::default())
}

/// Evaluates the given arithmetic expression under the given settings.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::parser::PrecedenceMode;
/// use calculator::interpreter::{evaluate_with, Settings};
///
/// let settings = Settings::with_precedence_mode(PrecedenceMode::SinglePop);
/// assert_eq!(evaluate_with("1 - 2 * 3 + 4", &settings).unwrap(), -9.0);
/// ```
pub fn evaluate_with(expression: &str, settings: &Settings) -> Result<f64> {
    let expression_tree = convert(expression, settings)?;
    let result = evaluate_tree(expression_tree.as_ref())?;
    debug!("{} = {}", expression, result);
    Ok(result)
}

/// Converts the given input string into an equivalent expression tree,
/// which is easier to evaluate than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
/// * `settings`: The operators and precedence mode to parse with.
///
/// returns: The equivalent expression tree, or `None` for an empty expression.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::{convert, tokens_to_string, Settings};
/// # use std::error::Error;
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let tree = convert("(2 + 3) * 4", &Settings::default())?.expect("not empty");
/// let regenerated = tokens_to_string(tree.to_infix())?;
/// assert_eq!(regenerated, "(2 + 3) * 4");
/// # Ok(()) }
/// ```
pub fn convert(expression: &str, settings: &Settings) -> Result<Option<Node>> {
    let tokens = lexer::tokenize(expression)?;
    debug!("tokens: {:?}", tokens);
    let expression_tree = parser::parse(tokens, settings.operators(), settings.precedence_mode())?;

    if let Some(tree) = &expression_tree {
        if log_enabled!(Level::Debug) {
            if let Ok(infix) = tokens_to_string(tree.to_infix()) {
                debug!("expression tree in order: {}", infix);
            }
        }
        trace!("{}", tree);
    }

    Ok(expression_tree)
}

/// Pretty-prints the given vector of tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::tokens_to_string;
/// use calculator::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::Number("2".to_string()),
///     Token::Operator("^".to_string()),
///     Token::Number("3".to_string()),
///     Token::Operator("+".to_string()),
///     Token::Number("1".to_string()),
/// ];
/// assert_eq!(tokens_to_string(tokens).unwrap(), "2^3 + 1");
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> std::result::Result<String, FromUtf8Error> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Operator(symbol) if symbol == "^" || symbol == "**" => builder.append(symbol),
            Token::Operator(symbol) => {
                builder.append(" ");
                builder.append(symbol);
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string()
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::EvaluationError;
    use parameterized_macro::parameterized;

    #[parameterized(
    expression = {
    "2+3*4",
    "(2+3)*4",
    "2^3^2",
    "2**3**2",
    "1,234.5+1",
    "100 - 10 - 1",
    "10 / 2 / 5",
    "2 * (3 + 4)^2",
    "8 / (3 - 1)",
    "1.5 * 4",
    "((7))",
    " 7 ",
    "1 - 2 * 3 + 4",
    "",
    },
    expected = {
    14.0,
    20.0,
    512.0,
    512.0,
    1235.5,
    89.0,
    1.0,
    98.0,
    4.0,
    6.0,
    7.0,
    7.0,
    -1.0,
    0.0,
    }
    )]
    fn evaluate_expression_returns_correct_result(expression: &str, expected: f64) {
        let actual = evaluate(expression).unwrap();
        assert_eq!(actual, expected);
    }

    #[parameterized(
    expression = { "1 - 2 * 3 + 4", "2^3^2", "2 + 3 * 4", "100 - 10 - 1" },
    expected = { -9.0, 512.0, 14.0, 89.0 }
    )]
    fn single_pop_mode_reproduces_reference_grouping(expression: &str, expected: f64) {
        let settings = Settings::with_precedence_mode(PrecedenceMode::SinglePop);

        let actual = evaluate_with(expression, &settings).unwrap();

        assert_eq!(actual, expected);
    }

    #[test]
    fn division_by_zero_is_error_not_infinity() {
        assert_eq!(evaluate("10/0"), Err(EvaluationError::DivisionByZero));
    }

    #[parameterized(expression = { "(1+2", "1+2)", ")(", "((1)" })]
    fn unbalanced_parentheses_are_rejected(expression: &str) {
        let error = evaluate(expression).unwrap_err();
        assert!(matches!(error, EvaluationError::UnbalancedParentheses(_)));
    }

    #[parameterized(
    expression = { "2+", "2++3", "*3", "1.2.3", "(1)(2)", "2()", "(1)()", "()3", "()" }
    )]
    fn malformed_expressions_are_rejected(expression: &str) {
        let error = evaluate(expression).unwrap_err();
        assert!(matches!(error, EvaluationError::MalformedExpression(_)));
    }

    #[test]
    fn unknown_character_is_rejected() {
        assert_eq!(
            evaluate("2$3"),
            Err(EvaluationError::InvalidCharacter {
                character: '$',
                position: 1,
            })
        );
    }

    #[test]
    fn very_long_sum_is_rejected_instead_of_overflowing() {
        let expression = "1+".repeat(50_000) + "1";

        let error = evaluate(&expression).unwrap_err();

        assert!(matches!(error, EvaluationError::MalformedExpression(_)));
    }

    #[test]
    fn long_sum_within_depth_limit_evaluates() {
        let expression = "1+".repeat(999) + "1";

        assert_eq!(evaluate(&expression).unwrap(), 1000.0);
    }

    #[test]
    fn lone_decimal_point_is_number_format_error() {
        assert_eq!(
            evaluate("1 + ."),
            Err(EvaluationError::NumberFormat(".".into()))
        );
    }

    #[test]
    fn evaluating_twice_yields_identical_result() {
        let expression = "3.3 * (1,000 - 2^0.5) / 7";

        let first = evaluate(expression).unwrap();
        let second = evaluate(expression).unwrap();

        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn settings_can_be_shared_between_threads() {
        let settings = &Settings::default();
        let expressions = ["1 + 1", "2 * 3", "2^10"];

        let results: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = expressions
                .iter()
                .map(|expression| scope.spawn(move || evaluate_with(expression, settings)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap().unwrap())
                .collect()
        });

        assert_eq!(results, vec![2.0, 6.0, 1024.0]);
    }

    #[test]
    fn empty_expression_converts_to_no_tree() {
        assert_eq!(convert("  ", &Settings::default()).unwrap(), None);
    }

    #[test]
    fn simple_expression_regenerates_to_itself() {
        let expression = "1 + 2";

        let tree = convert(expression, &Settings::default()).unwrap().unwrap();
        let regenerated_expression = tokens_to_string(tree.to_infix()).unwrap();

        assert_eq!(regenerated_expression, expression)
    }

    #[test]
    fn complex_expression_regenerates_to_itself() {
        let expression = "1 + 2 * (3 - 4) / 5^2";

        let tree = convert(expression, &Settings::default()).unwrap().unwrap();
        let regenerated_expression = tokens_to_string(tree.to_infix()).unwrap();

        assert_eq!(regenerated_expression, expression)
    }

    #[test]
    fn redundant_parentheses_are_stripped_when_regenerating() {
        let redundant_expression = "1 + ((2) * ((3 - 4)) / (5^2))";
        let expected_expression = "1 + 2 * (3 - 4) / 5^2";

        let tree = convert(redundant_expression, &Settings::default())
            .unwrap()
            .unwrap();
        let regenerated_expression = tokens_to_string(tree.to_infix()).unwrap();

        assert_eq!(regenerated_expression, expected_expression)
    }

    #[test]
    fn single_pop_tree_regenerates_with_reference_grouping() {
        let settings = Settings::with_precedence_mode(PrecedenceMode::SinglePop);

        let tree = convert("1 - 2 * 3 + 4", &settings).unwrap().unwrap();
        let regenerated_expression = tokens_to_string(tree.to_infix()).unwrap();

        assert_eq!(regenerated_expression, "1 - (2 * 3 + 4)")
    }
}

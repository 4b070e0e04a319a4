use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::syntax::expression_tree::Node;

/// Computes the value of an expression tree, evaluating the left operand
/// of every operation before its right operand.
///
/// An absent tree, which is what an empty expression parses into, evaluates to `0`.
///
/// # Arguments
///
/// * `tree`: The root of the expression tree, if there is one.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// # use calculator::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use calculator::interpreter::evaluator::evaluate_tree;
/// use calculator::interpreter::operator::OperatorTable;
/// use calculator::interpreter::syntax::expression_tree::Node;
///
/// let minus = OperatorTable::standard().lookup("-")?.clone();
/// let tree = Node::new_binary_operation(minus, Node::new_number("8"), Node::new_number("2"));
///
/// assert_eq!(evaluate_tree(Some(&tree))?, 6.0);
/// assert_eq!(evaluate_tree(None)?, 0.0);
/// # Ok(()) }
/// ```
pub fn evaluate_tree(tree: Option<&Node>) -> Result<f64> {
    match tree {
        None => Ok(0.0),
        Some(node) => evaluate_node(node),
    }
}

fn evaluate_node(node: &Node) -> Result<f64> {
    match node {
        Node::Number(text) => text
            .parse::<f64>()
            .map_err(|_| EvaluationError::NumberFormat(text.to_string())),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let left = evaluate_node(left_operand)?;
            let right = evaluate_node(right_operand)?;
            operator.operator.evaluate(left, right)
        }
    }
}

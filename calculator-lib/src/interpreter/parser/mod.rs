mod infix_converter;

pub use crate::interpreter::parser::infix_converter::PrecedenceMode;

use crate::interpreter::error::Result;
use crate::interpreter::operator::OperatorTable;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::syntax::expression_tree;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;
use log::debug;

/// Parses the given infix tokens into an equivalent expression tree,
/// which is easier to evaluate than the original tokens.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
/// * `operators`: The operators the tokens may use.
/// * `mode`: How operator precedence is resolved.
///
/// returns: The equivalent expression tree, or `None` if there were no tokens.
///
/// # Examples
///
/// ```
/// # use calculator::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use calculator::interpreter::operator::OperatorTable;
/// use calculator::interpreter::parser::{parse, PrecedenceMode};
/// use calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number("2".to_string()),
///     Token::Operator("^".to_string()),
///     Token::Number("3".to_string()),
/// ];
/// let tree = parse(infix_tokens, &OperatorTable::standard(), PrecedenceMode::Standard)?;
/// assert!(tree.is_some());
/// # Ok(()) }
/// ```
pub fn parse(
    infix_tokens: Vec<Token>,
    operators: &OperatorTable,
    mode: PrecedenceMode,
) -> Result<Option<Node>> {
    let postfix_tokens = infix_to_postfix(infix_tokens, operators, mode)?;
    debug!("postfix tokens: {:?}", postfix_tokens);
    let tree = expression_tree::new_tree(postfix_tokens, operators)?;
    Ok(tree)
}

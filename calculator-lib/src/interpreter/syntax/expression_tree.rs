use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::operator::{
    Associativity, OperatorDescriptor, OperatorTable, PrecedenceOrdering,
};
use crate::interpreter::syntax::syntax_visitor::{walk_binary_operation, SyntaxVisitor};
use crate::interpreter::token::Token;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    // Terminal symbols (leaves)
    /// The source text of the number; it is only parsed when evaluated.
    Number(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: OperatorDescriptor,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

/// Which operand of its parent a node is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Node {
    pub fn new_number(text: impl Into<String>) -> Node {
        Node::Number(text.into())
    }

    pub fn new_binary_operation(
        operator: OperatorDescriptor,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    /// The total number of nodes in the tree rooted at this node.
    pub fn size(&self) -> usize {
        let mut counter = NodeCounter { count: 0 };
        self.accept(&mut counter);
        counter.count
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number(text) => visitor.visit_number(text),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
        }
    }

    /// Renders the tree back into infix tokens, in-order, adding only the
    /// parentheses needed to keep the same tree shape.
    pub fn to_infix(&self) -> Vec<Token> {
        self.build_expression(None)
    }

    fn build_expression(&self, parent: Option<(&OperatorDescriptor, Side)>) -> Vec<Token> {
        match self {
            Node::Number(text) => vec![Token::Number(text.to_string())],
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                let mut tokens = Vec::new();

                let mut left_tokens = left_operand.build_expression(Some((operator, Side::Left)));
                let mut right_tokens =
                    right_operand.build_expression(Some((operator, Side::Right)));

                parenthesize_if(
                    &mut tokens,
                    || needs_parentheses(operator, parent),
                    |tokens| {
                        tokens.append(&mut left_tokens);
                        tokens.push(operator.token());
                        tokens.append(&mut right_tokens);
                    },
                );

                tokens
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

/// The deepest tree [`new_tree`] builds. Evaluating and rendering walk the tree
/// recursively, so deeper trees are rejected instead of exhausting the stack.
pub const MAX_TREE_DEPTH: usize = 2048;

/// Generates an expression tree based off of the given tokens.
///
/// The tokens are reversed once and then popped from the back, so operands are
/// consumed in their original left-to-right order.
///
/// # Arguments
///
/// * `tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
/// * `operators`: The table each operator symbol is resolved against.
///
/// returns: The root of the generated expression tree, or `None` if there were no tokens.
pub fn new_tree(mut tokens: Vec<Token>, operators: &OperatorTable) -> Result<Option<Node>> {
    tokens.reverse();
    // Every operand is kept together with the depth of its subtree.
    let mut operands: Vec<(Node, usize)> = Vec::new();

    while let Some(token) = tokens.pop() {
        match token {
            Token::Number(text) => operands.push((Node::new_number(text), 1)),
            Token::Operator(symbol) => {
                let operator = operators.lookup(&symbol)?.clone();
                let (operand_two, depth_two) = operands
                    .pop()
                    .ok_or_else(|| missing_operand("a second", &symbol))?;
                let (operand_one, depth_one) = operands
                    .pop()
                    .ok_or_else(|| missing_operand("a first", &symbol))?;

                let depth = depth_one.max(depth_two) + 1;
                if depth > MAX_TREE_DEPTH {
                    return Err(EvaluationError::MalformedExpression(format!(
                        "Expression nests deeper than {} levels",
                        MAX_TREE_DEPTH
                    )));
                }
                operands.push((
                    Node::new_binary_operation(operator, operand_one, operand_two),
                    depth,
                ));
            }
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvaluationError::MalformedExpression(
                    "There should not be any parenthesis present in the input".into(),
                ))
            }
        }
    }

    let root = operands.pop().map(|(node, _)| node);
    if !operands.is_empty() {
        return Err(EvaluationError::MalformedExpression(format!(
            "{} operand(s) are not joined by any operator",
            operands.len() + 1
        )));
    }
    Ok(root)
}

fn missing_operand(which: &str, symbol: &str) -> EvaluationError {
    EvaluationError::MalformedExpression(format!("Expected {} operand for '{}'", which, symbol))
}

/// A child needs parentheses when it binds looser than its parent, or equally tight
/// but on the side its parent does not group towards.
fn needs_parentheses(
    child: &OperatorDescriptor,
    parent: Option<(&OperatorDescriptor, Side)>,
) -> bool {
    let (parent, side) = match parent {
        Some(parent) => parent,
        None => return false,
    };
    match child.compare(parent) {
        PrecedenceOrdering::Higher => false,
        PrecedenceOrdering::Lower => true,
        PrecedenceOrdering::Equal => matches!(
            (parent.associativity, side),
            (Associativity::Left, Side::Right) | (Associativity::Right, Side::Left)
        ),
    }
}

fn parenthesize_if(
    tokens: &mut Vec<Token>,
    predicate: impl Fn() -> bool,
    mut build_interior: impl FnMut(&mut Vec<Token>),
) {
    let mut close_parentheses = false;

    if predicate() {
        tokens.push(Token::OpenParenthesis);
        close_parentheses = true;
    }

    build_interior(tokens);

    if close_parentheses {
        tokens.push(Token::CloseParenthesis);
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, text: &str) {
        self.builder.add_empty_child(text.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &OperatorDescriptor,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
}

struct NodeCounter {
    count: usize,
}

impl SyntaxVisitor for NodeCounter {
    fn visit_number(&mut self, _text: &str) {
        self.count += 1;
    }
    fn visit_binary_operation(
        &mut self,
        _operator: &OperatorDescriptor,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.count += 1;
        walk_binary_operation(self, left_operand, right_operand);
    }
}

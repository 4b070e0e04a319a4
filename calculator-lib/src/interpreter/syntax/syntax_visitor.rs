use crate::interpreter::operator::OperatorDescriptor;
use crate::interpreter::syntax::expression_tree::Node;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_number(&mut self, _text: &str) {}
    fn visit_binary_operation(
        &mut self,
        _operator: &OperatorDescriptor,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand)
    }
}

pub(crate) fn walk_binary_operation(
    visitor: &mut impl SyntaxVisitor,
    left_operand: &Node,
    right_operand: &Node,
) {
    left_operand.accept(visitor);
    right_operand.accept(visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::OperatorTable;

    fn create_complex_tree() -> Node {
        // 1 + (2 + 3) * 4
        let table = OperatorTable::standard();
        let plus = table.lookup("+").unwrap();
        let star = table.lookup("*").unwrap();
        let second_plus = Node::new_binary_operation(
            plus.clone(),
            Node::new_number("2"),
            Node::new_number("3"),
        );
        let product = Node::new_binary_operation(star.clone(), second_plus, Node::new_number("4"));
        Node::new_binary_operation(plus.clone(), Node::new_number("1"), product)
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl SyntaxVisitor for PrePostPrintVisitor {
        fn visit_number(&mut self, text: &str) {
            self.prints.push(text.to_string())
        }
        fn visit_binary_operation(
            &mut self,
            operator: &OperatorDescriptor,
            left_operand: &Node,
            right_operand: &Node,
        ) {
            self.prints.push(format!("{}", operator));
            walk_binary_operation(self, left_operand, right_operand);
            self.prints.push(format!("exit {}", operator));
        }
    }

    #[test]
    fn walk_tree_prints_all_nodes_in_tree_in_pre_and_post_orders() {
        let root = create_complex_tree();
        println!("{}", root);
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            ["+", "1", "*", "+", "2", "3", "exit +", "4", "exit *", "exit +"]
        )
    }
}

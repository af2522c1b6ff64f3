use crate::rule::Rewrite;
use surd_ast::{BinOp, Expr, ExprBuilder, ExprRef, ExprView};

/// Collapse `sqrt(x) * sqrt(x)` into `x` everywhere in the tree.
///
/// The product check looks at the *raw* operands of each `*` node: both must
/// already be `sqrt` with structurally equal radicands. When it matches, the
/// left radicand is returned as-is, without simplifying inside it. Operands
/// that only become equal after an inner cancellation are not collapsed.
pub fn deduce_cancel<'a>(expr: impl Into<ExprRef<'a>>) -> Expr {
    cancel(expr.into())
}

/// Rewrites in one pre-order sweep, writing each node as it is reached.
fn cancel(expr: ExprRef<'_>) -> Expr {
    let mut out = ExprBuilder::with_capacity(expr.len());
    let mut stack = vec![expr];

    while let Some(expr) = stack.pop() {
        match expr.view() {
            ExprView::Literal(value) => out.push_literal(value),
            ExprView::Sqrt(radicand) => {
                out.push_sqrt();
                stack.push(radicand);
            }
            ExprView::Binary { op, lhs, rhs } => {
                if op == BinOp::Mul {
                    if let Some(radicand) = shared_radicand(lhs, rhs) {
                        out.push_expr(radicand);
                        continue;
                    }
                }
                out.push_binary(op);
                stack.push(rhs);
                stack.push(lhs);
            }
        }
    }
    out.finish()
}

/// Radicand of `lhs` if both operands are `sqrt` over equal radicands.
fn shared_radicand<'a>(lhs: ExprRef<'a>, rhs: ExprRef<'_>) -> Option<ExprRef<'a>> {
    let left = lhs.as_sqrt()?;
    let right = rhs.as_sqrt()?;
    (left == right).then_some(left)
}

define_rule!(
    /// Recursive `sqrt(x) * sqrt(x) → x`.
    CancelSqrtProductRule,
    "Cancel Square Root Product",
    |expr| {
        let new_expr = deduce_cancel(expr);
        if new_expr == expr {
            return None;
        }
        Some(Rewrite::new(new_expr, "sqrt(x)*sqrt(x) = x"))
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use surd_ast::{add, div, literal, mul, sqrt, sub, Node};

    #[test]
    fn test_cancel_equal_radicands() {
        let x = add(&literal(1), &sqrt(&literal(3)));
        let e = mul(&sqrt(&x), &sqrt(&x));
        assert_eq!(deduce_cancel(&e), x);
    }

    #[test]
    fn test_unequal_radicands_are_rebuilt() {
        let e = mul(&sqrt(&literal(2)), &sqrt(&literal(3)));
        assert_eq!(deduce_cancel(&e), e);
    }

    #[test]
    fn test_only_multiplication_cancels() {
        let s = sqrt(&literal(5));
        for e in [add(&s, &s), sub(&s, &s), div(&s, &s)] {
            assert_eq!(deduce_cancel(&e), e);
        }
    }

    #[test]
    fn test_cancels_nested_products() {
        let s2 = sqrt(&literal(2));
        let s7 = sqrt(&literal(7));
        // sqrt(sqrt(7)*sqrt(7)) + 1/(sqrt(2)*sqrt(2))
        let e = add(&sqrt(&mul(&s7, &s7)), &div(&literal(1), &mul(&s2, &s2)));
        let expected = add(&sqrt(&literal(7)), &div(&literal(1), &literal(2)));
        assert_eq!(deduce_cancel(&e), expected);
    }

    #[test]
    fn test_matched_radicand_is_not_simplified_further() {
        let s3 = sqrt(&literal(3));
        let inner = mul(&s3, &s3);
        let e = mul(&sqrt(&inner), &sqrt(&inner));
        // returns the shared radicand untouched
        assert_eq!(deduce_cancel(&e), inner);
    }

    #[test]
    fn test_raw_operands_are_compared_before_recursion() {
        let s3 = sqrt(&literal(3));
        // sqrt(sqrt(3)*sqrt(3)) * sqrt(3): radicands differ before recursion
        let e = mul(&sqrt(&mul(&s3, &s3)), &sqrt(&literal(3)));
        let expected = mul(&sqrt(&literal(3)), &sqrt(&literal(3)));
        assert_eq!(deduce_cancel(&e), expected);
    }

    #[test]
    fn test_rule_returns_none_without_change() {
        let e = mul(&sqrt(&literal(2)), &literal(2));
        assert!(CancelSqrtProductRule.apply(e.window()).is_none());

        let e = mul(&sqrt(&literal(2)), &sqrt(&literal(2)));
        let rewrite = CancelSqrtProductRule.apply(e.window()).unwrap();
        assert_eq!(rewrite.new_expr, literal(2));
    }

    #[test]
    fn test_deep_expression_does_not_overflow() {
        // sqrt(sqrt(...sqrt(sqrt(5)*sqrt(5))...))
        let depth = 100_000;
        let mut nodes = vec![Node::Sqrt; depth];
        nodes.extend([
            Node::Binary {
                op: BinOp::Mul,
                rhs_offset: 2,
            },
            Node::Sqrt,
            Node::Literal(5),
            Node::Sqrt,
            Node::Literal(5),
        ]);
        let e = Expr::from_nodes(nodes).unwrap();

        let mut expected = vec![Node::Sqrt; depth];
        expected.push(Node::Literal(5));
        assert_eq!(deduce_cancel(&e).nodes(), expected.as_slice());
    }

    #[test]
    fn test_deep_right_spine_keeps_offsets() {
        // 1+(1+(1+...(sqrt(2)*sqrt(2))))
        let depth = 50_000;
        let mut nodes = Vec::new();
        for _ in 0..depth {
            nodes.push(Node::Binary {
                op: BinOp::Add,
                rhs_offset: 1,
            });
            nodes.push(Node::Literal(1));
        }
        let leaf = mul(&sqrt(&literal(2)), &sqrt(&literal(2)));
        nodes.extend_from_slice(leaf.nodes());
        let e = Expr::from_nodes(nodes).unwrap();

        let result = deduce_cancel(&e);
        assert_eq!(result.len(), e.len() - 4);
        assert_eq!(result.nodes().last(), Some(&Node::Literal(2)));
        assert!(Expr::from_nodes(result.nodes().to_vec()).is_ok());
    }
}

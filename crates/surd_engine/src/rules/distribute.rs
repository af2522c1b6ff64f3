use crate::rule::Rewrite;
use surd_ast::{add, mul, BinOp, Expr, ExprRef, ExprView};

/// `(a + b) * c` → `a*c + b*c`, or `None` if the root is not that shape.
///
/// Only the root is inspected: no recursion into operands, no `c * (a + b)`
/// and no subtraction.
pub fn try_distribute(expr: ExprRef<'_>) -> Option<Expr> {
    let ExprView::Binary {
        op: BinOp::Mul,
        lhs,
        rhs: c,
    } = expr.view()
    else {
        return None;
    };
    let ExprView::Binary {
        op: BinOp::Add,
        lhs: a,
        rhs: b,
    } = lhs.view()
    else {
        return None;
    };

    Some(add(&mul(a, c), &mul(b, c)))
}

/// Single-level distribution. Returns a copy of `expr` when the root is not
/// `(a + b) * c`.
pub fn deduce_distribute<'a>(expr: impl Into<ExprRef<'a>>) -> Expr {
    let expr = expr.into();
    try_distribute(expr).unwrap_or_else(|| expr.to_expr())
}

define_rule!(
    /// Root-only `(a + b) * c → a*c + b*c`.
    DistributeRule,
    "Distributive Property",
    |expr| {
        let new_expr = try_distribute(expr)?;
        Some(Rewrite::new(
            new_expr,
            "Distribute product over the sum on its left",
        ))
    }
);

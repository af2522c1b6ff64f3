//! Display formatting for expressions
//!
//! This module provides display implementations for expressions:
//! - `Display` for [`Expr`] / [`ExprRef`]: minimal-parenthesis infix
//! - `RawDisplayExpr`: the slot sequence, for debugging the encoding
//!
//! Parenthesization follows conventional precedence (`* /` over `+ -`) with
//! left associativity. A left operand is wrapped only when it binds looser
//! than its parent. A right operand is also wrapped at equal precedence,
//! because `a-(b-c)` and `a+(b+c)` would otherwise re-read as left-nested
//! trees. Negative literals are wrapped whenever they are a binary operand,
//! on the left as well as the right. `-2*5` would re-read to the same tree,
//! but `(-2)*5` keeps the sign visibly attached to the literal and prints
//! both sides of an operator the same way. This is the one place a bare
//! literal gets parentheses.

use crate::expression::{Expr, ExprRef, ExprView, Node};
use std::fmt;

/// Precedence of anything that never needs parentheses (literals, `sqrt(..)`).
const ATOM_PRECEDENCE: u8 = u8::MAX;

fn precedence(expr: ExprRef<'_>) -> u8 {
    match expr.root() {
        Node::Binary { op, .. } => op.precedence(),
        Node::Literal(_) | Node::Sqrt => ATOM_PRECEDENCE,
    }
}

fn is_negative_literal(expr: ExprRef<'_>) -> bool {
    matches!(expr.root(), Node::Literal(value) if value < 0)
}

/// Pieces still to be written, top of the stack first.
enum Pending<'a> {
    Expr(ExprRef<'a>),
    Text(&'static str),
}

/// Writes `expr` without recursing, so arbitrarily deep trees print safely.
fn write_expr(f: &mut fmt::Formatter<'_>, expr: ExprRef<'_>) -> fmt::Result {
    let mut stack = vec![Pending::Expr(expr)];

    while let Some(piece) = stack.pop() {
        let expr = match piece {
            Pending::Text(text) => {
                f.write_str(text)?;
                continue;
            }
            Pending::Expr(expr) => expr,
        };

        match expr.view() {
            ExprView::Literal(value) => write!(f, "{}", value)?,
            ExprView::Sqrt(radicand) => {
                f.write_str("sqrt(")?;
                stack.push(Pending::Text(")"));
                stack.push(Pending::Expr(radicand));
            }
            ExprView::Binary { op, lhs, rhs } => {
                let my_prec = op.precedence();
                let wrap_lhs = precedence(lhs) < my_prec || is_negative_literal(lhs);
                // Equal precedence on the right changes the tree shape on re-read
                let wrap_rhs = precedence(rhs) <= my_prec || is_negative_literal(rhs);

                // pushed in reverse: lhs is written first
                push_operand(&mut stack, rhs, wrap_rhs);
                stack.push(Pending::Text(op.symbol()));
                push_operand(&mut stack, lhs, wrap_lhs);
            }
        }
    }
    Ok(())
}

fn push_operand<'a>(stack: &mut Vec<Pending<'a>>, expr: ExprRef<'a>, wrap: bool) {
    if wrap {
        stack.push(Pending::Text(")"));
        stack.push(Pending::Expr(expr));
        stack.push(Pending::Text("("));
    } else {
        stack.push(Pending::Expr(expr));
    }
}

impl fmt::Display for ExprRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, *self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self.window())
    }
}

/// Render an expression as minimally parenthesized infix text.
pub fn format<'a>(expr: impl Into<ExprRef<'a>>) -> String {
    expr.into().to_string()
}

/// Debug-style display of the raw slot sequence, e.g. `[*@5, +@2, sqrt, 2, ...]`.
///
/// Binary slots show their operator and `rhs_offset`.
pub struct RawDisplayExpr<'a> {
    pub expr: ExprRef<'a>,
}

impl<'a> RawDisplayExpr<'a> {
    pub fn new(expr: impl Into<ExprRef<'a>>) -> Self {
        RawDisplayExpr { expr: expr.into() }
    }
}

impl fmt::Display for RawDisplayExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, node) in self.expr.nodes().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match node {
                Node::Literal(value) => write!(f, "{}", value)?,
                Node::Binary { op, rhs_offset } => write!(f, "{}@{}", op, rhs_offset)?,
                Node::Sqrt => f.write_str("sqrt")?,
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{add, div, literal, mul, sqrt, sub};
    use crate::expression::BinOp;

    #[test]
    fn test_display_precedence() {
        let e = add(&literal(1), &mul(&literal(2), &literal(3)));
        assert_eq!(format(&e), "1+2*3");

        let e = mul(&add(&literal(1), &literal(2)), &literal(3));
        assert_eq!(format(&e), "(1+2)*3");
    }

    #[test]
    fn test_display_left_associative_chain_has_no_parens() {
        let e = sub(&sub(&literal(1), &literal(2)), &literal(3));
        assert_eq!(format(&e), "1-2-3");

        let e = div(&mul(&literal(8), &literal(2)), &literal(4));
        assert_eq!(format(&e), "8*2/4");
    }

    #[test]
    fn test_display_right_nesting_keeps_parens() {
        let e = sub(&literal(1), &sub(&literal(2), &literal(3)));
        assert_eq!(format(&e), "1-(2-3)");

        let e = add(&literal(1), &add(&literal(2), &literal(3)));
        assert_eq!(format(&e), "1+(2+3)");

        let e = div(&literal(1), &mul(&literal(2), &literal(3)));
        assert_eq!(format(&e), "1/(2*3)");
    }

    #[test]
    fn test_display_sqrt_is_atomic() {
        let e = mul(&sqrt(&add(&literal(1), &literal(2))), &sqrt(&literal(2)));
        assert_eq!(format(&e), "sqrt(1+2)*sqrt(2)");
        assert_eq!(format(&sqrt(&literal(4))), "sqrt(4)");
    }

    #[test]
    fn test_display_negative_literals() {
        assert_eq!(format(&literal(-3)), "-3");
        assert_eq!(format(&sub(&literal(1), &literal(-3))), "1-(-3)");
        assert_eq!(format(&mul(&literal(-2), &literal(5))), "(-2)*5");
        assert_eq!(format(&sqrt(&literal(-1))), "sqrt(-1)");
    }

    #[test]
    fn test_display_deep_expression_does_not_overflow() {
        let mut nodes = vec![Node::Sqrt; 100_000];
        nodes.push(Node::Literal(1));
        let e = Expr::from_nodes(nodes).unwrap();

        let text = format(&e);
        assert_eq!(text.len(), 100_000 * "sqrt()".len() + 1);
        assert!(text.starts_with("sqrt(sqrt("));
        assert!(text.ends_with("(1))"));
        assert!(format!("{:?}", e).starts_with("Expr(sqrt("));
    }

    #[test]
    fn test_display_deep_left_chain() {
        // 1-1-1-...: every `-` is the left operand of the next one up
        let n = 50_000;
        let mut nodes: Vec<Node> = (0..n)
            .map(|i| Node::Binary {
                op: BinOp::Sub,
                rhs_offset: 2 * (n - 1 - i) + 1,
            })
            .collect();
        nodes.extend(std::iter::repeat(Node::Literal(1)).take(n + 1));
        let e = Expr::from_nodes(nodes).unwrap();

        assert_eq!(format(&e), format!("1{}", "-1".repeat(n)));
    }

    #[test]
    fn test_raw_display() {
        let e = mul(&add(&sqrt(&literal(2)), &literal(1)), &literal(3));
        assert_eq!(
            RawDisplayExpr::new(&e).to_string(),
            "[*@4, +@2, sqrt, 2, 1, 3]"
        );
    }
}

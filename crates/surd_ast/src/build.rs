//! Build helpers for expression construction.
//!
//! Every builder allocates a fresh slot sequence: root first, then a copy of
//! the left operand, then a copy of the right operand. Nothing is folded,
//! `literal(2) + literal(2)` stays a `+` node over two leaves until a
//! deduction pass rewrites it.
//!
//! Builders take anything that converts into an [`ExprRef`], so both owned
//! expressions (`&Expr`) and sub-windows of another expression can be
//! combined without an intermediate copy.

use crate::expression::{BinOp, Expr, ExprRef, Node, Slots};
use std::ops;

/// Integer leaf.
#[inline]
pub fn literal(value: i64) -> Expr {
    let mut nodes = Slots::new();
    nodes.push(Node::Literal(value));
    Expr::from_slots(nodes)
}

/// Binary node over copies of `lhs` and `rhs`.
pub fn binary<'l, 'r>(
    op: BinOp,
    lhs: impl Into<ExprRef<'l>>,
    rhs: impl Into<ExprRef<'r>>,
) -> Expr {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    let mut nodes = Slots::with_capacity(1 + lhs.len() + rhs.len());
    nodes.push(Node::Binary {
        op,
        rhs_offset: lhs.len(),
    });
    nodes.extend_from_slice(lhs.nodes());
    nodes.extend_from_slice(rhs.nodes());
    Expr::from_slots(nodes)
}

#[inline]
pub fn add<'l, 'r>(lhs: impl Into<ExprRef<'l>>, rhs: impl Into<ExprRef<'r>>) -> Expr {
    binary(BinOp::Add, lhs, rhs)
}

#[inline]
pub fn sub<'l, 'r>(lhs: impl Into<ExprRef<'l>>, rhs: impl Into<ExprRef<'r>>) -> Expr {
    binary(BinOp::Sub, lhs, rhs)
}

#[inline]
pub fn mul<'l, 'r>(lhs: impl Into<ExprRef<'l>>, rhs: impl Into<ExprRef<'r>>) -> Expr {
    binary(BinOp::Mul, lhs, rhs)
}

#[inline]
pub fn div<'l, 'r>(lhs: impl Into<ExprRef<'l>>, rhs: impl Into<ExprRef<'r>>) -> Expr {
    binary(BinOp::Div, lhs, rhs)
}

/// Square root over a copy of `radicand`.
pub fn sqrt<'a>(radicand: impl Into<ExprRef<'a>>) -> Expr {
    let radicand = radicand.into();
    let mut nodes = Slots::with_capacity(1 + radicand.len());
    nodes.push(Node::Sqrt);
    nodes.extend_from_slice(radicand.nodes());
    Expr::from_slots(nodes)
}

/// Writes an expression slot by slot in pre-order.
///
/// Passes that rebuild a whole tree use this instead of the nested builders,
/// which copy every operand once per level. Each binary slot's `rhs_offset`
/// is filled in as soon as its left operand is complete, so callers only
/// emit nodes root first, left before right.
///
/// # Example
/// ```
/// use surd_ast::{build::ExprBuilder, literal, mul, sqrt, BinOp};
/// let mut b = ExprBuilder::new();
/// b.push_binary(BinOp::Mul);
/// b.push_sqrt();
/// b.push_literal(2);
/// b.push_expr(&literal(3));
/// assert_eq!(b.finish(), mul(&sqrt(&literal(2)), &literal(3)));
/// ```
#[derive(Debug, Default)]
pub struct ExprBuilder {
    nodes: Slots,
    /// Open operators: (slot index, operands still missing)
    open: Vec<(usize, usize)>,
}

impl ExprBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(slots: usize) -> Self {
        ExprBuilder {
            nodes: Slots::with_capacity(slots),
            open: Vec::new(),
        }
    }

    /// True once a whole expression has been written.
    pub fn is_complete(&self) -> bool {
        !self.nodes.is_empty() && self.open.is_empty()
    }

    pub fn push_literal(&mut self, value: i64) {
        self.start_node();
        self.nodes.push(Node::Literal(value));
        self.operand_done();
    }

    /// Open a `sqrt`; the next complete subtree becomes its radicand.
    pub fn push_sqrt(&mut self) {
        self.start_node();
        self.open.push((self.nodes.len(), 1));
        self.nodes.push(Node::Sqrt);
    }

    /// Open a binary node; the next two complete subtrees become its operands.
    pub fn push_binary(&mut self, op: BinOp) {
        self.start_node();
        self.open.push((self.nodes.len(), 2));
        self.nodes.push(Node::Binary { op, rhs_offset: 0 });
    }

    /// Copy a whole subtree as the next operand.
    pub fn push_expr<'a>(&mut self, expr: impl Into<ExprRef<'a>>) {
        self.start_node();
        self.nodes.extend_from_slice(expr.into().nodes());
        self.operand_done();
    }

    /// Panics if an operator is still missing operands.
    pub fn finish(self) -> Expr {
        assert!(
            self.is_complete(),
            "unfinished expression: {} operator(s) still open",
            self.open.len()
        );
        Expr::from_slots(self.nodes)
    }

    fn start_node(&self) {
        assert!(!self.is_complete(), "expression already has a root");
    }

    /// Close every operator whose last operand just ended.
    fn operand_done(&mut self) {
        while let Some(top) = self.open.last_mut() {
            top.1 -= 1;
            let (slot, missing) = *top;
            let len = self.nodes.len();
            match (missing, &mut self.nodes[slot]) {
                (0, _) => {
                    self.open.pop();
                }
                (1, Node::Binary { rhs_offset, .. }) => {
                    *rhs_offset = len - slot - 1;
                    return;
                }
                _ => return,
            }
        }
    }
}

impl Expr {
    #[inline]
    pub fn literal(value: i64) -> Self {
        literal(value)
    }

    /// `sqrt(self)` as a new expression.
    #[inline]
    pub fn sqrt(&self) -> Self {
        sqrt(self)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        literal(value)
    }
}

macro_rules! impl_binary_ops {
    ($($trait:ident, $method:ident, $op:expr;)*) => {
        $(
            impl ops::$trait<Expr> for Expr {
                type Output = Expr;
                fn $method(self, rhs: Expr) -> Expr {
                    binary($op, &self, &rhs)
                }
            }

            impl ops::$trait<&Expr> for Expr {
                type Output = Expr;
                fn $method(self, rhs: &Expr) -> Expr {
                    binary($op, &self, rhs)
                }
            }

            impl ops::$trait<Expr> for &Expr {
                type Output = Expr;
                fn $method(self, rhs: Expr) -> Expr {
                    binary($op, self, &rhs)
                }
            }

            impl ops::$trait<&Expr> for &Expr {
                type Output = Expr;
                fn $method(self, rhs: &Expr) -> Expr {
                    binary($op, self, rhs)
                }
            }
        )*
    };
}

impl_binary_ops! {
    Add, add, BinOp::Add;
    Sub, sub, BinOp::Sub;
    Mul, mul, BinOp::Mul;
    Div, div, BinOp::Div;
}

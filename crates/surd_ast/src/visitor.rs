use crate::expression::{BinOp, ExprRef, ExprView};

/// Structural visitor over expression windows.
///
/// `visit_expr` walks the tree in pre-order with an explicit stack and calls
/// one hook per node. Hooks only observe; they never have to recurse, so
/// overriding a single hook is enough to collect information about one node
/// kind, and the walk is safe for arbitrarily deep expressions.
pub trait Visitor<'a> {
    fn visit_expr(&mut self, expr: ExprRef<'a>) {
        let mut stack = vec![expr];
        while let Some(expr) = stack.pop() {
            match expr.view() {
                ExprView::Literal(value) => self.visit_literal(value),
                ExprView::Binary { op, lhs, rhs } => {
                    self.visit_binary(op, lhs, rhs);
                    stack.push(rhs);
                    stack.push(lhs);
                }
                ExprView::Sqrt(radicand) => {
                    self.visit_sqrt(radicand);
                    stack.push(radicand);
                }
            }
        }
    }

    fn visit_literal(&mut self, _value: i64) {}

    /// Called before either operand is visited.
    fn visit_binary(&mut self, _op: BinOp, _lhs: ExprRef<'a>, _rhs: ExprRef<'a>) {}

    /// Called before the radicand is visited.
    fn visit_sqrt(&mut self, _radicand: ExprRef<'a>) {}
}

/// Collects literal values in pre-order.
#[derive(Debug, Default)]
pub struct LiteralCollector {
    pub values: Vec<i64>,
}

impl LiteralCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor<'_> for LiteralCollector {
    fn visit_literal(&mut self, value: i64) {
        self.values.push(value);
    }
}

/// Collects every radicand window, outermost first.
#[derive(Debug, Default)]
pub struct RadicandCollector<'a> {
    pub radicands: Vec<ExprRef<'a>>,
}

impl<'a> RadicandCollector<'a> {
    /// Walk `expr` and return the radicands it contains.
    pub fn collect(expr: ExprRef<'a>) -> Vec<ExprRef<'a>> {
        let mut collector = RadicandCollector::default();
        collector.visit_expr(expr);
        collector.radicands
    }
}

impl<'a> Visitor<'a> for RadicandCollector<'a> {
    fn visit_sqrt(&mut self, radicand: ExprRef<'a>) {
        self.radicands.push(radicand);
    }
}

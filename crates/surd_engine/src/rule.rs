use surd_ast::{Expr, ExprRef};

/// Result of a rule application containing the new expression and metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite {
    /// The transformed expression
    pub new_expr: Expr,
    /// Human-readable description of the transformation
    pub description: String,
}

impl Rewrite {
    pub fn new(new_expr: Expr, description: impl Into<String>) -> Self {
        Rewrite {
            new_expr,
            description: description.into(),
        }
    }
}

/// A single rewrite over a whole expression.
///
/// `apply` returns `None` when the rule does not fire. Rules never mutate
/// their input; a rewrite always carries a freshly built expression.
pub trait Rule {
    fn name(&self) -> &str;

    fn apply(&self, expr: ExprRef<'_>) -> Option<Rewrite>;
}

use surd_ast::Expr;

/// One applied rule, recorded by the [`Simplifier`](crate::Simplifier).
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub description: String,
    pub rule_name: String,
    pub before: Expr,
    pub after: Expr,
    /// 1-based pass in which the rule fired
    pub pass: usize,
}

impl Step {
    pub fn new(description: &str, rule_name: &str, before: Expr, after: Expr, pass: usize) -> Self {
        Self {
            description: description.to_string(),
            rule_name: rule_name.to_string(),
            before,
            after,
            pass,
        }
    }

    /// `before -> after` rendered as infix text.
    pub fn summary(&self) -> String {
        format!("{} -> {}", self.before, self.after)
    }
}

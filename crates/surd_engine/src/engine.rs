//! The `Simplifier`: an ordered rule list applied in passes until nothing changes.

use crate::error::CasError;
use crate::options::SimplifyOptions;
use crate::rule::Rule;
use crate::rules::{CancelSqrtProductRule, DistributeRule};
use crate::step::Step;
use rustc_hash::FxHashSet;
use surd_ast::{Expr, Node};
use tracing::{debug, trace, warn};

pub struct Simplifier {
    rules: Vec<Box<dyn Rule>>,
    disabled_rules: FxHashSet<String>,
    /// Upper bound on full passes over the rule list
    pub max_passes: usize,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Simplifier {
    /// Create a new Simplifier without rules registered.
    ///
    /// Usually you want `Simplifier::with_default_rules()` instead.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            disabled_rules: FxHashSet::default(),
            max_passes: SimplifyOptions::default().max_passes,
        }
    }

    /// Create a Simplifier with distribution followed by sqrt cancellation.
    ///
    /// # Example
    ///
    /// ```
    /// use surd_ast::{add, literal, mul, sqrt};
    /// use surd_engine::Simplifier;
    ///
    /// let s2 = sqrt(&literal(2));
    /// let r = mul(&add(&s2, &s2), &s2);
    /// let (result, steps) = Simplifier::with_default_rules().simplify(&r);
    /// assert_eq!(result.to_string(), "2+2");
    /// assert_eq!(steps.len(), 2);
    /// ```
    pub fn with_default_rules() -> Self {
        Self::from_options(&SimplifyOptions::default())
    }

    /// Create a simplifier with the rules enabled in `opts`.
    pub fn from_options(opts: &SimplifyOptions) -> Self {
        let mut s = Self::new();
        if opts.distribute {
            s.add_rule(Box::new(DistributeRule));
        }
        if opts.cancel_sqrt {
            s.add_rule(Box::new(CancelSqrtProductRule));
        }
        s.max_passes = opts.max_passes;
        s
    }

    /// Append a rule; rules run in registration order within a pass.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Skip the rule with this display name from now on.
    pub fn disable_rule(&mut self, name: &str) {
        self.disabled_rules.insert(name.to_string());
    }

    pub fn enable_rule(&mut self, name: &str) {
        self.disabled_rules.remove(name);
    }

    /// Names of the rules that will run, in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.active_rules().map(|rule| rule.name()).collect()
    }

    fn active_rules(&self) -> impl Iterator<Item = &dyn Rule> + '_ {
        self.rules
            .iter()
            .map(|rule| rule.as_ref())
            .filter(move |rule| !self.disabled_rules.contains(rule.name()))
    }

    /// Apply every active rule in order, pass after pass, until a pass makes
    /// no change or `max_passes` is reached.
    ///
    /// Returns the final expression and the steps in the order they fired.
    pub fn simplify(&self, expr: &Expr) -> (Expr, Vec<Step>) {
        let mut current = expr.clone();
        let mut steps = Vec::new();

        for pass in 1..=self.max_passes {
            trace!(pass, expr = %current, "starting pass");
            let mut changed = false;

            for rule in self.active_rules() {
                let Some(rewrite) = rule.apply(current.window()) else {
                    continue;
                };
                if rewrite.new_expr == current {
                    continue;
                }

                debug!(
                    rule = rule.name(),
                    before = %current,
                    after = %rewrite.new_expr,
                    "applied rule"
                );
                let before = std::mem::replace(&mut current, rewrite.new_expr);
                steps.push(Step::new(
                    &rewrite.description,
                    rule.name(),
                    before,
                    current.clone(),
                    pass,
                ));
                changed = true;
            }

            if !changed {
                debug!(passes = pass, steps = steps.len(), result = %current, "reached fixpoint");
                return (current, steps);
            }
        }

        if self.max_passes > 0 {
            warn!(
                max_passes = self.max_passes,
                result = %current,
                "pass budget exhausted before reaching a fixpoint"
            );
        }
        (current, steps)
    }

    /// Validate a raw slot sequence and simplify it.
    pub fn simplify_nodes(&self, nodes: Vec<Node>) -> Result<(Expr, Vec<Step>), CasError> {
        let expr = Expr::from_nodes(nodes)?;
        Ok(self.simplify(&expr))
    }
}

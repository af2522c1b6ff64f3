//! Canonical traversal utilities.
//!
//! Because an expression is stored in pre-order, a pre-order walk is a plain
//! scan of the slots. Depth and subtree extents are recovered by counting
//! pending operands instead of recursing, so every function here is
//! stack-safe for arbitrarily deep expressions.
//!
//! # Functions
//!
//! - [`visit`]: Call a closure once per node, root first
//! - [`visit_with_depth`]: Same, with the node's distance from the root
//! - [`count_all_nodes`] / [`count_nodes_matching`]: Node counts
//! - [`count_nodes_and_max_depth`]: Node count and max depth
//! - [`subtree_len`]: Extent of the subtree starting at a slot

use crate::expression::{ExprRef, Node};

/// Invoke `visitor` once per node in pre-order (root, left subtree, right subtree).
pub fn visit<'a, F>(expr: impl Into<ExprRef<'a>>, mut visitor: F)
where
    F: FnMut(&Node),
{
    for node in expr.into().nodes() {
        visitor(node);
    }
}

/// Pre-order walk that also reports each node's depth (root has depth 0).
pub fn visit_with_depth<'a, F>(expr: impl Into<ExprRef<'a>>, mut visitor: F)
where
    F: FnMut(&Node, usize),
{
    // Operands still expected by each open ancestor
    let mut pending: Vec<usize> = Vec::new();

    for node in expr.into().nodes() {
        visitor(node, pending.len());

        if let Some(top) = pending.last_mut() {
            *top -= 1;
        }
        match node.arity() {
            0 => {
                while pending.last() == Some(&0) {
                    pending.pop();
                }
            }
            n => pending.push(n),
        }
    }
}

/// Count all nodes in an expression.
pub fn count_all_nodes<'a>(expr: impl Into<ExprRef<'a>>) -> usize {
    expr.into().len()
}

/// Count nodes matching a predicate.
///
/// # Example
/// ```
/// use surd_ast::{build, traversal::count_nodes_matching, Node};
/// let e = build::mul(&build::sqrt(&build::literal(2)), &build::sqrt(&build::literal(2)));
/// assert_eq!(count_nodes_matching(&e, |n| matches!(n, Node::Sqrt)), 2);
/// ```
pub fn count_nodes_matching<'a, F>(expr: impl Into<ExprRef<'a>>, mut pred: F) -> usize
where
    F: FnMut(&Node) -> bool,
{
    let mut count = 0;
    visit(expr, |node| {
        if pred(node) {
            count += 1;
        }
    });
    count
}

/// Count nodes and compute maximum depth.
///
/// # Returns
/// Tuple of (total_nodes, max_depth) where the root has depth 0.
pub fn count_nodes_and_max_depth<'a>(expr: impl Into<ExprRef<'a>>) -> (usize, usize) {
    let mut count = 0;
    let mut max_depth = 0;
    visit_with_depth(expr, |_, depth| {
        count += 1;
        max_depth = max_depth.max(depth);
    });
    (count, max_depth)
}

/// Number of slots occupied by the subtree that starts at `index`.
///
/// Panics if `index` is out of bounds or the subtree runs past the end of
/// `nodes`.
pub fn subtree_len(nodes: &[Node], index: usize) -> usize {
    let mut needed = 1;
    let mut end = index;
    while needed > 0 {
        needed = needed - 1 + nodes[end].arity();
        end += 1;
    }
    end - index
}

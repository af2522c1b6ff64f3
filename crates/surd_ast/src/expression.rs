//! Flat expression encoding.
//!
//! An [`Expr`] is a single contiguous pre-order sequence of [`Node`] slots.
//! Slot 0 is the root. A binary node stores the size of its left subtree as
//! `rhs_offset`, so its right operand starts at `index + 1 + rhs_offset`; a
//! sqrt node's operand starts at the next slot.
//!
//! Every algorithm works on [`ExprRef`] windows: a borrowed slice covering
//! exactly one subtree. Because a window always ends where its subtree ends,
//! splitting a node into its operands is a single `split_at`, and
//! [`ExprRef::view`] is the only place that touches offsets.

use crate::ensure_encoding;
use crate::error::AstError;
use smallvec::SmallVec;
use std::fmt;

/// Backing storage for an [`Expr`]. Expressions up to eight slots stay inline.
pub(crate) type Slots = SmallVec<[Node; 8]>;

/// Binary operator tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl BinOp {
    pub const ALL: [BinOp; 4] = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div];

    /// Infix symbol used by the printer.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// Binding strength: `* /` bind tighter than `+ -`.
    pub const fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One slot of the flat encoding.
///
/// The derived `PartialEq` is slot equality: same tag, same literal value,
/// same operator and offset. `Sqrt` carries no metadata, its operand is
/// compared by the following slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Literal(i64),
    Binary { op: BinOp, rhs_offset: usize },
    Sqrt,
}

impl Node {
    /// Number of operand subtrees that follow this slot.
    #[inline]
    pub const fn arity(&self) -> usize {
        match self {
            Node::Literal(_) => 0,
            Node::Sqrt => 1,
            Node::Binary { .. } => 2,
        }
    }
}

/// Decoded root of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprView<'a> {
    Literal(i64),
    Binary {
        op: BinOp,
        lhs: ExprRef<'a>,
        rhs: ExprRef<'a>,
    },
    Sqrt(ExprRef<'a>),
}

/// Borrowed window over exactly one encoded subtree.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprRef<'a> {
    nodes: &'a [Node],
}

#[allow(clippy::len_without_is_empty)] // a window is never empty
impl<'a> ExprRef<'a> {
    /// Wrap a slice that is known to hold one well-formed subtree.
    #[inline]
    pub(crate) fn new_unchecked(nodes: &'a [Node]) -> Self {
        debug_assert!(!nodes.is_empty(), "expression window must not be empty");
        ExprRef { nodes }
    }

    /// Number of slots in this subtree.
    #[inline]
    pub fn len(self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn nodes(self) -> &'a [Node] {
        self.nodes
    }

    #[inline]
    pub fn root(self) -> Node {
        self.nodes[0]
    }

    /// Decode the root slot and split the window into operand windows.
    ///
    /// Panics if the encoding is corrupt; builders never produce such input.
    pub fn view(self) -> ExprView<'a> {
        match self.nodes[0] {
            Node::Literal(value) => ExprView::Literal(value),
            Node::Sqrt => ExprView::Sqrt(ExprRef::new_unchecked(&self.nodes[1..])),
            Node::Binary { op, rhs_offset } => {
                debug_assert!(
                    rhs_offset > 0 && rhs_offset + 1 < self.nodes.len(),
                    "rhs_offset {} out of range for window of {} slots",
                    rhs_offset,
                    self.nodes.len()
                );
                let (lhs, rhs) = self.nodes[1..].split_at(rhs_offset);
                ExprView::Binary {
                    op,
                    lhs: ExprRef::new_unchecked(lhs),
                    rhs: ExprRef::new_unchecked(rhs),
                }
            }
        }
    }

    /// Root operator if this window is a binary node.
    #[inline]
    pub fn binary_op(self) -> Option<BinOp> {
        match self.nodes[0] {
            Node::Binary { op, .. } => Some(op),
            _ => None,
        }
    }

    /// Radicand window if this window is a sqrt node.
    #[inline]
    pub fn as_sqrt(self) -> Option<ExprRef<'a>> {
        match self.nodes[0] {
            Node::Sqrt => Some(ExprRef::new_unchecked(&self.nodes[1..])),
            _ => None,
        }
    }

    /// Copy this window into a fresh owned expression.
    pub fn to_expr(self) -> Expr {
        Expr::from_slots(Slots::from_slice(self.nodes))
    }
}

impl fmt::Debug for ExprRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprRef({})", self)
    }
}

/// Owned, immutable expression value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    nodes: Slots,
}

#[allow(clippy::len_without_is_empty)] // an expression always has a root
impl Expr {
    /// Take ownership of slots produced by a builder or deduction pass.
    #[inline]
    pub(crate) fn from_slots(nodes: Slots) -> Self {
        debug_assert!(
            validate(&nodes).is_ok(),
            "builder produced a malformed encoding: {:?}",
            validate(&nodes)
        );
        Expr { nodes }
    }

    /// Accept a raw slot sequence from outside the builders.
    ///
    /// The sequence must be exactly one pre-order subtree whose every
    /// `rhs_offset` equals the size of its left operand.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, AstError> {
        validate(&nodes)?;
        Ok(Expr {
            nodes: Slots::from_vec(nodes),
        })
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Raw slots in pre-order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn root(&self) -> Node {
        self.nodes[0]
    }

    /// Window over the whole expression.
    #[inline]
    pub fn window(&self) -> ExprRef<'_> {
        ExprRef::new_unchecked(&self.nodes)
    }

    #[inline]
    pub fn view(&self) -> ExprView<'_> {
        self.window().view()
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({})", self)
    }
}

impl<'a> From<&'a Expr> for ExprRef<'a> {
    #[inline]
    fn from(expr: &'a Expr) -> Self {
        expr.window()
    }
}

impl From<ExprRef<'_>> for Expr {
    fn from(window: ExprRef<'_>) -> Self {
        window.to_expr()
    }
}

impl PartialEq<ExprRef<'_>> for Expr {
    fn eq(&self, other: &ExprRef<'_>) -> bool {
        self.nodes() == other.nodes()
    }
}

impl PartialEq<Expr> for ExprRef<'_> {
    fn eq(&self, other: &Expr) -> bool {
        self.nodes() == other.nodes()
    }
}

/// Structural equality of two expressions or windows.
///
/// Two trees are equal exactly when their pre-order encodings (offsets
/// included) match slot by slot.
pub fn equal<'a, 'b>(a: impl Into<ExprRef<'a>>, b: impl Into<ExprRef<'b>>) -> bool {
    a.into().nodes() == b.into().nodes()
}

/// Check a slot sequence against the encoding invariants.
///
/// Walks the sequence back to front, keeping the sizes of completed subtrees
/// on a stack: reversed pre-order puts a node's left operand on top of its
/// right operand by the time the node itself is reached.
fn validate(nodes: &[Node]) -> Result<(), AstError> {
    ensure_encoding!(!nodes.is_empty(), 0, "empty slot sequence");

    let mut sizes: Vec<usize> = Vec::new();
    for (index, node) in nodes.iter().enumerate().rev() {
        ensure_encoding!(
            sizes.len() >= node.arity(),
            index,
            "{:?} is missing an operand",
            node
        );
        let size = match *node {
            Node::Literal(_) => 1,
            Node::Sqrt => 1 + sizes.pop().unwrap_or_default(),
            Node::Binary { rhs_offset, .. } => {
                let lhs = sizes.pop().unwrap_or_default();
                let rhs = sizes.pop().unwrap_or_default();
                ensure_encoding!(
                    rhs_offset == lhs,
                    index,
                    "rhs_offset {} does not match left operand size {}",
                    rhs_offset,
                    lhs
                );
                1 + lhs + rhs
            }
        };
        sizes.push(size);
    }

    ensure_encoding!(
        sizes.len() == 1,
        0,
        "sequence holds {} sibling subtrees instead of one root",
        sizes.len()
    );
    Ok(())
}

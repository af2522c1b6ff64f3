//! Flat, offset-addressed encoding of symbolic real-number expressions.
//!
//! Expressions are built from integer literals, `+ - * /` and `sqrt`, and are
//! never evaluated numerically. See [`expression`] for the encoding.

pub mod build;
pub mod display;
pub mod error;
pub mod expression;
pub mod traversal;
pub mod visitor;

pub use build::{add, binary, div, literal, mul, sqrt, sub, ExprBuilder};
pub use display::{format, RawDisplayExpr};
pub use error::AstError;
pub use expression::{equal, BinOp, Expr, ExprRef, ExprView, Node};
pub use traversal::visit;
pub use visitor::Visitor;

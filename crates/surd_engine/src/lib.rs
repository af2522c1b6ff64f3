//! Deduction passes over flat-encoded surd expressions.
//!
//! Two rewrites are provided: root-level distribution of a product over the
//! sum on its left, and recursive cancellation of `sqrt(x)*sqrt(x)`. Both are
//! available as total functions and as [`Rule`]s driven by the [`Simplifier`].

#[macro_use]
pub mod macros;

pub mod engine;
pub mod error;
pub mod options;
pub mod rule;
pub mod rules;
pub mod step;

pub use surd_ast;

pub use engine::Simplifier;
pub use error::CasError;
pub use options::SimplifyOptions;
pub use rule::{Rewrite, Rule};
pub use rules::{deduce_cancel, deduce_distribute, CancelSqrtProductRule, DistributeRule};
pub use step::Step;

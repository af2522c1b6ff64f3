//! Deduction rules.
//!
//! Each submodule exposes the total pass (`deduce_*`, always returns an
//! expression) and the [`Rule`](crate::rule::Rule) wrapper used by the
//! [`Simplifier`](crate::Simplifier), which only reports actual changes.

pub mod distribute;
pub mod radicals;

pub use distribute::{deduce_distribute, DistributeRule};
pub use radicals::{deduce_cancel, CancelSqrtProductRule};

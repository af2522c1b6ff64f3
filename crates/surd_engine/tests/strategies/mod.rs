#![allow(dead_code)]

use proptest::prelude::*;
use surd_ast::{add, div, literal, mul, sqrt, sub, Expr};

/// Arbitrary expression over small literals (negative ones included).
pub fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (-10i64..10).prop_map(literal),
        // extremes of the literal range
        Just(literal(i64::MIN)),
        Just(literal(i64::MAX)),
    ];

    leaf.prop_recursive(
        5,  // levels deep
        64, // max size
        2,  // items per collection
        |inner| {
            prop_oneof![
                // Binary ops
                (inner.clone(), inner.clone()).prop_map(|(l, r)| add(&l, &r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| sub(&l, &r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| mul(&l, &r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| div(&l, &r)),
                // Unary
                inner.clone().prop_map(|e| sqrt(&e)),
                // Bias towards the cancellable shape
                inner.prop_map(|e| mul(&sqrt(&e), &sqrt(&e))),
            ]
        },
    )
}

#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
#![cfg_attr(feature = "strict", deny(missing_docs))]
//! This crate contains stuff that's really helpful for tests.
use proptest::prelude::*;
use std::ops::RangeInclusive;

mod naive;
pub use naive::NaiveRangeSum;

/// One call against a range sum structure, as generated by [operation].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Overwrite the value at `index`.
    PointUpdate {
        /// position to overwrite
        index: usize,
        /// new absolute value
        value: i64,
    },
    /// Add `delta` to every value in `range`.
    RangeUpdate {
        /// affected positions
        range: RangeInclusive<usize>,
        /// added to each position
        delta: i64,
    },
    /// Sum up all values in `range`.
    RangeSum {
        /// queried positions
        range: RangeInclusive<usize>,
    },
}

/// Values are kept small enough that long operation sequences can not overflow an i64.
pub const VALUE_LIMIT: i64 = 1_000_000;

/// Gives a strategy generating a single value.
pub fn value() -> impl Strategy<Value = i64> {
    -VALUE_LIMIT..VALUE_LIMIT
}

prop_compose! {
    /// Gives a strategy generating between one and `limit` many values.
    pub fn values(limit: usize)(values in prop::collection::vec(value(), 1..limit)) -> Vec<i64> {
        values
    }
}

prop_compose! {
    /// Gives a non-empty inclusive range inside `0..len`.
    pub fn index_range(len: usize)(a in 0..len, b in 0..len) -> RangeInclusive<usize> {
        a.min(b)..=a.max(b)
    }
}

prop_compose! {
    /// Gives an inclusive range which is reversed or reaches beyond `0..len`.
    pub fn invalid_index_range(len: usize)(
        a in 0..len + 16,
        b in 0..len + 16
    ) -> RangeInclusive<usize> {
        if a > b || b >= len {
            a..=b
        } else {
            a..=len
        }
    }
}

/// Gives a strategy generating a single valid [Operation] on a structure of length `len`.
pub fn operation(len: usize) -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0..len, value()).prop_map(|(index, value)| Operation::PointUpdate { index, value }),
        (index_range(len), value()).prop_map(|(range, delta)| Operation::RangeUpdate { range, delta }),
        index_range(len).prop_map(|range| Operation::RangeSum { range }),
    ]
}

prop_compose! {
    /// Gives up to `limit` many values together with up to `limit` many valid [Operation]s on them.
    pub fn values_with_operations(limit: usize)(values in values(limit))(
        operations in prop::collection::vec(operation(values.len()), 0..limit),
        values in Just(values)
    ) -> (Vec<i64>, Vec<Operation>) {
        (values, operations)
    }
}

use std::ops::RangeInclusive;

use super::Operation;

/// A brute force range sum structure, which serves as reference in tests.
/// Every operation runs in O(n) and panics on invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveRangeSum {
    values: Vec<i64>,
}

impl NaiveRangeSum {
    /// Creates a new NaiveRangeSum holding `values`.
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Overwrites the value at `index`.
    pub fn point_update(&mut self, index: usize, value: i64) {
        self.values[index] = value;
    }

    /// Adds `delta` to every value in `range`.
    pub fn update_range(&mut self, range: RangeInclusive<usize>, delta: i64) {
        self.values[range].iter_mut().for_each(|value| *value += delta);
    }

    /// Sums up the values in `range`.
    pub fn range_sum(&self, range: RangeInclusive<usize>) -> i64 {
        self.values[range].iter().sum()
    }

    /// Performs `operation` and gives the sum if it was a [Operation::RangeSum].
    pub fn apply(&mut self, operation: &Operation) -> Option<i64> {
        match operation {
            Operation::PointUpdate { index, value } => {
                self.point_update(*index, *value);
                None
            }
            Operation::RangeUpdate { range, delta } => {
                self.update_range(range.clone(), *delta);
                None
            }
            Operation::RangeSum { range } => Some(self.range_sum(range.clone())),
        }
    }

    /// All current values.
    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

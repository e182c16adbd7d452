use std::ops::{Bound, Range, RangeBounds};

use common::TreeResult;

pub trait RangeExt {
    fn is_splittable(&self) -> bool;

    /// Splits a range into two non-empty halves, where the left half gets the middle element
    /// if the length is odd.
    fn split(&self) -> Option<(Self, Self)>
    where
        Self: Sized;

    fn intersects(&self, rhs: &Self) -> bool;

    fn is_superset(&self, other: &Self) -> bool;
}

impl RangeExt for Range<usize> {
    fn is_splittable(&self) -> bool {
        self.len() > 1
    }

    fn split(&self) -> Option<(Self, Self)>
    where
        Self: Sized,
    {
        if self.is_splittable() {
            // rounding up keeps the split at `(first + last) / 2` for the inclusive borders
            let mid = self.start + (self.end - self.start + 1) / 2;
            Some((self.start..mid, mid..self.end))
        } else {
            None
        }
    }

    fn intersects(&self, rhs: &Self) -> bool {
        if self.is_empty() || rhs.is_empty() {
            return false;
        }

        if self.start <= rhs.start {
            self.end > rhs.start
        } else {
            rhs.end > self.start
        }
    }

    fn is_superset(&self, other: &Self) -> bool {
        other.is_empty() || (self.start <= other.start && other.end <= self.end)
    }
}

/// Turns arbitrary range bounds into a half-open range inside `0..len`.
/// Fails if the range is reversed, empty or reaches beyond `len`.
pub fn resolve_bounds(bounds: &impl RangeBounds<usize>, len: usize) -> TreeResult<Range<usize>> {
    let start = match bounds.start_bound() {
        Bound::Included(start) => Some(*start),
        Bound::Excluded(start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match bounds.end_bound() {
        Bound::Included(end) => end.checked_add(1),
        Bound::Excluded(end) => Some(*end),
        Bound::Unbounded => Some(len),
    };

    match (start, end) {
        (Some(start), Some(end)) if start < end && end <= len => Ok(start..end),
        (Some(start), Some(end)) if start >= end => Err(format!(
            "range {}..{} is empty or reversed, it has to contain at least one index",
            start, end
        )
        .into()),
        (Some(start), Some(end)) => Err(format!(
            "range {}..{} reaches beyond the tree length {}",
            start, end, len
        )
        .into()),
        _ => Err("range bounds overflow usize".into()),
    }
}

#[cfg(test)]
pub mod tests {
    use super::{resolve_bounds, RangeExt};
    use std::ops::Range;

    use proptest::prelude::*;

    prop_compose! {
        fn normal_range()(a in 0..usize::MAX / 2,
                          b in 0..usize::MAX / 2)
            -> Range<usize> {
            a.min(b)..a.max(b)
        }
    }

    prop_compose! {
        // this might be degenerate
        fn empty_range()(a in 0..usize::MAX / 2,
                         b in 0..usize::MAX / 2)
            -> Range<usize> {
            a.max(b)..a.min(b)
        }
    }

    prop_compose! {
        fn range()(a in 0..usize::MAX / 2,
                   b in 0..usize::MAX / 2)
            -> Range<usize> {
            a..b
        }
    }

    proptest! {
        #[test]
        fn split_halves_partition_the_range(r in normal_range()) {
            prop_assume!(r.is_splittable());
            let (left, right) = r.split().unwrap();

            prop_assert_eq!(left.start, r.start);
            prop_assert_eq!(left.end, right.start);
            prop_assert_eq!(right.end, r.end);
            prop_assert!(!left.is_empty());
            prop_assert!(!right.is_empty());
        }

        #[test]
        fn split_uses_the_inclusive_midpoint(r in normal_range()) {
            prop_assume!(r.is_splittable());
            let (left, _) = r.split().unwrap();

            let first = r.start as u128;
            let last = r.end as u128 - 1;
            prop_assert_eq!(left.end as u128 - 1, (first + last) / 2);
        }

        #[test]
        fn split_leaves_subsets(r in normal_range()) {
            if let Some((left, right)) = r.split() {
                prop_assert!(r.is_superset(&left));
                prop_assert!(r.is_superset(&right));
                prop_assert!(!left.intersects(&right));
            }
        }

        #[test]
        fn intersects_is_symmetric(l in range(), r in range()) {
            prop_assert_eq!(l.intersects(&r), r.intersects(&l));
        }

        #[test]
        fn nothing_intersects_empty_range(l in range(), r in empty_range()) {
            prop_assert!(!l.intersects(&r));
        }

        #[test]
        fn every_thing_is_superset_of_empty_range(l in range(), r in empty_range()) {
            prop_assert!(l.is_superset(&r));
        }

        #[test]
        fn resolved_bounds_lie_inside_len(start in 0..64usize, end in 0..64usize, len in 1..64usize) {
            if let Ok(resolved) = resolve_bounds(&(start..=end), len) {
                prop_assert!(!resolved.is_empty());
                prop_assert!(resolved.end <= len);
            }
        }
    }

    #[test]
    fn single_element_is_not_splittable() {
        assert!((4..5usize).split().is_none());
        assert!((4..4usize).split().is_none());
    }

    #[test]
    fn odd_length_gives_left_half_the_middle() {
        assert_eq!((0..3usize).split(), Some((0..2, 2..3)));
        assert_eq!((0..6usize).split(), Some((0..3, 3..6)));
    }

    #[test]
    fn resolve_accepts_all_bound_kinds() {
        assert_eq!(resolve_bounds(&(1..=3), 6), Ok(1..4));
        assert_eq!(resolve_bounds(&(1..3), 6), Ok(1..3));
        assert_eq!(resolve_bounds(&(..), 6), Ok(0..6));
        assert_eq!(resolve_bounds(&(2..), 6), Ok(2..6));
        assert_eq!(resolve_bounds(&(..=0), 6), Ok(0..1));
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn resolve_rejects_invalid_ranges() {
        assert!(resolve_bounds(&(3..=1), 6).is_err());
        assert!(resolve_bounds(&(3..3), 6).is_err());
        assert!(resolve_bounds(&(0..=10), 6).is_err());
        assert!(resolve_bounds(&(6..), 6).is_err());
        assert!(resolve_bounds(&(0..=usize::MAX), 6).is_err());
    }
}

use std::{
    convert::TryFrom,
    fmt::Debug,
    ops::{Range, RangeBounds},
};

use common::{TreeError, TreeResult};
use derive_more::*;
use num::{FromPrimitive, Num};
use typed_index_collections::TiVec;

use super::range::{resolve_bounds, RangeExt};

// An Index into the node storage of a LazySumSegmentTree.
// Nodes are numbered like a binary heap, the root is 0 and the children of i are 2i+1 and 2i+2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
struct LazySumNodeIdx(usize);

impl LazySumNodeIdx {
    const ROOT: Self = LazySumNodeIdx(0);

    fn left_child(self) -> Self {
        LazySumNodeIdx(2 * self.0 + 1)
    }

    fn right_child(self) -> Self {
        LazySumNodeIdx(2 * self.0 + 2)
    }
}

/// A SegmentTree over a fixed sequence of numbers which answers range sums and supports
/// both absolute point updates and additive range updates in O(log n).
///
/// Range updates are propagated lazily: a node which is completely covered by an update
/// applies it to its own sum right away and only records it for its children.
/// The recorded delta is pushed one level further down as soon as a later operation visits the node.
/// As this bookkeeping happens during queries as well, [range_sum](LazySumSegmentTree::range_sum)
/// needs mutable access, although the logical values never change by querying.
///
/// Ranges can be given in every form of `RangeBounds<usize>`, e.g. `1..=3`, `1..4` or `..`.
/// They have to contain at least one index and must not reach beyond the last element.
/// # Example
/// ```
/// # use algorithms::segment_tree::LazySumSegmentTree;
/// # fn main() -> common::TreeResult<()> {
/// let mut tree = LazySumSegmentTree::new(&[1, 3, 5, 7, 9, 11])?;
/// assert_eq!(tree.range_sum(1..=3)?, 15);
///
/// tree.update_range(1..=3, 2)?;
/// assert_eq!(tree.range_sum(1..=3)?, 21);
/// assert_eq!(tree.range_sum(..)?, 42);
///
/// // point updates overwrite, they do not add
/// tree.point_update(1, 10)?;
/// assert_eq!(tree.range_sum(1..=3)?, 10 + 7 + 9);
///
/// assert!(tree.range_sum(0..=10).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LazySumSegmentTree<T> {
    len: usize,
    sums: TiVec<LazySumNodeIdx, T>,
    pending: TiVec<LazySumNodeIdx, T>,
}

// A tree is never empty, see `new`.
#[allow(clippy::len_without_is_empty)]
impl<T> LazySumSegmentTree<T>
where
    T: Copy + Num + FromPrimitive + Debug,
{
    /// Builds a new tree holding a copy of `values`.
    /// # Runtime
    /// O(n)
    /// # Returns
    /// Returns [TreeError::EmptyInput] if `values` is empty
    /// and [TreeError::InvalidArgument] if the number of values does not fit into `T`.
    pub fn new(values: &[T]) -> TreeResult<Self> {
        if values.is_empty() {
            log::debug!("LazySumSegmentTree: refusing to build over an empty sequence");
            return Err(TreeError::EmptyInput);
        }
        if T::from_usize(values.len()).is_none() {
            return Err(format!(
                "LazySumSegmentTree: {} values can not be counted by the element type",
                values.len()
            )
            .into());
        }

        // 4n slots suffice for every split of n leaves
        let slots = 4 * values.len();
        let mut tree = Self {
            len: values.len(),
            sums: (0..slots).map(|_| T::zero()).collect(),
            pending: (0..slots).map(|_| T::zero()).collect(),
        };
        tree.build(values, LazySumNodeIdx::ROOT, 0..values.len());
        log::debug!(
            "LazySumSegmentTree: built over {} values using {} node slots",
            tree.len,
            slots
        );

        Ok(tree)
    }

    /// The number of values in this tree. This never changes after construction.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Sets the value at `index` to `value`, discarding any delta previously added to it.
    /// # Runtime
    /// O(log n)
    /// # Returns
    /// Returns an error and leaves the tree untouched if `index` is out of bounds.
    /// # Example
    /// ```
    /// # use algorithms::segment_tree::LazySumSegmentTree;
    /// let mut tree = LazySumSegmentTree::new(&[1, 2, 3]).unwrap();
    /// tree.update_range(.., 5).unwrap();
    /// tree.point_update(0, 0).unwrap();
    /// assert_eq!(tree.to_vec(), vec![0, 7, 8]);
    /// assert!(tree.point_update(3, 0).is_err());
    /// ```
    pub fn point_update(&mut self, index: usize, value: T) -> TreeResult<()> {
        self.check_index(index)?;
        self.point_update_inner(index, value, LazySumNodeIdx::ROOT, 0..self.len);
        Ok(())
    }

    /// Adds `delta` to every value inside `range`.
    /// # Runtime
    /// O(log n)
    /// # Returns
    /// Returns an error and leaves the tree untouched if `range` is empty, reversed or out of bounds.
    pub fn update_range(&mut self, range: impl RangeBounds<usize>, delta: T) -> TreeResult<()> {
        let update_range = self.checked_range(range)?;
        self.update_range_inner(&update_range, delta, LazySumNodeIdx::ROOT, 0..self.len);
        Ok(())
    }

    /// Gives the sum of all values inside `range`.
    /// # Runtime
    /// O(log n)
    /// # Returns
    /// Returns an error if `range` is empty, reversed or out of bounds.
    pub fn range_sum(&mut self, range: impl RangeBounds<usize>) -> TreeResult<T> {
        let query_range = self.checked_range(range)?;
        Ok(self.range_sum_inner(&query_range, LazySumNodeIdx::ROOT, 0..self.len))
    }

    /// Gives the current value at `index`.
    /// # Runtime
    /// O(log n)
    pub fn get(&mut self, index: usize) -> TreeResult<T> {
        self.check_index(index)?;
        Ok(self.range_sum_inner(&(index..index + 1), LazySumNodeIdx::ROOT, 0..self.len))
    }

    /// Gives all current values in order.
    /// This pushes every pending delta down to the leaves.
    /// # Runtime
    /// O(n)
    pub fn to_vec(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        self.collect_leaves(&mut values, LazySumNodeIdx::ROOT, 0..self.len);
        values
    }

    fn check_index(&self, index: usize) -> TreeResult<()> {
        if index < self.len {
            Ok(())
        } else {
            let err: TreeError = format!(
                "index {} is out of bounds for a tree of length {}",
                index, self.len
            )
            .into();
            log::debug!("LazySumSegmentTree: {}", err);
            Err(err)
        }
    }

    fn checked_range(&self, range: impl RangeBounds<usize>) -> TreeResult<Range<usize>> {
        resolve_bounds(&range, self.len).map_err(|err| {
            log::debug!("LazySumSegmentTree: {}", err);
            err
        })
    }

    // The length of every node range is at most `self.len`, which was checked to fit into T in `new`.
    fn segment_len(node_range: &Range<usize>) -> T {
        T::from_usize(node_range.len()).expect("Segment lengths are bounded by the tree length")
    }

    fn build(&mut self, values: &[T], node_idx: LazySumNodeIdx, node_range: Range<usize>) {
        match node_range.split() {
            None => self.sums[node_idx] = values[node_range.start],
            Some((left_range, right_range)) => {
                self.build(values, node_idx.left_child(), left_range);
                self.build(values, node_idx.right_child(), right_range);
                self.pull_up(node_idx);
            }
        }
    }

    // Both children have to be propagated before, otherwise their sums might miss pending deltas.
    fn pull_up(&mut self, node_idx: LazySumNodeIdx) {
        self.sums[node_idx] =
            self.sums[node_idx.left_child()] + self.sums[node_idx.right_child()];
    }

    // Applies the pending delta of this node to its sum and hands it down to the children.
    // Afterwards the sum of this node is exact and nothing is pending here.
    fn propagate(&mut self, node_idx: LazySumNodeIdx, node_range: &Range<usize>) {
        let pending = self.pending[node_idx];
        if pending.is_zero() {
            return;
        }

        self.sums[node_idx] = self.sums[node_idx] + Self::segment_len(node_range) * pending;
        if node_range.is_splittable() {
            log::trace!(
                "LazySumSegmentTree: pushing {:?} from {:?} down to its children",
                pending,
                node_range
            );
            let (left, right) = (node_idx.left_child(), node_idx.right_child());
            self.pending[left] = self.pending[left] + pending;
            self.pending[right] = self.pending[right] + pending;
        }
        self.pending[node_idx] = T::zero();
    }

    fn point_update_inner(
        &mut self,
        index: usize,
        value: T,
        node_idx: LazySumNodeIdx,
        node_range: Range<usize>,
    ) {
        self.propagate(node_idx, &node_range);
        if let Some((left_range, right_range)) = node_range.split() {
            let (left, right) = (node_idx.left_child(), node_idx.right_child());
            if left_range.contains(&index) {
                self.point_update_inner(index, value, left, left_range);
                self.propagate(right, &right_range);
            } else {
                self.point_update_inner(index, value, right, right_range);
                self.propagate(left, &left_range);
            }
            self.pull_up(node_idx);
        } else {
            self.sums[node_idx] = value;
        }
    }

    fn update_range_inner(
        &mut self,
        update_range: &Range<usize>,
        delta: T,
        node_idx: LazySumNodeIdx,
        node_range: Range<usize>,
    ) {
        self.propagate(node_idx, &node_range);
        if !node_range.intersects(update_range) {
            return;
        }

        if update_range.is_superset(&node_range) {
            // apply to this node right away, the children only get it recorded
            self.pending[node_idx] = self.pending[node_idx] + delta;
            self.propagate(node_idx, &node_range);
        } else if let Some((left_range, right_range)) = node_range.split() {
            self.update_range_inner(update_range, delta, node_idx.left_child(), left_range);
            self.update_range_inner(update_range, delta, node_idx.right_child(), right_range);
            self.pull_up(node_idx);
        }
    }

    fn range_sum_inner(
        &mut self,
        query_range: &Range<usize>,
        node_idx: LazySumNodeIdx,
        node_range: Range<usize>,
    ) -> T {
        self.propagate(node_idx, &node_range);
        if !node_range.intersects(query_range) {
            return T::zero();
        }

        if query_range.is_superset(&node_range) {
            return self.sums[node_idx];
        }

        match node_range.split() {
            Some((left_range, right_range)) => {
                self.range_sum_inner(query_range, node_idx.left_child(), left_range)
                    + self.range_sum_inner(query_range, node_idx.right_child(), right_range)
            }
            // a leaf intersecting the query is always covered by it
            None => self.sums[node_idx],
        }
    }

    fn collect_leaves(
        &mut self,
        values: &mut Vec<T>,
        node_idx: LazySumNodeIdx,
        node_range: Range<usize>,
    ) {
        self.propagate(node_idx, &node_range);
        match node_range.split() {
            None => values.push(self.sums[node_idx]),
            Some((left_range, right_range)) => {
                self.collect_leaves(values, node_idx.left_child(), left_range);
                self.collect_leaves(values, node_idx.right_child(), right_range);
            }
        }
    }
}

impl<T> TryFrom<Vec<T>> for LazySumSegmentTree<T>
where
    T: Copy + Num + FromPrimitive + Debug,
{
    type Error = TreeError;

    fn try_from(values: Vec<T>) -> TreeResult<Self> {
        Self::new(&values)
    }
}

impl<'a, T> TryFrom<&'a [T]> for LazySumSegmentTree<T>
where
    T: Copy + Num + FromPrimitive + Debug,
{
    type Error = TreeError;

    fn try_from(values: &'a [T]) -> TreeResult<Self> {
        Self::new(values)
    }
}

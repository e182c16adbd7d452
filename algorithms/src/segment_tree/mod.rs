//! This module contains everything related to the Segment Tree datastructure.
//!
//! The tree is stored in flat arrays, a node is addressed by its position in a
//! binary-heap-like numbering and the range it covers is recomputed while descending.
//! # Example
//! Let's keep track of the number of guests in a row of hotel rooms,
//! where whole floors check in at once and single rooms get recounted.
//! ```
//! # use algorithms::segment_tree::LazySumSegmentTree;
//! let mut guests = LazySumSegmentTree::new(&[0u32; 10]).unwrap();
//! guests.update_range(0..5, 2).unwrap();
//! guests.update_range(3..10, 1).unwrap();
//! guests.point_update(4, 0).unwrap();
//!
//! assert_eq!(guests.range_sum(..).unwrap(), 2 * 3 + 3 + 0 + 5);
//! assert_eq!(guests.get(3).unwrap(), 3);
//! ```

mod lazy_sum;
pub use lazy_sum::LazySumSegmentTree;

mod range;

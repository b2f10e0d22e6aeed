//! # kdtree - Static KD-Tree Nearest Neighbor Index
//!
//! A Rust library providing a simple and efficient bucket KD-tree
//! implementation for nearest-neighbor queries on k-dimensional points.
//!
//! ## Features
//!
//! - **Median Splits**: Recursive lower-median partitioning keeps the tree balanced
//! - **Branch-and-Bound Search**: Splitting-plane pruning skips subtrees that cannot win
//! - **Any Dimensionality**: One implementation for 2D, 3D, or 20D points, `f32` or `f64`
//! - **Static Optimization**: Built once, queried many times, safe to share across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use kdtree::prelude::*;
//!
//! // Index a set of 2D points
//! let points = vec![
//!     vec![2.0, 3.0],    // point 0
//!     vec![5.0, 4.0],    // point 1
//!     vec![9.0, 6.0],    // point 2
//!     vec![4.0, 7.0],    // point 3
//!     vec![8.0, 1.0],    // point 4
//!     vec![7.0, 2.0],    // point 5
//! ];
//! let tree = KdTree::build(&points).unwrap();
//!
//! // Find the stored point closest to a query point
//! let hit = tree.query_nearest(&[6.0, 5.0]).unwrap();
//! println!("Nearest: {:?} at distance {}", hit.point, hit.distance);
//! // Output: Nearest: [5.0, 4.0] at distance 1.4142135623730951
//!
//! assert_eq!(hit.index, 1);
//!
//! // The same tree answers any number of queries
//! let hit = tree.query_nearest(&[8.5, 1.5]).unwrap();
//! assert_eq!(hit.point, &[8.0, 1.0]);
//! ```
//!
//! ## How It Works
//!
//! Construction recursively partitions the point set: at each level the
//! splitting axis cycles through the dimensions, the bucket is split at the
//! lower median of that axis, and points above the median go to the high
//! child while the rest go to the low child. Splitting stops at a configurable
//! depth or bucket size, leaving small leaf buckets.
//!
//! A query walks the tree toward its own region first, scans the leaf buckets
//! it reaches, and backtracks. A sibling subtree is visited only when the
//! splitting plane lies closer than the best match found so far, which prunes
//! most of the tree for clustered data.

pub mod error;
pub mod kdtree;
pub mod prelude;


pub use error::KdTreeError;
pub use kdtree::{KdTree, Neighbor};

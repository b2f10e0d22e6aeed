//! Bucket KD-tree: recursive median splits at build time, branch-and-bound
//! descent at query time.
//!
//! Coordinates live in a flat row-major table owned by the tree. Leaf buckets
//! store row indices into that table; interior nodes carry only the cached
//! split value, so queries never touch the input points again.

use num_traits::Float;

use crate::error::KdTreeError;

/// Tree node: a bucket of point indices, plus two children once split.
///
/// Children are either both present or both absent. An interior node's bucket
/// is empty (its points moved into the leaves below it) and `split` holds the
/// axis median the bucket was partitioned on.
#[derive(Clone, Debug)]
pub(crate) struct Node<A> {
    /// Indices into the coordinate table, input order preserved.
    /// Non-empty at leaves, empty at interior nodes.
    pub(crate) bucket: Vec<usize>,
    /// Axis median this node split on. Meaningful at interior nodes only.
    pub(crate) split: A,
    /// Points with axis coordinate less than or equal to `split`
    /// (the median point itself included).
    pub(crate) low: Option<Box<Node<A>>>,
    /// Points with axis coordinate strictly greater than `split`.
    pub(crate) high: Option<Box<Node<A>>>,
}

impl<A: Float> Node<A> {
    fn leaf(bucket: Vec<usize>) -> Self {
        Self { bucket, split: A::zero(), low: None, high: None }
    }

    /// A node is a leaf iff it has no children.
    pub(crate) fn is_leaf(&self) -> bool {
        self.low.is_none()
    }
}

/// A nearest-neighbor match returned by [`KdTree::query_nearest`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor<'a, A> {
    /// Coordinates of the matched point.
    pub point: &'a [A],
    /// Position of the matched point in the input set.
    pub index: usize,
    /// Euclidean distance from the query to the matched point.
    pub distance: A,
}

/// Static KD-tree over k-dimensional points.
///
/// The tree is built once from a point set and then queried any number of
/// times; nothing mutates after construction, so queries may run concurrently
/// from multiple threads.
#[derive(Clone, Debug)]
pub struct KdTree<A> {
    /// Flat row-major coordinate table: point `i` occupies
    /// `[i * dim, (i + 1) * dim)`.
    pub(crate) coords: Vec<A>,
    /// Coordinates per point.
    pub(crate) dim: usize,
    /// Root of the bucket tree.
    pub(crate) root: Node<A>,
    /// Maximum build recursion depth actually applied.
    pub(crate) max_depth: usize,
    /// Stop-splitting bucket size actually applied.
    pub(crate) min_bucket_size: usize,
}

const DEFAULT_MAX_DEPTH: usize = 10;
const DEFAULT_MIN_BUCKET_SIZE: usize = 3;

impl<A: Float> KdTree<A> {
    /// Builds an index over `points` with the default limits
    /// (maximum depth 10, minimum bucket size 3).
    ///
    /// The input is copied into the tree; the caller's list is not touched.
    ///
    /// # Errors
    ///
    /// Returns an error when `points` is empty, when the points do not all
    /// share one dimensionality, or when a coordinate is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdtree::prelude::*;
    ///
    /// let points = vec![vec![2.0, 3.0], vec![5.0, 4.0], vec![9.0, 6.0]];
    /// let tree = KdTree::build(&points).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn build(points: &[Vec<A>]) -> Result<Self, KdTreeError> {
        Self::build_with(points, DEFAULT_MAX_DEPTH, DEFAULT_MIN_BUCKET_SIZE)
    }

    /// Builds an index over `points` with explicit limits.
    ///
    /// Splitting stops once a bucket's depth reaches `max_depth` or its size
    /// drops to `min_bucket_size` points or fewer; the bucket then stays a
    /// leaf. Larger buckets mean shorter trees and longer leaf scans.
    ///
    /// # Errors
    ///
    /// Returns an error when `points` is empty, when the points do not all
    /// share one dimensionality, or when a coordinate is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdtree::prelude::*;
    ///
    /// let points = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    /// let tree = KdTree::build_with(&points, 4, 1).unwrap();
    /// assert_eq!(tree.max_depth(), 4);
    /// assert_eq!(tree.min_bucket_size(), 1);
    /// ```
    pub fn build_with(
        points: &[Vec<A>],
        max_depth: usize,
        min_bucket_size: usize,
    ) -> Result<Self, KdTreeError> {
        let first = points.first().ok_or(KdTreeError::EmptyPointSet)?;
        let dim = first.len();
        if dim == 0 {
            return Err(KdTreeError::ZeroDimension);
        }

        let mut coords = Vec::with_capacity(points.len() * dim);
        for (index, point) in points.iter().enumerate() {
            if point.len() != dim {
                return Err(KdTreeError::MixedDimensions {
                    index,
                    expected: dim,
                    found: point.len(),
                });
            }
            for &c in point.iter() {
                if !c.is_finite() {
                    return Err(KdTreeError::NonFiniteCoordinate);
                }
            }
            coords.extend_from_slice(point);
        }

        let all: Vec<usize> = (0..points.len()).collect();
        let root = Self::build_node(&coords, dim, all, 1, max_depth, min_bucket_size);
        Ok(Self { coords, dim, root, max_depth, min_bucket_size })
    }

    /// Returns the stored point nearest to `query` under Euclidean distance.
    ///
    /// Ties between equidistant points go to whichever candidate the
    /// traversal reaches first.
    ///
    /// # Errors
    ///
    /// Returns an error when `query`'s coordinate count differs from the
    /// indexed dimensionality, or when a query coordinate is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdtree::prelude::*;
    ///
    /// let points = vec![
    ///     vec![2.0, 3.0],
    ///     vec![5.0, 4.0],
    ///     vec![9.0, 6.0],
    ///     vec![4.0, 7.0],
    ///     vec![8.0, 1.0],
    ///     vec![7.0, 2.0],
    /// ];
    /// let tree = KdTree::build(&points).unwrap();
    ///
    /// let hit = tree.query_nearest(&[6.0, 5.0]).unwrap();
    /// assert_eq!(hit.point, &[5.0, 4.0]);
    /// assert_eq!(hit.index, 1);
    /// ```
    pub fn query_nearest(&self, query: &[A]) -> Result<Neighbor<'_, A>, KdTreeError> {
        if query.len() != self.dim {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.dim,
                found: query.len(),
            });
        }
        for &c in query.iter() {
            if !c.is_finite() {
                return Err(KdTreeError::NonFiniteCoordinate);
            }
        }

        // Seed with the first stored point at unbounded distance; the first
        // leaf scan tightens it to a real candidate.
        let mut best = (0, A::infinity());
        self.search(&self.root, query, 1, &mut best);

        let (index, distance) = best;
        Ok(Neighbor { point: self.point(index), index, distance })
    }

    /// Maximum build recursion depth this tree was built with.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Stop-splitting bucket size this tree was built with.
    pub fn min_bucket_size(&self) -> usize {
        self.min_bucket_size
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    /// Returns whether the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of coordinates per indexed point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    // --- Private helpers ---

    /// Coordinate row of point `idx`.
    #[inline]
    fn point(&self, idx: usize) -> &[A] {
        &self.coords[idx * self.dim..(idx + 1) * self.dim]
    }

    /// Builds the subtree for `bucket` at `depth`, splitting on axis
    /// `depth % dim` at the bucket's lower median.
    fn build_node(
        coords: &[A],
        dim: usize,
        bucket: Vec<usize>,
        depth: usize,
        max_depth: usize,
        min_bucket_size: usize,
    ) -> Node<A> {
        if depth >= max_depth || bucket.len() <= min_bucket_size {
            return Node::leaf(bucket);
        }

        let axis = depth % dim;

        // Lower median of the bucket's axis values, selected on a scratch
        // copy so the stored order stays untouched.
        let mut scratch: Vec<A> = bucket.iter().map(|&idx| coords[idx * dim + axis]).collect();
        let mid = scratch.len() / 2;
        let (_, median, _) = scratch.select_nth_unstable_by(mid, |a, b| {
            a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
        });
        let split = *median;

        // Route strictly greater points high, the rest (median included) low.
        let mut low = Vec::new();
        let mut high = Vec::new();
        for &idx in &bucket {
            if coords[idx * dim + axis] > split {
                high.push(idx);
            } else {
                low.push(idx);
            }
        }

        // Every axis value <= split: nothing separates here, keep the bucket.
        if high.is_empty() {
            return Node::leaf(bucket);
        }

        Node {
            bucket: Vec::new(),
            split,
            low: Some(Box::new(Self::build_node(
                coords,
                dim,
                low,
                depth + 1,
                max_depth,
                min_bucket_size,
            ))),
            high: Some(Box::new(Self::build_node(
                coords,
                dim,
                high,
                depth + 1,
                max_depth,
                min_bucket_size,
            ))),
        }
    }

    /// Recursive branch-and-bound descent. `best` is (point index, distance).
    fn search(&self, node: &Node<A>, query: &[A], depth: usize, best: &mut (usize, A)) {
        if node.is_leaf() {
            for &idx in &node.bucket {
                let dist = euclidean(self.point(idx), query);
                if dist < best.1 {
                    *best = (idx, dist);
                }
            }
            return;
        }

        // Descend toward the query's side of the splitting plane first.
        let axis = depth % self.dim;
        let (near, far) = if query[axis] < node.split {
            (&node.low, &node.high)
        } else {
            (&node.high, &node.low)
        };
        if let Some(child) = near {
            self.search(child, query, depth + 1, best);
        }

        // The far side can only hold a closer point if the plane itself is
        // closer than the best match so far.
        if (query[axis] - node.split).abs() < best.1 {
            if let Some(child) = far {
                self.search(child, query, depth + 1, best);
            }
        }
    }
}

/// Euclidean distance between two k-dimensional points.
fn euclidean<A: Float>(a: &[A], b: &[A]) -> A {
    let mut sum = A::zero();
    for (&x, &y) in a.iter().zip(b.iter()) {
        let d = x - y;
        sum = sum + d * d;
    }
    sum.sqrt()
}

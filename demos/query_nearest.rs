//! Find the stored point nearest to a query point.
use kdtree::prelude::*;

fn main() {
    let points = vec![
        vec![2.0, 3.0],
        vec![5.0, 4.0],
        vec![9.0, 6.0],
        vec![4.0, 7.0],
        vec![8.0, 1.0],
        vec![7.0, 2.0],
    ];
    let tree = KdTree::build(&points).unwrap();

    let hit = tree.query_nearest(&[6.0, 5.0]).unwrap();
    println!(
        "Nearest to (6, 5): point {} at {:?}, distance {:.4}",
        hit.index, hit.point, hit.distance
    );
}

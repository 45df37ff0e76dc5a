use crate::element::Element;
use crate::error::Result;
use crate::euclidean::euclidean_distance;
use ndarray::{ArrayView1, ArrayView2};
use utils::arg_sort;

/// The `k` rows of `x` closest to `y` as `(row, distance)` pairs, nearest first.
/// Equal distances keep row order. Asking for more rows than `x` has returns them all.
pub fn nearest_rows<T: Element>(
    x: ArrayView2<'_, T>,
    y: ArrayView1<'_, T>,
    xx: Option<ArrayView1<'_, T>>,
    k: usize,
) -> Result<Vec<(usize, f64)>> {
    let dists = euclidean_distance(x, y, xx)?;
    let (indices, dists) = arg_sort(dists.view());

    Ok(indices.into_iter().zip(dists).take(k).collect())
}

use crate::element::Element;
use crate::error::{GeometryError, Result};
use ndarray::{Array1, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix2, Zip};

/// Euclidean distance from every row of `x` to `y`.
///
/// Uses `||x - y||^2 = ||x||^2 + ||y||^2 - 2 x.y`. If `xx` is supplied it is taken
/// as the squared row norms of `x` and copied rather than recomputed; it is not
/// checked against `x`. Squared distances pushed below zero by rounding are
/// clamped to zero before the root is taken.
///
/// Fails with [`GeometryError::DimensionMismatch`] if `y.len() != x.ncols()` or
/// `xx.len() != x.nrows()`, before any work is done.
pub fn euclidean_distance<T: Element>(
    x: ArrayView2<'_, T>,
    y: ArrayView1<'_, T>,
    xx: Option<ArrayView1<'_, T>>,
) -> Result<Array1<f64>> {
    check_shapes(&x, &y, xx.as_ref())?;

    tracing::debug!(
        rows = x.nrows(),
        cols = x.ncols(),
        precomputed_norms = xx.is_some(),
        "euclidean distance"
    );

    let x = T::f64_matrix(x);
    let y = T::f64_vector(y);

    // always a fresh buffer, the caller's xx is never written to
    let mut sq = match xx {
        Some(xx) => xx.mapv(T::to_f64),
        None => squared_norms(&x),
    };
    let y_norm_sq = y.dot(&y);
    let dots = x.map_axis(Axis(1), |row| row.dot(&y));

    Zip::from(&mut sq).and(&dots).for_each(|s, &dot| {
        *s = clamped_root(*s + y_norm_sq - 2.0 * dot);
    });

    Ok(sq)
}

/// Squared L2 norm of each row of `x`, in `f64`.
pub fn row_norms_squared<T: Element>(x: ArrayView2<'_, T>) -> Array1<f64> {
    squared_norms(&T::f64_matrix(x))
}

/// Squared L2 norm of each row of `x` in its own element type, ready to be handed
/// back to [`euclidean_distance`] as `xx`.
///
/// Integer rows whose norm does not fit in `isize` fail with
/// [`GeometryError::NormOverflow`]; use [`row_norms_squared`] for those.
pub fn row_norms_squared_native<T: Element>(x: ArrayView2<'_, T>) -> Result<Array1<T>> {
    x.rows()
        .into_iter()
        .enumerate()
        .map(|(row, values)| {
            T::checked_norm_squared(values).ok_or_else(|| {
                tracing::warn!(row, "squared row norm overflows the element type");
                GeometryError::NormOverflow { row }
            })
        })
        .collect()
}

fn squared_norms<S>(x: &ArrayBase<S, Ix2>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    x.map_axis(Axis(1), |row| row.dot(&row))
}

// NaN passes through untouched
#[inline]
fn clamped_root(sq: f64) -> f64 {
    if sq < 0.0 {
        0.0
    } else {
        sq.sqrt()
    }
}

fn check_shapes<T>(
    x: &ArrayView2<'_, T>,
    y: &ArrayView1<'_, T>,
    xx: Option<&ArrayView1<'_, T>>,
) -> Result<()> {
    if y.len() != x.ncols() {
        tracing::warn!(
            cols = x.ncols(),
            reference_len = y.len(),
            "reference vector does not match matrix columns"
        );
        return Err(GeometryError::DimensionMismatch {
            what: "reference vector length",
            expected: x.ncols(),
            got: y.len(),
        });
    }

    if let Some(xx) = xx {
        if xx.len() != x.nrows() {
            tracing::warn!(
                rows = x.nrows(),
                norms_len = xx.len(),
                "precomputed norms do not match matrix rows"
            );
            return Err(GeometryError::DimensionMismatch {
                what: "precomputed row norms length",
                expected: x.nrows(),
                got: xx.len(),
            });
        }
    }

    Ok(())
}

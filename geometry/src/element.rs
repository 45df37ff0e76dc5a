use ndarray::{ArrayView1, ArrayView2, CowArray, Ix1, Ix2, LinalgScalar};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for isize {}
}

/// Element types the distance kernel is generic over: `f64` and `isize`.
///
/// Everything is accumulated in `f64`. The `f64` views handed to the kernel are
/// always in standard layout, so every row and the reference take the same
/// summation path in `dot`. Contiguous float inputs are borrowed, anything else
/// is copied once per call.
pub trait Element: sealed::Sealed + LinalgScalar {
    fn to_f64(self) -> f64;

    fn f64_matrix(x: ArrayView2<'_, Self>) -> CowArray<'_, f64, Ix2>;

    fn f64_vector(y: ArrayView1<'_, Self>) -> CowArray<'_, f64, Ix1>;

    /// `sum row[j]^2` in `Self`, or `None` if it does not fit.
    fn checked_norm_squared(row: ArrayView1<'_, Self>) -> Option<Self>;
}

impl Element for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    fn f64_matrix(x: ArrayView2<'_, Self>) -> CowArray<'_, f64, Ix2> {
        if x.is_standard_layout() {
            CowArray::from(x)
        } else {
            CowArray::from(x.as_standard_layout().into_owned())
        }
    }

    fn f64_vector(y: ArrayView1<'_, Self>) -> CowArray<'_, f64, Ix1> {
        if y.is_standard_layout() {
            CowArray::from(y)
        } else {
            CowArray::from(y.as_standard_layout().into_owned())
        }
    }

    fn checked_norm_squared(row: ArrayView1<'_, Self>) -> Option<Self> {
        let row = Self::f64_vector(row);
        Some(row.dot(&row))
    }
}

impl Element for isize {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn f64_matrix(x: ArrayView2<'_, Self>) -> CowArray<'_, f64, Ix2> {
        CowArray::from(x.mapv(|v| v as f64))
    }

    fn f64_vector(y: ArrayView1<'_, Self>) -> CowArray<'_, f64, Ix1> {
        CowArray::from(y.mapv(|v| v as f64))
    }

    fn checked_norm_squared(row: ArrayView1<'_, Self>) -> Option<Self> {
        row.iter()
            .try_fold(0isize, |acc, &v| v.checked_mul(v).and_then(|sq| acc.checked_add(sq)))
    }
}

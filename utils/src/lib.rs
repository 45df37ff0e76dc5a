use ndarray::ArrayView1;
use std::cmp::Ordering;

// Converts a vector of distances into indices and distances, smallest first.
// Stable, so equal distances keep their original order. NaN sorts last whatever its sign.
pub fn arg_sort(dists: ArrayView1<f64>) -> (Vec<usize>, Vec<f64>) {
    let mut enumerated = dists.iter().copied().enumerate().collect::<Vec<(usize, f64)>>();

    enumerated.sort_by(|a, b| nan_last(a.1, b.1));

    enumerated.into_iter().unzip()
}

fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use test_case::test_case;

    #[test]
    fn sorts_small_to_big() {
        let (indices, dists) = arg_sort(array![3.0, 1.0, 2.0].view());

        assert_eq!(indices, vec![1, 2, 0]);
        assert_eq!(dists, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn stable_on_ties() {
        let (indices, _) = arg_sort(array![1.0, 0.5, 1.0, 0.5].view());
        assert_eq!(indices, vec![1, 3, 0, 2]);
    }

    #[test]
    fn nan_goes_last() {
        let (indices, dists) = arg_sort(array![f64::NAN, 2.0, -f64::NAN, 1.0].view());

        assert_eq!(indices, vec![3, 1, 0, 2]);
        assert!(dists[2].is_nan() && dists[3].is_nan());
    }

    #[test]
    fn empty() {
        let (indices, dists) = arg_sort(ndarray::Array1::<f64>::zeros(0).view());
        assert!(indices.is_empty() && dists.is_empty());
    }

    #[test_case(1.0, 2.0, Ordering::Less; "less")]
    #[test_case(2.0, 1.0, Ordering::Greater; "greater")]
    #[test_case(f64::NAN, f64::INFINITY, Ordering::Greater; "nan after infinity")]
    #[test_case(-f64::NAN, f64::NEG_INFINITY, Ordering::Greater; "negative nan after everything")]
    #[test_case(f64::NAN, f64::NAN, Ordering::Equal; "nans equal")]
    fn ordering(a: f64, b: f64, want: Ordering) {
        assert_eq!(nan_last(a, b), want);
    }
}

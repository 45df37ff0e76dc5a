//! Fixtures shared by the benches.

use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seeded `rows x cols` frame matrix and a reference frame, coordinates in nm.
pub fn frames_f64(rows: usize, cols: usize) -> (Array2<f64>, Array1<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(324 * 142);
    let x = Array2::from_shape_fn((rows, cols), |_| rng.random_range(-5.0..5.0));
    let y = Array1::from_shape_fn(cols, |_| rng.random_range(-5.0..5.0));
    (x, y)
}

/// As [`frames_f64`] but on an integer grid.
pub fn frames_isize(rows: usize, cols: usize) -> (Array2<isize>, Array1<isize>) {
    let mut rng = ChaCha8Rng::seed_from_u64(324 * 142);
    let x = Array2::from_shape_fn((rows, cols), |_| rng.random_range(-500i64..500) as isize);
    let y = Array1::from_shape_fn(cols, |_| rng.random_range(-500i64..500) as isize);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_deterministic() {
        assert_eq!(frames_f64(3, 4), frames_f64(3, 4));
        assert_eq!(frames_isize(3, 4).0.dim(), (3, 4));
    }
}

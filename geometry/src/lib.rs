//! Distance kernels for frames of molecular trajectories.
//!
//! Each row of a matrix is one observation (a flattened frame or a feature
//! vector). [`euclidean_distance`] measures every row against a single reference
//! row, optionally reusing squared row norms computed earlier with
//! [`row_norms_squared_native`] so repeated queries against the same matrix skip
//! that pass.

mod element;
mod error;
mod euclidean;
mod nearest;

pub use element::Element;
pub use error::{GeometryError, Result};
pub use euclidean::{euclidean_distance, row_norms_squared, row_norms_squared_native};
pub use nearest::nearest_rows;

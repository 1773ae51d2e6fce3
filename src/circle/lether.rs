use crate::{
  error::QuadError,
  gauss_legendre::gauss_legendre,
  scheme::{Scheme, Source},
};

use itertools::Itertools;
use tracing::debug;

use std::f64::consts::PI;

const SOURCE: Source = Source {
  authors: "Frank G. Lether",
  title: "A Generalized Product Rule for the Circle",
  publication: "SIAM Journal on Numerical Analysis, Vol. 8, No. 2 (Jun., 1971), pp. 249-253",
  url: Some("http://www.jstor.org/stable/2949473"),
};

/// Product scheme of degree `2n - 1` with `n²` points.
///
/// Gauss-Chebyshev nodes of the second kind `x = cos(μπ/(n+1))` times the
/// Gauss-Legendre rule along the chord `|y| ≤ √(1 - x²)`. Points are ordered
/// node-major.
pub fn lether(n: usize) -> Result<Scheme, QuadError> {
  if n == 0 {
    return Err(QuadError::InvalidArgument(
      "Lether scheme needs n >= 1".into(),
    ));
  }
  let (p, w) = gauss_legendre(n)?;
  let angles: Vec<f64> = (1..=n).map(|mu| mu as f64 * PI / (n + 1) as f64).collect();

  let (coords, weights): (Vec<[f64; 2]>, Vec<f64>) = p
    .iter()
    .zip(w.iter())
    .cartesian_product(angles.iter())
    .map(|((&p, &w), &angle)| {
      let s = angle.sin();
      ([angle.cos(), p * s], PI / (n + 1) as f64 * w * s * s)
    })
    .unzip();

  let npoints = weights.len();
  let points = na::DMatrix::from_row_slice(npoints, 2, coords.as_flattened());
  let weights = na::DVector::from_vec(weights);

  let scheme = Scheme::new(format!("Lether({n})"), 2 * n - 1, points, weights, SOURCE)?;
  debug!("constructed {}: {} points", scheme.name(), scheme.npoints());
  Ok(scheme)
}

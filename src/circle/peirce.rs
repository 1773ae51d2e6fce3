use crate::{
  error::QuadError,
  gauss_legendre::gauss_legendre,
  scheme::{Scheme, Source},
};

use itertools::Itertools;
use tracing::debug;

use std::f64::consts::PI;

const SOURCE: Source = Source {
  authors: "W.H. Peirce",
  title: "Numerical integration over the planar annulus",
  publication: "J. Soc. Indust. Appl. Math., Vol. 5, No. 2, June, 1957",
  url: None,
};

/// Product scheme of degree `4m + 3`.
///
/// `k + 1 = 4m + 4` equispaced angles times the `m + 1` point Gauss-Legendre
/// rule in `r²`. Points are ordered angle-major.
pub fn peirce(m: usize) -> Result<Scheme, QuadError> {
  let k = 4 * m + 3;
  let (p, w) = gauss_legendre(m + 1)?;

  // map [-1, 1] in r² onto radii in [0, 1]
  let radii: Vec<f64> = p.iter().map(|p| (0.5 * (p + 1.0)).sqrt()).collect();
  let thetas = (1..=k + 1).map(|j| 2.0 * PI * j as f64 / (k + 1) as f64);

  let coords: Vec<f64> = thetas
    .cartesian_product(radii.iter())
    .flat_map(|(theta, &r)| [r * theta.cos(), r * theta.sin()])
    .collect();
  let npoints = coords.len() / 2;
  let points = na::DMatrix::from_row_slice(npoints, 2, &coords);

  // the Gauss-Legendre weights, scaled to the disk area
  let scale = 0.5 * PI / (k + 1) as f64;
  let w = w.as_slice();
  let weights = na::DVector::from_iterator(
    npoints,
    (0..=k).flat_map(|_| w.iter()).map(|w| scale * w),
  );

  let scheme = Scheme::new(format!("Peirce({m})"), k, points, weights, SOURCE)?;
  debug!("constructed {}: {} points", scheme.name(), scheme.npoints());
  Ok(scheme)
}

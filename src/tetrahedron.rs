//! Schemes on the reference tetrahedron with vertices
//! `(0,0,0)`, `(1,0,0)`, `(0,1,0)`, `(0,0,1)`.
//!
//! Weights are normalized to sum to one, so integrals over a tetrahedron are
//! the weighted sum times its volume.

mod hammer_marlowe_stroud;
pub mod helpers;

pub use hammer_marlowe_stroud::{hammer_marlowe_stroud, HammerMarloweStroud};

use crate::{
  arith::Scalar,
  error::QuadError,
  scheme::{Scheme, Source},
  sum::fsum,
  untangle::{untangle, WeightSpec},
};
use helpers::{bary_to_cartesian, ref_vol};

use tracing::{debug, warn};

/// A tetrahedron scheme together with its barycentric point table.
#[derive(Debug, Clone, PartialEq)]
pub struct TetrahedronScheme<T = f64> {
  scheme: Scheme<T>,
  /// One row of 4 barycentric coordinates per point.
  bary: na::DMatrix<T>,
}

impl<T: Scalar> TetrahedronScheme<T> {
  /// Assembles a scheme from groups of barycentric rows.
  pub fn new(
    name: impl Into<String>,
    degree: usize,
    groups: Vec<(WeightSpec<T>, na::DMatrix<T>)>,
    source: Source,
  ) -> Result<Self, QuadError> {
    let (bary, weights) = untangle(groups)?;
    if bary.ncols() != 4 {
      return Err(QuadError::InvalidArgument(format!(
        "barycentric rows have {} coordinates, expected 4",
        bary.ncols()
      )));
    }
    let points = bary_to_cartesian(&bary);
    let scheme = Scheme::new(name, degree, points, weights, source)?;

    debug!(
      "constructed {}: degree {}, {} points",
      scheme.name(),
      scheme.degree(),
      scheme.npoints()
    );
    if scheme.has_negative_weights() {
      debug!("{} has negative weights", scheme.name());
    }
    if bary.iter().any(|l| l.evalf() < 0.0) {
      warn!("{} has points outside the tetrahedron", scheme.name());
    }

    Ok(Self { scheme, bary })
  }

  pub fn scheme(&self) -> &Scheme<T> {
    &self.scheme
  }
  pub fn into_scheme(self) -> Scheme<T> {
    self.scheme
  }
  pub fn bary(&self) -> &na::DMatrix<T> {
    &self.bary
  }

  pub fn evalf(&self) -> TetrahedronScheme<f64> {
    TetrahedronScheme {
      scheme: self.scheme.evalf(),
      bary: self.bary.map(|l| l.evalf()),
    }
  }
}

/// Integrates `f` over the tetrahedron spanned by `vertices`.
///
/// `f` receives the `3 × npoints` matrix of mapped points.
pub fn integrate<T, F>(f: F, vertices: &[na::Vector3<f64>; 4], scheme: &TetrahedronScheme<T>) -> f64
where
  T: Scalar,
  F: FnOnce(&na::DMatrix<f64>) -> na::DVector<f64>,
{
  let bary = scheme.bary().map(|l| l.evalf());
  let npoints = bary.nrows();
  let mut x = na::DMatrix::zeros(3, npoints);
  for (ipoint, lambda) in bary.row_iter().enumerate() {
    let p: na::Vector3<f64> = vertices
      .iter()
      .zip(lambda.iter())
      .map(|(v, &l)| v * l)
      .sum();
    x.set_column(ipoint, &p);
  }

  let values = f(&x);
  assert_eq!(
    values.len(),
    npoints,
    "integrand must return one value per point"
  );
  let weights = scheme.scheme().weights();
  volume(vertices) * fsum(weights.iter().zip(values.iter()).map(|(w, v)| w.evalf() * v))
}

/// The (unsigned) volume of the tetrahedron spanned by `vertices`.
pub fn volume(vertices: &[na::Vector3<f64>; 4]) -> f64 {
  let [v0, v1, v2, v3] = vertices;
  let spanning = na::Matrix3::from_columns(&[v1 - v0, v2 - v0, v3 - v0]);
  ref_vol(3) * spanning.determinant().abs()
}

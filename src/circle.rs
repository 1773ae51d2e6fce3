//! Schemes on the unit disk centered at the origin.
//!
//! Weights sum to the disk area `π`.

mod lether;
mod peirce;

pub use lether::lether;
pub use peirce::peirce;

use crate::{scheme::Scheme, sum::fsum};

/// Integrates `f` over the disk with the given `center` and `radius`.
///
/// `f` receives the `2 × npoints` matrix of mapped points.
pub fn integrate<F>(f: F, center: &na::Vector2<f64>, radius: f64, scheme: &Scheme) -> f64
where
  F: FnOnce(&na::DMatrix<f64>) -> na::DVector<f64>,
{
  let mut x = scheme.points().transpose() * radius;
  for mut col in x.column_iter_mut() {
    col += center;
  }
  let values = f(&x);
  assert_eq!(
    values.len(),
    scheme.npoints(),
    "integrand must return one value per point"
  );
  radius.powi(2) * fsum(scheme.weights().iter().zip(values.iter()).map(|(w, v)| w * v))
}

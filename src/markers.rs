//! Plot markers for a scheme: one disk per point, with area proportional to
//! the absolute weight.

use crate::{arith::Scalar, scheme::Scheme, sum::fsum};

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
  pub center: Vec<f64>,
  /// `sqrt(|w| / Σw)`, so that the marker areas of a positive scheme add up
  /// to the area of the unit circle.
  pub radius: f64,
  /// Negative weights are drawn in a different color.
  pub negative: bool,
}

pub fn markers<T: Scalar>(scheme: &Scheme<T>) -> Vec<Marker> {
  let weights: Vec<f64> = scheme.weights().iter().map(|w| w.evalf()).collect();
  let total = fsum(weights.iter().copied());
  scheme
    .points()
    .row_iter()
    .zip(weights)
    .map(|(point, w)| Marker {
      center: point.iter().map(|x| x.evalf()).collect(),
      radius: (w.abs() / total).sqrt(),
      negative: w < 0.0,
    })
    .collect()
}

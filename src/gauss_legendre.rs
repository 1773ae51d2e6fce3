//! Gauss-Legendre quadrature on `[-1, 1]`.

use crate::error::QuadError;

/// Nodes (ascending) and weights of the `n`-point Gauss-Legendre rule.
///
/// The rule integrates polynomials of degree `2n - 1` exactly.
pub fn gauss_legendre(n: usize) -> Result<(na::DVector<f64>, na::DVector<f64>), QuadError> {
  if n == 0 {
    return Err(QuadError::InvalidArgument(
      "Gauss-Legendre rule needs at least one node".into(),
    ));
  }
  // midpoint rule
  if n == 1 {
    return Ok((na::DVector::from_element(1, 0.0), na::DVector::from_element(1, 2.0)));
  }

  let rule = gauss_quad::GaussLegendre::init(n);
  let mut pairs: Vec<(f64, f64)> = rule.nodes.into_iter().zip(rule.weights).collect();
  pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
  // exact zero for the middle node of odd rules
  if n % 2 == 1 {
    pairs[n / 2].0 = 0.0;
  }

  let (nodes, weights): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
  Ok((na::DVector::from_vec(nodes), na::DVector::from_vec(weights)))
}

use crate::{arith::Scalar, scheme::Scheme, sum::Summation};

/// Approximates the integral of `f` over the scheme's reference domain.
///
/// `f` is evaluated once on all points: it receives the `dim × npoints`
/// matrix of point coordinates (one point per column) and returns one value
/// per point. The weighted values are summed with correct rounding.
pub fn integrate<T, F>(f: F, scheme: &Scheme<T>) -> f64
where
  T: Scalar,
  F: FnOnce(&na::DMatrix<f64>) -> na::DVector<f64>,
{
  integrate_with(f, scheme, Summation::default())
}

pub fn integrate_with<T, F>(f: F, scheme: &Scheme<T>, summation: Summation) -> f64
where
  T: Scalar,
  F: FnOnce(&na::DMatrix<f64>) -> na::DVector<f64>,
{
  let x = scheme.points().map(|x| x.evalf()).transpose();
  let values = f(&x);
  assert_eq!(
    values.len(),
    scheme.npoints(),
    "integrand must return one value per point"
  );
  weighted_sum(scheme, values.iter().copied(), summation)
}

/// Like [`integrate`], but evaluates `f` point by point.
pub fn integrate_pointwise<T, F>(f: F, scheme: &Scheme<T>) -> f64
where
  T: Scalar,
  F: Fn(na::DVectorView<f64>) -> f64,
{
  let x = scheme.points().map(|x| x.evalf()).transpose();
  let values = x.column_iter().map(&f);
  weighted_sum(scheme, values, Summation::default())
}

fn weighted_sum<T, I>(scheme: &Scheme<T>, values: I, summation: Summation) -> f64
where
  T: Scalar,
  I: IntoIterator<Item = f64>,
{
  summation.sum(
    scheme
      .weights()
      .iter()
      .zip(values)
      .map(|(w, v)| w.evalf() * v),
  )
}

//! Symmetric orbits of barycentric coordinates in the tetrahedron.

use crate::{arith::Scalar, Dim};

/// Orbit of size 4: the distinguished coordinate `a = r + (1 - r)/4` cycles
/// through the vertices, the other three are `b = (1 - a)/3`.
pub fn r<T: Scalar>(r: T) -> na::DMatrix<T> {
  let one = T::one();
  let a = r.clone() + (one.clone() - r) / T::from_int(4);
  let b = (one - a.clone()) / T::from_int(3);
  na::DMatrix::from_fn(4, 4, |i, j| if i == j { a.clone() } else { b.clone() })
}

/// Orbit of size 1: the centroid.
pub fn s4<T: Scalar>() -> na::DMatrix<T> {
  na::DMatrix::from_element(1, 4, T::one() / T::from_int(4))
}

/// Drops the first barycentric coordinate. For the reference tetrahedron the
/// remaining three are the Cartesian coordinates.
pub fn bary_to_cartesian<T: Scalar>(bary: &na::DMatrix<T>) -> na::DMatrix<T> {
  bary.columns(1, bary.ncols() - 1).into_owned()
}

pub fn factorial(num: usize) -> usize {
  (1..=num).product()
}

/// Volume of the reference `dim`-simplex.
pub fn ref_vol(dim: Dim) -> f64 {
  (factorial(dim) as f64).recip()
}

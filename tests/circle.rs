extern crate nalgebra as na;

use approx::assert_relative_eq;
use quadrature::{circle, integrate, integrate_pointwise, Scheme};

use std::f64::consts::PI;

fn double_factorial(n: i64) -> f64 {
  if n <= 0 {
    1.0
  } else {
    n as f64 * double_factorial(n - 2)
  }
}

/// Integral of `x^a y^b` over the unit disk.
fn disk_moment(a: u32, b: u32) -> f64 {
  if a % 2 == 1 || b % 2 == 1 {
    return 0.0;
  }
  let (a, b) = (a as i64, b as i64);
  2.0 * PI * double_factorial(a - 1) * double_factorial(b - 1)
    / double_factorial(a + b)
    / (a + b + 2) as f64
}

fn moment_error(scheme: &Scheme, a: u32, b: u32) -> f64 {
  let approx = integrate(
    |x| {
      na::DVector::from_iterator(
        x.ncols(),
        x.column_iter().map(|p| p[0].powi(a as i32) * p[1].powi(b as i32)),
      )
    },
    scheme,
  );
  (approx - disk_moment(a, b)).abs()
}

fn check_degree(scheme: &Scheme) {
  let degree = scheme.degree() as u32;
  for deg in 0..=degree {
    for a in 0..=deg {
      let error = moment_error(scheme, a, deg - a);
      assert!(
        error < 1e-12,
        "{}: x^{a} y^{} off by {error}",
        scheme.name(),
        deg - a
      );
    }
  }
  let deg = degree + 1;
  let max_error = (0..=deg)
    .map(|a| moment_error(scheme, a, deg - a))
    .fold(0.0, f64::max);
  assert!(max_error > 1e-8, "{} exact beyond its degree", scheme.name());
}

#[test]
fn moments() {
  assert_relative_eq!(disk_moment(0, 0), PI);
  assert_relative_eq!(disk_moment(2, 0), PI / 4.0);
  assert_relative_eq!(disk_moment(2, 2), PI / 24.0);
}

#[test]
fn peirce_degree() {
  for m in 0..=3 {
    let scheme = circle::peirce(m).unwrap();
    assert_eq!(scheme.degree(), 4 * m + 3);
    assert_eq!(scheme.npoints(), (4 * m + 4) * (m + 1));
    check_degree(&scheme);
  }
}

#[test]
fn lether_degree() {
  for n in 1..=6 {
    let scheme = circle::lether(n).unwrap();
    assert_eq!(scheme.degree(), 2 * n - 1);
    check_degree(&scheme);
  }
}

#[test]
fn lether_single_node() {
  let scheme = circle::lether(1).unwrap();
  assert_eq!(scheme.name(), "Lether(1)");
  assert_eq!(scheme.degree(), 1);
  let area = integrate_pointwise(|_| 1.0, &scheme);
  assert_relative_eq!(area, PI, epsilon = 1e-15);
}

#[test]
fn smooth_integrand() {
  // ∫ exp(-(x² + y²)) over the unit disk
  let exact = PI * (1.0 - (-1.0f64).exp());
  let scheme = circle::peirce(6).unwrap();
  let approx = integrate_pointwise(|p| (-p.norm_squared()).exp(), &scheme);
  assert_relative_eq!(approx, exact, epsilon = 1e-12);
}

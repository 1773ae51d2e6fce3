use crate::error::ArithmeticError;

use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use std::{
  fmt,
  ops::{Add, Div, Mul, Neg, Sub},
};

/// An exact number `p + q√d` with rational `p`, `q` and square-free `d`.
///
/// Rational values are stored with `q = 0` and `d = 1`, so derived equality is
/// structural equality. Only values sharing the same radicand (or rational
/// values) can be combined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Surd {
  rational: BigRational,
  coeff: BigRational,
  radicand: u64,
}

impl Surd {
  pub fn from_rational(rational: BigRational) -> Self {
    Self {
      rational,
      coeff: BigRational::zero(),
      radicand: 1,
    }
  }

  fn new(rational: BigRational, coeff: BigRational, radicand: u64) -> Self {
    if coeff.is_zero() {
      Self::from_rational(rational)
    } else if radicand == 1 {
      Self::from_rational(rational + coeff)
    } else {
      Self {
        rational,
        coeff,
        radicand,
      }
    }
  }

  pub fn rational_part(&self) -> &BigRational {
    &self.rational
  }
  pub fn coeff(&self) -> &BigRational {
    &self.coeff
  }
  pub fn radicand(&self) -> u64 {
    self.radicand
  }
  pub fn is_rational(&self) -> bool {
    self.coeff.is_zero()
  }

  pub fn evalf(&self) -> f64 {
    let p = self.rational.to_f64().unwrap_or(f64::NAN);
    if self.is_rational() {
      return p;
    }
    let q = self.coeff.to_f64().unwrap_or(f64::NAN);
    p + q * (self.radicand as f64).sqrt()
  }

  /// Exact square root of a non-negative rational value.
  pub fn sqrt(&self) -> Result<Self, ArithmeticError> {
    if !self.is_rational() {
      return Err(ArithmeticError::NotRepresentable(format!(
        "sqrt of irrational value {self}"
      )));
    }
    if self.rational.is_negative() {
      return Err(ArithmeticError::NotRepresentable(format!(
        "sqrt of negative value {self}"
      )));
    }
    if self.rational.is_zero() {
      return Ok(Self::zero());
    }

    // sqrt(n/m) = sqrt(n*m) / m
    let denom = self.rational.denom().clone();
    let product: BigInt = self.rational.numer() * &denom;
    let product = product.to_u64().ok_or_else(|| {
      ArithmeticError::NotRepresentable(format!("radicand of sqrt({self}) exceeds u64"))
    })?;
    let (outside, inside) = split_square(product);

    let coeff = BigRational::new(BigInt::from(outside), denom);
    Ok(Self::new(BigRational::zero(), coeff, inside))
  }

  fn conjugate(&self) -> Self {
    Self::new(self.rational.clone(), -self.coeff.clone(), self.radicand)
  }

  /// `p² - q²d`, the product with the conjugate.
  fn norm(&self) -> BigRational {
    let d = BigRational::from_integer(BigInt::from(self.radicand));
    &self.rational * &self.rational - &self.coeff * &self.coeff * d
  }

  fn common_radicand(&self, other: &Self) -> u64 {
    if self.is_rational() {
      other.radicand
    } else if other.is_rational() {
      self.radicand
    } else {
      assert_eq!(
        self.radicand, other.radicand,
        "cannot combine surds with different radicands"
      );
      self.radicand
    }
  }
}

/// Splits `n` into `(s, d)` with `n = s² d` and `d` square-free.
fn split_square(mut n: u64) -> (u64, u64) {
  let root = n.sqrt();
  if root * root == n {
    return (root, 1);
  }

  // Beyond the cube root at most two prime factors can remain.
  let bound = n.cbrt();
  let mut outside = 1;
  let mut inside = 1;
  let mut f = 2u64;
  while f <= bound && f <= n / f {
    let mut count = 0;
    while n % f == 0 {
      n /= f;
      count += 1;
    }
    outside *= f.pow(count / 2);
    if count % 2 == 1 {
      inside *= f;
    }
    f += if f == 2 { 1 } else { 2 };
  }

  // the cofactor is 1, a prime, a product of two distinct primes or a prime square
  let root = n.sqrt();
  if root * root == n {
    outside *= root;
  } else {
    inside *= n;
  }
  (outside, inside)
}

impl fmt::Display for Surd {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.is_rational() {
      write!(f, "{}", self.rational)
    } else if self.rational.is_zero() {
      write!(f, "{}*sqrt({})", self.coeff, self.radicand)
    } else if self.coeff.is_negative() {
      write!(f, "{} - {}*sqrt({})", self.rational, self.coeff.abs(), self.radicand)
    } else {
      write!(f, "{} + {}*sqrt({})", self.rational, self.coeff, self.radicand)
    }
  }
}

impl Zero for Surd {
  fn zero() -> Self {
    Self::from_rational(BigRational::zero())
  }
  fn is_zero(&self) -> bool {
    self.rational.is_zero() && self.coeff.is_zero()
  }
}

impl One for Surd {
  fn one() -> Self {
    Self::from_rational(BigRational::one())
  }
}

impl Neg for Surd {
  type Output = Self;
  fn neg(self) -> Self {
    Self::new(-self.rational, -self.coeff, self.radicand)
  }
}

impl Add for Surd {
  type Output = Self;
  fn add(self, rhs: Self) -> Self {
    let d = self.common_radicand(&rhs);
    Self::new(self.rational + rhs.rational, self.coeff + rhs.coeff, d)
  }
}

impl Sub for Surd {
  type Output = Self;
  fn sub(self, rhs: Self) -> Self {
    self + (-rhs)
  }
}

impl Mul for Surd {
  type Output = Self;
  fn mul(self, rhs: Self) -> Self {
    let d = self.common_radicand(&rhs);
    let dq = BigRational::from_integer(BigInt::from(d));
    let rational = &self.rational * &rhs.rational + &self.coeff * &rhs.coeff * dq;
    let coeff = &self.rational * &rhs.coeff + &self.coeff * &rhs.rational;
    Self::new(rational, coeff, d)
  }
}

impl Div for Surd {
  type Output = Self;
  fn div(self, rhs: Self) -> Self {
    assert!(!rhs.is_zero(), "division by zero");
    // The norm of a nonzero element is nonzero since the radicand is no square.
    let norm = rhs.norm();
    let num = self * rhs.conjugate();
    Self::new(num.rational / &norm, num.coeff / &norm, num.radicand)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn q(n: i64, d: i64) -> Surd {
    Surd::from_rational(BigRational::new(n.into(), d.into()))
  }

  #[test]
  fn square_split() {
    assert_eq!(split_square(1), (1, 1));
    assert_eq!(split_square(5), (1, 5));
    assert_eq!(split_square(8), (2, 2));
    assert_eq!(split_square(72), (6, 2));
    assert_eq!(split_square(49), (7, 1));
    assert_eq!(split_square(2 * 3 * 3 * 7), (3, 14));
  }

  #[test]
  fn square_split_of_large_factors() {
    // largest prime below 2^64
    assert_eq!(split_square(18446744073709551557), (1, 18446744073709551557));
    assert_eq!(split_square(3 * 1000003 * 1000003), (1000003, 3));
    assert_eq!(split_square(1000003 * 1000033), (1, 1000003 * 1000033));
    assert_eq!(split_square(4 * 1000003 * 1000033), (2, 1000003 * 1000033));
  }

  #[test]
  fn sqrt_extracts_squares() {
    let s = q(8, 3).sqrt().unwrap();
    assert_eq!(s.radicand(), 6);
    assert_eq!(s.coeff(), &BigRational::new(2.into(), 3.into()));
    assert_eq!(q(9, 4).sqrt().unwrap(), q(3, 2));
    assert!(q(-1, 1).sqrt().is_err());
    assert!(q(5, 1).sqrt().unwrap().sqrt().is_err());
  }

  #[test]
  fn reciprocal_sqrt_is_rationalized() {
    let r = q(1, 1) / q(5, 1).sqrt().unwrap();
    assert_eq!(r, Surd::new(BigRational::zero(), BigRational::new(1.into(), 5.into()), 5));
    assert!((r.evalf() - 1.0 / 5f64.sqrt()).abs() < 1e-16);
  }

  #[test]
  fn field_ops() {
    let s5 = q(5, 1).sqrt().unwrap();
    let x = q(1, 2) + s5.clone();
    let y = q(3, 1) - s5.clone();
    assert_eq!(s5.clone() * s5.clone(), q(5, 1));
    assert_eq!((x.clone() * y.clone()) / y.clone(), x);
    assert_eq!(x.clone() - x.clone(), Surd::zero());
    assert!(((x.clone() / y.clone()).evalf() - x.evalf() / y.evalf()).abs() < 1e-14);
  }

  #[test]
  #[should_panic]
  fn incompatible_radicands() {
    let _ = q(2, 1).sqrt().unwrap() + q(3, 1).sqrt().unwrap();
  }

  #[test]
  fn display() {
    assert_eq!(q(1, 4).to_string(), "1/4");
    let s = q(1, 4) + q(5, 1).sqrt().unwrap();
    assert_eq!(s.to_string(), "1/4 + 1*sqrt(5)");
    let s = q(1, 4) - q(5, 1).sqrt().unwrap() / q(20, 1);
    assert_eq!(s.to_string(), "1/4 - 1/20*sqrt(5)");
    assert_eq!((-q(5, 1).sqrt().unwrap()).to_string(), "-1*sqrt(5)");
  }
}

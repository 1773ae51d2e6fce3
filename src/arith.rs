//! Arithmetic capabilities that schemes are built over.
//!
//! A scheme table is written once against [`Arithmetic`] and can then be
//! instantiated either in floating point ([`FloatArithmetic`]) or exactly
//! ([`ExactArithmetic`]), where every point coordinate and weight is an
//! element of a quadratic field `ℚ(√d)`.

mod surd;

pub use surd::Surd;

use crate::error::ArithmeticError;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use std::ops::{Add, Div, Mul, Neg, Sub};

/// The value type of point coordinates and weights.
pub trait Scalar:
  na::Scalar
  + Zero
  + One
  + Add<Output = Self>
  + Sub<Output = Self>
  + Mul<Output = Self>
  + Div<Output = Self>
  + Neg<Output = Self>
{
  fn from_int(v: i64) -> Self;
  /// Floating point approximation.
  fn evalf(&self) -> f64;
}

impl Scalar for f64 {
  fn from_int(v: i64) -> Self {
    v as f64
  }
  fn evalf(&self) -> f64 {
    *self
  }
}

impl Scalar for Surd {
  fn from_int(v: i64) -> Self {
    Surd::from_rational(BigRational::from_integer(BigInt::from(v)))
  }
  fn evalf(&self) -> f64 {
    Surd::evalf(self)
  }
}

pub trait Arithmetic {
  type Scalar: Scalar;

  /// The fraction `num / den`.
  fn frac(&self, num: i64, den: i64) -> Result<Self::Scalar, ArithmeticError>;

  fn sqrt(&self, x: &Self::Scalar) -> Result<Self::Scalar, ArithmeticError>;

  fn int(&self, v: i64) -> Self::Scalar {
    Self::Scalar::from_int(v)
  }

  /// Element-wise square root.
  fn sqrt_all(&self, xs: &[Self::Scalar]) -> Result<Vec<Self::Scalar>, ArithmeticError> {
    xs.iter().map(|x| self.sqrt(x)).collect()
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FloatArithmetic;

impl Arithmetic for FloatArithmetic {
  type Scalar = f64;

  fn frac(&self, num: i64, den: i64) -> Result<f64, ArithmeticError> {
    if den == 0 {
      return Err(ArithmeticError::DivisionByZero);
    }
    Ok(num as f64 / den as f64)
  }

  fn sqrt(&self, x: &f64) -> Result<f64, ArithmeticError> {
    Ok(x.sqrt())
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExactArithmetic;

impl Arithmetic for ExactArithmetic {
  type Scalar = Surd;

  fn frac(&self, num: i64, den: i64) -> Result<Surd, ArithmeticError> {
    if den == 0 {
      return Err(ArithmeticError::DivisionByZero);
    }
    Ok(Surd::from_rational(BigRational::new(
      BigInt::from(num),
      BigInt::from(den),
    )))
  }

  fn sqrt(&self, x: &Surd) -> Result<Surd, ArithmeticError> {
    x.sqrt()
  }
}

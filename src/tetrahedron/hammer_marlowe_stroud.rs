use super::{
  helpers::{r, s4},
  TetrahedronScheme,
};
use crate::{arith::Arithmetic, error::QuadError, scheme::Source, untangle::WeightSpec};

/// The tetrahedron formulas of Hammer, Marlowe and Stroud.
///
/// Two of the schemes also appear in
/// P.C. Hammer, A.H. Stroud,
/// Numerical Evaluation of Multiple Integrals II,
/// Mathematical Tables and Other Aids to Computation,
/// Vol. 12, No. 64 (Oct., 1958), pp. 272-280.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HammerMarloweStroud {
  /// 4 points, degree 2.
  One,
  /// 4 points, degree 2; the other root `r = -1/√5` of the moment equations.
  /// The points lie outside the tetrahedron.
  Two,
  /// 5 points, degree 3, negative centroid weight.
  Three,
}

impl HammerMarloweStroud {
  pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

  pub const SOURCE: Source = Source {
    authors: "P.C. Hammer, O.J. Marlowe, A.H. Stroud",
    title: "Numerical Integration Over Simplexes and Cones",
    publication: "Mathematical Tables and Other Aids to Computation, Vol. 10, No. 55, Jul. 1956, pp. 130-137",
    url: Some("https://doi.org/10.1090/S0025-5718-1956-0086389-6"),
  };

  pub fn index(self) -> usize {
    match self {
      Self::One => 1,
      Self::Two => 2,
      Self::Three => 3,
    }
  }

  pub fn degree(self) -> usize {
    match self {
      Self::One | Self::Two => 2,
      Self::Three => 3,
    }
  }

  pub fn name(self) -> String {
    format!("HammerMarloweStroud({})", self.index())
  }

  pub fn build<A: Arithmetic>(self, arith: &A) -> Result<TetrahedronScheme<A::Scalar>, QuadError> {
    let data = match self {
      Self::One | Self::Two => {
        let inv_sqrt5 = arith.int(1) / arith.sqrt(&arith.int(5))?;
        let r0 = if self == Self::One { inv_sqrt5 } else { -inv_sqrt5 };
        vec![(WeightSpec::Scalar(arith.frac(1, 4)?), r(r0))]
      }
      Self::Three => vec![
        (WeightSpec::Scalar(-arith.frac(4, 5)?), s4()),
        (WeightSpec::Scalar(arith.frac(9, 20)?), r(arith.frac(1, 3)?)),
      ],
    };
    TetrahedronScheme::new(self.name(), self.degree(), data, Self::SOURCE)
  }
}

impl TryFrom<usize> for HammerMarloweStroud {
  type Error = QuadError;
  fn try_from(index: usize) -> Result<Self, Self::Error> {
    Self::ALL
      .into_iter()
      .find(|s| s.index() == index)
      .ok_or_else(|| QuadError::InvalidArgument(format!("no HammerMarloweStroud scheme {index}")))
  }
}

pub fn hammer_marlowe_stroud<A: Arithmetic>(
  index: usize,
  arith: &A,
) -> Result<TetrahedronScheme<A::Scalar>, QuadError> {
  HammerMarloweStroud::try_from(index)?.build(arith)
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::arith::{ExactArithmetic, FloatArithmetic, Surd};

  use num_bigint::BigInt;
  use num_rational::BigRational;

  #[test]
  fn unknown_index() {
    for index in [0, 4, 100] {
      assert!(matches!(
        hammer_marlowe_stroud(index, &FloatArithmetic),
        Err(QuadError::InvalidArgument(_))
      ));
    }
  }

  #[test]
  fn index_roundtrip() {
    for s in HammerMarloweStroud::ALL {
      assert_eq!(HammerMarloweStroud::try_from(s.index()), Ok(s));
    }
  }

  #[test]
  fn exact_first_scheme() {
    let scheme = hammer_marlowe_stroud(1, &ExactArithmetic).unwrap();
    // a = (5 + 3√5)/20, b = (5 - √5)/20
    let bary = scheme.bary();
    let a = bary[(0, 0)].clone();
    let b = bary[(0, 1)].clone();
    assert_eq!(a.rational_part(), &BigRational::new(BigInt::from(1), BigInt::from(4)));
    assert_eq!(a.coeff(), &BigRational::new(BigInt::from(3), BigInt::from(20)));
    assert_eq!(a.radicand(), 5);
    assert_eq!(b.rational_part(), &BigRational::new(BigInt::from(1), BigInt::from(4)));
    assert_eq!(b.coeff(), &BigRational::new(BigInt::from(-1), BigInt::from(20)));

    let quarter = ExactArithmetic.frac(1, 4).unwrap();
    assert!(scheme.scheme().weights().iter().all(|w| *w == quarter));
  }

  #[test]
  fn exact_third_scheme() {
    let scheme = hammer_marlowe_stroud(3, &ExactArithmetic).unwrap();
    let q = |n, d| ExactArithmetic.frac(n, d).unwrap();
    let weights: Vec<Surd> = scheme.scheme().weights().iter().cloned().collect();
    assert_eq!(weights, vec![q(-4, 5), q(9, 20), q(9, 20), q(9, 20), q(9, 20)]);
    assert_eq!(scheme.bary()[(1, 0)], q(1, 2));
    assert_eq!(scheme.bary()[(1, 1)], q(1, 6));
    assert!(scheme.scheme().has_negative_weights());
  }
}

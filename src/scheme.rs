use crate::{arith::Scalar, error::QuadError, Dim};

use std::fmt;

/// Literature reference a scheme was transcribed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
  pub authors: &'static str,
  pub title: &'static str,
  pub publication: &'static str,
  pub url: Option<&'static str>,
}
impl fmt::Display for Source {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}, {}, {}", self.authors, self.title, self.publication)?;
    if let Some(url) = self.url {
      write!(f, ", <{url}>")?;
    }
    Ok(())
  }
}

/// A quadrature scheme on a reference domain.
///
/// Points are stored one per row. The scheme is immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheme<T = f64> {
  name: String,
  /// Maximal total degree of polynomials integrated exactly,
  /// as stated by the source.
  degree: usize,
  points: na::DMatrix<T>,
  /// Signed. Negative weights are legitimate.
  weights: na::DVector<T>,
  source: Source,
}

impl<T: Scalar> Scheme<T> {
  pub fn new(
    name: impl Into<String>,
    degree: usize,
    points: na::DMatrix<T>,
    weights: na::DVector<T>,
    source: Source,
  ) -> Result<Self, QuadError> {
    if points.nrows() != weights.len() {
      return Err(QuadError::TableMismatch {
        npoints: points.nrows(),
        nweights: weights.len(),
      });
    }
    if weights.is_empty() {
      return Err(QuadError::InvalidArgument("scheme without points".into()));
    }
    Ok(Self {
      name: name.into(),
      degree,
      points,
      weights,
      source,
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }
  pub fn degree(&self) -> usize {
    self.degree
  }
  pub fn points(&self) -> &na::DMatrix<T> {
    &self.points
  }
  pub fn weights(&self) -> &na::DVector<T> {
    &self.weights
  }
  pub fn source(&self) -> &Source {
    &self.source
  }
  pub fn npoints(&self) -> usize {
    self.weights.len()
  }
  pub fn dim(&self) -> Dim {
    self.points.ncols()
  }

  pub fn has_negative_weights(&self) -> bool {
    self.weights.iter().any(|w| w.evalf() < 0.0)
  }

  /// The same scheme with all values evaluated to floating point.
  pub fn evalf(&self) -> Scheme<f64> {
    Scheme {
      name: self.name.clone(),
      degree: self.degree,
      points: self.points.map(|x| x.evalf()),
      weights: self.weights.map(|w| w.evalf()),
      source: self.source,
    }
  }
}

impl<T: Scalar + fmt::Display> fmt::Display for Scheme<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(
      f,
      "{} (degree {}, {} points)",
      self.name,
      self.degree,
      self.npoints()
    )?;
    for (point, weight) in self.points.row_iter().zip(self.weights.iter()) {
      let coords: Vec<String> = point.iter().map(|x| x.to_string()).collect();
      writeln!(f, "  {weight}: ({})", coords.join(", "))?;
    }
    Ok(())
  }
}

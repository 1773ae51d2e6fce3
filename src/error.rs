/// Failures of the arithmetic capabilities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
  #[error("division by zero")]
  DivisionByZero,
  #[error("value not representable in exact arithmetic: {0}")]
  NotRepresentable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuadError {
  /// Unsupported scheme index or parameter.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  /// A point group whose explicit weights don't match its point count.
  /// Always a bug in a scheme table.
  #[error("point group {group} has {npoints} points but {nweights} weights")]
  ShapeMismatch {
    group: usize,
    npoints: usize,
    nweights: usize,
  },
  /// An assembled point table and weight vector of different lengths.
  #[error("scheme has {npoints} points but {nweights} weights")]
  TableMismatch { npoints: usize, nweights: usize },
  #[error("point group {group} has dimension {found}, expected {expected}")]
  DimensionMismatch {
    group: usize,
    expected: usize,
    found: usize,
  },
  #[error(transparent)]
  Arithmetic(#[from] ArithmeticError),
}

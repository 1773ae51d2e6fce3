use crate::{arith::Scalar, error::QuadError};

use tracing::trace;

/// Weights of one point group.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightSpec<T> {
  /// One weight shared by every point of the group.
  Scalar(T),
  /// One weight per point, in row order.
  PerPoint(Vec<T>),
}

/// Flattens `(weights, points)` groups into one point matrix (one row per
/// point) and the matching weight vector, preserving group order.
pub fn untangle<T: Scalar>(
  groups: Vec<(WeightSpec<T>, na::DMatrix<T>)>,
) -> Result<(na::DMatrix<T>, na::DVector<T>), QuadError> {
  let dim = match groups.first() {
    Some((_, points)) => points.ncols(),
    None => return Err(QuadError::InvalidArgument("no point groups".into())),
  };

  let mut rows: Vec<T> = Vec::new();
  let mut weights: Vec<T> = Vec::new();
  for (igroup, (weight_spec, points)) in groups.into_iter().enumerate() {
    if points.ncols() != dim {
      return Err(QuadError::DimensionMismatch {
        group: igroup,
        expected: dim,
        found: points.ncols(),
      });
    }
    let npoints = points.nrows();
    match weight_spec {
      WeightSpec::Scalar(w) => weights.extend(std::iter::repeat(w).take(npoints)),
      WeightSpec::PerPoint(ws) => {
        if ws.len() != npoints {
          return Err(QuadError::ShapeMismatch {
            group: igroup,
            npoints,
            nweights: ws.len(),
          });
        }
        weights.extend(ws);
      }
    }
    trace!("point group {igroup}: {npoints} points");
    for row in points.row_iter() {
      rows.extend(row.iter().cloned());
    }
  }

  let npoints = weights.len();
  let points = na::DMatrix::from_row_slice(npoints, dim, &rows);
  Ok((points, na::DVector::from_vec(weights)))
}

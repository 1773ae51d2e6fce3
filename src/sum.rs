//! Floating point summation.

/// Summation algorithm used when reducing weighted function values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Summation {
  /// Correctly rounded sum (Shewchuk).
  #[default]
  Exact,
  /// Neumaier's improved Kahan summation.
  Neumaier,
  /// Left-to-right accumulation.
  Naive,
}
impl Summation {
  pub fn sum<I>(self, values: I) -> f64
  where
    I: IntoIterator<Item = f64>,
  {
    match self {
      Self::Exact => fsum(values),
      Self::Neumaier => neumaier_sum(values),
      Self::Naive => naive_sum(values),
    }
  }
}

/// Correctly rounded sum of `values`.
///
/// Keeps a list of non-overlapping partial sums which together represent the
/// exact sum, and rounds it to the nearest double once at the end.
/// If any value is not finite, or an intermediate partial sum overflows, the
/// plain IEEE sum of all values is returned instead.
pub fn fsum<I>(values: I) -> f64
where
  I: IntoIterator<Item = f64>,
{
  let mut partials: Vec<f64> = Vec::new();
  let mut ieee = 0.0;
  let mut exceptional = false;

  for mut x in values {
    ieee += x;
    if exceptional {
      continue;
    }
    if !x.is_finite() {
      exceptional = true;
      continue;
    }

    let mut i = 0;
    for j in 0..partials.len() {
      let mut y = partials[j];
      if x.abs() < y.abs() {
        std::mem::swap(&mut x, &mut y);
      }
      let hi = x + y;
      if !hi.is_finite() {
        exceptional = true;
        break;
      }
      let lo = y - (hi - x);
      if lo != 0.0 {
        partials[i] = lo;
        i += 1;
      }
      x = hi;
    }
    if exceptional {
      continue;
    }
    partials.truncate(i);
    partials.push(x);
  }

  if exceptional {
    return ieee;
  }

  let Some(mut hi) = partials.pop() else {
    return 0.0;
  };
  let mut lo = 0.0;
  while let Some(y) = partials.pop() {
    let x = hi;
    hi = x + y;
    let yr = hi - x;
    lo = y - yr;
    if lo != 0.0 {
      break;
    }
  }
  // round-half-even correction when the remaining partials push `lo` over half an ulp
  if let Some(&next) = partials.last() {
    if (lo < 0.0 && next < 0.0) || (lo > 0.0 && next > 0.0) {
      let y = 2.0 * lo;
      let x = hi + y;
      let yr = x - hi;
      if y == yr {
        hi = x;
      }
    }
  }
  hi
}

/// Kahan-Babuška-Neumaier compensated sum.
pub fn neumaier_sum<I>(values: I) -> f64
where
  I: IntoIterator<Item = f64>,
{
  let mut sum = 0.0;
  let mut comp = 0.0;
  for x in values {
    let t = sum + x;
    if f64::abs(sum) >= f64::abs(x) {
      comp += (sum - t) + x;
    } else {
      comp += (x - t) + sum;
    }
    sum = t;
  }
  sum + comp
}

pub fn naive_sum<I>(values: I) -> f64
where
  I: IntoIterator<Item = f64>,
{
  values.into_iter().fold(0.0, |acc, x| acc + x)
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn cancellation() {
    let values = [1e16, 1.0, -1e16, -1.0];
    assert_eq!(naive_sum(values), -1.0);
    assert_eq!(neumaier_sum(values), 0.0);
    assert_eq!(fsum(values), 0.0);
  }

  #[test]
  fn exact_tiny_remainder() {
    let values = [1.0, 1e100, 1.0, -1e100];
    assert_eq!(naive_sum(values), 0.0);
    assert_eq!(fsum(values), 2.0);
  }

  #[test]
  fn tenths() {
    let values = [0.1; 10];
    assert_ne!(naive_sum(values), 1.0);
    assert_eq!(fsum(values), 1.0);
  }

  #[test]
  fn empty_and_special() {
    assert_eq!(fsum(std::iter::empty()), 0.0);
    assert_eq!(fsum([1.0, f64::INFINITY]), f64::INFINITY);
    assert!(fsum([f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    assert!(fsum([1.0, f64::NAN]).is_nan());
  }

  #[test]
  fn overflowing_partial_sum() {
    let values = [1e308, 1e308, -1e308];
    assert_eq!(naive_sum(values), f64::INFINITY);
    assert_eq!(fsum(values), f64::INFINITY);
    assert_eq!(fsum([-1e308, -1e308, 1.0]), f64::NEG_INFINITY);
    // large but representable partials stay exact
    assert_eq!(fsum([1e308, -1e308, 1e308, 1.0]), 1e308);
  }

  #[test]
  fn selector() {
    let values = [1e16, 1.0, -1e16, -1.0];
    assert_eq!(Summation::default(), Summation::Exact);
    assert_eq!(Summation::Exact.sum(values), 0.0);
    assert_eq!(Summation::Neumaier.sum(values), 0.0);
    assert_eq!(Summation::Naive.sum(values), -1.0);
  }
}

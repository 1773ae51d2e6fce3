extern crate nalgebra as na;

pub mod arith;
pub mod circle;
pub mod error;
pub mod gauss_legendre;
pub mod integrate;
pub mod markers;
pub mod scheme;
pub mod sum;
pub mod tetrahedron;
pub mod untangle;

pub use arith::{Arithmetic, ExactArithmetic, FloatArithmetic, Scalar, Surd};
pub use error::{ArithmeticError, QuadError};
pub use integrate::{integrate, integrate_pointwise, integrate_with};
pub use scheme::{Scheme, Source};
pub use sum::Summation;
pub use untangle::{untangle, WeightSpec};

pub type Dim = usize;

pub mod cli;
pub mod determinant;
mod helpers;

pub use determinant::{Computation, DeterminantError, InvalidSelection, Method, TraceStep};

use nalgebra::DMatrix;
use num_rational::BigRational;

/// Square matrix of exact rationals, the engine's only input type.
pub type Matrix = DMatrix<BigRational>;

//! Course exercises: an integer array/matrix toolkit, a calculator, loop demos
//! and "predict the output" operator walkthroughs.

pub mod argparse;
pub mod aux;
pub mod core;
pub mod labkit;
pub(crate) mod utils;

pub use crate::aux::ndarray::{Array2D, RaggedRows, ShapeError};
pub use crate::core::array_ops::{
    bubble_sort, checked_multiply, multiply, to_column_major, to_row_major, DimensionMismatch, MatrixError,
};

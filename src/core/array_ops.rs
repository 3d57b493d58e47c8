//! Sorting, flattening and multiplication over integer sequences and dense matrices.
//!
//! Nothing here prints; see [`crate::core::report`] for the text forms.

use std::fmt;

use crate::aux::{
    he::{caller_loc, make_custom_error},
    ndarray::Array2D,
};

make_custom_error!(
    DimensionMismatch { a_rows: usize, a_cols: usize, b_rows: usize, b_cols: usize },
    "matrix multiplication not possible: columns of A ({}) must equal rows of B ({}), got {}x{} by {}x{}",
    a_cols, b_rows, a_rows, a_cols, b_rows, b_cols
);

impl DimensionMismatch {
    fn of<T>(a: &Array2D<T>, b: &Array2D<T>) -> Self {
        Self::new(a.nrows(), a.ncols(), b.nrows(), b.ncols())
    }
}

make_custom_error!(CellOverflow { row: usize, col: usize }, "integer overflow computing cell ({}, {})", row, col);

#[derive(Clone, PartialEq)]
pub enum MatrixError {
    DimensionMismatch(DimensionMismatch),
    Overflow(CellOverflow),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch(e) => fmt::Display::fmt(e, f),
            MatrixError::Overflow(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl fmt::Debug for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch(e) => fmt::Debug::fmt(e, f),
            MatrixError::Overflow(e) => fmt::Debug::fmt(e, f),
        }
    }
}

impl std::error::Error for MatrixError {}

impl From<DimensionMismatch> for MatrixError {
    fn from(value: DimensionMismatch) -> Self {
        MatrixError::DimensionMismatch(value)
    }
}

/// Sorts `arr` in place and returns how many swaps it took.
///
/// Each pass bubbles the largest remaining element to the end of the unsorted
/// prefix. A pass without swaps means the prefix is already sorted.
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) -> usize {
    let n = arr.len();
    let mut swaps = 0;

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..(n - i - 1) {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                swaps += 1;
            }
        }

        if !swapped {
            break;
        }
    }

    swaps
}

/// Rows top to bottom, left to right within a row.
pub fn to_row_major<T: Clone>(arr2d: &Array2D<T>) -> Vec<T> {
    let mut arr1d = Vec::with_capacity(arr2d.nrows() * arr2d.ncols());
    for row in arr2d.rows() {
        arr1d.extend_from_slice(row);
    }
    arr1d
}

/// Columns left to right, top to bottom within a column.
pub fn to_column_major<T: Clone>(arr2d: &Array2D<T>) -> Vec<T> {
    let (rows, cols) = arr2d.shape();
    let mut arr1d = Vec::with_capacity(rows * cols);
    for c in 0..cols {
        for r in 0..rows {
            arr1d.push(arr2d[(r, c)].clone());
        }
    }
    arr1d
}

/// `A x B` with 32-bit wrapping arithmetic.
///
/// Every product and running sum wraps on overflow, so the result is the true
/// product reduced modulo 2^32 into the `i32` range.
#[track_caller]
pub fn multiply(a: &Array2D<i32>, b: &Array2D<i32>) -> Result<Array2D<i32>, DimensionMismatch> {
    check_dims(a, b)?;

    let (rows_a, cols_a) = a.shape();
    let cols_b = b.ncols();
    let mut c = Array2D::filled_default(rows_a, cols_b);

    for i in 0..rows_a {
        for j in 0..cols_b {
            let mut acc = 0_i32;
            for k in 0..cols_a {
                acc = acc.wrapping_add(a[(i, k)].wrapping_mul(b[(k, j)]));
            }
            c[(i, j)] = acc;
        }
    }

    Ok(c)
}

/// `A x B`, failing on the first cell whose products or sum leave the `i32` range.
#[track_caller]
pub fn checked_multiply(a: &Array2D<i32>, b: &Array2D<i32>) -> Result<Array2D<i32>, MatrixError> {
    check_dims(a, b)?;

    let (rows_a, cols_a) = a.shape();
    let cols_b = b.ncols();
    let mut c = Array2D::filled_default(rows_a, cols_b);

    for i in 0..rows_a {
        for j in 0..cols_b {
            let mut acc = 0_i32;
            for k in 0..cols_a {
                acc = a[(i, k)]
                    .checked_mul(b[(k, j)])
                    .and_then(|p| acc.checked_add(p))
                    .ok_or_else(|| MatrixError::Overflow(CellOverflow::new(i, j)))?;
            }
            c[(i, j)] = acc;
        }
    }

    Ok(c)
}

#[track_caller]
fn check_dims(a: &Array2D<i32>, b: &Array2D<i32>) -> Result<(), DimensionMismatch> {
    if a.ncols() != b.nrows() {
        let err = DimensionMismatch::of(a, b);
        log::debug!("{} (called from {})", err, caller_loc());
        return Err(err);
    }
    Ok(())
}

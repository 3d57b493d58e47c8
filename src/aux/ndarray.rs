use std::ops::{Index, IndexMut};

use super::he::make_custom_error;

make_custom_error!(
    ShapeError { rows: usize, cols: usize, len: usize },
    "cannot shape {} elements into a {}x{} matrix", len, rows, cols
);
make_custom_error!(
    RaggedRows { row: usize, len: usize, expected: usize },
    "row {} has {} elements, expected {} like the first row", row, len, expected
);

/// Dense, rectangular 2D storage. Elements are kept in one row-major buffer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Array2D<T> {
    inner: Vec<T>,
    shape: (usize, usize),
}

impl<T> Array2D<T> {
    pub fn from_row_major(rows: usize, cols: usize, inner: Vec<T>) -> Result<Self, ShapeError> {
        if rows.checked_mul(cols) != Some(inner.len()) {
            return Err(ShapeError::new(rows, cols, inner.len()));
        }

        Ok(Self {
            inner,
            shape: (rows, cols),
        })
    }

    /// Rebuilds a matrix from elements laid out column after column.
    pub fn from_column_major(rows: usize, cols: usize, inner: Vec<T>) -> Result<Self, ShapeError> {
        if rows.checked_mul(cols) != Some(inner.len()) {
            return Err(ShapeError::new(rows, cols, inner.len()));
        }

        let mut slots = inner.into_iter().map(Some).collect::<Vec<_>>();
        let mut reordered = Vec::with_capacity(slots.len());
        for r in 0..rows {
            for c in 0..cols {
                // every slot is visited exactly once
                if let Some(v) = slots[c * rows + r].take() {
                    reordered.push(v);
                }
            }
        }

        Self::from_row_major(rows, cols, reordered)
    }

    /// Every row must have the same length. Zero rows gives a 0x0 matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, RaggedRows> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());

        let mut inner = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(RaggedRows::new(i, row.len(), ncols));
            }
            inner.extend(row);
        }

        Ok(Self {
            inner,
            shape: (nrows, ncols),
        })
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.shape.0
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.shape.1
    }

    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        if r >= self.shape.0 || c >= self.shape.1 {
            return None;
        }
        self.inner.get(Self::get_flatten_idx(&self.shape, r, c))
    }

    pub fn get_mut(&mut self, r: usize, c: usize) -> Option<&mut T> {
        if r >= self.shape.0 || c >= self.shape.1 {
            return None;
        }
        self.inner.get_mut(Self::get_flatten_idx(&self.shape, r, c))
    }

    pub fn row(&self, r: usize) -> Option<&[T]> {
        if r >= self.shape.0 {
            return None;
        }
        let start = Self::get_flatten_idx(&self.shape, r, 0);
        self.inner.get(start..start + self.shape.1)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.shape.0).filter_map(move |r| self.row(r))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    #[inline]
    fn get_flatten_idx(shape: &(usize, usize), r: usize, c: usize) -> usize {
        r * shape.1 + c
    }
}

impl<T: Clone + Default> Array2D<T> {
    pub fn filled_default(rows: usize, cols: usize) -> Self {
        Self {
            inner: vec![T::default(); rows * cols],
            shape: (rows, cols),
        }
    }
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(r < self.shape.0 && c < self.shape.1, "index ({r}, {c}) out of bounds for shape {:?}", self.shape);
        &self.inner[Self::get_flatten_idx(&self.shape, r, c)]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2D<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(r < self.shape.0 && c < self.shape.1, "index ({r}, {c}) out of bounds for shape {:?}", self.shape);
        let idx = Self::get_flatten_idx(&self.shape, r, c);
        &mut self.inner[idx]
    }
}

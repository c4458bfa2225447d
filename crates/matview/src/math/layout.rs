use serde::{Deserialize, Serialize};

/// Mapping from a `(row, col)` coordinate to a buffer offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// Consecutive elements form a row.
    #[default]
    RowMajor,
    /// Consecutive elements form a column.
    ColumnMajor,
}

impl Layout {
    /// The opposite layout.
    pub fn flipped(self) -> Self {
        match self {
            Layout::RowMajor => Layout::ColumnMajor,
            Layout::ColumnMajor => Layout::RowMajor,
        }
    }

    /// Buffer distance between neighbours along dimension 0 and dimension 1.
    #[inline]
    pub fn strides(self, rows: usize, cols: usize) -> [usize; 2] {
        match self {
            Layout::RowMajor => [cols, 1],
            Layout::ColumnMajor => [1, rows],
        }
    }

    #[inline]
    pub fn offset(self, row: usize, col: usize, rows: usize, cols: usize) -> usize {
        let [s0, s1] = self.strides(rows, cols);
        row * s0 + col * s1
    }

    /// The dimension whose elements are contiguous in memory. A lane is a
    /// run along this dimension: a row for `RowMajor`, a column for
    /// `ColumnMajor`.
    #[inline]
    pub fn fast_dim(self) -> usize {
        match self {
            Layout::RowMajor => 1,
            Layout::ColumnMajor => 0,
        }
    }
}

/// Extents plus layout of a two-dimensional view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    rows: usize,
    cols: usize,
    layout: Layout,
}

impl Dims {
    pub fn new(rows: usize, cols: usize, layout: Layout) -> Self {
        Self { rows, cols, layout }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of elements covered, or `None` on overflow.
    pub fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row count for `dim == 0`, column count for `dim == 1`.
    ///
    /// # Panics
    ///
    /// Panics for any other dimension.
    pub fn extent(&self, dim: usize) -> usize {
        match dim {
            0 => self.rows,
            1 => self.cols,
            _ => panic!("dimension {} out of range for a 2D view", dim),
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Buffer offset of `(row, col)`; bounds are the caller's concern.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        self.layout.offset(row, col, self.rows, self.cols)
    }

    /// Length of one lane (the extent along the fast dimension).
    pub fn lane_len(&self) -> usize {
        self.extent(self.layout.fast_dim())
    }

    /// Number of lanes (the extent along the slow dimension).
    pub fn lane_count(&self) -> usize {
        self.extent(1 - self.layout.fast_dim())
    }

    /// Same buffer read with swapped extents and the opposite layout, so
    /// that `(i, j)` of the result addresses `(j, i)` of `self`.
    pub fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            layout: self.layout.flipped(),
        }
    }
}

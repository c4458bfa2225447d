use std::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::math::layout::{Dims, Layout};
use crate::math::numeric::NumericView;

fn checked_len(dims: &Dims, len: usize) -> Result<usize, MatrixError> {
    match dims.checked_len() {
        Some(needed) if needed <= len => Ok(needed),
        _ => Err(MatrixError::InvalidDimensions {
            rows: dims.rows(),
            cols: dims.cols(),
            len,
        }),
    }
}

#[track_caller]
fn assert_in_bounds(dims: &Dims, row: usize, col: usize) {
    assert!(
        dims.contains(row, col),
        "index ({}, {}) out of bounds for {}x{} matrix",
        row,
        col,
        dims.rows(),
        dims.cols()
    );
}

#[track_caller]
fn lane_range(dims: &Dims, i: usize) -> std::ops::Range<usize> {
    assert!(
        i < dims.lane_count(),
        "lane index {} out of bounds for {} lanes",
        i,
        dims.lane_count()
    );
    let len = dims.lane_len();
    i * len..(i + 1) * len
}

/// Mutable two-dimensional view over a borrowed buffer.
///
/// The view covers the first `rows * cols` elements of the buffer and reads
/// them according to its [`Layout`]. Lanes (rows for `RowMajor`, columns for
/// `ColumnMajor`) are contiguous and can be borrowed as [`NumericView`]s for
/// in-place arithmetic:
///
/// ```
/// use matview::math::{Layout, MatrixView};
///
/// let mut buffer = vec![1, 2, 3, 4, 5, 6];
/// let mut m = MatrixView::new(&mut buffer, 2, 3, Layout::RowMajor).unwrap();
/// for mut row in &mut m {
///     row -= 2;
/// }
/// assert_eq!(buffer, vec![-1, 0, 1, 2, 3, 4]);
/// ```
#[derive(Debug)]
pub struct MatrixView<'a, T> {
    data: &'a mut [T],
    dims: Dims,
}

impl<'a, T> MatrixView<'a, T> {
    /// Wraps `data` as a `rows x cols` matrix.
    ///
    /// Fails with `InvalidDimensions` when the buffer holds fewer than
    /// `rows * cols` elements. Extra trailing elements are not part of the
    /// view.
    pub fn new(
        data: &'a mut [T],
        rows: usize,
        cols: usize,
        layout: Layout,
    ) -> Result<Self, MatrixError> {
        let dims = Dims::new(rows, cols, layout);
        let len = checked_len(&dims, data.len())?;
        Ok(Self {
            data: &mut data[..len],
            dims,
        })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn nrows(&self) -> usize {
        self.dims.rows()
    }

    pub fn ncols(&self) -> usize {
        self.dims.cols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.dims.rows(), self.dims.cols())
    }

    pub fn layout(&self) -> Layout {
        self.dims.layout()
    }

    pub fn extent(&self, dim: usize) -> usize {
        self.dims.extent(dim)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Viewed elements in buffer order.
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the matrix.
    #[track_caller]
    pub fn at(&self, row: usize, col: usize) -> &T {
        assert_in_bounds(&self.dims, row, col);
        &self.data[self.dims.offset(row, col)]
    }

    #[track_caller]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        assert_in_bounds(&self.dims, row, col);
        &mut self.data[self.dims.offset(row, col)]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if self.dims.contains(row, col) {
            Some(&self.data[self.dims.offset(row, col)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if self.dims.contains(row, col) {
            Some(&mut self.data[self.dims.offset(row, col)])
        } else {
            None
        }
    }

    /// The `i`-th lane: row `i` of a `RowMajor` view, column `i` of a
    /// `ColumnMajor` one.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below [`Dims::lane_count`].
    #[track_caller]
    pub fn slice_by_index(&mut self, i: usize) -> NumericView<'_, T> {
        let range = lane_range(&self.dims, i);
        NumericView::new(&mut self.data[range])
    }

    /// Every lane in index order. Call again to restart.
    pub fn lanes_mut(&mut self) -> LanesMut<'_, T> {
        LanesMut::new(&mut *self.data, &self.dims)
    }

    /// Consumes the view into its lanes, keeping the full borrow lifetime.
    pub fn into_lanes(self) -> LanesMut<'a, T> {
        LanesMut::new(self.data, &self.dims)
    }

    /// Shared reborrow of this view.
    pub fn view(&self) -> MatrixRef<'_, T> {
        MatrixRef {
            data: &*self.data,
            dims: self.dims,
        }
    }

    /// Same buffer, flipped layout and swapped extents. No data moves.
    pub fn transpose(self) -> MatrixView<'a, T> {
        MatrixView {
            data: self.data,
            dims: self.dims.transposed(),
        }
    }
}

impl<'a, T> Index<(usize, usize)> for MatrixView<'a, T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        self.at(index.0, index.1)
    }
}

impl<'a, T> IndexMut<(usize, usize)> for MatrixView<'a, T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        self.at_mut(index.0, index.1)
    }
}

impl<'a, 'b, T> IntoIterator for &'b mut MatrixView<'a, T> {
    type Item = NumericView<'b, T>;
    type IntoIter = LanesMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.lanes_mut()
    }
}

/// Iterator over the lanes of a [`MatrixView`].
#[derive(Debug)]
pub struct LanesMut<'a, T> {
    rest: &'a mut [T],
    lane_len: usize,
    remaining: usize,
}

impl<'a, T> LanesMut<'a, T> {
    fn new(data: &'a mut [T], dims: &Dims) -> Self {
        Self {
            rest: data,
            lane_len: dims.lane_len(),
            remaining: dims.lane_count(),
        }
    }
}

impl<'a, T> Iterator for LanesMut<'a, T> {
    type Item = NumericView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let rest = std::mem::take(&mut self.rest);
        let (lane, rest) = rest.split_at_mut(self.lane_len);
        self.rest = rest;
        Some(NumericView::new(lane))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for LanesMut<'a, T> {}

/// Read-only counterpart of [`MatrixView`]. Cheap to copy.
#[derive(Debug)]
pub struct MatrixRef<'a, T> {
    data: &'a [T],
    dims: Dims,
}

impl<'a, T> Clone for MatrixRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for MatrixRef<'a, T> {}

impl<'a, T> MatrixRef<'a, T> {
    pub fn new(
        data: &'a [T],
        rows: usize,
        cols: usize,
        layout: Layout,
    ) -> Result<Self, MatrixError> {
        let dims = Dims::new(rows, cols, layout);
        let len = checked_len(&dims, data.len())?;
        Ok(Self {
            data: &data[..len],
            dims,
        })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn nrows(&self) -> usize {
        self.dims.rows()
    }

    pub fn ncols(&self) -> usize {
        self.dims.cols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.dims.rows(), self.dims.cols())
    }

    pub fn layout(&self) -> Layout {
        self.dims.layout()
    }

    pub fn extent(&self, dim: usize) -> usize {
        self.dims.extent(dim)
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    #[track_caller]
    pub fn at(&self, row: usize, col: usize) -> &'a T {
        assert_in_bounds(&self.dims, row, col);
        &self.data[self.dims.offset(row, col)]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if self.dims.contains(row, col) {
            Some(&self.data[self.dims.offset(row, col)])
        } else {
            None
        }
    }

    #[track_caller]
    pub fn lane(&self, i: usize) -> &'a [T] {
        &self.data[lane_range(&self.dims, i)]
    }

    pub fn lanes(&self) -> impl ExactSizeIterator<Item = &'a [T]> + 'a {
        let data = self.data;
        let len = self.dims.lane_len();
        (0..self.dims.lane_count()).map(move |i| &data[i * len..(i + 1) * len])
    }

    /// Elements in logical row-major order, whatever the physical layout.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let m = *self;
        (0..m.nrows()).flat_map(move |i| (0..m.ncols()).map(move |j| m.at(i, j)))
    }

    pub fn transpose(self) -> MatrixRef<'a, T> {
        MatrixRef {
            data: self.data,
            dims: self.dims.transposed(),
        }
    }

    /// Copies the viewed elements into an owned matrix with the same dims.
    pub fn to_matrix(&self) -> Matrix<T>
    where
        T: Clone,
    {
        Matrix {
            data: self.data.to_vec(),
            dims: self.dims,
        }
    }
}

impl<'a, T> Index<(usize, usize)> for MatrixRef<'a, T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        self.at(index.0, index.1)
    }
}

impl<'a, T> From<MatrixView<'a, T>> for MatrixRef<'a, T> {
    fn from(view: MatrixView<'a, T>) -> Self {
        MatrixRef {
            data: view.data,
            dims: view.dims,
        }
    }
}

/// Owned buffer plus dimensions. Views borrow from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    dims: Dims,
}

impl<T> Matrix<T> {
    /// `data.len()` must equal `rows * cols` exactly.
    pub fn from_shape_vec(
        shape: (usize, usize),
        layout: Layout,
        data: Vec<T>,
    ) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        let dims = Dims::new(rows, cols, layout);
        if dims.checked_len() != Some(data.len()) {
            return Err(MatrixError::InvalidDimensions {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, dims })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn nrows(&self) -> usize {
        self.dims.rows()
    }

    pub fn ncols(&self) -> usize {
        self.dims.cols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.dims.rows(), self.dims.cols())
    }

    pub fn layout(&self) -> Layout {
        self.dims.layout()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn view(&self) -> MatrixRef<'_, T> {
        MatrixRef {
            data: &self.data,
            dims: self.dims,
        }
    }

    pub fn view_mut(&mut self) -> MatrixView<'_, T> {
        MatrixView {
            data: &mut self.data,
            dims: self.dims,
        }
    }

    /// Relabels the buffer as the transpose; no element moves.
    pub fn transpose(self) -> Matrix<T> {
        Matrix {
            data: self.data,
            dims: self.dims.transposed(),
        }
    }

    /// Same logical matrix stored under `layout`.
    pub fn to_layout(&self, layout: Layout) -> Matrix<T>
    where
        T: Clone,
    {
        let src = self.view();
        let dims = Dims::new(self.nrows(), self.ncols(), layout);
        let mut data = Vec::with_capacity(dims.len());
        for lane in 0..dims.lane_count() {
            for k in 0..dims.lane_len() {
                let (row, col) = match layout {
                    Layout::RowMajor => (lane, k),
                    Layout::ColumnMajor => (k, lane),
                };
                data.push(src.at(row, col).clone());
            }
        }
        Matrix { data, dims }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert_in_bounds(&self.dims, index.0, index.1);
        &self.data[self.dims.offset(index.0, index.1)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert_in_bounds(&self.dims, index.0, index.1);
        &mut self.data[self.dims.offset(index.0, index.1)]
    }
}

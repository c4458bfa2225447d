use crate::math::matrix::{Matrix, MatrixRef, MatrixView};

/// Zero-copy transposition.
///
/// The result reads the same buffer under the opposite layout with the
/// extents swapped, so `transpose(m).at(i, j) == m.at(j, i)` and
/// transposing twice gives back the original view.
pub trait Transpose {
    fn transposed(self) -> Self;
}

impl<'a, T> Transpose for MatrixView<'a, T> {
    fn transposed(self) -> Self {
        self.transpose()
    }
}

impl<'a, T> Transpose for MatrixRef<'a, T> {
    fn transposed(self) -> Self {
        self.transpose()
    }
}

impl<T> Transpose for Matrix<T> {
    fn transposed(self) -> Self {
        self.transpose()
    }
}

/// Transpose `m` without copying.
///
/// ```
/// use matview::math::{transpose, Layout, MatrixRef};
///
/// let src = [1, 2, 3,   // 2x3, row-major
///            4, 5, 6];
/// let m = MatrixRef::new(&src, 2, 3, Layout::RowMajor).unwrap();
/// let t = transpose(m);
///
/// assert_eq!(t.shape(), (3, 2));
/// assert_eq!(t.layout(), Layout::ColumnMajor);
/// assert_eq!(*t.at(2, 0), 3);
/// assert_eq!(*t.at(0, 1), 4);
/// ```
pub fn transpose<M: Transpose>(m: M) -> M {
    m.transposed()
}

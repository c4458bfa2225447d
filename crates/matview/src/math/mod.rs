//! Matrix views and lane arithmetic.
//!
//! `MatrixView` borrows a buffer mutably and hands out `NumericView` lanes,
//! `MatrixRef` is its shared, `Copy` sibling and `Matrix` owns a buffer that
//! both can borrow from. All three read the buffer through a [`Layout`].
pub mod layout;
pub mod matrix;
pub mod numeric;
pub mod transpose;

pub use layout::{Dims, Layout};
pub use matrix::{LanesMut, Matrix, MatrixRef, MatrixView};
pub use numeric::NumericView;
pub use transpose::{transpose, Transpose};

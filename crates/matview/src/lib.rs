//! matview: non-owning matrix views over flat numeric buffers.
//!
//! A `MatrixView` reads a borrowed slice as a row-major or column-major
//! matrix and lends out its rows (or columns) as `NumericView`s for in-place
//! arithmetic. Views transpose without copying, render to delimited text and
//! persist to disk through the `io` module.
//!
//! ```
//! use matview::math::{Layout, MatrixView};
//! use matview::text::render;
//!
//! let mut buffer = vec![1, 2, 3, 4, 5, 6];
//! let mut m = MatrixView::new(&mut buffer, 2, 3, Layout::RowMajor).unwrap();
//! m.slice_by_index(0).sub_scalar(2);
//! assert_eq!(render(m.view(), ',', '\n'), "-1, 0, 1,\n 4, 5, 6,\n");
//! ```
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod text;

pub use config::TextFormat;
pub use error::MatrixError;

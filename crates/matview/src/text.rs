//! Delimited text rendering.
use std::fmt;

use crate::config::TextFormat;
use crate::math::{Matrix, MatrixRef, MatrixView};

/// Renders `m` with the given separators and default alignment.
pub fn render<T: fmt::Display>(
    m: MatrixRef<'_, T>,
    column_separator: char,
    row_separator: char,
) -> String {
    render_with(m, &TextFormat::new(column_separator, row_separator))
}

/// Renders `m` in row-major reading order regardless of its layout.
///
/// Every cell is followed by the column separator. With `'\n'` as row
/// separator each row ends in a line break; any other row separator is
/// placed between rows only.
pub fn render_with<T: fmt::Display>(m: MatrixRef<'_, T>, format: &TextFormat) -> String {
    let (rows, cols) = m.shape();
    let cells: Vec<String> = m.iter().map(|x| x.to_string()).collect();

    let width = if format.align {
        cells
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0)
            .max(format.min_width)
    } else {
        0
    };

    let mut out = String::with_capacity(cells.len() * (width + 1) + rows);
    for i in 0..rows {
        for cell in &cells[i * cols..(i + 1) * cols] {
            out.push_str(&format!("{:>width$}", cell, width = width));
            out.push(format.column_separator);
        }
        out.push(format.row_separator);
    }
    if format.row_separator != '\n' {
        out.pop();
    }
    out
}

impl<'a, T: fmt::Display> fmt::Display for MatrixRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_with(*self, &TextFormat::default()))
    }
}

impl<'a, T: fmt::Display> fmt::Display for MatrixView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Layout;

    #[test]
    fn pads_to_widest_cell() {
        let data = [1, -20, 3, 400];
        let m = MatrixRef::new(&data, 2, 2, Layout::RowMajor).unwrap();
        assert_eq!(render(m, ',', '\n'), "  1,-20,\n  3,400,\n");
    }

    #[test]
    fn min_width_widens_cells() {
        let data = [1, 2];
        let m = MatrixRef::new(&data, 1, 2, Layout::RowMajor).unwrap();
        let format = TextFormat::default().with_min_width(3);
        assert_eq!(render_with(m, &format), "  1,  2,\n");
    }

    #[test]
    fn custom_row_separator_is_not_trailing() {
        let data = [1, 2, 3, 4];
        let m = MatrixRef::new(&data, 2, 2, Layout::RowMajor).unwrap();
        assert_eq!(render(m, ',', ';'), "1,2,;3,4,");
    }

    #[test]
    fn empty_matrix_renders_empty() {
        let data: [i32; 0] = [];
        let m = MatrixRef::new(&data, 0, 0, Layout::RowMajor).unwrap();
        assert_eq!(render(m, ',', ';'), "");
        assert_eq!(render(m, ',', '\n'), "");
    }
}

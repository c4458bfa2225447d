//! Delimited text reader and writer for matrices.
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::config::TextFormat;
use crate::error::MatrixError;
use crate::math::{Layout, Matrix, MatrixRef};
use crate::text::render_with;

/// Save `m` to `path` using the default [`TextFormat`].
pub fn save<T: fmt::Display, P: AsRef<Path>>(
    m: MatrixRef<'_, T>,
    path: P,
) -> Result<(), MatrixError> {
    save_with(m, path, &TextFormat::default())
}

/// Save `m` to `path`, creating missing parent directories.
pub fn save_with<T: fmt::Display, P: AsRef<Path>>(
    m: MatrixRef<'_, T>,
    path: P,
    format: &TextFormat,
) -> Result<(), MatrixError> {
    let path = path.as_ref();
    format.byte_separators()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MatrixError::io(parent, e))?;
    }
    fs::write(path, render_with(m, format)).map_err(|e| MatrixError::io(path, e))?;

    log::info!(
        "Saved {}x{} matrix to file: {}",
        m.nrows(),
        m.ncols(),
        path.display()
    );
    Ok(())
}

/// Load a matrix from `path` using the default [`TextFormat`].
pub fn load<T, P>(path: P) -> Result<Matrix<T>, MatrixError>
where
    T: FromStr,
    T::Err: fmt::Display,
    P: AsRef<Path>,
{
    load_with(path, &TextFormat::default())
}

/// Load a matrix from `path`. The result is row-major and owns its buffer.
pub fn load_with<T, P>(path: P, format: &TextFormat) -> Result<Matrix<T>, MatrixError>
where
    T: FromStr,
    T::Err: fmt::Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| MatrixError::io(path, e))?;
    let matrix = parse_matrix(&content, format)?;
    log::debug!(
        "Loaded {}x{} matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(matrix)
}

/// Parse matrix text.
///
/// Fields are trimmed, empty trailing fields and blank rows are skipped,
/// and the dimensions are inferred from what remains. With a whitespace
/// column separator every empty field is skipped, so padded output loads.
/// Rows in `Parse` errors count non-blank rows only.
pub fn parse_matrix<T>(content: &str, format: &TextFormat) -> Result<Matrix<T>, MatrixError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let (delimiter, row_separator) = format.byte_separators()?;
    let terminator = match row_separator {
        b'\n' => csv::Terminator::CRLF,
        other => csv::Terminator::Any(other),
    };

    let whitespace_delimited = delimiter.is_ascii_whitespace();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .terminator(terminator)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut data = Vec::new();
    let mut cols: Option<usize> = None;
    let mut rows = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| MatrixError::Parse {
            row: rows + 1,
            column: 0,
            message: e.to_string(),
        })?;

        let mut fields: Vec<&str> = record.iter().collect();
        if whitespace_delimited {
            // Alignment padding reads as runs of empty fields.
            fields.retain(|f| !f.is_empty());
        }
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        if fields.is_empty() {
            continue;
        }
        rows += 1;

        let expected = *cols.get_or_insert(fields.len());
        if fields.len() != expected {
            return Err(MatrixError::Parse {
                row: rows,
                column: fields.len().min(expected) + 1,
                message: format!("expected {} fields, found {}", expected, fields.len()),
            });
        }

        for (j, field) in fields.iter().enumerate() {
            let value = field.parse::<T>().map_err(|e| MatrixError::Parse {
                row: rows,
                column: j + 1,
                message: format!("invalid number {:?}: {}", field, e),
            })?;
            data.push(value);
        }
    }

    Matrix::from_shape_vec((rows, cols.unwrap_or(0)), Layout::RowMajor, data)
}

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// How a matrix is laid out as delimited text.
///
/// Shared by rendering and persistence so that whatever `save` writes,
/// `load` reads back.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TextFormat {
    /// Written after every cell; splits fields on read.
    pub column_separator: char,
    /// `'\n'` terminates every row; any other character sits between rows.
    pub row_separator: char,
    /// Right-align all cells to one common width.
    pub align: bool,
    /// Lower bound for the common width when `align` is set.
    pub min_width: usize,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            column_separator: ',',
            row_separator: '\n',
            align: true,
            min_width: 0,
        }
    }
}

impl TextFormat {
    pub fn new(column_separator: char, row_separator: char) -> Self {
        Self {
            column_separator,
            row_separator,
            ..Self::default()
        }
    }

    pub fn with_align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    /// Both separators as bytes, as required by the file reader.
    pub fn byte_separators(&self) -> Result<(u8, u8), MatrixError> {
        Ok((
            ascii_byte(self.column_separator)?,
            ascii_byte(self.row_separator)?,
        ))
    }
}

fn ascii_byte(c: char) -> Result<u8, MatrixError> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(MatrixError::UnsupportedSeparator(c))
    }
}

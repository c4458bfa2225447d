pub mod matrix_text;

pub use matrix_text::{load, load_with, parse_matrix, save, save_with};

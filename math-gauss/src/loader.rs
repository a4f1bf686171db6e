//! Text format reader for augmented matrices
//!
//! One equation per line, coefficients followed by the right-hand side,
//! whitespace separated. Blank lines are ignored.
//!
//! ```text
//! 2 1 -1 8
//! -3 -1 2 -11
//! -2 1 2 -3
//! ```

use crate::matrix::AugmentedMatrix;
use ndarray::Array2;
use std::fs;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading an augmented matrix
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read matrix file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed number '{token}' on line {line}")]
    MalformedNumber {
        line: usize,
        token: String,
        source: ParseFloatError,
    },
    #[error("Non-finite value '{token}' on line {line}")]
    NonFinite { line: usize, token: String },
    #[error("Row on line {line} has {found} values, expected {expected} like the first row")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error(
        "Matrix must be square with one right-hand side column: got {rows} rows and {columns} columns"
    )]
    NotSquare { rows: usize, columns: usize },
    #[error("Matrix file is empty or contains no data rows")]
    Empty,
}

/// Read an augmented matrix from a file
pub fn load_matrix(path: impl AsRef<Path>) -> Result<AugmentedMatrix<f64>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = parse_matrix(&text)?;
    log::debug!(
        "Loaded {}x{} augmented matrix from {}",
        matrix.n(),
        matrix.n() + 1,
        path.display()
    );
    Ok(matrix)
}

/// Parse an augmented matrix from text
pub fn parse_matrix(text: &str) -> Result<AugmentedMatrix<f64>, LoadError> {
    let mut values = Vec::new();
    let mut rows = 0;
    let mut columns = 0;

    for (idx, line) in text.lines().enumerate() {
        let line_number = idx + 1;
        let mut found = 0;
        for token in line.split_whitespace() {
            let value: f64 = token
                .parse()
                .map_err(|source| LoadError::MalformedNumber {
                    line: line_number,
                    token: token.to_string(),
                    source,
                })?;
            if !value.is_finite() {
                return Err(LoadError::NonFinite {
                    line: line_number,
                    token: token.to_string(),
                });
            }
            values.push(value);
            found += 1;
        }

        if found == 0 {
            continue;
        }
        if rows == 0 {
            columns = found;
        } else if found != columns {
            return Err(LoadError::RaggedRow {
                line: line_number,
                expected: columns,
                found,
            });
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(LoadError::Empty);
    }
    if columns != rows + 1 {
        return Err(LoadError::NotSquare { rows, columns });
    }

    let data = Array2::from_shape_vec((rows, columns), values)
        .map_err(|_| LoadError::NotSquare { rows, columns })?;
    AugmentedMatrix::new(data).map_err(|_| LoadError::NotSquare { rows, columns })
}

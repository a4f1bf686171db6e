//! Augmented matrix `[A | b]` of a square linear system

use crate::error::GaussError;
use crate::traits::RealField;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, s};
use std::fmt;

/// Augmented matrix of a square system `Ax = b`
///
/// Always `n` rows by `n + 1` columns with `n >= 1`; the last column is the
/// right-hand side. Shape and finiteness of every entry are checked once at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T: RealField> {
    data: Array2<T>,
}

impl<T: RealField> AugmentedMatrix<T> {
    /// Wrap an `n x (n+1)` array of finite values
    pub fn new(data: Array2<T>) -> Result<Self, GaussError> {
        let n = data.nrows();
        if n == 0 {
            return Err(GaussError::EmptySystem);
        }
        if data.ncols() != n + 1 {
            return Err(GaussError::DimensionMismatch {
                expected: n + 1,
                got: data.ncols(),
            });
        }
        if let Some(((row, column), _)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(GaussError::NonFiniteEntry { row, column });
        }
        Ok(Self { data })
    }

    /// Build from equations given row by row, right-hand side last
    ///
    /// The row count fixes `n`, so every row must hold `n + 1` values. A single
    /// equation with two unknowns such as `[[0, 0, 5]]` is not a square system
    /// and is rejected as [`GaussError::DimensionMismatch`]; write it as
    /// `[[0, 0, 5], [0, 0, 0]]` to get the inconsistency from the solver.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GaussError> {
        let n = rows.len();
        if n == 0 {
            return Err(GaussError::EmptySystem);
        }
        let mut flat = Vec::with_capacity(n * (n + 1));
        for row in rows {
            if row.len() != n + 1 {
                return Err(GaussError::DimensionMismatch {
                    expected: n + 1,
                    got: row.len(),
                });
            }
            flat.extend(row);
        }
        let len = flat.len();
        let data = Array2::from_shape_vec((n, n + 1), flat).map_err(|_| {
            GaussError::DimensionMismatch {
                expected: n * (n + 1),
                got: len,
            }
        })?;
        Self::new(data)
    }

    /// Build `[A | b]` from a square coefficient matrix and a right-hand side
    pub fn from_system(a: &Array2<T>, b: &Array1<T>) -> Result<Self, GaussError> {
        let n = a.nrows();
        if n != a.ncols() {
            return Err(GaussError::DimensionMismatch {
                expected: n,
                got: a.ncols(),
            });
        }
        if b.len() != n {
            return Err(GaussError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }
        let mut data = Array2::zeros((n, n + 1));
        data.slice_mut(s![.., ..n]).assign(a);
        data.column_mut(n).assign(b);
        Self::new(data)
    }

    /// Number of equations (and unknowns)
    pub fn n(&self) -> usize {
        self.data.nrows()
    }

    /// Coefficient block `A`
    pub fn coefficients(&self) -> ArrayView2<'_, T> {
        self.data.slice(s![.., ..self.n()])
    }

    /// Right-hand side `b`
    pub fn rhs(&self) -> ArrayView1<'_, T> {
        self.data.column(self.n())
    }

    /// Equation `i`, coefficients followed by its right-hand side
    pub fn row(&self, i: usize) -> ArrayView1<'_, T> {
        self.data.row(i)
    }

    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    pub fn into_inner(self) -> Array2<T> {
        self.data
    }

    /// Same system with its equations reordered: row `i` of the result is
    /// row `order[i]` of `self`.
    pub fn permute_rows(&self, order: &[usize]) -> Result<Self, GaussError> {
        if order.len() != self.n() || order.iter().any(|&r| r >= self.n()) {
            return Err(GaussError::DimensionMismatch {
                expected: self.n(),
                got: order.len(),
            });
        }
        Self::new(self.data.select(Axis(0), order))
    }
}

impl<T: RealField> fmt::Display for AugmentedMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

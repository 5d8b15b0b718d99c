//! Rectangular matrices with an explicit shape.

use crate::errors::LWECryptoError;
use crate::ring::{Ring, Vector};

use itertools::Itertools;

use std::fmt;
use std::ops::Index;

/// A `rows × cols` matrix of `i64` entries.
///
/// Construction rejects jagged rows, so every row always has exactly `cols`
/// entries. Entries are only guaranteed to lie in `[0, q)` once they have gone
/// through a ring operation ([`crate::ring::matrix_mul`], [`crate::ring::matrix_add`])
/// or [`Matrix::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vector>,
}

impl Matrix {
    /// A `rows × cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![vec![0; cols]; rows],
        }
    }

    /// Builds a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::DimensionMismatch` if the rows have different lengths.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Matrix;
    /// let m = Matrix::try_from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(Matrix::try_from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn try_from_rows(data: Vec<Vector>) -> Result<Self, LWECryptoError> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);

        if let Some((i, row)) = data.iter().find_position(|row| row.len() != cols) {
            return Err(LWECryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                cols
            )));
        }

        Ok(Self { rows, cols, data })
    }

    /// Builds a `len × 1` column vector.
    pub fn column(values: Vector) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.into_iter().map(|v| vec![v]).collect(),
        }
    }

    /// Builds a `rows × cols` matrix where entry `(i, j)` is `f(i, j)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> i64) -> Self {
        let data = (0..rows)
            .map(|i| (0..cols).map(|j| f(i, j)).collect())
            .collect();

        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn as_rows(&self) -> &[Vector] {
        &self.data
    }

    /// Iterates over all entries in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = i64> + '_ {
        self.data.iter().flatten().copied()
    }

    /// Folds a `1 × 1` matrix into its single entry.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::DimensionMismatch` for any other shape.
    pub fn scalar(&self) -> Result<i64, LWECryptoError> {
        match self.shape() {
            (1, 1) => Ok(self.data[0][0]),
            (rows, cols) => Err(LWECryptoError::DimensionMismatch(format!(
                "Expected a 1x1 matrix, got {}x{}",
                rows, cols
            ))),
        }
    }

    /// Returns a copy with every entry mapped into `[0, q)`.
    pub fn reduce(&self, ring: &Ring) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&v| ring.normalize(v)).collect())
                .collect(),
        }
    }

    /// Returns `true` if every entry is a canonical representative of `ring`.
    pub fn is_reduced(&self, ring: &Ring) -> bool {
        self.entries().all(|v| ring.contains(v))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .data
            .iter()
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join("\n");

        write!(f, "{}", rendered)
    }
}

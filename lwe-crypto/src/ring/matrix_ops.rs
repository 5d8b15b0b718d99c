use crate::errors::LWECryptoError;
use crate::ring::{Matrix, Ring};

/// Computes the matrix product `C = AB` modulo `q`, where `q` is the modulus of the ring.
///
/// Operands are brought into `[0, q)` first, then every output entry is
/// accumulated in `i128` and reduced exactly once. With `q <= 2^32` each product
/// is below 2^64, so the accumulator cannot overflow.
///
/// # Errors
///
/// Returns `LWECryptoError::DimensionMismatch` if the inner dimensions of the matrices do not match.
///
/// # Example
///
/// ```
/// # use lwe_crypto::ring::{matrix_mul, Matrix, Ring};
/// let ring = Ring::try_with(7).unwrap();
/// let a = Matrix::try_from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// let b = Matrix::try_from_rows(vec![vec![7, 8], vec![9, 1], vec![2, 3]]).unwrap();
/// let c = matrix_mul(&a, &b, &ring).unwrap();
/// assert_eq!(c.as_rows(), &[vec![3, 5], vec![1, 6]]);
/// ```
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, LWECryptoError> {
    if a.cols() != b.rows() {
        return Err(LWECryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({}x{} times {}x{})",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }

    let p = b.cols();
    let mut c = Vec::with_capacity(a.rows());

    let b = b.reduce(ring);
    for a_row in a.as_rows() {
        let mut acc = vec![0i128; p];
        for (&a_ik, b_row) in a_row.iter().zip(b.as_rows()) {
            let a_ik = ring.normalize(a_ik);
            if a_ik == 0 {
                continue;
            }
            for (sum, &b_kj) in acc.iter_mut().zip(b_row) {
                *sum += a_ik as i128 * b_kj as i128;
            }
        }
        c.push(acc.into_iter().map(|sum| ring.reduce_wide(sum)).collect());
    }

    if c.is_empty() {
        return Ok(Matrix::zeros(0, p));
    }

    Matrix::try_from_rows(c)
}

/// Computes the entry-wise sum `C = A + B` modulo `q`.
///
/// # Errors
///
/// Returns `LWECryptoError::DimensionMismatch` if the matrices have different shapes.
pub fn matrix_add(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, LWECryptoError> {
    if a.shape() != b.shape() {
        return Err(LWECryptoError::DimensionMismatch(format!(
            "Matrix shapes must match for addition ({}x{} vs {}x{})",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }

    Ok(Matrix::from_fn(a.rows(), a.cols(), |i, j| {
        ring.add(a[(i, j)], b[(i, j)])
    }))
}

/// Swaps rows and columns. Entries are copied as they are.
pub fn transpose(a: &Matrix) -> Matrix {
    Matrix::from_fn(a.cols(), a.rows(), |i, j| a[(j, i)])
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    Matrix::from_fn(n, n, |i, j| (i == j) as i64)
}

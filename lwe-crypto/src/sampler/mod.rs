//! Random matrices for key generation and encryption.
//!
//! Every sampler takes the random source explicitly, so a seeded generator
//! reproduces keys and ciphertexts exactly.

use crate::errors::LWECryptoError;
use crate::ring::{Matrix, Ring};

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// A `rows × cols` matrix with entries drawn uniformly from `[0, q)`.
pub fn sample_uniform<R: Rng + ?Sized>(rows: usize, cols: usize, ring: &Ring, rng: &mut R) -> Matrix {
    let q = ring.modulus() as i64;
    Matrix::from_fn(rows, cols, |_, _| rng.random_range(0..q))
}

/// A `size × 1` column with entries drawn uniformly from `{0, 1}`.
pub fn sample_binary<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Matrix {
    Matrix::from_fn(size, 1, |_, _| rng.random_range(0..=1))
}

/// A `size × 1` error column.
///
/// Each entry is a standard normal draw scaled by `std_dev`, rounded to the
/// nearest integer and floor-reduced into `[0, q)`. This is a rounded
/// continuous Gaussian, not an exact discrete Gaussian.
///
/// # Errors
///
/// Returns `LWECryptoError::InvalidParameters` if `std_dev` is not finite and positive.
pub fn sample_error<R: Rng + ?Sized>(
    size: usize,
    ring: &Ring,
    std_dev: f64,
    rng: &mut R,
) -> Result<Matrix, LWECryptoError> {
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(LWECryptoError::InvalidParameters(format!(
            "Standard deviation must be finite and > 0, got {}",
            std_dev
        )));
    }

    let normal = Normal::new(0.0, std_dev).map_err(|e| {
        LWECryptoError::InvalidParameters(format!("Failed to build normal distribution: {}", e))
    })?;

    Ok(Matrix::from_fn(size, 1, |_, _| {
        let value: f64 = normal.sample(rng);
        ring.normalize(value.round() as i64)
    }))
}

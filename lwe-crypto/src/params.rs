use crate::errors::LWECryptoError;
use crate::ring::Ring;

use serde::{Deserialize, Serialize};

/// Parameters of one LWE instance, shared read-only by every key and ciphertext
/// produced under it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LweParams {
    /// Dimension of the secret vector `s`.
    pub n: usize,
    /// Number of samples, i.e. rows of the public matrix `A` (m > n).
    pub m: usize,
    /// Modulus of Z_q.
    pub q: u64,
    /// Standard deviation of the Gaussian error added to `A·s`.
    pub std_dev: f64,
}

impl Default for LweParams {
    fn default() -> Self {
        Self {
            n: 128,
            m: 256,
            q: 3329,
            std_dev: 2.0,
        }
    }
}

impl LweParams {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// * `InvalidParameters` unless `m > n > 0` and `std_dev` is finite and positive.
    /// * `InvalidModulus` if `q <= 1`.
    pub fn try_with(n: usize, m: usize, q: u64, std_dev: f64) -> Result<Self, LWECryptoError> {
        let params = Self { n, m, q, std_dev };
        params.validate()?;

        Ok(params)
    }

    /// Checks the invariants `m > n > 0`, `q > 1` and `std_dev > 0`.
    pub fn validate(&self) -> Result<(), LWECryptoError> {
        if self.n == 0 {
            return Err(LWECryptoError::InvalidParameters(
                "Secret dimension n must be > 0".to_string(),
            ));
        }

        if self.m <= self.n {
            return Err(LWECryptoError::InvalidParameters(format!(
                "Number of samples m ({}) must be greater than n ({})",
                self.m, self.n
            )));
        }

        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(LWECryptoError::InvalidParameters(format!(
                "Standard deviation must be finite and > 0, got {}",
                self.std_dev
            )));
        }

        Ring::try_with(self.q).map(|_| ())
    }

    /// Parses and validates parameters from a JSON document such as
    /// `{"n": 128, "m": 256, "q": 3329, "std_dev": 2.0}`.
    pub fn from_json(json: &str) -> Result<Self, LWECryptoError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;

        Ok(params)
    }

    pub fn to_json(&self) -> Result<String, LWECryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The ring Z_q these parameters work in.
    ///
    /// Fails only for parameter sets that bypassed [`LweParams::validate`].
    pub fn ring(&self) -> Result<Ring, LWECryptoError> {
        Ring::try_with(self.q)
    }

    /// `⌊q/2⌋`, the offset that encodes bit 1.
    pub fn half_q(&self) -> i64 {
        (self.q / 2) as i64
    }

    /// `⌊q/4⌋`. Accumulated noise strictly below this is always decoded correctly.
    pub fn noise_bound(&self) -> i64 {
        (self.q / 4) as i64
    }
}

//! Implementation of ring ops using floor modular arithmetic.

use crate::errors::LWECryptoError;

use num_integer::Integer;

/// Largest accepted modulus.
///
/// Reduced products stay below 2^64, so an `i128` accumulator holds the sum of
/// up to 2^63 of them.
pub const MAX_MODULUS: u64 = 1 << 32;

/// Represents a finite ring Z_q with canonical representatives in `[0, q)`.
///
/// Only [`Ring::try_with`] builds one, so the modulus is always valid:
///
/// ```compile_fail
/// # use lwe_crypto::ring::Ring;
/// let ring = Ring { modulus: 0 };
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and at most [`MAX_MODULUS`].
    pub fn try_with(modulus: u64) -> Result<Self, LWECryptoError> {
        if modulus <= 1 {
            return Err(LWECryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }
        if modulus > MAX_MODULUS {
            return Err(LWECryptoError::InvalidModulus(format!(
                "Modulus must be at most {}, got {}",
                MAX_MODULUS, modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(3329).unwrap();
    /// assert_eq!(ring.modulus(), 3329);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Floor modulo: maps any value into `[0, modulus)`, also for negative input.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.mod_floor(&(self.modulus as i64))
    }

    /// Floor modulo for a wide accumulator, used once per matrix entry after
    /// summing products.
    pub fn reduce_wide(&self, value: i128) -> i64 {
        value.mod_floor(&(self.modulus as i128)) as i64
    }

    /// Returns `true` if `value` is a canonical representative.
    pub fn contains(&self, value: i64) -> bool {
        (0..self.modulus as i64).contains(&value)
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.add(7, 5), 2);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        self.reduce_wide(a as i128 + b as i128)
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 8);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.reduce_wide(a as i128 - b as i128)
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        self.reduce_wide(a as i128 * b as i128)
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        self.reduce_wide(-(a as i128))
    }
}

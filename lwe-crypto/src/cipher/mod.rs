//! Single-bit Regev encryption.
//!
//! A bit is hidden as `v = Bᵗ·r + bit·⌊q/2⌋` next to `u = Aᵗ·r`, for a fresh
//! random 0/1 vector `r`. Decryption removes `sᵗ·u`, which leaves
//! `bit·⌊q/2⌋ + eᵗ·r`, and rounds to whichever of `0` or `⌊q/2⌋` is closer.

use crate::errors::LWECryptoError;
use crate::keypair::{PrivateKey, PublicKey};
use crate::ring::matrix_ops::{matrix_mul, transpose};
use crate::ring::{Matrix, Ring};
use crate::sampler::sample_binary;

use rand::Rng;

/// Ciphertext of a single bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    /// `Aᵗ·r mod q`, an n×1 column.
    pub u: Matrix,
    /// `Bᵗ·r + bit·⌊q/2⌋ mod q`.
    pub v: i64,
}

impl Ciphertext {
    pub fn new(u: Matrix, v: i64) -> Self {
        Self { u, v }
    }
}

impl PublicKey {
    /// Encrypts one bit.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::InvalidInput` if `bit` is not 0 or 1.
    pub fn encrypt_bit<R: Rng + ?Sized>(&self, bit: u8, rng: &mut R) -> Result<Ciphertext, LWECryptoError> {
        if bit > 1 {
            return Err(LWECryptoError::InvalidInput(format!(
                "Message must be a single bit (0 or 1), got {}",
                bit
            )));
        }

        let ring = self.params.ring()?;
        let vector_r = sample_binary(self.params.m, rng);

        let u = matrix_mul(&transpose(&self.matrix_A), &vector_r, &ring)?;
        let v_raw = matrix_mul(&transpose(&self.vector_B), &vector_r, &ring)?.scalar()?;
        let v = ring.add(v_raw, i64::from(bit) * self.params.half_q());

        Ok(Ciphertext { u, v })
    }
}

impl PrivateKey {
    /// Decrypts one bit.
    ///
    /// The result is only probabilistically correct: if the accumulated noise
    /// reaches `⌊q/4⌋` the wrong bit comes back, without an error.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::DimensionMismatch` if `u` is not an n×1 column.
    pub fn decrypt_bit(&self, ciphertext: &Ciphertext) -> Result<u8, LWECryptoError> {
        let ring = self.params.ring()?;

        let s_t_u = matrix_mul(&transpose(&self.vector_s), &ciphertext.u, &ring)?.scalar()?;
        let raw = ring.sub(ciphertext.v, s_t_u);

        Ok(decode_bit(raw, &ring))
    }
}

/// Rounds a noisy residue to a bit.
///
/// With `d0 = min(raw, q - raw)` (circular distance to 0) and
/// `d_half = |raw - ⌊q/2⌋|`, the result is 0 iff `d0 < d_half`. A tie decodes
/// to 1.
///
/// # Example
///
/// ```
/// # use lwe_crypto::cipher::decode_bit;
/// # use lwe_crypto::ring::Ring;
/// let ring = Ring::try_with(3329).unwrap();
/// assert_eq!(decode_bit(3, &ring), 0);
/// assert_eq!(decode_bit(3327, &ring), 0);
/// assert_eq!(decode_bit(1660, &ring), 1);
/// assert_eq!(decode_bit(832, &ring), 1); // tie
/// ```
pub fn decode_bit(raw: i64, ring: &Ring) -> u8 {
    let q = ring.modulus() as i64;
    let raw = ring.normalize(raw);

    let distance_to_zero = raw.min(q - raw);
    let distance_to_half = (raw - q / 2).abs();

    if distance_to_zero < distance_to_half { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::keypair::{KeyPair, generate_key_pair};
    use crate::params::LweParams;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TEST_SEED: u64 = 7;

    fn test_keys() -> (PublicKey, PrivateKey) {
        let params = LweParams::default();
        generate_key_pair(&params, &mut StdRng::seed_from_u64(TEST_SEED)).unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_both_bits() -> Result<(), LWECryptoError> {
        let (public_key, private_key) = test_keys();
        let mut rng = StdRng::seed_from_u64(TEST_SEED);

        for bit in [0u8, 1] {
            for _ in 0..50 {
                let ciphertext = public_key.encrypt_bit(bit, &mut rng)?;
                assert_eq!(ciphertext.u.shape(), (128, 1));
                assert!(public_key.params.ring()?.contains(ciphertext.v));
                assert_eq!(private_key.decrypt_bit(&ciphertext)?, bit);
            }
        }
        Ok(())
    }

    #[test]
    fn test_invalid_bit_is_rejected() {
        let (public_key, _) = test_keys();
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        for bit in [2u8, 7, u8::MAX] {
            assert!(matches!(
                public_key.encrypt_bit(bit, &mut rng),
                Err(LWECryptoError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_encryption_is_randomized() -> Result<(), LWECryptoError> {
        let (public_key, _) = test_keys();
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        let c1 = public_key.encrypt_bit(1, &mut rng)?;
        let c2 = public_key.encrypt_bit(1, &mut rng)?;
        assert_ne!(c1, c2);
        Ok(())
    }

    #[test]
    fn test_wrong_key_shape_is_dimension_mismatch() -> Result<(), LWECryptoError> {
        let (public_key, _) = test_keys();
        let small = LweParams::try_with(4, 8, 3329, 2.0)?;
        let other = KeyPair::generate(&small, &mut StdRng::seed_from_u64(TEST_SEED))?;

        let ciphertext = public_key.encrypt_bit(0, &mut StdRng::seed_from_u64(TEST_SEED))?;
        assert!(matches!(
            other.private_key.decrypt_bit(&ciphertext),
            Err(LWECryptoError::DimensionMismatch(_))
        ));
        Ok(())
    }

    #[test]
    fn test_decision_boundary() -> Result<(), LWECryptoError> {
        let params = LweParams::default();
        let ring = params.ring()?;
        let (half, quarter) = (params.half_q(), params.noise_bound());
        let (_, private_key) = test_keys();
        // with u = 0, sᵗ·u vanishes and raw == v
        let zero_u = Matrix::zeros(params.n, 1);

        // v = ⌊q/2⌋ + ⌊q/4⌋ = 2496: d0 = 833, d_half = 832
        let boundary = Ciphertext::new(zero_u.clone(), half + quarter);
        assert_eq!(private_key.decrypt_bit(&boundary)?, 1);

        // one step further: d0 = 832, d_half = 833
        let past = Ciphertext::new(zero_u.clone(), half + quarter + 1);
        assert_eq!(private_key.decrypt_bit(&past)?, 0);

        // raw = 832 is an exact tie (d0 = d_half = 832) and resolves to 1
        let tie = Ciphertext::new(zero_u.clone(), quarter);
        assert_eq!(private_key.decrypt_bit(&tie)?, 1);
        assert_eq!(decode_bit(quarter - 1, &ring), 0);

        assert_eq!(private_key.decrypt_bit(&Ciphertext::new(zero_u.clone(), 0))?, 0);
        assert_eq!(private_key.decrypt_bit(&Ciphertext::new(zero_u, half))?, 1);
        Ok(())
    }

    #[test]
    fn test_decode_bit_small_modulus() -> Result<(), LWECryptoError> {
        let ring = Ring::try_with(13)?;
        // ⌊13/2⌋ = 6
        let decoded: Vec<u8> = (0..13).map(|raw| decode_bit(raw, &ring)).collect();
        assert_eq!(decoded, vec![0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0]);
        // out-of-range input is reduced first
        assert_eq!(decode_bit(-1, &ring), 0);
        assert_eq!(decode_bit(19, &ring), 1);
        Ok(())
    }
}

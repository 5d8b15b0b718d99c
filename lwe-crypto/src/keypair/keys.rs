use crate::errors::LWECryptoError;
use crate::params::LweParams;
use crate::ring::matrix_ops::{matrix_add, matrix_mul};
use crate::ring::Matrix;
use crate::sampler::{sample_error, sample_uniform};

use log::debug;
use rand::Rng;

/// Public key `(A, B)` with `B = A·s + e (mod q)`.
#[derive(Debug, Clone)]
pub struct PublicKey {
    pub params: LweParams,
    /// m×n, uniform over Z_q.
    pub matrix_A: Matrix,
    /// m×1.
    pub vector_B: Matrix,
}

/// The secret `s`, an n×1 column over Z_q.
#[derive(Debug, Clone)]
pub struct PrivateKey {
    pub params: LweParams,
    pub vector_s: Matrix,
}

#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub private_key: PrivateKey,
}

impl KeyPair {
    /// Generates a fresh key pair.
    ///
    /// 1. `s` ← U(Z_q)^n
    /// 2. `A` ← U(Z_q)^{m×n}
    /// 3. `e` ← rounded Gaussian, m×1
    /// 4. `B = A·s + e (mod q)`
    pub fn generate<R: Rng + ?Sized>(params: &LweParams, rng: &mut R) -> Result<Self, LWECryptoError> {
        params.validate()?;
        let ring = params.ring()?;

        debug!(
            "generating LWE key pair: n={}, m={}, q={}, std_dev={}",
            params.n, params.m, params.q, params.std_dev
        );

        let vector_s = sample_uniform(params.n, 1, &ring, rng);
        let matrix_A = sample_uniform(params.m, params.n, &ring, rng);
        let vector_e = sample_error(params.m, &ring, params.std_dev, rng)?;

        let vector_As = matrix_mul(&matrix_A, &vector_s, &ring)?;
        let vector_B = matrix_add(&vector_As, &vector_e, &ring)?;

        Ok(Self {
            public_key: PublicKey {
                params: *params,
                matrix_A,
                vector_B,
            },
            private_key: PrivateKey {
                params: *params,
                vector_s,
            },
        })
    }
}

/// Generates a key pair and splits it into its halves.
pub fn generate_key_pair<R: Rng + ?Sized>(
    params: &LweParams,
    rng: &mut R,
) -> Result<(PublicKey, PrivateKey), LWECryptoError> {
    let KeyPair {
        public_key,
        private_key,
    } = KeyPair::generate(params, rng)?;

    Ok((public_key, private_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ring::matrix_ops::transpose;
    use crate::ring::Ring;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TEST_SEED: u64 = 12345;

    #[test]
    fn test_key_shapes() -> Result<(), LWECryptoError> {
        let params = LweParams::default();
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        let (public_key, private_key) = generate_key_pair(&params, &mut rng)?;
        let ring = params.ring()?;

        assert_eq!(public_key.matrix_A.shape(), (256, 128));
        assert_eq!(public_key.vector_B.shape(), (256, 1));
        assert_eq!(private_key.vector_s.shape(), (128, 1));

        assert!(public_key.matrix_A.is_reduced(&ring));
        assert!(public_key.vector_B.is_reduced(&ring));
        assert!(private_key.vector_s.is_reduced(&ring));
        Ok(())
    }

    #[test]
    fn test_b_minus_as_is_small_noise() -> Result<(), LWECryptoError> {
        let params = LweParams::try_with(16, 48, 3329, 2.0)?;
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        let pair = KeyPair::generate(&params, &mut rng)?;
        let ring: Ring = params.ring()?;

        let vector_As = matrix_mul(&pair.public_key.matrix_A, &pair.private_key.vector_s, &ring)?;
        let q = params.q as i64;
        for (b, as_i) in pair.public_key.vector_B.entries().zip(vector_As.entries()) {
            let e = ring.sub(b, as_i);
            let centered = if e > q / 2 { e - q } else { e };
            assert!(centered.abs() <= 20, "error entry {} is not small", centered);
        }

        // the transpose of the secret is a 1×n row
        assert_eq!(transpose(&pair.private_key.vector_s).shape(), (1, 16));
        Ok(())
    }

    #[test]
    fn test_seeded_generation_is_reproducible() -> Result<(), LWECryptoError> {
        let params = LweParams::try_with(8, 16, 97, 1.0)?;
        let a = KeyPair::generate(&params, &mut StdRng::seed_from_u64(TEST_SEED))?;
        let b = KeyPair::generate(&params, &mut StdRng::seed_from_u64(TEST_SEED))?;
        let c = KeyPair::generate(&params, &mut StdRng::seed_from_u64(TEST_SEED + 1))?;

        assert_eq!(a.public_key.matrix_A, b.public_key.matrix_A);
        assert_eq!(a.private_key.vector_s, b.private_key.vector_s);
        assert_ne!(a.public_key.matrix_A, c.public_key.matrix_A);
        Ok(())
    }

    #[test]
    fn test_oversized_modulus_fails_instead_of_overflowing() {
        let params = LweParams {
            n: 16,
            m: 32,
            q: i64::MAX as u64,
            std_dev: 2.0,
        };
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        assert!(matches!(
            generate_key_pair(&params, &mut rng),
            Err(LWECryptoError::InvalidModulus(_))
        ));
    }

    #[test]
    fn test_largest_modulus_round_trips() -> Result<(), LWECryptoError> {
        let params = LweParams::try_with(16, 32, crate::ring::MAX_MODULUS, 2.0)?;
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        let (public_key, private_key) = generate_key_pair(&params, &mut rng)?;
        assert!(public_key.vector_B.is_reduced(&params.ring()?));

        for bit in [0u8, 1] {
            let ciphertext = public_key.encrypt_bit(bit, &mut rng)?;
            assert_eq!(private_key.decrypt_bit(&ciphertext)?, bit);
        }
        Ok(())
    }

    #[test]
    fn test_rejects_unvalidated_params() {
        let params = LweParams {
            n: 10,
            m: 4,
            q: 97,
            std_dev: 1.0,
        };
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        assert!(matches!(
            KeyPair::generate(&params, &mut rng),
            Err(LWECryptoError::InvalidParameters(_))
        ));
    }
}

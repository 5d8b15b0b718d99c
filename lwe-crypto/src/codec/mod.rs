//! Byte-string encryption on top of the bit cipher.
//!
//! Every byte becomes eight bit ciphertexts, most significant bit first, so a
//! plaintext of `len` UTF-8 bytes maps to exactly `8 * len` ciphertexts.

use crate::cipher::Ciphertext;
use crate::errors::LWECryptoError;
use crate::keypair::{PrivateKey, PublicKey};

use itertools::Itertools;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

pub const BITS_PER_BYTE: usize = 8;

/// Splits bytes into bits, most significant bit of each byte first.
///
/// # Example
///
/// ```
/// # use lwe_crypto::codec::bytes_to_bits;
/// assert_eq!(bytes_to_bits(&[0b1000_0101]), vec![1, 0, 0, 0, 0, 1, 0, 1]);
/// ```
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |i| (byte >> i) & 1))
        .collect()
}

/// Packs bits, most significant first, back into bytes.
///
/// # Errors
///
/// Returns `LWECryptoError::InvalidInput` if the bit count is not a multiple of 8
/// or a value other than 0 or 1 shows up.
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>, LWECryptoError> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(LWECryptoError::InvalidInput(format!(
            "Ciphertext sequence length {} is not a multiple of {}",
            bits.len(),
            BITS_PER_BYTE
        )));
    }
    if let Some((i, bit)) = bits.iter().find_position(|&&bit| bit > 1) {
        return Err(LWECryptoError::InvalidInput(format!(
            "Value {} at position {} is not a bit",
            bit, i
        )));
    }

    Ok(pack_full_bytes(bits))
}

/// Packs every complete group of 8 bits; trailing bits are dropped.
fn pack_full_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(BITS_PER_BYTE)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | (bit & 1)))
        .collect()
}

impl PublicKey {
    /// Encrypts every bit of `bytes`, most significant bit first.
    pub fn encrypt_bytes<R: Rng + ?Sized>(
        &self,
        bytes: &[u8],
        rng: &mut R,
    ) -> Result<Vec<Ciphertext>, LWECryptoError> {
        debug!(
            "encrypting {} bytes into {} bit ciphertexts",
            bytes.len(),
            bytes.len() * BITS_PER_BYTE
        );

        bytes_to_bits(bytes)
            .into_iter()
            .map(|bit| self.encrypt_bit(bit, rng))
            .collect()
    }

    /// Encrypts the UTF-8 encoding of `text`.
    ///
    /// The empty string produces an empty sequence.
    pub fn encrypt_text<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> Result<Vec<Ciphertext>, LWECryptoError> {
        self.encrypt_bytes(text.as_bytes(), rng)
    }

    /// Same output layout as [`PublicKey::encrypt_text`], with the bits
    /// encrypted in parallel.
    ///
    /// Each bit gets its own `StdRng` seeded from `rng` before any work is
    /// spread out, so a seeded `rng` still gives reproducible ciphertexts.
    pub fn par_encrypt_text<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> Result<Vec<Ciphertext>, LWECryptoError> {
        let bits = bytes_to_bits(text.as_bytes());
        debug!("encrypting {} bits in parallel", bits.len());

        let bit_rngs: Vec<StdRng> = bits
            .iter()
            .map(|_| StdRng::from_seed(rng.random()))
            .collect();

        bits.into_par_iter()
            .zip(bit_rngs)
            .map(|(bit, mut bit_rng)| self.encrypt_bit(bit, &mut bit_rng))
            .collect()
    }
}

impl PrivateKey {
    /// Decrypts a sequence produced by [`PublicKey::encrypt_bytes`].
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::InvalidInput` if the sequence does not cover whole bytes.
    pub fn decrypt_bytes(&self, ciphertexts: &[Ciphertext]) -> Result<Vec<u8>, LWECryptoError> {
        check_whole_bytes(ciphertexts)?;
        debug!("decrypting {} bit ciphertexts", ciphertexts.len());

        let bits = ciphertexts
            .iter()
            .map(|ciphertext| self.decrypt_bit(ciphertext))
            .collect::<Result<Vec<u8>, _>>()?;

        bits_to_bytes(&bits)
    }

    /// Decrypts a sequence produced by [`PublicKey::encrypt_text`].
    ///
    /// # Errors
    ///
    /// * `InvalidInput` if the sequence length is not a multiple of 8.
    /// * `DecodeError` if the recovered bytes are not valid UTF-8.
    pub fn decrypt_text(&self, ciphertexts: &[Ciphertext]) -> Result<String, LWECryptoError> {
        let bytes = self.decrypt_bytes(ciphertexts)?;

        Ok(String::from_utf8(bytes)?)
    }

    /// Tolerant variant of [`PrivateKey::decrypt_text`]: trailing ciphertexts
    /// that do not fill a byte are ignored and invalid UTF-8 is replaced with
    /// U+FFFD.
    pub fn decrypt_text_lossy(&self, ciphertexts: &[Ciphertext]) -> Result<String, LWECryptoError> {
        let whole = ciphertexts.len() - ciphertexts.len() % BITS_PER_BYTE;
        if whole != ciphertexts.len() {
            debug!(
                "dropping {} trailing bit ciphertexts",
                ciphertexts.len() - whole
            );
        }

        let bits = ciphertexts[..whole]
            .iter()
            .map(|ciphertext| self.decrypt_bit(ciphertext))
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(String::from_utf8_lossy(&pack_full_bytes(&bits)).into_owned())
    }

    /// Same as [`PrivateKey::decrypt_text`], with the bits decrypted in parallel.
    pub fn par_decrypt_text(&self, ciphertexts: &[Ciphertext]) -> Result<String, LWECryptoError> {
        check_whole_bytes(ciphertexts)?;
        debug!("decrypting {} bit ciphertexts in parallel", ciphertexts.len());

        let bits = ciphertexts
            .par_iter()
            .map(|ciphertext| self.decrypt_bit(ciphertext))
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(String::from_utf8(bits_to_bytes(&bits)?)?)
    }
}

fn check_whole_bytes(ciphertexts: &[Ciphertext]) -> Result<(), LWECryptoError> {
    if ciphertexts.len() % BITS_PER_BYTE != 0 {
        return Err(LWECryptoError::InvalidInput(format!(
            "Ciphertext sequence length {} is not a multiple of {}",
            ciphertexts.len(),
            BITS_PER_BYTE
        )));
    }

    Ok(())
}

#![allow(non_snake_case)]

//! # LWE Crypto
//!
//! Regev's Learning-With-Errors public-key cryptosystem: key generation,
//! single-bit encryption under Gaussian noise and bit-by-bit encryption of
//! byte strings.
//!
//! ```
//! use lwe_crypto::{LweParams, generate_key_pair};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let params = LweParams::try_with(16, 32, 3329, 2.0).unwrap();
//! let (public_key, private_key) = generate_key_pair(&params, &mut rng).unwrap();
//!
//! let ciphertexts = public_key.encrypt_text("hi", &mut rng).unwrap();
//! assert_eq!(ciphertexts.len(), 16);
//! assert_eq!(private_key.decrypt_text(&ciphertexts).unwrap(), "hi");
//! ```

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod keypair;
pub mod params;
pub mod preset;
pub mod ring;
pub mod sampler;

pub use cipher::{Ciphertext, decode_bit};
pub use errors::LWECryptoError;
pub use keypair::{KeyPair, PrivateKey, PublicKey, generate_key_pair};
pub use params::LweParams;

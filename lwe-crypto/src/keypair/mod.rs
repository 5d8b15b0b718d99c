pub mod keys;

pub use keys::{KeyPair, PrivateKey, PublicKey, generate_key_pair};

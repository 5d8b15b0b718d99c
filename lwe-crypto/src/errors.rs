#[derive(thiserror::Error, Debug)]
pub enum LWECryptoError {
    /// Matrix shapes are structurally incompatible for the requested operation.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// A caller-supplied value is outside its domain (a bit not in {0, 1},
    /// a ciphertext sequence that does not cover whole bytes).
    #[error("InvalidInput: {0}")]
    InvalidInput(String),
    /// Decrypted bytes are not valid UTF-8.
    #[error("DecodeError: {0}")]
    DecodeError(#[from] std::string::FromUtf8Error),
    /// Error when creating a ring with an invalid modulus (q <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}

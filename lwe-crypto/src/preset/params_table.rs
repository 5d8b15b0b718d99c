use crate::errors::LWECryptoError;
use crate::params::LweParams;

use lazy_static::lazy_static;

use std::collections::HashMap;

lazy_static! {
    /// Named parameter sets.
    ///
    /// * `toy` is small enough to inspect by hand and is only meant for tests.
    /// * `regev-128` is [`LweParams::default`].
    /// * `regev-256` doubles the dimensions with a larger modulus.
    pub static ref PRESET_PARAMS: HashMap<&'static str, LweParams> = {
        let mut map = HashMap::new();
        map.insert(
            "toy",
            LweParams {
                n: 4,
                m: 8,
                q: 97,
                std_dev: 1.0,
            },
        );
        map.insert("regev-128", LweParams::default());
        map.insert(
            "regev-256",
            LweParams {
                n: 256,
                m: 512,
                q: 7681,
                std_dev: 3.0,
            },
        );
        map
    };
}

/// Looks up a preset by name.
pub fn preset(name: &str) -> Result<LweParams, LWECryptoError> {
    PRESET_PARAMS.get(name).copied().ok_or_else(|| {
        LWECryptoError::InvalidParameters(format!("Unknown parameter preset '{}'", name))
    })
}

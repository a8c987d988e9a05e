pub use bitcoin::hashes::{Hash, sha256d::Hash as Sha256Hash};
use scrypt::{Params as ScryptParams, scrypt};
use thiserror::Error;

/// Cost parameter of the proof-of-work scrypt, as a power of two (N = 1024).
const SCRYPT_LOG_N: u8 = 10;
/// Block size parameter of the proof-of-work scrypt.
const SCRYPT_R: u32 = 1;
/// Parallelisation parameter of the proof-of-work scrypt.
const SCRYPT_P: u32 = 1;
/// Output length of the proof-of-work scrypt.
const SCRYPT_LEN: usize = 32;

/// Errors raised by the hashing collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HashError {
    /// The scrypt cost parameters were rejected.
    #[error("invalid scrypt parameters")]
    InvalidParams,
    /// The scrypt output buffer has an unsupported length.
    #[error("invalid scrypt output length")]
    InvalidOutputLength,
}

/// Scrypt (N=1024, r=1, p=1) of `data`, salted with itself.
///
/// This is the header hash of SteadyNode blocks. The returned bytes are in
/// internal (little-endian) order, ready for `BlockHash::from_byte_array`.
pub fn scrypt_1024_1_1(data: &[u8]) -> Result<[u8; SCRYPT_LEN], HashError> {
    let params = ScryptParams::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, SCRYPT_LEN)
        .map_err(|_| HashError::InvalidParams)?;
    let mut out = [0u8; SCRYPT_LEN];
    scrypt(data, data, &params, &mut out).map_err(|_| HashError::InvalidOutputLength)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrypt_is_deterministic() {
        let a = scrypt_1024_1_1(b"steadynode").unwrap();
        let b = scrypt_1024_1_1(b"steadynode").unwrap();
        let c = scrypt_1024_1_1(b"steadynodf").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sha256d_of_empty_input() {
        let hash = Sha256Hash::hash(&[]);
        assert_eq!(
            hex::encode(hash.as_byte_array()),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }
}

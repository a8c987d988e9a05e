//! Proof-of-work targets.
//!
//! A Target is a 256-bit value that represents the difficulty threshold for
//! mining a block. The lower the target, the higher the difficulty.

use std::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Represents a target value expressed as an unsigned 256-bit integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Target(U256);

impl Target {
    /// The proof-of-work ceiling shared by every SteadyNode network:
    /// `(2^256 - 1) >> 16`.
    pub const fn pow_limit() -> Self {
        Target(U256([u64::MAX, u64::MAX, u64::MAX, 0x0000_ffff_ffff_ffff]))
    }

    /// Wraps a 256-bit integer.
    pub const fn from_u256(value: U256) -> Self {
        Target(value)
    }

    /// Returns the target as big-endian bytes.
    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_big_endian()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_limit_value() {
        assert_eq!(Target::pow_limit(), Target::from_u256(U256::MAX >> 16));
        assert_eq!(
            Target::pow_limit().to_string(),
            "0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
        let bytes = Target::pow_limit().to_be_bytes();
        assert_eq!(&bytes[..2], &[0, 0]);
        assert!(bytes[2..].iter().all(|b| *b == 0xff));
    }

    #[test]
    fn test_pow_limit_is_upper_bound() {
        let easier = Target::from_u256(U256::MAX >> 15);
        assert!(Target::pow_limit() < easier);
        assert!(Target::from_u256(U256::one()) < Target::pow_limit());
    }
}

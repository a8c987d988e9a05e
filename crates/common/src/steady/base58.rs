//! Base58 address prefixes.
//!
//! A prefix is prepended to a payload before Base58Check encoding; decoders
//! use it to recognise what the payload is for.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The purposes a Base58 prefix can be registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Base58Type {
    /// Pay-to-public-key-hash address.
    PubkeyAddress,
    /// Pay-to-script-hash address.
    ScriptAddress,
    /// WIF-encoded private key.
    SecretKey,
    /// Stealth address.
    StealthAddress,
    /// BIP32 extended public key.
    ExtPublicKey,
    /// BIP32 extended private key.
    ExtSecretKey,
}

impl Base58Type {
    /// Every purpose, in table order.
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::StealthAddress,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    const fn index(self) -> usize {
        match self {
            Base58Type::PubkeyAddress => 0,
            Base58Type::ScriptAddress => 1,
            Base58Type::SecretKey => 2,
            Base58Type::StealthAddress => 3,
            Base58Type::ExtPublicKey => 4,
            Base58Type::ExtSecretKey => 5,
        }
    }

    /// Whether the prefix for this purpose is a 4-byte extended-key version.
    pub const fn is_extended(self) -> bool {
        matches!(self, Base58Type::ExtPublicKey | Base58Type::ExtSecretKey)
    }
}

impl fmt::Display for Base58Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Base58Type::PubkeyAddress => "PUBKEY_ADDRESS",
            Base58Type::ScriptAddress => "SCRIPT_ADDRESS",
            Base58Type::SecretKey => "SECRET_KEY",
            Base58Type::StealthAddress => "STEALTH_ADDRESS",
            Base58Type::ExtPublicKey => "EXT_PUBLIC_KEY",
            Base58Type::ExtSecretKey => "EXT_SECRET_KEY",
        };
        f.write_str(name)
    }
}

/// Errors raised while building a prefix table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PrefixError {
    /// A prefix has the wrong width for its purpose.
    #[error("{kind} prefix must be {expected} byte(s), got {actual}")]
    InvalidLength {
        /// The purpose whose prefix is malformed.
        kind: Base58Type,
        /// Required width.
        expected: usize,
        /// Supplied width.
        actual: usize,
    },
    /// Two purposes share a prefix, making decoded payloads ambiguous.
    #[error("{first} and {second} share prefix {prefix}")]
    Collision {
        /// The purpose that claimed the prefix first.
        first: Base58Type,
        /// The purpose that collides with it.
        second: Base58Type,
        /// The shared prefix, hex encoded.
        prefix: String,
    },
}

/// The complete prefix table of one network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Base58Prefixes {
    prefixes: [Vec<u8>; 6],
}

impl Base58Prefixes {
    /// Builds a table from the single-byte prefixes and the extended-key
    /// versions, rejecting any collision between purposes.
    pub fn new(
        pubkey_address: u8,
        script_address: u8,
        secret_key: u8,
        stealth_address: u8,
        ext_public_key: [u8; 4],
        ext_secret_key: [u8; 4],
    ) -> Result<Self, PrefixError> {
        Self::from_table([
            vec![pubkey_address],
            vec![script_address],
            vec![secret_key],
            vec![stealth_address],
            ext_public_key.to_vec(),
            ext_secret_key.to_vec(),
        ])
    }

    /// Builds a table from raw prefixes, indexed in [`Base58Type::ALL`] order.
    pub fn from_table(prefixes: [Vec<u8>; 6]) -> Result<Self, PrefixError> {
        for (kind, prefix) in Base58Type::ALL.iter().zip(prefixes.iter()) {
            let expected = if kind.is_extended() { 4 } else { 1 };
            if prefix.len() != expected {
                return Err(PrefixError::InvalidLength {
                    kind: *kind,
                    expected,
                    actual: prefix.len(),
                });
            }
        }

        for (i, (first, a)) in Base58Type::ALL.iter().zip(prefixes.iter()).enumerate() {
            for (second, b) in Base58Type::ALL.iter().zip(prefixes.iter()).skip(i.saturating_add(1)) {
                if a == b {
                    return Err(PrefixError::Collision {
                        first: *first,
                        second: *second,
                        prefix: hex::encode(a),
                    });
                }
            }
        }

        Ok(Self { prefixes })
    }

    /// Returns the prefix registered for `kind`.
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        self.prefixes
            .get(kind.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates over every purpose and its prefix.
    pub fn iter(&self) -> impl Iterator<Item = (Base58Type, &[u8])> {
        Base58Type::ALL
            .into_iter()
            .zip(self.prefixes.iter().map(Vec::as_slice))
    }
}

impl std::ops::Index<Base58Type> for Base58Prefixes {
    type Output = [u8];

    fn index(&self, kind: Base58Type) -> &[u8] {
        self.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Base58Prefixes {
        Base58Prefixes::new(
            63,
            125,
            127,
            129,
            [0x04, 0x88, 0xb2, 0x1e],
            [0x04, 0x88, 0xad, 0xe4],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_by_purpose() {
        let prefixes = sample();
        assert_eq!(prefixes.get(Base58Type::PubkeyAddress), &[63]);
        assert_eq!(&prefixes[Base58Type::ScriptAddress], &[125]);
        assert_eq!(prefixes.get(Base58Type::ExtSecretKey), &[0x04, 0x88, 0xad, 0xe4]);
        assert_eq!(prefixes.iter().count(), 6);
    }

    #[test]
    fn test_single_byte_collision_rejected() {
        let err = Base58Prefixes::new(
            63,
            63,
            127,
            129,
            [0x04, 0x88, 0xb2, 0x1e],
            [0x04, 0x88, 0xad, 0xe4],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PrefixError::Collision {
                first: Base58Type::PubkeyAddress,
                second: Base58Type::ScriptAddress,
                prefix: "3f".to_string(),
            }
        );
    }

    #[test]
    fn test_extended_key_collision_rejected() {
        let version = [0x04, 0x88, 0xb2, 0x1e];
        let err = Base58Prefixes::new(63, 125, 127, 129, version, version).unwrap_err();
        assert!(matches!(err, PrefixError::Collision { .. }));
    }

    #[test]
    fn test_wrong_width_rejected() {
        let err = Base58Prefixes::from_table([
            vec![63, 0],
            vec![125],
            vec![127],
            vec![129],
            vec![0x04, 0x88, 0xb2, 0x1e],
            vec![0x04, 0x88, 0xad, 0xe4],
        ])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "PUBKEY_ADDRESS prefix must be 1 byte(s), got 2"
        );
    }
}

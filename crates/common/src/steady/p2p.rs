use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::steady::{
    consensus::Encodable,
    io::{Error as IoError, Write},
    network::Network,
};

/// Message-start bytes prefixed to every wire message.
///
/// The values are rarely used upper ASCII, invalid as UTF-8, and produce a
/// large 4-byte integer at any alignment, so they are unlikely to occur in
/// normal data.
#[derive(Debug, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize)]
pub struct Magic([u8; 4]);

impl Magic {
    /// SteadyNode main network magic bytes.
    pub const MAINNET: Self = Self([0xba, 0x1f, 0x43, 0x4a]);
    /// SteadyNode test network magic bytes.
    pub const TESTNET: Self = Self([0x1d, 0x7e, 0xa6, 0x2c]);

    /// Returns the magic bytes as a 4-byte array.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl From<[u8; 4]> for Magic {
    fn from(bytes: [u8; 4]) -> Self {
        Magic(bytes)
    }
}

impl From<Network> for Magic {
    fn from(network: Network) -> Self {
        match network {
            Network::Mainnet => Magic::MAINNET,
            Network::Testnet => Magic::TESTNET,
        }
    }
}

impl std::fmt::Display for Magic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        hex::encode(self.0).fmt(f)
    }
}

impl Encodable for Magic {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        self.0.consensus_encode(writer)
    }
}

/// Errors that can occur when working with magic bytes.
#[derive(Debug, PartialEq, Clone, Copy, Error)]
pub enum MagicError {
    /// The magic bytes don't correspond to any known network.
    #[error("unknown network magic: {0}")]
    UnknownMagic(Magic),
}

impl TryFrom<Magic> for Network {
    type Error = MagicError;

    fn try_from(magic: Magic) -> Result<Self, Self::Error> {
        match magic {
            Magic::MAINNET => Ok(Network::Mainnet),
            Magic::TESTNET => Ok(Network::Testnet),
            _ => Err(MagicError::UnknownMagic(magic)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steady::consensus::serialize;

    #[test]
    fn test_magic_differs_byte_for_byte() {
        let main = Magic::MAINNET.to_bytes();
        let test = Magic::TESTNET.to_bytes();
        for (a, b) in main.iter().zip(test.iter()) {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_magic_network_mapping() {
        for network in Network::ALL {
            assert_eq!(Network::from_magic(network.magic()), Some(network));
        }
        let foreign = Magic::from([0xf9, 0xbe, 0xb4, 0xd9]);
        assert_eq!(Network::from_magic(foreign), None);
        assert_eq!(
            Network::try_from(foreign).unwrap_err().to_string(),
            "unknown network magic: f9beb4d9"
        );
    }

    #[test]
    fn test_magic_encoding() {
        assert_eq!(serialize(&Magic::MAINNET), vec![0xba, 0x1f, 0x43, 0x4a]);
        assert_eq!(Magic::TESTNET.to_string(), "1d7ea62c");
    }
}

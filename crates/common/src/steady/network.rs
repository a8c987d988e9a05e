use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::steady::p2p::Magic;

/// Errors that can occur when parsing a chain type.
#[derive(Clone, Debug, Error)]
pub enum ChainTypeError {
    /// The provided chain type string is invalid.
    #[error("Invalid chain type: {0}")]
    InvalidChainType(String),
}

/// The SteadyNode network variants.
///
/// The set is closed: every variant has a complete, validated parameter set,
/// so selecting a network can never name an unimplemented one.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Main SteadyNode network.
    #[default]
    Mainnet,
    /// Test SteadyNode network.
    Testnet,
}

impl Network {
    /// All implemented networks, in registry order.
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    /// Converts a magic value to the corresponding Network variant.
    ///
    /// # Returns
    ///
    /// * `Some(Network)` - The corresponding network if the magic is recognized
    /// * `None` - If the magic bytes don't match any known network
    pub fn from_magic(magic: Magic) -> Option<Network> {
        Network::try_from(magic).ok()
    }

    /// Returns the message-start bytes for this network.
    pub fn magic(self) -> Magic {
        Magic::from(self)
    }

    /// Returns the string representation of this network.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "main",
            Network::Testnet => "test",
        }
    }

    /// Stable numeric identifier, used by the registry's atomic cell.
    pub(crate) const fn id(self) -> u8 {
        match self {
            Network::Mainnet => 0,
            Network::Testnet => 1,
        }
    }

    pub(crate) const fn from_id(id: u8) -> Option<Network> {
        match id {
            0 => Some(Network::Mainnet),
            1 => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ChainTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::try_from(s)
    }
}

impl TryFrom<&str> for Network {
    type Error = ChainTypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "main" | "mainnet" | "steadynode" => Ok(Network::Mainnet),
            "test" | "testnet" => Ok(Network::Testnet),
            other => Err(ChainTypeError::InvalidChainType(other.to_string())),
        }
    }
}

impl TryFrom<String> for Network {
    type Error = ChainTypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Network::try_from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network_names() {
        assert_eq!("main".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!(
            Network::try_from(String::from("test")).unwrap(),
            Network::Testnet
        );
    }

    #[test]
    fn test_parse_unknown_network() {
        let err = "regtest".parse::<Network>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid chain type: regtest");
    }

    #[test]
    fn test_id_round_trip() {
        for network in Network::ALL {
            assert_eq!(Network::from_id(network.id()), Some(network));
        }
        assert_eq!(Network::from_id(2), None);
    }

    #[test]
    fn test_default_is_mainnet() {
        assert_eq!(Network::default(), Network::Mainnet);
        assert_eq!(Network::Testnet.to_string(), "test");
    }
}

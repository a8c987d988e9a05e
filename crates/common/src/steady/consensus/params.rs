use crate::steady::{network::Network, pow::Target};

/// Consensus thresholds for different networks.
///
/// These values are stored for the consensus engine; nothing in this crate
/// interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Network for which these parameters are defined.
    pub network: Network,
    /// The maximum (easiest) proof-of-work target.
    pub pow_limit: Target,
    /// The last block height at which proof-of-work blocks are accepted.
    pub last_pow_block: i32,
    /// The block height from which proof-of-stake blocks are accepted.
    pub pos_start_block: i32,
}

impl Params {
    /// Consensus parameters for the SteadyNode main network.
    pub const MAINNET: Self = Self {
        network: Network::Mainnet,
        pow_limit: Target::pow_limit(),
        last_pow_block: 2_000_000,
        pos_start_block: 10,
    };
    /// Consensus parameters for the SteadyNode test network. The test network
    /// never leaves proof-of-work.
    pub const TESTNET: Self = Self {
        network: Network::Testnet,
        pow_limit: Target::pow_limit(),
        last_pow_block: i32::MAX,
        pos_start_block: 10,
    };
}

#[cfg(test)]
mod tests {
    use primitive_types::U256;

    use super::*;

    #[test]
    fn test_pow_limit_is_shared() {
        let limit = Target::from_u256(U256::MAX >> 16);
        assert_eq!(Params::MAINNET.pow_limit, limit);
        assert_eq!(Params::TESTNET.pow_limit, limit);
    }

    #[test]
    fn test_heights_are_stored_verbatim() {
        assert_eq!(Params::MAINNET.last_pow_block, 2_000_000);
        assert_eq!(Params::TESTNET.last_pow_block, i32::MAX);
        assert_eq!(Params::MAINNET.pos_start_block, Params::TESTNET.pos_start_block);
    }
}

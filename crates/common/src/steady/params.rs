//! Complete per-network parameter sets.
//!
//! [`ChainParams`] is the full constant record of one network. The main
//! network record is built from literals; the test network record is derived
//! from it by copying and overriding named fields.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::steady::{
    base58::{Base58Prefixes, Base58Type, PrefixError},
    blockdata::{
        block::{Block, BlockHash},
        genesis::{GenesisError, GenesisInfo},
    },
    consensus::Params,
    network::Network,
    p2p::Magic,
    pow::Target,
    seeds::{MAINNET_SEEDS, PeerRecord, TESTNET_SEEDS, expand_seeds},
};

/// Public key authenticating network-wide alert messages.
const ALERT_PUBKEY: &str = "046ad02094f748e9d230f8b58e1b2afffd0f43af1a7b2e6c968ecd606b716ca5e\
                            48d248abed7e488a9bf2795489396de65fc8030b1327cb533965c68801e25d046";

/// Errors raised while constructing a parameter set. Every variant is fatal:
/// the node must not start on an inconsistent constant table.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The genesis block does not match its hard-coded hash or Merkle root.
    #[error(transparent)]
    Genesis(#[from] GenesisError),
    /// The Base58 prefix table is malformed.
    #[error("invalid base58 prefix table: {0}")]
    Prefix(#[from] PrefixError),
    /// The alert public key literal is not valid hex.
    #[error("invalid alert public key: {0}")]
    AlertKey(#[from] hex::FromHexError),
}

/// A DNS seed service queried for peers by the networking layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    /// Label of the seed.
    pub name: String,
    /// Hostname to resolve.
    pub host: String,
}

impl DnsSeed {
    fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// The full constant set of one network.
#[derive(Clone, Debug)]
pub struct ChainParams {
    network: Network,
    message_start: Magic,
    alert_pubkey: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    consensus: Params,
    genesis: Block,
    genesis_hash: BlockHash,
    base58_prefixes: Base58Prefixes,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<PeerRecord>,
    pool_max_transactions: u32,
    pool_dummy_address: String,
    data_dir: String,
}

impl ChainParams {
    /// Builds the parameter set of `network`.
    pub fn for_network(network: Network) -> Result<Self, ParamsError> {
        match network {
            Network::Mainnet => Self::mainnet(),
            Network::Testnet => Self::testnet(),
        }
    }

    /// Builds and validates the main network parameters.
    pub fn mainnet() -> Result<Self, ParamsError> {
        let (genesis, genesis_hash) = GenesisInfo::mainnet().build_verified()?;
        let default_port = 42517;

        Ok(Self {
            network: Network::Mainnet,
            message_start: Magic::MAINNET,
            alert_pubkey: hex::decode(ALERT_PUBKEY)?,
            default_port,
            rpc_port: 42518,
            consensus: Params::MAINNET,
            genesis,
            genesis_hash,
            base58_prefixes: Base58Prefixes::new(
                63,
                125,
                127,
                129,
                [0x04, 0x88, 0xb2, 0x1e],
                [0x04, 0x88, 0xad, 0xe4],
            )?,
            dns_seeds: vec![
                DnsSeed::new("0", "80.211.32.22"),
                DnsSeed::new("1", "80.211.82.161"),
                DnsSeed::new("2", "80.211.156.232"),
            ],
            fixed_seeds: expand_seeds(MAINNET_SEEDS, default_port),
            pool_max_transactions: 3,
            pool_dummy_address: "sFoQDUrp63QWqFhjEr3Fmc4ubHRhyzjKUC".to_string(),
            data_dir: String::new(),
        })
    }

    /// Builds and validates the test network parameters.
    pub fn testnet() -> Result<Self, ParamsError> {
        Self::mainnet()?.to_testnet()
    }

    /// Derives the test network parameters from this record by overriding
    /// every field in which the test network differs.
    pub fn to_testnet(&self) -> Result<Self, ParamsError> {
        let (genesis, genesis_hash) = GenesisInfo::testnet().build_verified()?;
        let default_port = 31316;

        Ok(Self {
            network: Network::Testnet,
            message_start: Magic::TESTNET,
            default_port,
            rpc_port: 31317,
            consensus: Params::TESTNET,
            genesis,
            genesis_hash,
            base58_prefixes: Base58Prefixes::new(
                127,
                196,
                239,
                40,
                [0x04, 0x35, 0x87, 0xcf],
                [0x04, 0x35, 0x83, 0x94],
            )?,
            dns_seeds: Vec::new(),
            fixed_seeds: expand_seeds(TESTNET_SEEDS, default_port),
            data_dir: "testnet".to_string(),
            ..self.clone()
        })
    }

    /// The network these parameters describe.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Magic bytes prefixed to every wire message.
    pub fn message_start(&self) -> Magic {
        self.message_start
    }

    /// Raw public key authenticating alert messages.
    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    /// Default P2P listening port.
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Default RPC port.
    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Consensus thresholds.
    pub fn consensus(&self) -> &Params {
        &self.consensus
    }

    /// The maximum (easiest) proof-of-work target.
    pub fn pow_limit(&self) -> Target {
        self.consensus.pow_limit
    }

    /// Last height at which proof-of-work blocks are accepted.
    pub fn last_pow_block(&self) -> i32 {
        self.consensus.last_pow_block
    }

    /// First height at which proof-of-stake blocks are accepted.
    pub fn pos_start_block(&self) -> i32 {
        self.consensus.pos_start_block
    }

    /// The validated genesis block.
    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    /// Hash of the genesis block.
    pub fn genesis_hash(&self) -> BlockHash {
        self.genesis_hash
    }

    /// Base58 prefix for `kind`.
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// The whole Base58 prefix table.
    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// DNS seed services, in query order.
    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    /// Fallback peers, expanded once when the parameters were built.
    pub fn fixed_seeds(&self) -> &[PeerRecord] {
        &self.fixed_seeds
    }

    /// Maximum number of transactions in one mixing pool round.
    pub fn pool_max_transactions(&self) -> u32 {
        self.pool_max_transactions
    }

    /// Placeholder address used by the mixing pool.
    pub fn pool_dummy_address(&self) -> &str {
        &self.pool_dummy_address
    }

    /// Sub-directory namespacing on-disk data, empty for the main network.
    pub fn data_dir_suffix(&self) -> &str {
        &self.data_dir
    }

    /// Data directory of this network below `base`.
    pub fn data_dir(&self, base: &Path) -> PathBuf {
        if self.data_dir.is_empty() {
            base.to_path_buf()
        } else {
            base.join(&self.data_dir)
        }
    }

    /// Serializable snapshot of the parameters.
    pub fn summary(&self) -> ParamsSummary {
        ParamsSummary {
            network: self.network,
            message_start: self.message_start.to_string(),
            alert_pubkey: hex::encode(&self.alert_pubkey),
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            pow_limit: self.pow_limit().to_string(),
            genesis_hash: self.genesis_hash.to_string(),
            genesis_merkle_root: self.genesis.header().merkle_root().to_string(),
            genesis_time: self.genesis.header().timestamp(),
            base58_prefixes: self
                .base58_prefixes
                .iter()
                .map(|(kind, prefix)| (kind, hex::encode(prefix)))
                .collect(),
            dns_seeds: self.dns_seeds.clone(),
            fixed_seeds: self
                .fixed_seeds
                .iter()
                .map(|peer| SeedSummary {
                    addr: peer.addr.to_string(),
                    last_seen: format_timestamp(peer.last_seen),
                })
                .collect(),
            last_pow_block: self.last_pow_block(),
            pos_start_block: self.pos_start_block(),
            pool_max_transactions: self.pool_max_transactions,
            data_dir_suffix: self.data_dir.clone(),
        }
    }
}

/// A fixed seed as shown in a [`ParamsSummary`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    /// `ip:port` of the peer.
    pub addr: String,
    /// RFC 3339 last-seen time.
    pub last_seen: String,
}

/// Serializable snapshot of a [`ChainParams`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsSummary {
    /// Network described.
    pub network: Network,
    /// Message-start bytes, hex encoded.
    pub message_start: String,
    /// Alert public key, hex encoded.
    pub alert_pubkey: String,
    /// Default P2P port.
    pub default_port: u16,
    /// Default RPC port.
    pub rpc_port: u16,
    /// Proof-of-work ceiling, big-endian hex.
    pub pow_limit: String,
    /// Genesis block hash.
    pub genesis_hash: String,
    /// Genesis Merkle root.
    pub genesis_merkle_root: String,
    /// Genesis block timestamp.
    pub genesis_time: u32,
    /// Base58 prefixes, hex encoded.
    pub base58_prefixes: BTreeMap<Base58Type, String>,
    /// DNS seed services.
    pub dns_seeds: Vec<DnsSeed>,
    /// Expanded fixed seeds.
    pub fixed_seeds: Vec<SeedSummary>,
    /// Last proof-of-work height.
    pub last_pow_block: i32,
    /// First proof-of-stake height.
    pub pos_start_block: i32,
    /// Mixing pool size.
    pub pool_max_transactions: u32,
    /// Data directory suffix.
    pub data_dir_suffix: String,
}

/// Formats a Unix timestamp as RFC 3339, or as the raw integer when it is out
/// of chrono's range.
fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|time| time.to_rfc3339())
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_params() {
        let params = ChainParams::mainnet().unwrap();

        assert_eq!(params.network(), Network::Mainnet);
        assert_eq!(params.message_start(), Magic::MAINNET);
        assert_eq!(params.default_port(), 42517);
        assert_eq!(params.rpc_port(), 42518);
        assert_eq!(params.alert_pubkey().len(), 65);
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[63]);
        assert_eq!(params.base58_prefix(Base58Type::ScriptAddress), &[125]);
        assert_eq!(params.base58_prefix(Base58Type::SecretKey), &[127]);
        assert_eq!(params.base58_prefix(Base58Type::StealthAddress), &[129]);
        assert_eq!(params.dns_seeds().len(), 3);
        assert_eq!(params.fixed_seeds().len(), MAINNET_SEEDS.len());
        assert!(params.fixed_seeds().iter().all(|p| p.port() == 42517));
        assert_eq!(params.last_pow_block(), 2_000_000);
        assert_eq!(params.pos_start_block(), 10);
        assert_eq!(params.pool_max_transactions(), 3);
        assert_eq!(params.data_dir_suffix(), "");
    }

    #[test]
    fn test_testnet_overrides() {
        let main = ChainParams::mainnet().unwrap();
        let test = main.to_testnet().unwrap();

        assert_eq!(test.network(), Network::Testnet);
        assert_eq!(test.default_port(), 31316);
        assert_eq!(test.rpc_port(), 31317);
        assert_eq!(test.last_pow_block(), i32::MAX);
        assert_eq!(test.pos_start_block(), main.pos_start_block());
        assert_eq!(test.alert_pubkey(), main.alert_pubkey());
        assert_eq!(test.pool_dummy_address(), main.pool_dummy_address());
        assert!(test.dns_seeds().is_empty());
        assert_eq!(test.fixed_seeds().len(), TESTNET_SEEDS.len());
        assert_eq!(test.base58_prefix(Base58Type::PubkeyAddress), &[127]);
        assert_eq!(
            test.base58_prefix(Base58Type::ExtPublicKey),
            &[0x04, 0x35, 0x87, 0xcf]
        );
        assert_ne!(test.genesis_hash(), main.genesis_hash());
    }

    #[test]
    fn test_data_dir() {
        let base = Path::new("/var/lib/steadynode");
        let main = ChainParams::mainnet().unwrap();
        let test = main.to_testnet().unwrap();
        assert_eq!(main.data_dir(base), PathBuf::from("/var/lib/steadynode"));
        assert_eq!(test.data_dir(base), PathBuf::from("/var/lib/steadynode/testnet"));
    }

    #[test]
    fn test_summary() {
        let summary = ChainParams::mainnet().unwrap().summary();
        assert_eq!(summary.message_start, "ba1f434a");
        assert_eq!(
            summary.genesis_hash,
            "36d60b0bfa1a74a3143d2ebe5a3866f24dd54e76a1b6caffa3e680786b4a763b"
        );
        assert_eq!(
            summary.base58_prefixes.get(&Base58Type::ExtSecretKey).unwrap(),
            "0488ade4"
        );
        assert_eq!(summary.fixed_seeds[0].addr, "80.211.32.22:42517");
        assert!(!summary.fixed_seeds[0].last_seen.is_empty());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01T00:00:00+00:00");
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
        assert_eq!(format_timestamp(i64::MIN), i64::MIN.to_string());
    }
}

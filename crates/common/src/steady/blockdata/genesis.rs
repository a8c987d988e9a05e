//! Genesis block information for the SteadyNode networks.

use bitcoin::{
    Amount, ScriptBuf,
    script::{Builder, PushBytes, PushBytesError},
};
use thiserror::Error;
use tracing::debug;

use crate::steady::{
    blockdata::{
        block::{Block, BlockHash, BlockHeader, HeaderBits, InnerHeader, TxMerkleNode, Version},
        transaction::{LockTime, OutPoint, Sequence, Transaction, TxIn, TxOut, Witness},
    },
    hashes::{Hash, HashError},
    network::Network,
};

/// Marker payload embedded in the genesis coinbase input.
pub const GENESIS_MARKER: &str =
    "start steadynode coin on Sunday 18th of November 2018 10-15-31 AM";

/// Creation time of the genesis coinbase transaction, shared by all networks.
pub const GENESIS_TX_TIME: u32 = 1_542_565_799;

/// Errors raised while building or checking a genesis block.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// The computed Merkle root differs from the hard-coded one.
    #[error(
        "{network} genesis merkle root mismatch: expected {expected}, computed {computed}"
    )]
    MerkleRootMismatch {
        /// Network whose constant table is inconsistent.
        network: Network,
        /// Hard-coded Merkle root.
        expected: TxMerkleNode,
        /// Merkle root of the block as built.
        computed: TxMerkleNode,
    },
    /// The computed block hash differs from the hard-coded one.
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch {
        /// Network whose constant table is inconsistent.
        network: Network,
        /// Hard-coded block hash.
        expected: BlockHash,
        /// Hash of the block as built.
        computed: BlockHash,
    },
    /// The genesis block has no transactions to commit to.
    #[error("genesis block has no transactions")]
    Empty,
    /// The coinbase marker could not be pushed onto a script.
    #[error("invalid genesis coinbase script: {0}")]
    Script(#[from] PushBytesError),
    /// The header could not be hashed.
    #[error("failed to hash genesis header: {0}")]
    Hash(#[from] HashError),
}

/// Genesis block information for different networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisInfo {
    /// The network this genesis block belongs to.
    pub network: Network,
    /// The expected hash of the genesis block.
    pub hash: BlockHash,
    /// The expected merkle root of the genesis block.
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the genesis block.
    pub timestamp: u32,
    /// The nonce of the genesis block.
    pub nonce: u32,
    /// The bits (difficulty) of the genesis block.
    pub bits: u32,
    /// The version of the genesis block.
    pub version: i32,
}

impl GenesisInfo {
    /// Returns the genesis block information for the main network.
    pub fn mainnet() -> Self {
        Self {
            network: Network::Mainnet,
            hash: BlockHash::from_byte_array([
                0x3b, 0x76, 0x4a, 0x6b, 0x78, 0x80, 0xe6, 0xa3, 0xff, 0xca, 0xb6, 0xa1, 0x76, 0x4e,
                0xd5, 0x4d, 0xf2, 0x66, 0x38, 0x5a, 0xbe, 0x2e, 0x3d, 0x14, 0xa3, 0x74, 0x1a, 0xfa,
                0x0b, 0x0b, 0xd6, 0x36,
            ]),
            merkle_root: Self::coinbase_merkle_root(),
            timestamp: 1_542_565_799,
            nonce: 440_309,
            bits: 0x1e0f_fff0,
            version: 1,
        }
    }

    /// Returns the genesis block information for the test network.
    ///
    /// Only the timestamp and nonce differ from the main network, so the
    /// coinbase and its Merkle root are shared.
    pub fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            hash: BlockHash::from_byte_array([
                0x6e, 0xc7, 0x15, 0x71, 0x4b, 0x4b, 0xd7, 0x75, 0x01, 0x59, 0xe3, 0xc8, 0xe1, 0x5e,
                0xa1, 0xb5, 0xae, 0xae, 0x8e, 0xb6, 0xc7, 0xd0, 0xa6, 0xfc, 0xe8, 0x46, 0xed, 0xf1,
                0xdf, 0x5d, 0xec, 0x92,
            ]),
            timestamp: 1_542_565_800,
            nonce: 216_893,
            ..Self::mainnet()
        }
    }

    fn coinbase_merkle_root() -> TxMerkleNode {
        TxMerkleNode::from_byte_array([
            0x14, 0x4a, 0xc3, 0x6e, 0x8f, 0xf0, 0x97, 0xc4, 0x12, 0xf2, 0x33, 0x2a, 0xfc, 0xef,
            0xb7, 0x29, 0xa7, 0x79, 0xdb, 0x7a, 0xb5, 0xf0, 0x89, 0x2d, 0x1f, 0x10, 0x62, 0x3f,
            0xd4, 0x22, 0x44, 0xb9,
        ])
    }

    /// Builds the genesis coinbase: one input with no value that carries the
    /// marker payload, and one empty output.
    pub fn coinbase() -> Result<Transaction, GenesisError> {
        let marker = <&PushBytes>::try_from(GENESIS_MARKER.as_bytes())?;
        let script_sig = Builder::new()
            .push_int(0)
            .push_int(42)
            .push_slice(marker)
            .into_script();

        Ok(Transaction {
            version: 1,
            time: GENESIS_TX_TIME,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig,
                sequence: Sequence::MAX,
                witness: Witness::new(),
            }],
            output: vec![TxOut {
                value: Amount::ZERO,
                script_pubkey: ScriptBuf::new(),
            }],
            lock_time: LockTime::ZERO,
        })
    }

    /// Builds the genesis block from this information. The header commits to
    /// the Merkle root computed from the coinbase, not to `self.merkle_root`.
    pub fn build(&self) -> Result<Block, GenesisError> {
        let transactions = vec![Self::coinbase()?];
        let merkle_root = Block::merkle_root_of(&transactions).ok_or(GenesisError::Empty)?;
        Ok(Block::new(self.header(merkle_root), transactions))
    }

    /// Builds the genesis block and checks its Merkle root and hash against
    /// the hard-coded values.
    ///
    /// # Returns
    ///
    /// * `Ok((Block, BlockHash))` - The genesis block and its hash
    /// * `Err(GenesisError)` - If either computed value differs, which means
    ///   the constant table is corrupt and the node must not start
    pub fn build_verified(&self) -> Result<(Block, BlockHash), GenesisError> {
        let block = self.build()?;
        let merkle_root = block.header().merkle_root();
        let hash = block.block_hash()?;

        debug!(
            network = %self.network,
            hash = %hash,
            merkle_root = %merkle_root,
            nonce = block.header().nonce(),
            time = block.header().timestamp(),
            "computed genesis block"
        );

        if merkle_root != self.merkle_root {
            return Err(GenesisError::MerkleRootMismatch {
                network: self.network,
                expected: self.merkle_root,
                computed: merkle_root,
            });
        }
        if hash != self.hash {
            return Err(GenesisError::HashMismatch {
                network: self.network,
                expected: self.hash,
                computed: hash,
            });
        }

        Ok((block, hash))
    }

    fn header(&self, merkle_root: TxMerkleNode) -> BlockHeader {
        BlockHeader::from(InnerHeader {
            version: Version::from_consensus(self.version),
            prev_blockhash: BlockHash::all_zeros(),
            merkle_root,
            time: self.timestamp,
            bits: HeaderBits::from_consensus(self.bits),
            nonce: self.nonce,
        })
    }
}

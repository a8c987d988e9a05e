//! Block headers and blocks.
//!
//! Headers keep the 80-byte Bitcoin layout, but their identity hash is
//! scrypt rather than double SHA-256.

pub use bitcoin::{
    BlockHash, CompactTarget as HeaderBits, TxMerkleNode,
    block::{Header as InnerHeader, Version},
};
use bitcoin::merkle_tree;

use crate::steady::{
    blockdata::transaction::Transaction,
    consensus::{Encodable, serialize},
    hashes::{Hash, HashError, scrypt_1024_1_1},
    io::{Error as IoError, Write},
};

/// A block header hashed with scrypt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BlockHeader(InnerHeader);

impl BlockHeader {
    /// The size of a block header in bytes.
    pub const SIZE: usize = InnerHeader::SIZE;

    /// Computes the block hash: scrypt over the serialized header.
    pub fn block_hash(&self) -> Result<BlockHash, HashError> {
        let bytes = serialize(&self.0);
        Ok(BlockHash::from_byte_array(scrypt_1024_1_1(&bytes)?))
    }

    /// Hash of the previous block, all zeros for a genesis block.
    pub fn previous_block_hash(&self) -> BlockHash {
        self.0.prev_blockhash
    }

    /// Merkle root committed to by this header.
    pub fn merkle_root(&self) -> TxMerkleNode {
        self.0.merkle_root
    }

    /// Block timestamp.
    pub fn timestamp(&self) -> u32 {
        self.0.time
    }

    /// Header nonce.
    pub fn nonce(&self) -> u32 {
        self.0.nonce
    }

    /// Header version.
    pub fn version(&self) -> i32 {
        self.0.version.to_consensus()
    }
}

impl From<InnerHeader> for BlockHeader {
    fn from(header: InnerHeader) -> Self {
        BlockHeader(header)
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        self.0.consensus_encode(writer)
    }
}

/// Represents a block: a header and the transactions it commits to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// The block header
    pub header: BlockHeader,
    /// List of transactions contained in the block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Creates a block from a header and its transactions.
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Block {
            header,
            transactions,
        }
    }

    /// Gets a reference to the block header
    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    /// Gets a reference to the transactions
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Computes the Merkle root of a transaction list.
    pub fn merkle_root_of(transactions: &[Transaction]) -> Option<TxMerkleNode> {
        let hashes = transactions
            .iter()
            .map(|tx| TxMerkleNode::from_raw_hash(tx.txid().to_raw_hash()));
        merkle_tree::calculate_root(hashes)
    }

    /// Computes the block hash from the header.
    pub fn block_hash(&self) -> Result<BlockHash, HashError> {
        self.header.block_hash()
    }
}

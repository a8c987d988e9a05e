/// Base58 address prefixes.
pub mod base58;
/// Block data structures: transactions, headers, blocks and genesis.
pub mod blockdata;
/// Consensus encoding re-exports and consensus thresholds.
pub mod consensus;
/// Hash functions and types.
pub mod hashes;
/// I/O traits used by consensus encoding.
pub mod io;
/// Network variants.
pub mod network;
/// Peer-to-peer constants.
pub mod p2p;
/// Full per-network parameter sets.
pub mod params;
/// Proof of Work targets.
pub mod pow;
/// Process-wide selection of the active parameter set.
pub mod registry;
/// Fixed seed tables and their expansion into peer records.
pub mod seeds;

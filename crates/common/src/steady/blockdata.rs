/// Block headers and blocks.
pub mod block;

/// Genesis block information for SteadyNode networks.
pub mod genesis;

/// Proof-of-stake style transactions.
pub mod transaction;

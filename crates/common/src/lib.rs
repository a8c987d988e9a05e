//! Chain parameter registry for SteadyNode networks.
//!
//! This library pins the per-network constants that make nodes on the same
//! network interoperable: message-start bytes, ports, address prefixes, the
//! proof-of-work ceiling, the genesis block and the bootstrap peers. It also
//! provides the registry through which the rest of a node learns which network
//! it runs on.

#![cfg_attr(test, allow(clippy::arithmetic_side_effects))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::cast_sign_loss))]
#![cfg_attr(test, allow(clippy::indexing_slicing))]
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::cast_possible_truncation))]

/// Types and functions related to the SteadyNode networks.
pub mod steady;

pub use steady::{
    network::Network,
    params::ChainParams,
    registry::{Registry, global, init},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

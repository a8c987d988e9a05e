//! Selection of the active parameter set.
//!
//! [`Registry::new`] is the startup routine: it builds and validates every
//! network's parameters before anything can read them. The registry is meant
//! to be passed around explicitly; [`init`] and [`global`] offer a set-once
//! process-wide instance for code that cannot take a handle.

use std::sync::{
    OnceLock,
    atomic::{AtomicBool, AtomicU8, Ordering},
};

use tracing::{info, warn};

use crate::steady::{
    network::Network,
    params::{ChainParams, ParamsError},
};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Holds one validated [`ChainParams`] per network and the choice of the
/// active one.
#[derive(Debug)]
pub struct Registry {
    mainnet: ChainParams,
    testnet: ChainParams,
    active: AtomicU8,
    selected: AtomicBool,
}

impl Registry {
    /// Builds and validates the parameters of every network. The main network
    /// is active until [`Registry::select`] says otherwise.
    pub fn new() -> Result<Self, ParamsError> {
        let mainnet = ChainParams::mainnet()?;
        let testnet = mainnet.to_testnet()?;
        Ok(Self {
            mainnet,
            testnet,
            active: AtomicU8::new(Network::Mainnet.id()),
            selected: AtomicBool::new(false),
        })
    }

    /// Makes `network` the active network.
    ///
    /// Selection is expected once, during startup. A later selection still
    /// takes effect but is reported, since components may already have read
    /// the previous parameters.
    pub fn select(&self, network: Network) {
        let previous = self.active.swap(network.id(), Ordering::AcqRel);
        if self.selected.swap(true, Ordering::AcqRel) && previous != network.id() {
            warn!(network = %network, "chain parameters re-selected after startup");
        }
        info!(
            network = %network,
            port = self.get(network).default_port(),
            "selected chain parameters"
        );
    }

    /// Selects the test network when `testnet` is set, the main network
    /// otherwise.
    pub fn select_from_flag(&self, testnet: bool) {
        if testnet {
            self.select(Network::Testnet);
        } else {
            self.select(Network::Mainnet);
        }
    }

    /// The currently active network.
    pub fn active_network(&self) -> Network {
        let id = self.active.load(Ordering::Acquire);
        match Network::from_id(id) {
            Some(network) => network,
            // Only `select` writes the cell, and it only stores valid ids.
            None => unreachable!("unimplemented network id {id}"),
        }
    }

    /// The parameters of the currently active network.
    pub fn current(&self) -> &ChainParams {
        self.get(self.active_network())
    }

    /// The parameters of `network`, whether active or not.
    pub fn get(&self, network: Network) -> &ChainParams {
        match network {
            Network::Mainnet => &self.mainnet,
            Network::Testnet => &self.testnet,
        }
    }
}

/// Builds the process-wide registry on first call and returns it.
///
/// Later calls return the same instance. Construction failures are returned
/// to the caller, which must not start the node.
pub fn init() -> Result<&'static Registry, ParamsError> {
    if let Some(registry) = GLOBAL.get() {
        return Ok(registry);
    }
    let registry = Registry::new()?;
    Ok(GLOBAL.get_or_init(|| registry))
}

/// The process-wide registry, if [`init`] has run.
pub fn global() -> Option<&'static Registry> {
    GLOBAL.get()
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn test_default_is_mainnet() {
        let registry = Registry::new().unwrap();
        assert_eq!(registry.active_network(), Network::Mainnet);
        assert_eq!(registry.current().network(), Network::Mainnet);
    }

    #[test]
    fn test_select_from_flag() {
        let registry = Registry::new().unwrap();

        registry.select_from_flag(true);
        assert_eq!(registry.current().network(), Network::Testnet);
        assert_eq!(registry.current().default_port(), 31316);

        registry.select_from_flag(false);
        assert_eq!(registry.current().network(), Network::Mainnet);
        assert_eq!(registry.current().default_port(), 42517);
    }

    #[test]
    fn test_reselect_takes_effect() {
        let registry = Registry::new().unwrap();
        assert!(!registry.selected.load(Ordering::Acquire));

        registry.select(Network::Mainnet);
        assert!(registry.selected.load(Ordering::Acquire));
        assert_eq!(registry.active_network(), Network::Mainnet);

        registry.select(Network::Testnet);
        assert_eq!(registry.active_network(), Network::Testnet);
        assert_eq!(registry.current().network(), Network::Testnet);
        assert_eq!(registry.current().message_start(), Network::Testnet.magic());
        assert!(registry.selected.load(Ordering::Acquire));
    }

    #[test]
    fn test_selection_is_visible_across_threads() {
        let registry = Arc::new(Registry::new().unwrap());
        registry.select(Network::Testnet);

        let reader = Arc::clone(&registry);
        let network = thread::spawn(move || reader.current().network())
            .join()
            .unwrap();
        assert_eq!(network, Network::Testnet);
    }

    #[test]
    fn test_global_init_is_idempotent() {
        let first = init().unwrap();
        let second = init().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(global().unwrap(), first));
    }
}

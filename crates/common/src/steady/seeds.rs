//! Fixed seed tables and their expansion into peer records.
//!
//! Seed nodes are advertised with a random "last seen" time between one and
//! two weeks ago. A node only connects to one or two of them: once connected
//! it learns plenty of addresses with newer timestamps, which then take
//! priority.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use bitcoin::p2p::{Address, ServiceFlags};
use chrono::Utc;
use rand::Rng;

/// One week, in seconds.
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Packed IPv4 seed addresses of the main network, most significant byte
/// first (80.211.32.22, 80.211.82.161, 80.211.156.232).
///
/// The entries are the hosts behind the main network's DNS seeds; no
/// separately published fixed-seed list exists for SteadyNode.
pub const MAINNET_SEEDS: &[u32] = &[0x50d3_2016, 0x50d3_52a1, 0x50d3_9ce8];

/// Packed IPv4 seed addresses of the test network.
///
/// Empty: the test network publishes neither DNS seeds nor fixed seeds, so
/// peers are configured by hand.
pub const TESTNET_SEEDS: &[u32] = &[];

/// A candidate peer produced from a seed table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerRecord {
    /// Address and port of the peer.
    pub addr: SocketAddr,
    /// Services the peer is assumed to offer.
    pub services: ServiceFlags,
    /// Unix time at which the peer was last seen.
    pub last_seen: i64,
}

impl PeerRecord {
    /// Creates a record for `addr` with the default full-node services.
    pub fn new(addr: SocketAddr, last_seen: i64) -> Self {
        Self {
            addr,
            services: ServiceFlags::NETWORK,
            last_seen,
        }
    }

    /// Returns the IP address of the peer.
    pub fn ip(&self) -> IpAddr {
        self.addr.ip()
    }

    /// Returns the port of the peer.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Converts the record into the address form used by the wire protocol.
    pub fn to_p2p_address(&self) -> Address {
        Address::new(&self.addr, self.services)
    }
}

/// Decodes one packed table entry.
///
/// Entries are always stored most significant byte first, whatever the host
/// byte order, so the address octets are the big-endian bytes of the entry.
pub fn unpack_seed(entry: u32) -> Ipv4Addr {
    Ipv4Addr::from(entry.to_be_bytes())
}

/// Expands a packed seed table into peer records, as of `now`.
///
/// Every record gets `port` and a last-seen time in `(now - 2 weeks, now -
/// 1 week]`, drawn independently per record from `rng`. Output order follows
/// the table.
pub fn expand_seeds_at<R: Rng + ?Sized>(
    table: &[u32],
    port: u16,
    now: i64,
    rng: &mut R,
) -> Vec<PeerRecord> {
    table
        .iter()
        .map(|&entry| {
            let addr = SocketAddr::new(IpAddr::V4(unpack_seed(entry)), port);
            let age = ONE_WEEK.saturating_add(rng.random_range(0..ONE_WEEK));
            PeerRecord::new(addr, now.saturating_sub(age))
        })
        .collect()
}

/// Expands a packed seed table using the wall clock and the thread-local
/// generator.
pub fn expand_seeds(table: &[u32], port: u16) -> Vec<PeerRecord> {
    expand_seeds_at(table, port, Utc::now().timestamp(), &mut rand::rng())
}

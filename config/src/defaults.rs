//! # Default per-environment values
//!
//! This module contains per-environment default values for the wallet
//! configuration params.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Trait defining all the configuration params that have a suitable
/// default value depending on the environment (mainnet, testnet, etc).
pub trait Defaults {
    /// Default log level
    fn log_level(&self) -> log::LevelFilter {
        log::LevelFilter::Info
    }

    /// Default address for the wallet WebSockets server
    fn wallet_server_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8722)
    }

    /// Default ledger node entry point
    fn wallet_node_url(&self) -> String;

    /// Default timeout for node requests: 1 minute
    fn wallet_requests_timeout(&self) -> u64 {
        60_000
    }
}

/// Default values for the main network.
pub struct Mainnet;

/// Default values for the test network.
pub struct Testnet;

impl Defaults for Mainnet {
    fn wallet_node_url(&self) -> String {
        "tcp://127.0.0.1:8899".to_string()
    }
}

impl Defaults for Testnet {
    fn wallet_node_url(&self) -> String {
        "tcp://testnet.lamport.dev:8899".to_string()
    }
}

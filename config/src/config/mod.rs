//! # Config
//!
//! This module contains the `Config` struct, which holds all the
//! configuration params for the wallet daemon. The `Config` struct in
//! this module is __total__, that is, it contains all the required
//! fields needed by the rest of the application, unlike the partial
//! [Config](partial::Config) which is __partial__, meaning most fields
//! are optional and they may not appear in the configuration file, in
//! which case a default value for the environment will be used.
//!
//! All the [loaders](crate::loaders) return a partial configuration;
//! use [`Config::from_partial`](Config::from_partial) to obtain a total
//! config from it.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use lamport_protected::ProtectedString;

use crate::defaults::{Defaults, Mainnet, Testnet};

/// Module containing the partial configuration struct that is returned
/// by the loaders.
pub mod partial;

/// The total configuration object.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The "environment" in which the wallet is deployed, eg: mainnet,
    /// testnet, etc.
    pub environment: Environment,

    /// Wallet-specific configuration
    pub wallet: Wallet,

    /// Logging configuration
    pub log: Log,
}

/// Wallet-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Socket address the wallet WebSockets server binds to.
    pub server_addr: SocketAddr,

    /// Entry point of the ledger node the wallet connects to, as a URL
    /// (e.g. `tcp://127.0.0.1:8899`).
    pub node_url: String,

    /// Secret key of the wallet account, hex-encoded. When absent the
    /// wallet starts without an active account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<ProtectedString>,

    /// Timeout in milliseconds for JSON-RPC requests sent to the node.
    pub requests_timeout: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    /// Log level filter applied to the whole daemon.
    pub level: log::LevelFilter,
}

/// The environment in which the wallet is deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// The main network
    Mainnet,
    /// A test network with a working faucet
    Testnet,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Testnet
    }
}

impl Environment {
    fn defaults(self) -> &'static dyn Defaults {
        match self {
            Environment::Mainnet => &Mainnet,
            Environment::Testnet => &Testnet,
        }
    }
}

impl Config {
    /// Build a total configuration from a partial one, filling the gaps
    /// with the defaults of the partial's environment.
    pub fn from_partial(partial: &partial::Config) -> Self {
        let defaults = partial.environment.defaults();

        Config {
            environment: partial.environment,
            wallet: Wallet {
                server_addr: partial
                    .wallet
                    .server_addr
                    .unwrap_or_else(|| defaults.wallet_server_addr()),
                node_url: partial
                    .wallet
                    .node_url
                    .clone()
                    .unwrap_or_else(|| defaults.wallet_node_url()),
                secret_key: partial.wallet.secret_key.clone(),
                requests_timeout: partial
                    .wallet
                    .requests_timeout
                    .unwrap_or_else(|| defaults.wallet_requests_timeout()),
            },
            log: Log {
                level: partial
                    .log
                    .level
                    .as_deref()
                    .map(parse_log_level)
                    .unwrap_or_else(|| defaults.log_level()),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_partial(&partial::Config::default())
    }
}

fn parse_log_level(level: &str) -> log::LevelFilter {
    match level.parse() {
        Ok(level) => level,
        Err(_) => {
            log::warn!("Unknown log level {:?}, falling back to `info`", level);
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_testnet_defaults() {
        let config = Config::default();

        assert_eq!(config.environment, Environment::Testnet);
        assert_eq!(config.wallet.node_url, Testnet.wallet_node_url());
        assert_eq!(config.wallet.secret_key, None);
    }

    #[test]
    fn partial_overrides_win_over_defaults() {
        let partial = partial::Config {
            wallet: partial::Wallet {
                node_url: Some("tcp://10.0.0.1:9000".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let config = Config::from_partial(&partial);

        assert_eq!(config.wallet.node_url, "tcp://10.0.0.1:9000");
        assert_eq!(
            config.wallet.server_addr,
            Environment::Testnet.defaults().wallet_server_addr()
        );
    }
}

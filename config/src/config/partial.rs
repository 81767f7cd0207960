//! # Partial Config
//!
//! Partial counterpart of the total [`Config`](super::Config): every
//! field is optional so a configuration file only needs to mention the
//! params it wants to override.

use std::net::SocketAddr;

use serde::Deserialize;

use lamport_protected::ProtectedString;

use super::Environment;

/// Partial configuration as returned by the loaders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deployment environment, selects the defaults for everything else.
    pub environment: Environment,
    /// Partial wallet section.
    pub wallet: Wallet,
    /// Partial log section.
    pub log: Log,
}

/// Partial wallet section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Wallet {
    /// See [`Wallet::server_addr`](super::Wallet::server_addr).
    pub server_addr: Option<SocketAddr>,
    /// See [`Wallet::node_url`](super::Wallet::node_url).
    pub node_url: Option<String>,
    /// See [`Wallet::secret_key`](super::Wallet::secret_key).
    pub secret_key: Option<ProtectedString>,
    /// See [`Wallet::requests_timeout`](super::Wallet::requests_timeout).
    pub requests_timeout: Option<u64>,
}

/// Partial log section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: Option<String>,
}

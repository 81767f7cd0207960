//! Error type definition
use jsonrpc_ws_server as server;

/// Custom error type wrapping `jsonrpc_ws_server::Error`
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Error(pub(super) server::Error);

//! JSON-RPC client over a raw TCP connection.

pub mod actors;

pub use actors::{jsonrpc, Error, JsonRpcClient};

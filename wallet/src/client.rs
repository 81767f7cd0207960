//! Client used to talk to the ledger node.

use std::sync::Arc;
use std::time::Duration;

use actix::prelude::*;
use async_trait::async_trait;
use serde_json::json;

use lamport_net::client::tcp::{jsonrpc, JsonRpcClient};

use crate::account::Account;
use crate::actors::app::{internal_error, node_error, Error};

/// The ledger node as consumed by the wallet session.
///
/// Implementations are replaced wholesale when the configured network
/// changes; workflows capture the handle they start with and may complete
/// against a network that is no longer the configured one.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Current balance of the account identified by `public_key`.
    async fn get_balance(&self, public_key: &str) -> Result<u64, Error>;

    /// Ask the faucet to credit `tokens` to `public_key`.
    async fn request_airdrop(&self, public_key: &str, tokens: u64) -> Result<(), Error>;

    /// Sign and submit a transfer, awaiting network confirmation. Returns
    /// the transaction signature. Fees may be charged even on failure.
    async fn submit_transfer(&self, from: &Account, to: &str, tokens: u64)
        -> Result<String, Error>;

    /// Whether the transaction with the given signature has been
    /// confirmed by the network.
    async fn confirm_transaction(&self, signature: &str) -> Result<bool, Error>;
}

/// `Ledger` implementation over the JSON-RPC TCP client actor.
pub struct NodeClient {
    /// Url this client was connected to, scheme included.
    pub url: String,
    actor: Addr<JsonRpcClient>,
    requests_timeout: Duration,
}

impl NodeClient {
    /// Connect to the node at `url` (`tcp://host:port`, the scheme is
    /// optional).
    pub fn start(url: &str, requests_timeout: Duration) -> Result<Arc<NodeClient>, Error> {
        let actor = JsonRpcClient::start(strip_scheme(url))?;

        Ok(Arc::new(NodeClient {
            url: url.to_string(),
            actor,
            requests_timeout,
        }))
    }

    fn request(&self, method: &str) -> jsonrpc::Request {
        jsonrpc::Request::method(method).timeout(self.requests_timeout)
    }

    async fn send(&self, request: jsonrpc::Request) -> Result<serde_json::Value, Error> {
        self.actor
            .send(request)
            .await
            .map_err(internal_error)?
            .map_err(node_error)
    }
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("tcp://").unwrap_or(url)
}

#[async_trait]
impl Ledger for NodeClient {
    async fn get_balance(&self, public_key: &str) -> Result<u64, Error> {
        let request = self
            .request("getBalance")
            .params(json!([public_key]))
            .map_err(node_error)?;
        let value = self.send(request).await?;

        serde_json::from_value(value).map_err(internal_error)
    }

    async fn request_airdrop(&self, public_key: &str, tokens: u64) -> Result<(), Error> {
        let request = self
            .request("requestAirdrop")
            .params(json!([public_key, tokens]))
            .map_err(node_error)?;
        self.send(request).await.map(|_| ())
    }

    async fn submit_transfer(
        &self,
        from: &Account,
        to: &str,
        tokens: u64,
    ) -> Result<String, Error> {
        let payload = format!("transfer:{}:{}:{}", from.public_key, to, tokens);
        let signature = from.sign(payload.as_bytes());
        let request = self
            .request("submitTransfer")
            .params(json!({
                "from": from.public_key,
                "to": to,
                "tokens": tokens,
                "signature": signature,
            }))
            .map_err(node_error)?;
        let value = self.send(request).await?;

        serde_json::from_value(value).map_err(internal_error)
    }

    async fn confirm_transaction(&self, signature: &str) -> Result<bool, Error> {
        let request = self
            .request("confirmTransaction")
            .params(json!([signature]))
            .map_err(node_error)?;
        let value = self.send(request).await?;

        serde_json::from_value(value).map_err(internal_error)
    }
}

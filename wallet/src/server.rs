//! Websockets JSON-RPC server of the wallet daemon.

use std::net::SocketAddr;
use std::sync::Arc;

use actix::prelude::*;
use actix::ArbiterHandle;
use futures_util::compat::Compat01As03;
use jsonrpc_core as rpc;
use jsonrpc_pubsub as pubsub;
use serde_json::json;

use lamport_net::server::ws;

use crate::actors::app::{self, App};
use crate::types;

/// Per-connection metadata: the pub/sub session plus the `Origin` header
/// the connection was opened with. The origin is what a funding request
/// is answered to.
#[derive(Clone, Default)]
pub struct Meta {
    pub session: Option<Arc<pubsub::Session>>,
    pub origin: Option<String>,
}

impl rpc::Metadata for Meta {}

impl pubsub::PubSubMetadata for Meta {
    fn session(&self) -> Option<Arc<pubsub::Session>> {
        self.session.clone()
    }
}

/// Start the WebSockets server with all wallet routes connected.
///
/// Routes are registered before the server starts accepting connections,
/// so a requester can never get a message in ahead of the listener.
pub fn start(
    addr: SocketAddr,
    app: Addr<App>,
    arbiter: ArbiterHandle,
) -> Result<ws::Server, Box<ws::Error>> {
    let mut handler = pubsub::PubSubHandler::default();
    app::connect_routes(&mut handler, app, arbiter);

    ws::Server::build()
        .handler(handler)
        .addr(addr)
        .start(|context: &ws::RequestContext| Meta {
            session: Some(Arc::new(pubsub::Session::new(context.sender()))),
            origin: context.origin.clone(),
        })
}

/// Requester-channel sink delivering over a pub/sub subscription.
pub struct PubsubSink {
    sink: pubsub::Sink,
    arbiter: ArbiterHandle,
}

impl PubsubSink {
    pub fn new(sink: pubsub::Sink, arbiter: ArbiterHandle) -> Self {
        PubsubSink { sink, arbiter }
    }
}

impl types::NotificationSink for PubsubSink {
    fn notify(&self, method: &str, params: serde_json::Value) {
        let mut message = serde_json::Map::new();
        message.insert("method".to_string(), json!(method));
        message.insert("params".to_string(), params);

        // Fire and forget: nothing is awaited beyond the local send.
        let delivery = Compat01As03::new(self.sink.notify(rpc::Params::Map(message)));
        self.arbiter.spawn(async move {
            if delivery.await.is_err() {
                log::warn!("Requester window went away, notification dropped");
            }
        });
    }
}

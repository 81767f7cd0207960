//! Websockets server implementation.
use std::net;

use jsonrpc_core::Metadata;
use jsonrpc_pubsub as pubsub;
use jsonrpc_ws_server as server;

mod error;

pub use error::Error;
pub use server::RequestContext;

/// A running JsonRPC Websockets server. It is stopped when dropped.
pub struct Server(server::Server);

impl Server {
    /// Configure a new server.
    pub fn build<M>() -> ServerBuilder<M>
    where
        M: Metadata + Default,
    {
        ServerBuilder::default()
    }
}

/// Server configuration builder.
pub struct ServerBuilder<M: Metadata> {
    handler: pubsub::PubSubHandler<M>,
    addr: net::SocketAddr,
}

impl<M> Default for ServerBuilder<M>
where
    M: Metadata + Default,
{
    fn default() -> Self {
        Self {
            handler: pubsub::PubSubHandler::default(),
            addr: net::SocketAddr::V4(net::SocketAddrV4::new(
                net::Ipv4Addr::new(127, 0, 0, 1),
                8722,
            )),
        }
    }
}

impl<M: Metadata> ServerBuilder<M> {
    /// Set handler
    pub fn handler(mut self, handler: pubsub::PubSubHandler<M>) -> Self {
        self.handler = handler;
        self
    }

    /// Set the socket address to bind to.
    pub fn addr(mut self, addr: net::SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Starts a JsonRPC Websockets server, extracting each connection's
    /// metadata with the given function.
    pub fn start<E>(self, extractor: E) -> Result<Server, Box<Error>>
    where
        E: server::MetaExtractor<M>,
    {
        let Self { handler, addr } = self;

        server::ServerBuilder::with_meta_extractor(handler, extractor)
            .start(&addr)
            .map(Server)
            .map_err(|err| Box::new(Error(err)))
    }
}

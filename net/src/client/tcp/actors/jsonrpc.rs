//! Defines a JsonRPC over TCP actor.
//!
//! See the `JsonRpcClient` struct for more information.
use std::time::Duration;

use actix::prelude::*;
use async_jsonrpc_client::{
    transports::{shared::EventLoopHandle, tcp::TcpSocket},
    ErrorKind as TransportErrorKind, Transport as _,
};
use futures_util::compat::Compat01As03;
use serde::Serialize;
use serde_json::{value, Value};

use super::Error;

/// Json-RPC Client actor.
///
/// Use this actor to send json-rpc requests over a TCP connection.
pub struct JsonRpcClient {
    _handle: EventLoopHandle,
    socket: TcpSocket,
    url: String,
    retry_connect: bool,
}

impl JsonRpcClient {
    /// Start Json-RPC async client actor.
    pub fn start(url: &str) -> Result<Addr<JsonRpcClient>, Error> {
        log::info!("Connecting client to {}", url);
        let (_handle, socket) = TcpSocket::new(url).map_err(|_| Error::InvalidUrl)?;
        let client = Self {
            _handle,
            socket,
            url: url.to_owned(),
            retry_connect: false,
        };

        Ok(client.start())
    }

    /// Renew the connection of the client.
    pub fn reconnect(&mut self) {
        log::info!("Reconnecting client to {}", self.url);
        // The creation of the socket can only fail if the url is invalid,
        // and this same url was already used to connect successfully once.
        let (_handle, socket) = TcpSocket::new(self.url.as_ref()).expect("Unexpected error");
        self._handle = _handle;
        self.socket = socket;
        self.retry_connect = false;
    }
}

impl Actor for JsonRpcClient {
    type Context = Context<Self>;

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        log::error!("JsonRpcClient actor stopped!")
    }
}

impl Supervised for JsonRpcClient {}

/// Request sent by the client.
#[derive(Debug, Clone)]
pub struct Request {
    method: String,
    params: Value,
    timeout: Duration,
}

impl Request {
    /// Create a new request with the given method.
    pub fn method<T: Into<String>>(method: T) -> Self {
        Self {
            method: method.into(),
            params: Value::Null,
            timeout: Duration::from_secs(60),
        }
    }

    /// Set request params.
    pub fn params<T: Serialize>(mut self, params: T) -> Result<Self, Error> {
        self.params = value::to_value(params).map_err(Error::SerializeFailed)?;
        Ok(self)
    }

    /// Set request params that are already a serialized value.
    pub fn value(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    /// Set the request timeout after which it will fail if server has not responded.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }
}

impl Message for Request {
    type Result = Result<Value, Error>;
}

impl Handler<Request> for JsonRpcClient {
    type Result = ResponseActFuture<Self, Result<Value, Error>>;

    fn handle(
        &mut self,
        Request {
            method,
            params,
            timeout,
        }: Request,
        _ctx: &mut Self::Context,
    ) -> Self::Result {
        if self.retry_connect {
            self.reconnect();
        }

        log::trace!(
            "<< Sending request, method: {:?}, params: {:?}",
            &method,
            &params
        );
        let fut = Compat01As03::new(self.socket.execute(&method, params))
            .into_actor(self)
            .timeout(timeout)
            .map(move |res, act, _ctx| match res {
                Ok(Ok(resp)) => {
                    log::trace!(">> Received response: {:?}", resp);
                    Ok(resp)
                }
                Ok(Err(err)) => {
                    log::trace!(">> Received error: {}", err);
                    let err = Error::RequestFailed {
                        message: err.to_string(),
                        error_kind: err.0,
                    };
                    if is_connection_error(&err) {
                        act.retry_connect = true;
                    }
                    Err(err)
                }
                Err(()) => {
                    log::error!("JSONRPC request timed out after {} ms", timeout.as_millis());
                    act.retry_connect = true;
                    Err(Error::RequestTimedOut(timeout.as_millis()))
                }
            });

        Box::pin(fut)
    }
}

fn is_connection_error(err: &Error) -> bool {
    match err {
        Error::RequestFailed { error_kind, .. } => matches!(
            error_kind,
            TransportErrorKind::Transport(_) | TransportErrorKind::Unreachable
        ),
        Error::RequestTimedOut(_) => true,
        _ => false,
    }
}

//! Wiring of the JSON-RPC methods onto session actor messages.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use actix::prelude::*;
use actix::ArbiterHandle;
use futures_util::compat::Compat01As03;
use futures_util::{FutureExt, TryFutureExt};
use jsonrpc_core as rpc;
use jsonrpc_pubsub::{PubSubHandler, Subscriber, SubscriptionId};

use crate::server::{Meta, PubsubSink};

use super::*;

/// Helper macro to add multiple JSON-RPC methods at once
macro_rules! routes {
    ($io:expr, $addr:expr $(,)?) => {};
    ($io:expr, $addr:expr, ($method_jsonrpc:expr, $actor_msg:ty $(,)?), $($args:tt)*) => {
        {
            let addr = $addr.clone();
            $io.add_method($method_jsonrpc, move |params: rpc::Params| {
                log::debug!("Handling request for method: {}", $method_jsonrpc);
                let addr = addr.clone();
                async move {
                    // Absent params read as an empty object so optional
                    // fields can use their defaults.
                    let params = match params {
                        rpc::Params::None => rpc::Params::Map(Default::default()),
                        params => params,
                    };
                    let msg = params.parse::<$actor_msg>()?;
                    log::trace!("=> Handling Request: {:?}", &msg);
                    process_response(addr.send(msg).await)
                }
                .boxed()
                .compat()
            });
        }
        routes!($io, $addr, $($args)*);
    };
}

/// Like `routes!` for methods that take no params at all.
macro_rules! routes_no_params {
    ($io:expr, $addr:expr $(,)?) => {};
    ($io:expr, $addr:expr, ($method_jsonrpc:expr, $actor_msg:ty $(,)?), $($args:tt)*) => {
        {
            let addr = $addr.clone();
            $io.add_method($method_jsonrpc, move |_params: rpc::Params| {
                log::debug!("Handling request for method: {}", $method_jsonrpc);
                let addr = addr.clone();
                async move { process_response(addr.send(<$actor_msg>::default()).await) }
                    .boxed()
                    .compat()
            });
        }
        routes_no_params!($io, $addr, $($args)*);
    };
}

/// Register every JSON-RPC method of the wallet onto `handler`.
///
/// The requester-channel subscription and its notifications run on the
/// given arbiter; registration happens before the server starts
/// listening, so no inbound message can be lost to a race.
pub fn connect_routes(handler: &mut PubSubHandler<Meta>, addr: Addr<App>, arbiter: ArbiterHandle) {
    let subscription_ids = Arc::new(AtomicU64::new(1));

    handler.add_subscription(
        "fundingNotification",
        ("subscribeFunding", {
            let addr = addr.clone();
            let arbiter = arbiter.clone();
            move |_params: rpc::Params, meta: Meta, subscriber: Subscriber| {
                log::debug!("Requester subscribing from origin {:?}", meta.origin);
                let addr = addr.clone();
                let arbiter = arbiter.clone();
                let subscription_id =
                    SubscriptionId::Number(subscription_ids.fetch_add(1, Ordering::SeqCst));

                let assign = async move {
                    match Compat01As03::new(subscriber.assign_id_async(subscription_id)).await {
                        Ok(sink) => {
                            let sink = Arc::new(PubsubSink::new(sink, arbiter.clone()));
                            addr.do_send(SubscribeFunding {
                                sink,
                                origin: meta.origin.clone(),
                            });
                        }
                        Err(()) => log::error!("Failed to assign a subscription id"),
                    }
                };
                arbiter.spawn(assign);
            }
        }),
        ("unsubscribeFunding", {
            let addr = addr.clone();
            move |subscription_id: SubscriptionId, _meta| {
                let addr = addr.clone();
                async move { process_response(addr.send(UnsubscribeFunding(subscription_id)).await) }
                    .boxed()
                    .compat()
            }
        }),
    );

    // The inbound half of the requester channel needs the connection
    // origin, so it cannot go through the plain `routes!` table.
    {
        let addr = addr.clone();
        handler.add_method_with_meta("addFunds", move |params: rpc::Params, meta: Meta| {
            let addr = addr.clone();
            async move {
                // A message with no params at all is not a request.
                let params = match params {
                    rpc::Params::None => return Ok(rpc::Value::Null),
                    params => params,
                };
                let params = params.parse::<AddFundsParams>()?;
                let origin = meta.origin.clone().unwrap_or_else(|| "*".to_string());
                match addr.send(AddFunds { params, origin }).await {
                    Ok(()) => Ok(rpc::Value::Null),
                    Err(err) => Err(Error::from(err).into()),
                }
            }
            .boxed()
            .compat()
        });
    }

    routes_no_params!(
        handler,
        addr,
        ("getStatus", GetStatusRequest),
        ("getSettings", GetSettingsRequest),
        ("refreshBalance", RefreshBalanceRequest),
        ("requestAirdrop", RequestAirdropRequest),
        ("confirmTransaction", ConfirmTransactionRequest),
        ("shutdown", ShutdownRequest),
    );

    routes!(
        handler,
        addr,
        ("sendTransaction", SendTransactionRequest),
        ("setRecipientPublicKey", SetRecipientPublicKeyRequest),
        ("setRecipientAmount", SetRecipientAmountRequest),
        ("setConfirmationSignature", SetConfirmationSignatureRequest),
        ("dismissMessage", DismissMessageRequest),
        ("setNodeUrl", SetNodeUrlRequest),
    );
}

fn process_response<T: serde::Serialize>(
    res: std::result::Result<Result<T>, MailboxError>,
) -> std::result::Result<rpc::Value, rpc::Error> {
    match res {
        Ok(Ok(response)) => serde_json::to_value(response).map_err(|err| internal_error(err).into()),
        Ok(Err(err)) => Err(err.into()),
        Err(err) => Err(Error::from(err).into()),
    }
}

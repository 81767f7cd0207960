//! Wallet daemon for the Lamport token network.
//!
//! The wallet holds a single keypair and serves clients over a
//! WebSockets JSON-RPC connection. A regular client drives the send and
//! confirm workflows; the page that opened the wallet can additionally
//! subscribe to the funding channel and ask the wallet to send it tokens:
//! ```js
//! var sock = new WebSocket('ws://localhost:8722');
//! sock.addEventListener('message', (e) => console.log('Rcv =>', e.data));
//! sock.send('{"jsonrpc":"2.0","method":"subscribeFunding","id":"1"}');
//! sock.send('{"jsonrpc":"2.0","method":"addFunds","params":{"pubkey":"...","network":"tcp://127.0.0.1:8899","amount":10},"id":"2"}');
//! ```

#![deny(rust_2018_idioms)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use actix::prelude::*;
use anyhow::Context as _;

use lamport_config::config::Config;
use lamport_protected::Protected;

use crate::actors::app::{self, App};
use crate::actors::store::Store;
use crate::client::{Ledger, NodeClient};

mod account;
mod actors;
mod client;
mod constants;
mod model;
mod server;
mod signal;
mod types;

/// Run the wallet daemon.
pub fn run(conf: Config) -> Result<(), anyhow::Error> {
    let requests_timeout = Duration::from_millis(conf.wallet.requests_timeout);
    let server_addr = conf.wallet.server_addr;
    let node_url = conf.wallet.node_url;
    let secret_key = match conf.wallet.secret_key {
        Some(key) => Some(Protected::from(
            hex::decode(key.as_str()).context("account secret key is not valid hex")?,
        )),
        None => None,
    };

    let system = System::new();

    let server = system.block_on(async {
        let store = Store::start(node_url.clone(), secret_key);

        let client: Arc<dyn Ledger> = NodeClient::start(&node_url, requests_timeout)
            .map_err(|err| anyhow::anyhow!("failed to connect to node at {}: {}", node_url, err))?;
        let connect: app::ConnectFn = Box::new(move |url| {
            NodeClient::start(url, requests_timeout).map(|client| client as Arc<dyn Ledger>)
        });

        let app = App::start(app::Params {
            store,
            client,
            connect,
        });

        let server = server::start(server_addr, app.clone(), Arbiter::current())
            .map_err(|err| anyhow::anyhow!("failed to start the wallet server: {}", err))?;
        log::info!("Wallet server listening on {}", server_addr);

        // Intercept SIGTERM to close the session gracefully.
        signal::ctrl_c(move || {
            app.do_send(app::Shutdown);
        });

        Ok::<_, anyhow::Error>(server)
    })?;

    system.run()?;
    drop(server);

    Ok(())
}

//! Runtime settings store.
//!
//! Owns the configured network entry point and the account secret
//! material, and notifies subscribed actors on every change. Settings are
//! replaced, never mutated in place, so a subscriber always receives a
//! complete snapshot.

use std::collections::HashMap;

use actix::prelude::*;

use lamport_protected::Protected;

pub mod handlers;

pub use handlers::*;

/// Point-in-time contents of the store.
#[derive(Clone)]
pub struct Snapshot {
    pub node_url: String,
    pub secret_key: Option<Protected>,
}

/// Notification pushed to subscribers every time the store changes. New
/// subscribers receive one immediately with the current contents.
#[derive(Clone)]
pub struct StoreChanged(pub Snapshot);

impl Message for StoreChanged {
    type Result = ();
}

/// Settings store actor.
pub struct Store {
    node_url: String,
    secret_key: Option<Protected>,
    subscribers: HashMap<usize, Recipient<StoreChanged>>,
    next_token: usize,
}

impl Store {
    /// Start the store actor with the settings loaded from configuration.
    pub fn start(node_url: String, secret_key: Option<Protected>) -> Addr<Self> {
        Store {
            node_url,
            secret_key,
            subscribers: HashMap::new(),
            next_token: 0,
        }
        .start()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            node_url: self.node_url.clone(),
            secret_key: self.secret_key.clone(),
        }
    }

    fn broadcast(&self) {
        for subscriber in self.subscribers.values() {
            subscriber.do_send(StoreChanged(self.snapshot()));
        }
    }
}

impl Actor for Store {
    type Context = Context<Self>;
}

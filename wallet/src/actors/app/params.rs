use std::sync::Arc;

use actix::prelude::*;

use crate::actors::store::Store;
use crate::client::Ledger;

use super::Result;

/// Factory that connects a fresh ledger client to a node url. Invoked
/// every time the configured network changes.
pub type ConnectFn = Box<dyn Fn(&str) -> Result<Arc<dyn Ledger>>>;

/// Collaborators handed to the session actor at construction.
pub struct Params {
    /// Settings store actor.
    pub store: Addr<Store>,
    /// Ledger client used until the first settings notification arrives.
    pub client: Arc<dyn Ledger>,
    /// Builds replacement ledger clients on network change.
    pub connect: ConnectFn,
}

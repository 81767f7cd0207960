use actix::prelude::*;

use crate::actors::store::Store;

/// Replace the configured network entry point and notify subscribers.
pub struct SetNodeUrl(pub String);

impl Message for SetNodeUrl {
    type Result = ();
}

impl Handler<SetNodeUrl> for Store {
    type Result = ();

    fn handle(&mut self, SetNodeUrl(node_url): SetNodeUrl, _ctx: &mut Self::Context) {
        log::debug!("Network entry point set to {}", node_url);
        self.node_url = node_url;
        self.broadcast();
    }
}

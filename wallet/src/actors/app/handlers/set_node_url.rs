use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app;

/// Point the wallet at a different ledger node. The connection and the
/// account are rebuilt once the settings store broadcasts the change.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetNodeUrlRequest {
    pub url: String,
}

impl Message for SetNodeUrlRequest {
    type Result = app::Result<()>;
}

impl Handler<SetNodeUrlRequest> for app::App {
    type Result = app::Result<()>;

    fn handle(&mut self, msg: SetNodeUrlRequest, _ctx: &mut Self::Context) -> Self::Result {
        self.set_node_url(msg.url)
    }
}

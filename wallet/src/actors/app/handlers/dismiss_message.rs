use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app;

/// Drop the message-log entry at the given index.
#[derive(Debug, Serialize, Deserialize)]
pub struct DismissMessageRequest {
    index: usize,
}

impl Message for DismissMessageRequest {
    type Result = app::Result<()>;
}

impl Handler<DismissMessageRequest> for app::App {
    type Result = app::Result<()>;

    fn handle(&mut self, msg: DismissMessageRequest, _ctx: &mut Self::Context) -> Self::Result {
        self.state.dismiss_message(msg.index)
    }
}

#[cfg(test)]
impl DismissMessageRequest {
    pub fn at(index: usize) -> Self {
        DismissMessageRequest { index }
    }
}

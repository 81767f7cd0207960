use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app;

/// Internal shutdown signal (ctrl-c, or a send-and-close transfer).
pub struct Shutdown;

impl Message for Shutdown {
    type Result = ();
}

impl Handler<Shutdown> for app::App {
    type Result = ();

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Self::Context) -> Self::Result {
        self.stop(ctx);
    }
}

/// Client-requested shutdown of the wallet daemon.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShutdownRequest;

impl Message for ShutdownRequest {
    type Result = app::Result<()>;
}

impl Handler<ShutdownRequest> for app::App {
    type Result = app::Result<()>;

    fn handle(&mut self, _msg: ShutdownRequest, ctx: &mut Self::Context) -> Self::Result {
        self.stop(ctx);

        Ok(())
    }
}

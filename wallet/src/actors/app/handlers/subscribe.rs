use actix::prelude::*;

use crate::actors::app;
use crate::types;

/// Attach the requester channel. The wallet announces readiness on it
/// right away; until a funding request arrives no requester origin is
/// recorded, so the announcement is effectively broadcast.
pub struct SubscribeFunding {
    pub sink: types::Sink,
    pub origin: Option<String>,
}

impl Message for SubscribeFunding {
    type Result = ();
}

impl Handler<SubscribeFunding> for app::App {
    type Result = ();

    fn handle(&mut self, msg: SubscribeFunding, _ctx: &mut Self::Context) -> Self::Result {
        log::debug!("Requester window attached from origin {:?}", msg.origin);
        self.state.set_requester_sink(Some(msg.sink));
        self.state.notify_requester("ready", serde_json::Value::Null);
    }
}

/// Detach the requester channel (the requester window went away).
pub struct UnsubscribeFunding(pub types::SubscriptionId);

impl Message for UnsubscribeFunding {
    type Result = app::Result<()>;
}

impl Handler<UnsubscribeFunding> for app::App {
    type Result = app::Result<()>;

    fn handle(&mut self, _msg: UnsubscribeFunding, _ctx: &mut Self::Context) -> Self::Result {
        log::debug!("Requester window detached");
        self.state.set_requester_sink(None);

        Ok(())
    }
}

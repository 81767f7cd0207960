use actix::prelude::*;

use crate::actors::store::Store;

/// Detach a subscriber so a stopped session is never notified again.
pub struct Unsubscribe(pub usize);

impl Message for Unsubscribe {
    type Result = ();
}

impl Handler<Unsubscribe> for Store {
    type Result = ();

    fn handle(&mut self, Unsubscribe(token): Unsubscribe, _ctx: &mut Self::Context) {
        self.subscribers.remove(&token);
    }
}

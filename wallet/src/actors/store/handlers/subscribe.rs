use actix::prelude::*;

use crate::actors::store::{Store, StoreChanged};

/// Subscribe a recipient to store changes.
///
/// The recipient immediately receives a notification with the current
/// contents, and the returned token can be used to unsubscribe.
pub struct Subscribe(pub Recipient<StoreChanged>);

impl Message for Subscribe {
    type Result = usize;
}

impl Handler<Subscribe> for Store {
    type Result = MessageResult<Subscribe>;

    fn handle(&mut self, Subscribe(recipient): Subscribe, _ctx: &mut Self::Context) -> Self::Result {
        let token = self.next_token;
        self.next_token += 1;

        recipient.do_send(StoreChanged(self.snapshot()));
        self.subscribers.insert(token, recipient);

        MessageResult(token)
    }
}

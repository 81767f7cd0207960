use actix::prelude::*;

use crate::actors::store::{Snapshot, Store};

/// Ask for the current contents of the store.
pub struct Get;

impl Message for Get {
    type Result = Snapshot;
}

impl Handler<Get> for Store {
    type Result = MessageResult<Get>;

    fn handle(&mut self, _msg: Get, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.snapshot())
    }
}

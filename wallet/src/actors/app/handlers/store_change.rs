use actix::prelude::*;

use crate::actors::{app, store};

impl Handler<store::StoreChanged> for app::App {
    type Result = ();

    fn handle(
        &mut self,
        store::StoreChanged(snapshot): store::StoreChanged,
        ctx: &mut Self::Context,
    ) -> Self::Result {
        self.store_changed(snapshot, ctx);
    }
}

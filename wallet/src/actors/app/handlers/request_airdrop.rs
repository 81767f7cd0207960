use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app;

use super::BalanceResponse;

/// Ask the faucet for an airdrop, then refresh the balance.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RequestAirdropRequest;

impl Message for RequestAirdropRequest {
    type Result = app::Result<BalanceResponse>;
}

impl Handler<RequestAirdropRequest> for app::App {
    type Result = app::ResponseActFuture<BalanceResponse>;

    fn handle(&mut self, _msg: RequestAirdropRequest, _ctx: &mut Self::Context) -> Self::Result {
        self.request_airdrop()
    }
}

use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app;

/// Refresh the balance of the active account.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RefreshBalanceRequest;

/// Balance of the active account after the workflow that returns it.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: u64,
}

impl Message for RefreshBalanceRequest {
    type Result = app::Result<BalanceResponse>;
}

impl Handler<RefreshBalanceRequest> for app::App {
    type Result = app::ResponseActFuture<BalanceResponse>;

    fn handle(&mut self, _msg: RefreshBalanceRequest, _ctx: &mut Self::Context) -> Self::Result {
        self.refresh_balance()
    }
}

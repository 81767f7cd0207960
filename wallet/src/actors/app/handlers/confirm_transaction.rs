use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app;

/// Poll the network for the confirmation status of the stored signature.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfirmTransactionRequest;

/// Result of a completed confirmation check.
#[derive(Debug, Serialize)]
pub struct ConfirmTransactionResponse {
    pub confirmed: bool,
}

impl Message for ConfirmTransactionRequest {
    type Result = app::Result<ConfirmTransactionResponse>;
}

impl Handler<ConfirmTransactionRequest> for app::App {
    type Result = app::ResponseActFuture<ConfirmTransactionResponse>;

    fn handle(&mut self, _msg: ConfirmTransactionRequest, _ctx: &mut Self::Context) -> Self::Result {
        self.confirm_transaction()
    }
}

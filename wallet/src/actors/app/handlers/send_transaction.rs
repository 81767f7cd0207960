use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app;

/// Submit the current transfer intent to the network.
#[derive(Debug, Serialize, Deserialize)]
pub struct SendTransactionRequest {
    /// Terminate the session once the transfer succeeds. Failures never
    /// terminate it.
    #[serde(default)]
    pub close_on_success: bool,
}

/// Signature and amount of a successfully submitted transfer.
#[derive(Debug, Serialize)]
pub struct SendTransactionResponse {
    pub signature: String,
    pub amount: u64,
}

impl Message for SendTransactionRequest {
    type Result = app::Result<SendTransactionResponse>;
}

impl Handler<SendTransactionRequest> for app::App {
    type Result = app::ResponseActFuture<SendTransactionResponse>;

    fn handle(&mut self, msg: SendTransactionRequest, _ctx: &mut Self::Context) -> Self::Result {
        self.send_transaction(msg.close_on_success)
    }
}

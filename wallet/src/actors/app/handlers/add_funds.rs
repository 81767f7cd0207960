use actix::prelude::*;
use serde::Deserialize;

use crate::actors::app;

/// Params of an inbound `addFunds` request, as sent by the requester
/// window. The amount may arrive as a number or a string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddFundsParams {
    pub pubkey: Option<String>,
    pub network: Option<String>,
    pub amount: Option<serde_json::Value>,
}

/// An `addFunds` request paired with the origin of the connection it
/// arrived on. The origin becomes the response target if the request is
/// accepted.
pub struct AddFunds {
    pub params: AddFundsParams,
    pub origin: String,
}

impl Message for AddFunds {
    type Result = ();
}

impl Handler<AddFunds> for app::App {
    type Result = ();

    fn handle(&mut self, msg: AddFunds, _ctx: &mut Self::Context) -> Self::Result {
        self.handle_funding_request(msg.params, msg.origin);
    }
}

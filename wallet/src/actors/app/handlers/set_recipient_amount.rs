use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app::{self, validation};

use super::SetRecipientResponse;

/// Validate and store the transfer amount field. The ceiling is the
/// balance known at the time of the edit.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetRecipientAmountRequest {
    pub value: String,
}

impl Message for SetRecipientAmountRequest {
    type Result = app::Result<SetRecipientResponse>;
}

impl Handler<SetRecipientAmountRequest> for app::App {
    type Result = app::Result<SetRecipientResponse>;

    fn handle(&mut self, msg: SetRecipientAmountRequest, _ctx: &mut Self::Context) -> Self::Result {
        let validated = validation::validate_amount(&msg.value, self.state.balance());
        self.state.set_recipient_amount(validated.value);

        Ok(SetRecipientResponse {
            status: validated.status,
            message: validated.message,
            send_disabled: self.state.send_disabled(),
        })
    }
}

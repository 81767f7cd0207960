use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app::{self, validation};
use crate::model;

/// Validate and store the recipient public key field.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetRecipientPublicKeyRequest {
    pub value: String,
}

/// Verdict on a transfer-form field plus the resulting send gate.
#[derive(Debug, Serialize)]
pub struct SetRecipientResponse {
    pub status: model::Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub send_disabled: bool,
}

impl Message for SetRecipientPublicKeyRequest {
    type Result = app::Result<SetRecipientResponse>;
}

impl Handler<SetRecipientPublicKeyRequest> for app::App {
    type Result = app::Result<SetRecipientResponse>;

    fn handle(
        &mut self,
        msg: SetRecipientPublicKeyRequest,
        _ctx: &mut Self::Context,
    ) -> Self::Result {
        let validated = validation::validate_public_key(&msg.value);
        self.state.set_recipient_public_key(validated.value);

        Ok(SetRecipientResponse {
            status: validated.status,
            message: validated.message,
            send_disabled: self.state.send_disabled(),
        })
    }
}

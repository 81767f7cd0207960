use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app::{self, validation};
use crate::model;

/// Validate and store the signature to confirm. Any previous
/// confirmation result is reset.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetConfirmationSignatureRequest {
    pub value: String,
}

/// Verdict on the signature field plus the resulting confirm gate.
#[derive(Debug, Serialize)]
pub struct SetConfirmationSignatureResponse {
    pub status: model::Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub confirm_disabled: bool,
}

impl Message for SetConfirmationSignatureRequest {
    type Result = app::Result<SetConfirmationSignatureResponse>;
}

impl Handler<SetConfirmationSignatureRequest> for app::App {
    type Result = app::Result<SetConfirmationSignatureResponse>;

    fn handle(
        &mut self,
        msg: SetConfirmationSignatureRequest,
        _ctx: &mut Self::Context,
    ) -> Self::Result {
        let validated = validation::validate_signature(&msg.value);
        self.state.set_confirmation_signature(validated.value);

        Ok(SetConfirmationSignatureResponse {
            status: validated.status,
            message: validated.message,
            confirm_disabled: self.state.confirmation_signature().is_none(),
        })
    }
}

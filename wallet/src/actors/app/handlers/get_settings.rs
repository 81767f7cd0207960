use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app;

/// Ask for the current wallet settings.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GetSettingsRequest;

/// Client-facing view of the wallet settings.
#[derive(Debug, Serialize)]
pub struct GetSettingsResponse {
    pub node_url: String,
}

impl Message for GetSettingsRequest {
    type Result = app::Result<GetSettingsResponse>;
}

impl Handler<GetSettingsRequest> for app::App {
    type Result = app::Result<GetSettingsResponse>;

    fn handle(&mut self, _msg: GetSettingsRequest, _ctx: &mut Self::Context) -> Self::Result {
        Ok(GetSettingsResponse {
            node_url: self.state.node_url().to_string(),
        })
    }
}

use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actors::app;
use crate::model;

/// Ask for a full snapshot of the session.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GetStatusRequest;

impl Message for GetStatusRequest {
    type Result = app::Result<model::Status>;
}

impl Handler<GetStatusRequest> for app::App {
    type Result = app::Result<model::Status>;

    fn handle(&mut self, _msg: GetStatusRequest, _ctx: &mut Self::Context) -> Self::Result {
        Ok(self.state.status())
    }
}

//! The wallet session actor.

use actix::prelude::*;

use crate::actors::store;

pub mod error;
pub mod handlers;
pub mod methods;
pub mod params;
pub mod routes;
pub mod state;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::*;
pub use handlers::*;
pub use params::*;
pub use routes::*;
pub use state::State;
pub use validation::*;

pub type Result<T> = std::result::Result<T, Error>;

pub type ResponseActFuture<T> = actix::ResponseActFuture<App, Result<T>>;

/// Session actor: owns the wallet state and coordinates the settings
/// store, the ledger client and the requester channel.
pub struct App {
    params: Params,
    state: State,
    store_subscription: Option<usize>,
}

impl App {
    /// Start the session actor.
    pub fn start(params: Params) -> Addr<Self> {
        let state = State::new(params.client.clone());

        App {
            params,
            state,
            store_subscription: None,
        }
        .start()
    }
}

impl Actor for App {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        // Subscribe to settings changes before handling anything else so
        // no change notification can slip past the session.
        self.params
            .store
            .send(store::Subscribe(ctx.address().recipient()))
            .into_actor(self)
            .map(|res, act, _ctx| match res {
                Ok(token) => act.store_subscription = Some(token),
                Err(err) => act
                    .state
                    .log_error(format!("Failed to subscribe to the settings store: {}", err)),
            })
            .wait(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(token) = self.store_subscription.take() {
            self.params.store.do_send(store::Unsubscribe(token));
        }
        log::info!("Wallet session stopped");
    }
}

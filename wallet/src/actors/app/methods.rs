use std::sync::Arc;

use actix::fut;
use actix::prelude::*;
use serde_json::json;

use crate::account;
use crate::actors::store;
use crate::constants;

use super::*;

impl App {
    /// Wrap a workflow in the blocking-indicator discipline: the
    /// indicator is set before the workflow starts and cleared on every
    /// exit path, and failures end up in the message log.
    fn run_operation<T, F>(&mut self, title: &str, description: &str, f: F) -> ResponseActFuture<T>
    where
        T: 'static,
        F: ActorFuture<App, Output = Result<T>> + 'static,
    {
        self.state.begin_operation(title, description);

        Box::pin(f.map(|res, act, _ctx| {
            act.state.finish_operation();
            if let Err(err) = &res {
                act.state.log_error(err.to_string());
            }
            res
        }))
    }

    /// Fetch the balance of the active account. Does nothing when no
    /// account is active.
    pub fn refresh_balance(&mut self) -> ResponseActFuture<BalanceResponse> {
        let account = match self.state.account() {
            Some(account) => account,
            None => {
                return Box::pin(fut::ok(BalanceResponse {
                    balance: self.state.balance(),
                }))
            }
        };
        let client = self.state.client();

        let f = async move { client.get_balance(&account.public_key).await }
            .into_actor(self)
            .map(|res, act: &mut App, _ctx| {
                let balance = res?;
                act.state.set_balance(balance);

                Ok(BalanceResponse { balance })
            });

        self.run_operation("Updating Account Balance", "Please wait...", f)
    }

    /// Ask the faucet for a fixed-size airdrop, then refresh the balance.
    ///
    /// The balance ceiling that hides the airdrop button in clients is
    /// not enforced here: the faucet decides for itself.
    pub fn request_airdrop(&mut self) -> ResponseActFuture<BalanceResponse> {
        let account = match self.state.account() {
            Some(account) => account,
            None => return Box::pin(fut::err(Error::NoActiveAccount)),
        };
        let client = self.state.client();

        let f = async move {
            client
                .request_airdrop(&account.public_key, constants::AIRDROP_AMOUNT)
                .await?;
            client.get_balance(&account.public_key).await
        }
        .into_actor(self)
        .map(|res, act: &mut App, _ctx| {
            let balance = res?;
            act.state.set_balance(balance);

            Ok(BalanceResponse { balance })
        });

        self.run_operation("Requesting Airdrop", "Please wait...", f)
    }

    /// Submit the validated transfer intent to the network.
    ///
    /// The requester window is answered exactly once per invocation:
    /// `{signature, amount}` on success, `{err: true}` on failure. With
    /// `close_on_success` the session terminates after a successful
    /// transfer; it never terminates on a failed one.
    pub fn send_transaction(
        &mut self,
        close_on_success: bool,
    ) -> ResponseActFuture<SendTransactionResponse> {
        let (recipient, tokens) = match self.state.transfer_intent() {
            Some(intent) => intent,
            None => {
                return Box::pin(fut::err(validation_error(field_error(
                    "transfer",
                    "a validated recipient public key and amount are required",
                ))))
            }
        };
        let account = match self.state.account() {
            Some(account) => account,
            None => return Box::pin(fut::err(Error::NoActiveAccount)),
        };

        // Capture the collaborators this invocation will live with: both
        // the client and the requester channel may be replaced while the
        // submission is in flight.
        let client = self.state.client();
        let responder = self.state.requester_sink();

        // The pending funding request is cleared before the network call
        // resolves so the same request cannot be triggered again
        // mid-flight.
        self.state.clear_funding_request();

        let f = async move {
            match client.submit_transfer(&account, &recipient, tokens).await {
                Ok(signature) => {
                    // The requester hears about the outcome before any
                    // follow-up balance traffic.
                    if let Some(sink) = &responder {
                        sink.notify(
                            "addFundsResponse",
                            json!({ "signature": signature, "amount": tokens }),
                        );
                    }
                    let refreshed = if close_on_success {
                        None
                    } else {
                        Some(client.get_balance(&account.public_key).await)
                    };

                    SendOutcome::Confirmed {
                        signature,
                        tokens,
                        refreshed,
                    }
                }
                Err(err) => {
                    // The transfer failed but fees may still have been
                    // charged.
                    let refreshed = client.get_balance(&account.public_key).await.ok();
                    if let Some(sink) = &responder {
                        sink.notify("addFundsResponse", json!({ "err": true }));
                    }

                    SendOutcome::Failed { err, refreshed }
                }
            }
        }
        .into_actor(self)
        .map(move |outcome, act: &mut App, ctx| match outcome {
            SendOutcome::Confirmed {
                signature,
                tokens,
                refreshed,
            } => {
                match refreshed {
                    Some(Ok(balance)) => act.state.set_balance(balance),
                    // The transfer itself went through; a failed refresh
                    // only costs us a stale balance display.
                    Some(Err(err)) => act.state.log_error(err.to_string()),
                    None => {}
                }
                if close_on_success {
                    // Terminal action of the session, the daemon's
                    // equivalent of closing the popup window.
                    ctx.notify(Shutdown);
                }

                Ok(SendTransactionResponse {
                    signature,
                    amount: tokens,
                })
            }
            SendOutcome::Failed { err, refreshed } => {
                if let Some(balance) = refreshed {
                    act.state.set_balance(balance);
                }

                Err(err)
            }
        });

        self.run_operation("Sending Transaction", "Please wait...", f)
    }

    /// Poll the network for the confirmation status of the stored
    /// signature.
    pub fn confirm_transaction(&mut self) -> ResponseActFuture<ConfirmTransactionResponse> {
        let signature = match self.state.confirmation_signature() {
            Some(signature) => signature,
            None => {
                return Box::pin(fut::err(validation_error(field_error(
                    "signature",
                    "no transaction signature to confirm",
                ))))
            }
        };
        let client = self.state.client();

        let f = async move { client.confirm_transaction(&signature).await }
            .into_actor(self)
            .map(|res, act: &mut App, _ctx| {
                let confirmed = res?;
                act.state.set_transaction_confirmed(confirmed);

                Ok(ConfirmTransactionResponse { confirmed })
            });

        self.run_operation("Confirming Transaction", "Please wait...", f)
    }

    /// Handle an inbound `addFunds` funding request.
    ///
    /// At most one request can be pending: while one is, further requests
    /// are ignored without a trace. Rejections never reach the requester
    /// either, they only show up in the wallet's own message log.
    pub fn handle_funding_request(&mut self, params: AddFundsParams, origin: String) {
        if self.state.is_request_pending() {
            log::debug!(
                "Ignoring funding request from {}: another request is pending",
                origin
            );
            return;
        }

        let pubkey = params.pubkey.filter(|value| !value.is_empty());
        let network = params.network.filter(|value| !value.is_empty());
        let (pubkey, network) = match (pubkey, network) {
            (Some(pubkey), Some(network)) => (pubkey, network),
            (pubkey, network) => {
                if pubkey.is_none() {
                    self.state
                        .log_error("Request did not specify a public key".to_string());
                }
                if network.is_none() {
                    self.state
                        .log_error("Request did not specify a network".to_string());
                }
                return;
            }
        };

        let requested_network = match url::Url::parse(&network) {
            Ok(url) => network_origin(&url),
            Err(_) => {
                self.state
                    .log_error(format!("Request network is invalid: \"{}\"", network));
                return;
            }
        };

        let wallet_network = url::Url::parse(self.state.node_url())
            .map(|url| network_origin(&url))
            .unwrap_or_else(|_| self.state.node_url().to_string());
        if requested_network != wallet_network {
            // The switch happens before the request is recorded, and it
            // stands even if the wallet ends up not serving the request:
            // client and account are rebuilt once the store broadcasts.
            self.params
                .store
                .do_send(store::SetNodeUrl(requested_network.clone()));
            self.state.log_warning(format!(
                "Changed wallet network from \"{}\" to \"{}\"",
                wallet_network, requested_network
            ));
        }

        let amount = params.amount.map(amount_to_string).unwrap_or_default();
        self.state
            .accept_funding_request(origin, pubkey.clone(), amount.clone());

        // Pre-fill the transfer intent from the request, running the same
        // validation a client edit would.
        self.state
            .set_recipient_public_key(validation::validate_public_key(&pubkey).value);
        let balance = self.state.balance();
        self.state
            .set_recipient_amount(validation::validate_amount(&amount, balance).value);
    }

    /// Validate and apply a new network entry point.
    pub fn set_node_url(&mut self, url: String) -> Result<()> {
        if url::Url::parse(&url).is_err() {
            return Err(validation_error(field_error(
                "node_url",
                format!("invalid url: \"{}\"", url),
            )));
        }
        self.params.store.do_send(store::SetNodeUrl(url));

        Ok(())
    }

    /// React to a settings change: reconnect the ledger client, rebuild
    /// the account from the secret material and refresh the balance.
    pub fn store_changed(&mut self, snapshot: store::Snapshot, ctx: &mut Context<App>) {
        log::debug!("Settings changed, rebuilding node connection and account");

        self.state.set_node_url(snapshot.node_url.clone());
        match (self.params.connect)(&snapshot.node_url) {
            Ok(client) => self.state.replace_client(client),
            Err(err) => self.state.log_error(format!(
                "Failed to connect to \"{}\": {}",
                snapshot.node_url, err
            )),
        }

        let account = match snapshot.secret_key {
            Some(secret) => match account::gen_account(&secret) {
                Ok(account) => Some(Arc::new(account)),
                Err(err) => {
                    self.state
                        .log_error(format!("Invalid account secret key: {}", err));
                    None
                }
            },
            None => None,
        };
        self.state.replace_account(account);

        ctx.notify(RefreshBalanceRequest);
    }

    /// Stop the session and the daemon with it.
    pub fn stop(&mut self, ctx: &mut Context<App>) {
        log::info!("Stopping wallet session");
        ctx.stop();
        System::current().stop();
    }
}

enum SendOutcome {
    Confirmed {
        signature: String,
        tokens: u64,
        refreshed: Option<Result<u64>>,
    },
    Failed {
        err: Error,
        refreshed: Option<u64>,
    },
}

/// Origin of a url (`scheme://host[:port]`), the part compared when
/// deciding whether a funding request points at a different network.
fn network_origin(url: &url::Url) -> String {
    let mut origin = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        origin.push_str(&format!(":{}", port));
    }

    origin
}

fn amount_to_string(amount: serde_json::Value) -> String {
    match amount {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(amount) => amount,
        serde_json::Value::Number(amount) => amount.to_string(),
        other => other.to_string(),
    }
}

use std::sync::{Arc, RwLock};

use crate::account::Account;
use crate::client::Ledger;
use crate::constants;
use crate::model;
use crate::types;

use super::error::validation_error;
use super::validation::field_error;
use super::Result;

/// Struct to manage the session state and its invariants.
pub struct State {
    pub(super) client: Arc<dyn Ledger>,
    pub(super) node_url: String,
    pub(super) account: Option<Arc<Account>>,
    pub(super) balance: u64,
    pub(super) messages: Vec<model::LogEntry>,
    pub(super) operation: Option<model::Operation>,
    pub(super) requester_origin: String,
    pub(super) requester_sink: types::DynamicSink,
    pub(super) funding: types::FundingRequest,
    pub(super) transfer: types::TransferIntent,
    pub(super) confirmation: types::ConfirmationIntent,
}

impl State {
    /// Fresh session state around the initial ledger client.
    pub fn new(client: Arc<dyn Ledger>) -> Self {
        State {
            client,
            node_url: String::new(),
            account: None,
            balance: 0,
            messages: Vec::new(),
            operation: None,
            // Wildcard until a funding request records its sender.
            requester_origin: "*".to_string(),
            requester_sink: Arc::new(RwLock::new(None)),
            funding: Default::default(),
            transfer: Default::default(),
            confirmation: Default::default(),
        }
    }

    /// The ledger client to use for a workflow starting now.
    pub fn client(&self) -> Arc<dyn Ledger> {
        self.client.clone()
    }

    /// Replace the ledger client wholesale. Workflows already in flight
    /// keep the client they captured at call start.
    pub fn replace_client(&mut self, client: Arc<dyn Ledger>) {
        self.client = client;
    }

    /// The active account, if any.
    pub fn account(&self) -> Option<Arc<Account>> {
        self.account.clone()
    }

    /// Replace the account wholesale (never mutated in place).
    pub fn replace_account(&mut self, account: Option<Arc<Account>>) {
        self.account = account;
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn set_balance(&mut self, balance: u64) {
        self.balance = balance;
    }

    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    pub fn set_node_url(&mut self, node_url: String) {
        self.node_url = node_url;
    }

    /// Append an error entry to the message log.
    pub fn log_error(&mut self, text: String) {
        log::error!("{}", text);
        self.log(text, model::Severity::Error);
    }

    /// Append a warning entry to the message log.
    pub fn log_warning(&mut self, text: String) {
        log::warn!("{}", text);
        self.log(text, model::Severity::Warning);
    }

    /// Append an info entry to the message log.
    pub fn log_info(&mut self, text: String) {
        log::info!("{}", text);
        self.log(text, model::Severity::Info);
    }

    fn log(&mut self, text: String, severity: model::Severity) {
        self.messages.push(model::LogEntry { text, severity });
    }

    /// Drop the message at `index`. Index validity is checked at removal
    /// time since earlier dismissals shift the log.
    pub fn dismiss_message(&mut self, index: usize) -> Result<()> {
        if index >= self.messages.len() {
            return Err(validation_error(field_error(
                "index",
                format!("no message at index {}", index),
            )));
        }
        self.messages.remove(index);

        Ok(())
    }

    /// Mark the start of a blocking workflow. Exclusion is advisory: the
    /// caller keeps workflows sequential, the state only observes.
    pub fn begin_operation(&mut self, title: &str, description: &str) {
        if let Some(current) = &self.operation {
            log::warn!(
                "Operation {:?} started while {:?} is still in progress",
                title,
                current.title
            );
        }
        self.operation = Some(model::Operation {
            title: title.to_string(),
            description: description.to_string(),
        });
    }

    /// Clear the blocking indicator. Called on every workflow exit path.
    pub fn finish_operation(&mut self) {
        self.operation = None;
    }

    /// Whether a funding request is currently pending.
    pub fn is_request_pending(&self) -> bool {
        self.funding.pending
    }

    /// Record an accepted funding request and its sender.
    pub fn accept_funding_request(
        &mut self,
        origin: String,
        requested_public_key: String,
        requested_amount: String,
    ) {
        self.requester_origin = origin;
        self.funding = types::FundingRequest {
            requested_public_key,
            requested_amount,
            pending: true,
        };
    }

    /// Clear the pending request so it cannot be triggered twice. The
    /// requester origin survives: the response still has to reach it.
    pub fn clear_funding_request(&mut self) {
        self.funding.requested_amount = "0".to_string();
        self.funding.pending = false;
    }

    /// The requester channel sink, if a requester window is attached.
    pub fn requester_sink(&self) -> Option<types::Sink> {
        self.requester_sink
            .read()
            .expect("Read locks should only fail if poisoned")
            .clone()
    }

    /// Attach or detach the requester channel sink.
    pub fn set_requester_sink(&mut self, sink: Option<types::Sink>) {
        let mut slot = self
            .requester_sink
            .write()
            .expect("Write locks should only fail if poisoned");
        *slot = sink;
    }

    /// Notify the requester window, if one is attached.
    pub fn notify_requester(&self, method: &str, params: serde_json::Value) {
        if let Some(sink) = self.requester_sink() {
            sink.notify(method, params);
        }
    }

    pub fn set_recipient_public_key(&mut self, public_key: Option<String>) {
        self.transfer.recipient_public_key = public_key;
    }

    pub fn set_recipient_amount(&mut self, amount: Option<u64>) {
        self.transfer.recipient_amount = amount;
    }

    /// The validated transfer, when both intent fields are set.
    pub fn transfer_intent(&self) -> Option<(String, u64)> {
        self.transfer.complete()
    }

    /// Store the signature to confirm, resetting any previous result.
    pub fn set_confirmation_signature(&mut self, signature: Option<String>) {
        self.confirmation = types::ConfirmationIntent {
            signature,
            confirmed: None,
        };
    }

    pub fn confirmation_signature(&self) -> Option<String> {
        self.confirmation.signature.clone()
    }

    pub fn set_transaction_confirmed(&mut self, confirmed: bool) {
        self.confirmation.confirmed = Some(confirmed);
    }

    /// Whether a transfer can be sent right now.
    pub fn send_disabled(&self) -> bool {
        self.transfer.recipient_public_key.is_none() || self.transfer.recipient_amount.is_none()
    }

    /// Whether clients should stop offering the airdrop button.
    pub fn airdrop_disabled(&self) -> bool {
        self.balance >= constants::AIRDROP_BALANCE_CEILING
    }

    /// Full client-facing snapshot of the session.
    pub fn status(&self) -> model::Status {
        model::Status {
            public_key: self.account.as_ref().map(|account| account.public_key.clone()),
            balance: self.balance,
            messages: self.messages.clone(),
            operation: self.operation.clone(),
            funding_request: model::FundingRequestInfo {
                requested_public_key: self.funding.requested_public_key.clone(),
                requested_amount: self.funding.requested_amount.clone(),
                pending: self.funding.pending,
            },
            requester_connected: self.requester_sink().is_some(),
            send_disabled: self.send_disabled(),
            airdrop_disabled: self.airdrop_disabled(),
            transaction_confirmed: self.confirmation.confirmed,
        }
    }
}

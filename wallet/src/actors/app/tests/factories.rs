use std::sync::{Arc, Mutex};

use actix::prelude::*;
use async_trait::async_trait;

use lamport_protected::Protected;

use crate::account::Account;
use crate::actors::app::{node_error, App, ConnectFn, Error, Params, SubscribeFunding};
use crate::actors::store::Store;
use crate::client::Ledger;
use crate::types::NotificationSink;

pub const NODE_URL: &str = "tcp://127.0.0.1:8899";

/// Ledger stub backed by an in-memory balance.
pub struct MockLedger {
    pub balance: Mutex<u64>,
    pub fail_transfers: bool,
    pub confirm: bool,
    pub transfers: Mutex<Vec<(String, String, u64)>>,
}

impl MockLedger {
    pub fn with_balance(balance: u64) -> Arc<Self> {
        Arc::new(MockLedger {
            balance: Mutex::new(balance),
            fail_transfers: false,
            confirm: true,
            transfers: Mutex::new(Vec::new()),
        })
    }

    pub fn failing_transfers(balance: u64) -> Arc<Self> {
        Arc::new(MockLedger {
            balance: Mutex::new(balance),
            fail_transfers: true,
            confirm: true,
            transfers: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn get_balance(&self, _public_key: &str) -> Result<u64, Error> {
        Ok(*self.balance.lock().unwrap())
    }

    async fn request_airdrop(&self, _public_key: &str, tokens: u64) -> Result<(), Error> {
        *self.balance.lock().unwrap() += tokens;

        Ok(())
    }

    async fn submit_transfer(
        &self,
        from: &Account,
        to: &str,
        tokens: u64,
    ) -> Result<String, Error> {
        if self.fail_transfers {
            return Err(node_error(anyhow::anyhow!(
                "the network rejected the transfer"
            )));
        }

        {
            let mut balance = self.balance.lock().unwrap();
            *balance = balance.saturating_sub(tokens);
        }
        self.transfers
            .lock()
            .unwrap()
            .push((from.public_key.clone(), to.to_string(), tokens));

        Ok("4".repeat(88))
    }

    async fn confirm_transaction(&self, _signature: &str) -> Result<bool, Error> {
        Ok(self.confirm)
    }
}

/// Requester-channel sink that just records what it is asked to deliver.
#[derive(Default)]
pub struct RecordingSink {
    pub notifications: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingSink {
    pub fn recorded(&self) -> Vec<(String, serde_json::Value)> {
        self.notifications.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, method: &str, params: serde_json::Value) {
        self.notifications
            .lock()
            .unwrap()
            .push((method.to_string(), params));
    }
}

pub fn test_secret() -> Protected {
    Protected::from(vec![7u8; 32])
}

/// Start a session wired to the given ledger stub: the settings store
/// holds a valid secret and the connect factory always hands back the
/// same stub.
pub fn start_app(ledger: Arc<MockLedger>) -> (Addr<App>, Addr<Store>) {
    let store = Store::start(NODE_URL.to_string(), Some(test_secret()));
    let client: Arc<dyn Ledger> = ledger.clone();
    let connect: ConnectFn = Box::new(move |_url| Ok(ledger.clone() as Arc<dyn Ledger>));

    let app = App::start(Params {
        store: store.clone(),
        client,
        connect,
    });

    (app, store)
}

/// Attach a recording requester sink to the session.
pub async fn attach_requester(app: &Addr<App>) -> Arc<RecordingSink> {
    let sink = Arc::new(RecordingSink::default());
    app.send(SubscribeFunding {
        sink: sink.clone(),
        origin: Some("https://dapp.example".to_string()),
    })
    .await
    .unwrap();

    sink
}

use actix::prelude::*;
use serde_json::json;

use crate::actors::app::*;
use crate::actors::store;
use crate::model::{self, Severity};

mod factories;

use factories::*;

async fn status(app: &Addr<App>) -> model::Status {
    app.send(GetStatusRequest).await.unwrap().unwrap()
}

fn add_funds(pubkey: Option<&str>, network: Option<&str>, amount: Option<serde_json::Value>) -> AddFunds {
    AddFunds {
        params: AddFundsParams {
            pubkey: pubkey.map(str::to_string),
            network: network.map(str::to_string),
            amount,
        },
        origin: "https://dapp.example".to_string(),
    }
}

#[test]
fn account_is_rebuilt_from_the_settings_store() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));

        let status = status(&app).await;

        assert!(status.public_key.is_some());
        assert!(status.send_disabled);
        assert!(status.messages.is_empty());
    });
}

#[test]
fn refresh_balance_updates_the_session() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));

        let response = app.send(RefreshBalanceRequest).await.unwrap().unwrap();

        assert_eq!(response.balance, 500);
        let status = status(&app).await;
        assert_eq!(status.balance, 500);
        assert!(status.operation.is_none());
    });
}

#[test]
fn airdrop_credits_the_fixed_amount_and_refreshes() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(0));

        let response = app.send(RequestAirdropRequest).await.unwrap().unwrap();

        assert_eq!(response.balance, 1000);
        let status = status(&app).await;
        assert_eq!(status.balance, 1000);
        assert!(status.airdrop_disabled);
        assert!(status.operation.is_none());
    });
}

#[test]
fn funding_request_is_recorded_and_prefills_the_transfer() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));
        app.send(RefreshBalanceRequest).await.unwrap().unwrap();

        let pubkey = "A".repeat(44);
        app.send(add_funds(Some(&pubkey), Some(NODE_URL), Some(json!(5))))
            .await
            .unwrap();

        let status = status(&app).await;
        assert!(status.funding_request.pending);
        assert_eq!(status.funding_request.requested_public_key, pubkey);
        assert_eq!(status.funding_request.requested_amount, "5");
        assert!(!status.send_disabled);
        assert!(status.messages.is_empty());
    });
}

#[test]
fn second_funding_request_is_ignored_while_one_is_pending() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));
        app.send(RefreshBalanceRequest).await.unwrap().unwrap();

        let first = "A".repeat(44);
        let second = "C".repeat(44);
        app.send(add_funds(Some(&first), Some(NODE_URL), Some(json!(5))))
            .await
            .unwrap();
        app.send(add_funds(Some(&second), Some(NODE_URL), Some(json!(7))))
            .await
            .unwrap();

        let status = status(&app).await;
        assert_eq!(status.funding_request.requested_public_key, first);
        assert_eq!(status.funding_request.requested_amount, "5");
    });
}

#[test]
fn funding_request_without_public_key_logs_one_error() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));

        app.send(add_funds(None, Some(NODE_URL), None)).await.unwrap();

        let status = status(&app).await;
        assert!(!status.funding_request.pending);
        assert_eq!(status.messages.len(), 1);
        assert_eq!(status.messages[0].severity, Severity::Error);
        assert!(status.messages[0].text.contains("public key"));
    });
}

#[test]
fn funding_request_missing_both_fields_logs_two_errors() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));

        app.send(add_funds(None, None, None)).await.unwrap();

        let status = status(&app).await;
        assert!(!status.funding_request.pending);
        assert_eq!(status.messages.len(), 2);
    });
}

#[test]
fn funding_request_with_unparseable_network_is_rejected() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));

        let pubkey = "A".repeat(44);
        app.send(add_funds(Some(&pubkey), Some("not a url"), None))
            .await
            .unwrap();

        let status = status(&app).await;
        assert!(!status.funding_request.pending);
        assert_eq!(status.messages.len(), 1);
        assert!(status.messages[0].text.contains("network is invalid"));
    });
}

#[test]
fn funding_request_network_path_does_not_count_as_a_mismatch() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));

        let pubkey = "A".repeat(44);
        app.send(add_funds(
            Some(&pubkey),
            Some("tcp://127.0.0.1:8899/rpc"),
            Some(json!(5)),
        ))
        .await
        .unwrap();

        let status = status(&app).await;
        assert!(status.funding_request.pending);
        assert!(status.messages.is_empty());
    });
}

#[test]
fn funding_request_network_mismatch_switches_and_warns_once() {
    System::new().block_on(async {
        let (app, store) = start_app(MockLedger::with_balance(500));
        app.send(RefreshBalanceRequest).await.unwrap().unwrap();

        let pubkey = "A".repeat(44);
        app.send(add_funds(
            Some(&pubkey),
            Some("tcp://10.0.0.1:9000"),
            Some(json!("25")),
        ))
        .await
        .unwrap();

        let status = status(&app).await;
        assert!(status.funding_request.pending);
        assert_eq!(status.messages.len(), 1);
        assert_eq!(status.messages[0].severity, Severity::Warning);
        assert!(status.messages[0].text.contains("tcp://10.0.0.1:9000"));

        let snapshot = store.send(store::Get).await.unwrap();
        assert_eq!(snapshot.node_url, "tcp://10.0.0.1:9000");
    });
}

#[test]
fn subscribing_the_requester_channel_announces_readiness() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));

        let sink = attach_requester(&app).await;

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0, "ready");
    });
}

#[test]
fn send_transaction_success_notifies_the_requester_once() {
    System::new().block_on(async {
        let ledger = MockLedger::with_balance(500);
        let (app, _store) = start_app(ledger.clone());
        app.send(RefreshBalanceRequest).await.unwrap().unwrap();
        let sink = attach_requester(&app).await;

        app.send(SetRecipientPublicKeyRequest {
            value: "B".repeat(44),
        })
        .await
        .unwrap()
        .unwrap();
        app.send(SetRecipientAmountRequest {
            value: "10".to_string(),
        })
        .await
        .unwrap()
        .unwrap();

        let response = app
            .send(SendTransactionRequest {
                close_on_success: false,
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.amount, 10);

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].0, "ready");
        assert_eq!(
            recorded[1],
            (
                "addFundsResponse".to_string(),
                json!({ "signature": response.signature, "amount": 10 })
            )
        );

        let status = status(&app).await;
        assert_eq!(status.balance, 490);
        assert_eq!(status.funding_request.requested_amount, "0");
        assert!(!status.funding_request.pending);
        assert!(status.operation.is_none());
        assert!(status.messages.is_empty());
        assert_eq!(ledger.transfers.lock().unwrap().len(), 1);
    });
}

#[test]
fn send_transaction_failure_notifies_logs_and_keeps_the_session() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::failing_transfers(500));
        app.send(RefreshBalanceRequest).await.unwrap().unwrap();
        let sink = attach_requester(&app).await;

        app.send(SetRecipientPublicKeyRequest {
            value: "B".repeat(44),
        })
        .await
        .unwrap()
        .unwrap();
        app.send(SetRecipientAmountRequest {
            value: "10".to_string(),
        })
        .await
        .unwrap()
        .unwrap();

        let result = app
            .send(SendTransactionRequest {
                close_on_success: true,
            })
            .await
            .unwrap();
        assert!(result.is_err());

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[1], ("addFundsResponse".to_string(), json!({ "err": true })));

        // The session survives a failed transfer even when asked to close
        // on success.
        let status = status(&app).await;
        assert_eq!(status.balance, 500);
        assert!(status.operation.is_none());
        let errors: Vec<_> = status
            .messages
            .iter()
            .filter(|entry| entry.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
    });
}

#[test]
fn send_transaction_requires_a_validated_intent() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));

        let result = app
            .send(SendTransactionRequest {
                close_on_success: false,
            })
            .await
            .unwrap();

        assert!(matches!(result, Err(Error::Validation(_))));
    });
}

#[test]
fn send_and_close_terminates_after_the_success_response() {
    System::new().block_on(async {
        let ledger = MockLedger::with_balance(500);
        let (app, _store) = start_app(ledger);
        app.send(RefreshBalanceRequest).await.unwrap().unwrap();
        let sink = attach_requester(&app).await;

        app.send(SetRecipientPublicKeyRequest {
            value: "B".repeat(44),
        })
        .await
        .unwrap()
        .unwrap();
        app.send(SetRecipientAmountRequest {
            value: "10".to_string(),
        })
        .await
        .unwrap()
        .unwrap();

        let response = app
            .send(SendTransactionRequest {
                close_on_success: true,
            })
            .await
            .unwrap()
            .unwrap();

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(
            recorded[1],
            (
                "addFundsResponse".to_string(),
                json!({ "signature": response.signature, "amount": 10 })
            )
        );
    });
}

#[test]
fn confirm_transaction_requires_a_signature() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(0));

        let result = app.send(ConfirmTransactionRequest).await.unwrap();

        assert!(matches!(result, Err(Error::Validation(_))));
    });
}

#[test]
fn confirm_transaction_stores_the_result_until_the_signature_changes() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(0));

        app.send(SetConfirmationSignatureRequest {
            value: "c".repeat(88),
        })
        .await
        .unwrap()
        .unwrap();
        let response = app.send(ConfirmTransactionRequest).await.unwrap().unwrap();
        assert!(response.confirmed);
        assert_eq!(status(&app).await.transaction_confirmed, Some(true));

        // Entering a new signature resets the stored result.
        app.send(SetConfirmationSignatureRequest {
            value: "d".repeat(88),
        })
        .await
        .unwrap()
        .unwrap();
        assert_eq!(status(&app).await.transaction_confirmed, None);
    });
}

#[test]
fn dismissing_messages_shifts_and_checks_the_index() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(500));

        app.send(add_funds(None, None, None)).await.unwrap();
        assert_eq!(status(&app).await.messages.len(), 2);

        app.send(DismissMessageRequest::at(0)).await.unwrap().unwrap();
        let status_after = status(&app).await;
        assert_eq!(status_after.messages.len(), 1);

        let result = app.send(DismissMessageRequest::at(5)).await.unwrap();
        assert!(matches!(result, Err(Error::Validation(_))));
    });
}

#[test]
fn set_recipient_amount_enforces_the_balance_ceiling() {
    System::new().block_on(async {
        let (app, _store) = start_app(MockLedger::with_balance(100));
        app.send(RefreshBalanceRequest).await.unwrap().unwrap();

        let response = app
            .send(SetRecipientAmountRequest {
                value: "101".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response.status, model::Verdict::Error);
        assert_eq!(response.message.as_deref(), Some("Insufficient funds"));
        assert!(response.send_disabled);
    });
}

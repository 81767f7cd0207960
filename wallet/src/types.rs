//! Internal domain types shared across the wallet actors.

use std::sync::{Arc, RwLock};

pub use jsonrpc_pubsub::{Subscriber, SubscriptionId};

pub use lamport_protected::{Protected, ProtectedString};

/// Outbound half of the requester channel.
///
/// Implementations deliver fire-and-forget `{method, params}` messages to
/// the window that opened the wallet. No acknowledgment is ever awaited.
pub trait NotificationSink: Send + Sync {
    /// Deliver a one-way notification.
    fn notify(&self, method: &str, params: serde_json::Value);
}

/// Shared handle to a notification sink.
pub type Sink = Arc<dyn NotificationSink>;

/// Sink slot that can be replaced while shared with in-flight workflows.
pub type DynamicSink = Arc<RwLock<Option<Sink>>>;

/// A funding request received over the requester channel.
///
/// At most one request is pending at any time; the amount is kept as the
/// raw string it arrived with.
#[derive(Debug, Clone, Default)]
pub struct FundingRequest {
    pub requested_public_key: String,
    pub requested_amount: String,
    pub pending: bool,
}

/// Candidate transfer assembled from validated client input. Fields stay
/// `None` until the corresponding input validates successfully.
#[derive(Debug, Clone, Default)]
pub struct TransferIntent {
    pub recipient_public_key: Option<String>,
    pub recipient_amount: Option<u64>,
}

impl TransferIntent {
    /// The complete transfer, if both fields have validated.
    pub fn complete(&self) -> Option<(String, u64)> {
        match (&self.recipient_public_key, self.recipient_amount) {
            (Some(public_key), Some(amount)) => Some((public_key.clone(), amount)),
            _ => None,
        }
    }
}

/// A transaction signature to check for confirmation, and the result of
/// the last check (`None` until one completes).
#[derive(Debug, Clone, Default)]
pub struct ConfirmationIntent {
    pub signature: Option<String>,
    pub confirmed: Option<bool>,
}

//! Types that are serializable and can be returned as a response.

use serde::{Deserialize, Serialize};

/// Severity of a message-log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// One dismissible entry of the session message log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub text: String,
    pub severity: Severity,
}

/// The one operation currently blocking the session, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub title: String,
    pub description: String,
}

/// Validation verdict of a free-text input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Unset,
    Warning,
    Error,
    Success,
}

/// Funding request fields as exposed to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingRequestInfo {
    pub requested_public_key: String,
    pub requested_amount: String,
    pub pending: bool,
}

/// Full snapshot of the session as exposed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    /// Public key of the active account, absent until a secret key is
    /// configured.
    pub public_key: Option<String>,
    pub balance: u64,
    pub messages: Vec<LogEntry>,
    /// Present while a workflow is blocking the session.
    pub operation: Option<Operation>,
    pub funding_request: FundingRequestInfo,
    pub requester_connected: bool,
    pub send_disabled: bool,
    pub airdrop_disabled: bool,
    pub transaction_confirmed: Option<bool>,
}

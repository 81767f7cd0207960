use jsonrpc_core as rpc;
use serde_json::json;

use lamport_net::client::tcp;

use super::validation::ValidationErrors;

/// Errors a session workflow can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error")]
    Validation(ValidationErrors),
    #[error("internal error: {0}")]
    Internal(anyhow::Error),
    #[error("node error: {0}")]
    Node(anyhow::Error),
    #[error("wallet is not connected to a node")]
    NodeNotConnected,
    #[error("no account is currently active")]
    NoActiveAccount,
}

impl Error {
    /// Decompose into the (code, message, data) triple of a JSON-RPC
    /// error response.
    pub fn into_parts(self) -> (i64, &'static str, Option<serde_json::Value>) {
        match &self {
            Error::Validation(e) => (
                400,
                "Validation Error",
                Some(serde_json::to_value(e).expect("serialization of errors failed")),
            ),
            Error::NoActiveAccount => (401, "No Active Account", None),
            Error::Node(e) => {
                log::error!("Node Error: {}", &e);
                (510, "Node Error", Some(json!({ "cause": format!("{}", e) })))
            }
            Error::NodeNotConnected => (520, "Node Not Connected", None),
            Error::Internal(e) => {
                log::error!("Internal Error: {}", &e);
                (
                    500,
                    "Internal Error",
                    Some(json!({ "cause": format!("{}", e) })),
                )
            }
        }
    }
}

/// Helper function to simplify .map_err on validation errors.
pub fn validation_error(err: ValidationErrors) -> Error {
    Error::Validation(err)
}

/// Helper function to simplify .map_err on internal errors.
pub fn internal_error<T: Into<anyhow::Error>>(err: T) -> Error {
    Error::Internal(err.into())
}

/// Helper function to simplify .map_err on node errors.
pub fn node_error<T: Into<anyhow::Error>>(err: T) -> Error {
    Error::Node(err.into())
}

impl From<Error> for rpc::Error {
    fn from(err: Error) -> Self {
        let (code, message, data) = err.into_parts();
        rpc::Error {
            code: rpc::ErrorCode::ServerError(code),
            message: message.into(),
            data,
        }
    }
}

impl From<actix::MailboxError> for Error {
    fn from(err: actix::MailboxError) -> Self {
        internal_error(err)
    }
}

impl From<tcp::Error> for Error {
    fn from(err: tcp::Error) -> Self {
        node_error(err)
    }
}

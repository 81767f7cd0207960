//! Error type definition
use async_jsonrpc_client::ErrorKind as TransportErrorKind;
use serde_json::error::Error as JsonError;

/// Possible types of errors that can occur when sending requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The url used to create the connection is not valid.
    #[error("couldn't start client due to invalid url")]
    InvalidUrl,
    /// The error occurred at the transport layer, e.g.: connection or
    /// event loop might be down.
    #[error("request failed: {message}")]
    RequestFailed {
        /// Stringified source of the error.
        message: String,
        /// The kind of transport error that caused the failure.
        error_kind: TransportErrorKind,
    },
    /// The server did not respond before the request timeout elapsed.
    #[error("request timed out after {0} milliseconds")]
    RequestTimedOut(u128),
    /// The error occurred when serializing the request params to json.
    #[error("request params failed to serialize to json")]
    SerializeFailed(#[from] JsonError),
}

//! Typed error value carrying an HTTP status, a message, and optional
//! structured details.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::catalog;

/// Message used wherever one was not supplied.
pub(crate) const DEFAULT_MESSAGE: &str = "Internal Server Error";

/// An error that should surface to the client with a specific HTTP status.
///
/// `Display` prints the message, so the value slots in anywhere a generic
/// failure is expected (`Box<dyn Error>`, framework error types). The fields
/// stay inspectable after the error has been caught; none of them are
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
#[must_use]
pub struct StatusError {
    /// HTTP status code to respond with.
    pub status: u16,
    /// Human-readable message, surfaced as the response body message.
    pub message: String,
    /// Optional structured payload attached to the response body.
    pub details: Option<Value>,
}

impl StatusError {
    /// Create an error with the given status and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Attach a structured details payload.
    ///
    /// The value is serialized through `serde_json`; a value that fails to
    /// serialize leaves `details` unset.
    pub fn with_details(mut self, details: impl Serialize) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }

    /// Build an error from the registry entry for `status`.
    ///
    /// Unregistered codes produce the catalog fallback entry, so the result
    /// carries `{500, "Incorrect status"}` rather than the input code.
    pub fn from_status(status: u16) -> Self {
        let entry = catalog::lookup(status);
        Self::new(entry.status, entry.reason)
    }
}

impl Default for StatusError {
    fn default() -> Self {
        Self::new(500, DEFAULT_MESSAGE)
    }
}

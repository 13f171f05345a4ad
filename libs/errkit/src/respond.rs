//! Response formatting shared by the framework adapters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DEFAULT_MESSAGE, StatusError};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

fn default_logs() -> bool {
    true
}

/// Configuration captured by a responder at construction time.
///
/// Supplied once when the responder is built and never mutated afterwards;
/// concurrent invocations share it read-only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Emit caught errors to the diagnostic stream before responding.
    #[serde(default = "default_logs")]
    pub logs: bool,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self { logs: true }
    }
}

/// Apply the unset-status rule: a zero status resolves to 500.
///
/// The reference behavior treats a falsy status as absent, so a legitimate
/// code of 0 is indistinguishable from "no status". Preserved as a
/// caller-visible quirk.
pub(crate) fn resolve_status(status: u16) -> u16 {
    if status == 0 { 500 } else { status }
}

/// Wire shape of an error response: `{message, status, details}`.
///
/// Serializes its three fields in exactly that order; `details` serializes
/// as JSON `null` when absent, the key is never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[must_use]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub message: String,
    /// Resolved numeric status, mirrored from the response status line.
    pub status: u16,
    /// Structured payload supplied by the error, `null` otherwise.
    pub details: Value,
}

impl ErrorBody {
    /// Resolve the body for any caught error value.
    ///
    /// A [`StatusError`] (recovered by downcast) keeps its own status and
    /// details; every other error shape resolves to status 500 with the
    /// error's `Display` text and `null` details.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        err.downcast_ref::<StatusError>().map_or_else(
            || Self {
                message: err.to_string(),
                status: 500,
                details: Value::Null,
            },
            Self::from,
        )
    }
}

impl From<&StatusError> for ErrorBody {
    /// Resolution follows the reference's falsiness rules: a zero status
    /// becomes 500 and an empty message becomes "Internal Server Error".
    fn from(err: &StatusError) -> Self {
        let message = if err.message.is_empty() {
            DEFAULT_MESSAGE.to_owned()
        } else {
            err.message.clone()
        };
        Self {
            message,
            status: resolve_status(err.status),
            details: err.details.clone().unwrap_or(Value::Null),
        }
    }
}

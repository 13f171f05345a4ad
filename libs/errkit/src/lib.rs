//! Framework-agnostic error model for HTTP services.
//!
//! This crate provides pure data types for surfacing request failures, plus
//! thin adapters into web-framework error dispatch. It includes:
//! - a registry of well-known status codes and reason phrases ([`catalog`])
//! - a typed, raisable error carrying status, message, and optional details
//!   ([`StatusError`])
//! - the `{message, status, details}` wire shape ([`ErrorBody`]) and the
//!   configuration captured by responders ([`ResponderConfig`])
//! - feature-gated responders: `axum` (single-response-object convention)
//!   and `actix` (reply status/send convention with a global handler)
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod error;
pub mod respond;

#[cfg(feature = "actix")]
pub mod actix_ext;
#[cfg(feature = "axum")]
pub mod axum_ext;

// Re-export commonly used types
pub use catalog::{STATUSES, StatusEntry, lookup, reason};
pub use error::StatusError;
pub use respond::{ErrorBody, ResponderConfig};

#[cfg(feature = "actix")]
pub use actix_ext::error_handlers;
#[cfg(feature = "axum")]
pub use axum_ext::error_responder;

//! Error types for the registry client.
//!
//! Every operation on a resource client returns [`ClientError`], a tagged
//! union of the three failure kinds callers must handle distinctly:
//!
//! - [`ClientError::Input`]: invalid caller input, rejected before any
//!   network call is made. Indicates a programming error by the caller.
//! - [`ClientError::Domain`]: the server rejected the operation or returned
//!   a payload the client could not decode. Carries a description of the
//!   attempted operation plus the root cause's message.
//! - [`ClientError::Io`]: a low-level communication fault (connection
//!   refused, timeout, truncated stream), propagated unwrapped so callers
//!   can tell "could not reach the server" from "server rejected the
//!   request".
//!
//! The client performs no local recovery and no retries; retry logic, if
//! any, belongs to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use registry_client::ClientError;
//!
//! match client.get("abc123").await {
//!     Ok(bucket) => println!("Found: {}", bucket.name),
//!     Err(ClientError::Input(e)) => println!("Bad input: {e}"),
//!     Err(ClientError::Domain(e)) => println!("Rejected: {e}"),
//!     Err(ClientError::Io(e)) => println!("Unreachable: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an operation is given invalid input.
///
/// Raised synchronously, before any request target is built or any network
/// call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required identifier was empty or whitespace-only.
    #[error("{field} cannot be blank")]
    Blank {
        /// Human-readable name of the offending field (e.g., "Bucket ID").
        field: &'static str,
    },

    /// A required identifier was absent entirely.
    #[error("{field} must be provided")]
    Missing {
        /// Human-readable name of the offending field.
        field: &'static str,
    },
}

/// Error returned when an attempted operation failed for a reason other
/// than a raw communication fault.
///
/// Covers non-2xx server responses, malformed response payloads, and any
/// other transport-layer failure that is not a low-level I/O fault. The
/// message is `"{description}: {cause}"`.
#[derive(Debug, Error)]
#[error("{description}: {cause}")]
pub struct DomainError {
    /// Human-readable description of the attempted operation.
    pub description: String,
    /// Message of the underlying failure.
    pub cause: String,
}

/// Unified error type for all resource client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid caller input, rejected before any network call.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The operation failed for a reason other than raw transport failure.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A low-level communication fault, propagated unwrapped.
    #[error(transparent)]
    Io(reqwest::Error),
}

/// Error returned when client configuration values fail validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL was empty or whitespace-only.
    #[error("base URL cannot be empty")]
    EmptyBaseUrl,

    /// The base URL does not use an HTTP scheme.
    #[error("base URL must start with http:// or https://, got: {url}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
    },
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InputError>();
    assert_send_sync::<DomainError>();
    assert_send_sync::<ClientError>();
    assert_send_sync::<ConfigError>();
};

//! The request execution pipeline and per-resource clients.
//!
//! Every resource client composes the same parts: a [`RequestTarget`] for
//! URL construction, an [`HttpTransport`] that performs one exchange per
//! call, and a [`RequestExecutor`] that owns failure translation. The
//! bucket client is the one resource kind this crate ships.

mod bucket;
mod executor;
mod target;
mod transport;

pub use bucket::BucketClient;
pub use executor::RequestExecutor;
pub use target::RequestTarget;
pub use transport::{HttpMethod, HttpTransport, TransportError};

//! Shared request execution and failure translation.
//!
//! Every resource client operation funnels through
//! [`RequestExecutor::execute`]; no operation performs a network call
//! outside it. The executor classifies transport failures into the public
//! error taxonomy exactly once: low-level communication faults propagate
//! unwrapped as [`ClientError::Io`], everything else becomes a
//! [`DomainError`] carrying the supplied operation description.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::clients::transport::{HttpTransport, TransportError};
use crate::error::{ClientError, DomainError};

/// The single chokepoint every resource operation calls through.
///
/// Holds the shared transport; cloning is cheap and clones share it.
/// The executor itself performs no retry, no backoff, and no logging.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    transport: Arc<HttpTransport>,
}

impl RequestExecutor {
    /// Creates an executor whose transport attaches `headers` to every
    /// outgoing request.
    #[must_use]
    pub fn new(headers: HashMap<String, String>) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new(headers)),
        }
    }

    /// The transport resource operations build their unit of work against.
    #[must_use]
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Invokes `work` exactly once and translates its failure, if any.
    ///
    /// `description` is used only in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] when the failure is a low-level
    /// communication fault (the original error, unwrapped), and
    /// [`ClientError::Domain`] for every other transport failure.
    pub async fn execute<T, F, Fut>(&self, description: &str, work: F) -> Result<T, ClientError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, TransportError>>,
    {
        work().await.map_err(|err| translate(description, err))
    }
}

fn translate(description: &str, err: TransportError) -> ClientError {
    match err {
        TransportError::Network(e) if is_communication_failure(&e) => ClientError::Io(e),
        other => ClientError::Domain(DomainError {
            description: description.to_string(),
            cause: other.to_string(),
        }),
    }
}

/// Whether a network-level failure is a raw communication fault rather
/// than a request-construction or protocol problem.
fn is_communication_failure(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.is_body()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_execute_returns_the_work_result_unchanged() {
        let executor = RequestExecutor::new(HashMap::new());
        let result: Result<u32, ClientError> = executor
            .execute("Error doing nothing", || async { Ok(42) })
            .await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_status_failure_becomes_domain_error_with_description() {
        let executor = RequestExecutor::new(HashMap::new());
        let result: Result<u32, ClientError> = executor
            .execute("Error retrieving bucket", || async {
                Err(TransportError::Status {
                    code: 500,
                    message: "boom".to_string(),
                })
            })
            .await;

        match result {
            Err(ClientError::Domain(e)) => {
                assert_eq!(e.description, "Error retrieving bucket");
                assert!(e.cause.contains("boom"));
            }
            other => panic!("expected a domain error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_decode_failure_becomes_domain_error() {
        let executor = RequestExecutor::new(HashMap::new());
        let decode_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let result: Result<u32, ClientError> = executor
            .execute("Error retrieving all buckets", || async {
                Err(TransportError::Decode(decode_err))
            })
            .await;

        assert!(matches!(result, Err(ClientError::Domain(_))));
    }
}

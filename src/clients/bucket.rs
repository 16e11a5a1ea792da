//! Client for the registry's bucket collection.

use std::collections::HashMap;

use crate::clients::executor::RequestExecutor;
use crate::clients::target::RequestTarget;
use crate::config::BaseUrl;
use crate::error::{ClientError, InputError};
use crate::model::{Bucket, Fields, SortParameter};

/// Typed client for the `/buckets` collection.
///
/// Holds only the immutable collection target and an embedded
/// [`RequestExecutor`]; every operation is stateless, validates its own
/// input before touching the network, and performs at most one HTTP
/// exchange. The client is safe to invoke concurrently but provides no
/// atomicity across operations.
///
/// # Example
///
/// ```rust,ignore
/// use registry_client::{BaseUrl, Bucket, BucketClient};
///
/// let base = BaseUrl::new("https://registry.example.com")?;
/// let client = BucketClient::new(&base);
///
/// let created = client.create(&Bucket::new("b1")).await?;
/// let fetched = client.get(created.identifier.as_deref().unwrap()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BucketClient {
    executor: RequestExecutor,
    buckets_target: RequestTarget,
}

impl BucketClient {
    /// Creates a client with no extra request headers.
    #[must_use]
    pub fn new(base_url: &BaseUrl) -> Self {
        Self::with_headers(base_url, HashMap::new())
    }

    /// Creates a client that attaches `headers` to every outgoing request.
    #[must_use]
    pub fn with_headers(base_url: &BaseUrl, headers: HashMap<String, String>) -> Self {
        Self {
            executor: RequestExecutor::new(headers),
            buckets_target: RequestTarget::new(base_url).path("buckets"),
        }
    }

    /// Creates a bucket.
    ///
    /// The returned bucket carries the server-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Domain`] if the server rejects the request and
    /// [`ClientError::Io`] if it cannot be reached.
    pub async fn create(&self, bucket: &Bucket) -> Result<Bucket, ClientError> {
        let transport = self.executor.transport();
        let target = &self.buckets_target;

        self.executor
            .execute("Error creating bucket", || transport.post(target, bucket))
            .await
    }

    /// Retrieves the bucket with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Input`] if `bucket_id` is blank, without any
    /// network call. Returns [`ClientError::Domain`] if the bucket does not
    /// exist or the server rejects the request, and [`ClientError::Io`] if
    /// it cannot be reached.
    pub async fn get(&self, bucket_id: &str) -> Result<Bucket, ClientError> {
        if bucket_id.trim().is_empty() {
            return Err(InputError::Blank { field: "Bucket ID" }.into());
        }

        let transport = self.executor.transport();
        let target = self
            .buckets_target
            .path("{bucketId}")
            .resolve_template("bucketId", bucket_id);

        self.executor
            .execute("Error retrieving bucket", || transport.get(&target))
            .await
    }

    /// Updates a bucket in place, addressed by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Input`] if the bucket has no identifier or a
    /// blank one, without any network call. Returns [`ClientError::Domain`]
    /// if the server rejects the request and [`ClientError::Io`] if it
    /// cannot be reached.
    pub async fn update(&self, bucket: &Bucket) -> Result<Bucket, ClientError> {
        let Some(bucket_id) = bucket.identifier.as_deref() else {
            return Err(InputError::Missing {
                field: "Bucket identifier",
            }
            .into());
        };
        if bucket_id.trim().is_empty() {
            return Err(InputError::Blank {
                field: "Bucket identifier",
            }
            .into());
        }

        let transport = self.executor.transport();
        let target = self
            .buckets_target
            .path("{bucketId}")
            .resolve_template("bucketId", bucket_id);

        self.executor
            .execute("Error updating bucket", || transport.put(&target, bucket))
            .await
    }

    /// Deletes the bucket with the given identifier, returning its last
    /// known representation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Input`] if `bucket_id` is blank, without any
    /// network call. Returns [`ClientError::Domain`] if the server rejects
    /// the request and [`ClientError::Io`] if it cannot be reached.
    pub async fn delete(&self, bucket_id: &str) -> Result<Bucket, ClientError> {
        if bucket_id.trim().is_empty() {
            return Err(InputError::Blank { field: "Bucket ID" }.into());
        }

        let transport = self.executor.transport();
        let target = self
            .buckets_target
            .path("{bucketId}")
            .resolve_template("bucketId", bucket_id);

        self.executor
            .execute("Error deleting bucket", || transport.delete(&target))
            .await
    }

    /// Retrieves the field names buckets can be filtered or sorted by.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Domain`] if the server rejects the request and
    /// [`ClientError::Io`] if it cannot be reached.
    pub async fn get_fields(&self) -> Result<Fields, ClientError> {
        let transport = self.executor.transport();
        let target = self.buckets_target.path("fields");

        self.executor
            .execute("Error retrieving bucket field info", || {
                transport.get(&target)
            })
            .await
    }

    /// Lists every bucket.
    ///
    /// Never yields a null collection: a JSON `null` or empty server
    /// response normalizes to an empty vec.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Domain`] if the server rejects the request and
    /// [`ClientError::Io`] if it cannot be reached.
    pub async fn get_all(&self) -> Result<Vec<Bucket>, ClientError> {
        let transport = self.executor.transport();
        let target = &self.buckets_target;

        let buckets: Option<Vec<Bucket>> = self
            .executor
            .execute("Error retrieving all buckets", || transport.get(target))
            .await?;
        Ok(buckets.unwrap_or_default())
    }

    /// Lists every bucket with a server-side ordering.
    ///
    /// Each sort entry becomes one repeated `sort` query parameter, in the
    /// supplied order. An empty `sorts` slice degrades to [`Self::get_all`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Domain`] if the server rejects the request and
    /// [`ClientError::Io`] if it cannot be reached.
    pub async fn get_all_sorted(
        &self,
        sorts: &[SortParameter],
    ) -> Result<Vec<Bucket>, ClientError> {
        if sorts.is_empty() {
            return self.get_all().await;
        }

        let transport = self.executor.transport();
        let mut target = self.buckets_target.clone();
        for sort in sorts {
            target = target.query_param("sort", sort.to_string());
        }

        let buckets: Option<Vec<Bucket>> = self
            .executor
            .execute("Error retrieving all buckets", || transport.get(&target))
            .await?;
        Ok(buckets.unwrap_or_default())
    }
}

// Verify BucketClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BucketClient>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> BucketClient {
        let base = BaseUrl::new("https://registry.example.com").unwrap();
        BucketClient::new(&base)
    }

    #[tokio::test]
    async fn test_get_rejects_blank_id_before_any_network_call() {
        let client = test_client();
        for id in ["", "   ", "\t"] {
            let result = client.get(id).await;
            assert!(matches!(
                result,
                Err(ClientError::Input(InputError::Blank { field: "Bucket ID" }))
            ));
        }
    }

    #[tokio::test]
    async fn test_delete_rejects_blank_id_before_any_network_call() {
        let client = test_client();
        let result = client.delete(" ").await;
        assert!(matches!(result, Err(ClientError::Input(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_missing_identifier() {
        let client = test_client();
        let result = client.update(&Bucket::new("b1")).await;
        assert!(matches!(
            result,
            Err(ClientError::Input(InputError::Missing { .. }))
        ));
    }

    #[tokio::test]
    async fn test_update_rejects_blank_identifier() {
        let client = test_client();
        let mut bucket = Bucket::new("b1");
        bucket.identifier = Some("  ".to_string());
        let result = client.update(&bucket).await;
        assert!(matches!(
            result,
            Err(ClientError::Input(InputError::Blank { .. }))
        ));
    }
}

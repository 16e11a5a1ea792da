//! The bucket resource.

use serde::{Deserialize, Serialize};

/// A named bucket in the registry.
///
/// The identifier is assigned by the server on creation and is immutable
/// thereafter; a bucket that has not been created yet carries `None`. The
/// client never inspects the remaining attributes.
///
/// # Example
///
/// ```rust
/// use registry_client::Bucket;
///
/// let bucket = Bucket::new("Test Bucket");
/// assert!(bucket.identifier.is_none());
/// assert_eq!(bucket.name, "Test Bucket");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Server-assigned unique identifier. `None` until the bucket is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Human-readable bucket name.
    pub name: String,
    /// Optional free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation time in epoch milliseconds, set by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    /// Whether the bucket allows re-deploying already released bundles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_bundle_redeploy: Option<bool>,
}

impl Bucket {
    /// Creates a new, not-yet-persisted bucket with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_bucket_has_no_identifier() {
        let bucket = Bucket::new("b1");
        assert!(bucket.identifier.is_none());
        assert_eq!(bucket.name, "b1");
    }

    #[test]
    fn test_serialization_omits_absent_optionals() {
        let bucket = Bucket::new("b1");
        let value = serde_json::to_value(&bucket).unwrap();
        assert_eq!(value, json!({"name": "b1"}));
    }

    #[test]
    fn test_serialization_uses_camel_case_field_names() {
        let bucket = Bucket {
            identifier: Some("abc123".to_string()),
            name: "b1".to_string(),
            description: Some("a bucket".to_string()),
            created_timestamp: Some(1_700_000_000_000),
            allow_bundle_redeploy: Some(false),
        };
        let value = serde_json::to_value(&bucket).unwrap();
        assert_eq!(value["identifier"], "abc123");
        assert_eq!(value["createdTimestamp"], 1_700_000_000_000_i64);
        assert_eq!(value["allowBundleRedeploy"], false);
    }

    #[test]
    fn test_deserialization_tolerates_missing_optionals() {
        let bucket: Bucket = serde_json::from_value(json!({
            "identifier": "1",
            "name": "b1"
        }))
        .unwrap();
        assert_eq!(bucket.identifier.as_deref(), Some("1"));
        assert!(bucket.created_timestamp.is_none());
    }
}

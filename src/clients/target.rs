//! Request target construction.

use crate::config::BaseUrl;

/// An immutable request target: a URL plus an ordered list of query
/// parameters.
///
/// Builder methods return a new target and leave the receiver untouched,
/// so a collection-level target can be held for the lifetime of a client
/// and derived from per operation.
///
/// # Example
///
/// ```rust
/// use registry_client::clients::RequestTarget;
/// use registry_client::BaseUrl;
///
/// let base = BaseUrl::new("https://registry.example.com").unwrap();
/// let target = RequestTarget::new(&base)
///     .path("buckets")
///     .path("{bucketId}")
///     .resolve_template("bucketId", "abc123");
/// assert_eq!(target.url(), "https://registry.example.com/buckets/abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    url: String,
    query: Vec<(String, String)>,
}

impl RequestTarget {
    /// Creates a target rooted at the given base URL.
    #[must_use]
    pub fn new(base: &BaseUrl) -> Self {
        Self {
            url: base.as_ref().to_string(),
            query: Vec::new(),
        }
    }

    /// Returns a new target with a literal path segment appended.
    #[must_use]
    pub fn path(&self, segment: &str) -> Self {
        let segment = segment.trim_matches('/');
        Self {
            url: format!("{}/{segment}", self.url),
            query: self.query.clone(),
        }
    }

    /// Returns a new target with every `{name}` placeholder substituted by
    /// the literal value.
    ///
    /// No escaping is performed; values containing path-unsafe characters
    /// are the caller's responsibility.
    #[must_use]
    pub fn resolve_template(&self, name: &str, value: &str) -> Self {
        let placeholder = format!("{{{name}}}");
        Self {
            url: self.url.replace(&placeholder, value),
            query: self.query.clone(),
        }
    }

    /// Returns a new target with one query parameter appended.
    ///
    /// Parameters may repeat; they are serialized in the order they were
    /// appended.
    #[must_use]
    pub fn query_param(&self, name: &str, value: impl Into<String>) -> Self {
        let mut query = self.query.clone();
        query.push((name.to_string(), value.into()));
        Self {
            url: self.url.clone(),
            query,
        }
    }

    /// The target URL, without query parameters.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The query parameters, in append order.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseUrl {
        BaseUrl::new("https://registry.example.com").unwrap()
    }

    #[test]
    fn test_path_appends_segments_with_single_separator() {
        let target = RequestTarget::new(&base()).path("buckets").path("/fields");
        assert_eq!(target.url(), "https://registry.example.com/buckets/fields");
    }

    #[test]
    fn test_resolve_template_substitutes_literal_value() {
        let target = RequestTarget::new(&base())
            .path("buckets")
            .path("{bucketId}")
            .resolve_template("bucketId", "abc123");
        assert_eq!(target.url(), "https://registry.example.com/buckets/abc123");
    }

    #[test]
    fn test_resolve_template_leaves_unknown_placeholders_untouched() {
        let target = RequestTarget::new(&base())
            .path("{bucketId}")
            .resolve_template("otherId", "x");
        assert_eq!(target.url(), "https://registry.example.com/{bucketId}");
    }

    #[test]
    fn test_query_params_preserve_append_order() {
        let target = RequestTarget::new(&base())
            .path("buckets")
            .query_param("sort", "name asc")
            .query_param("sort", "createdTime desc");
        assert_eq!(
            target.query(),
            &[
                ("sort".to_string(), "name asc".to_string()),
                ("sort".to_string(), "createdTime desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_builder_methods_do_not_mutate_the_receiver() {
        let collection = RequestTarget::new(&base()).path("buckets");
        let _derived = collection.path("{bucketId}").query_param("sort", "name asc");
        assert_eq!(collection.url(), "https://registry.example.com/buckets");
        assert!(collection.query().is_empty());
    }
}

//! Validated configuration values for the registry client.

use std::fmt;

use crate::error::ConfigError;

/// A validated registry base URL.
///
/// Validates on construction and normalizes by trimming surrounding
/// whitespace and a trailing slash, so request targets can be built by
/// plain segment concatenation.
///
/// # Example
///
/// ```rust
/// use registry_client::BaseUrl;
///
/// let url = BaseUrl::new("https://registry.example.com/api/").unwrap();
/// assert_eq!(url.as_ref(), "https://registry.example.com/api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if the value is empty or
    /// whitespace-only, and [`ConfigError::InvalidBaseUrl`] if it does not
    /// use an `http://` or `https://` scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        Ok(Self(trimmed.trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_http_and_https() {
        assert!(BaseUrl::new("http://localhost:18080").is_ok());
        assert!(BaseUrl::new("https://registry.example.com").is_ok());
    }

    #[test]
    fn test_base_url_rejects_empty_values() {
        assert_eq!(BaseUrl::new(""), Err(ConfigError::EmptyBaseUrl));
        assert_eq!(BaseUrl::new("   "), Err(ConfigError::EmptyBaseUrl));
    }

    #[test]
    fn test_base_url_rejects_non_http_schemes() {
        let result = BaseUrl::new("ftp://registry.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("https://registry.example.com/api/").unwrap();
        assert_eq!(url.as_ref(), "https://registry.example.com/api");
    }

    #[test]
    fn test_base_url_trims_surrounding_whitespace() {
        let url = BaseUrl::new("  https://registry.example.com ").unwrap();
        assert_eq!(url.as_ref(), "https://registry.example.com");
    }
}

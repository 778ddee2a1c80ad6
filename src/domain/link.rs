//! Short link entity mapping a code to its original URL.

use serde::{Deserialize, Serialize};

/// A shortened URL mapping.
///
/// The serde field names double as the storage-log record format
/// (one JSON object per line); renaming them breaks previously
/// written logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub code: String,
    pub original_url: String,
}

impl ShortLink {
    /// Creates a new short link.
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = ShortLink::new("abc123", "https://example.com");

        assert_eq!(link.code, "abc123");
        assert_eq!(link.original_url, "https://example.com");
    }

    #[test]
    fn test_log_record_field_names() {
        let link = ShortLink::new("abc123", "https://example.com");
        let record = serde_json::to_string(&link).unwrap();

        // Persisted contract: exactly these two fields.
        assert_eq!(
            record,
            r#"{"code":"abc123","original_url":"https://example.com"}"#
        );
    }

    #[test]
    fn test_log_record_round_trip() {
        let record = r#"{"code":"xyz789","original_url":"https://other.com/path?q=1"}"#;
        let link: ShortLink = serde_json::from_str(record).unwrap();

        assert_eq!(link.code, "xyz789");
        assert_eq!(link.original_url, "https://other.com/path?q=1");
    }
}

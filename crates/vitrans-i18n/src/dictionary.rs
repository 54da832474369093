//! Language dictionaries with soft nested key lookup.

use serde_json::Value;

/// A nested key-to-string mapping for one language.
///
/// Immutable once fetched; the store caches one per language code for
/// the process lifetime.
#[derive(Debug, Clone)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    /// Wraps an already-parsed JSON document.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parses a dictionary from a JSON document.
    ///
    /// # Errors
    /// Returns the JSON error if the document is malformed.
    pub fn from_json(document: &str) -> serde_json::Result<Self> {
        Ok(Self {
            root: serde_json::from_str(document)?,
        })
    }

    /// Resolves a dot-separated key path to a string value.
    ///
    /// This is the soft-lookup contract rendering relies on: a missing
    /// segment, or a path that lands on a non-string node, yields
    /// `None` rather than an error, so missing translations degrade to
    /// existing or fallback text.
    ///
    /// # Examples
    /// ```
    /// use vitrans_i18n::Dictionary;
    ///
    /// let dict = Dictionary::from_json(r#"{"news": {"viewMore": "Xem thêm"}}"#).unwrap();
    /// assert_eq!(dict.get("news.viewMore"), Some("Xem thêm"));
    /// assert_eq!(dict.get("news.missing"), None);
    /// assert_eq!(dict.get("news"), None);
    /// ```
    pub fn get(&self, path: &str) -> Option<&str> {
        let mut current = &self.root;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        current.as_str()
    }

    /// Resolves a key path, falling back to `fallback` when absent.
    pub fn get_or<'a>(&'a self, path: &str, fallback: &'a str) -> &'a str {
        self.get(path).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Dictionary {
        Dictionary::from_value(json!({
            "meta": {
                "title": "ViTrans"
            },
            "news": {
                "viewMore": "Xem thêm",
                "categories": {
                    "language": "Ngôn ngữ",
                    "other": "Khác"
                }
            },
            "count": 3
        }))
    }

    #[test]
    fn test_get_top_level_key() {
        let dict = sample();
        assert_eq!(dict.get("meta.title"), Some("ViTrans"));
    }

    #[test]
    fn test_get_deeply_nested_key() {
        let dict = sample();
        assert_eq!(dict.get("news.categories.language"), Some("Ngôn ngữ"));
    }

    #[test]
    fn test_get_missing_segment_is_none() {
        let dict = sample();
        assert_eq!(dict.get("news.categories.events"), None);
        assert_eq!(dict.get("missing.entirely"), None);
    }

    #[test]
    fn test_get_non_string_leaf_is_none() {
        let dict = sample();
        // Paths landing on objects or numbers are not renderable text.
        assert_eq!(dict.get("news.categories"), None);
        assert_eq!(dict.get("count"), None);
    }

    #[test]
    fn test_get_path_through_string_is_none() {
        let dict = sample();
        assert_eq!(dict.get("meta.title.further"), None);
    }

    #[test]
    fn test_get_or_fallback() {
        let dict = sample();
        assert_eq!(dict.get_or("news.viewMore", "View more"), "Xem thêm");
        assert_eq!(dict.get_or("news.delete", "Xóa"), "Xóa");
    }
}

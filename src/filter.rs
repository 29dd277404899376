//! Query filters.

use serde_json::Value;

/// A query filter: insertion-ordered field/value pairs.
///
/// The transaction service accepts exactly one filter field per query, so
/// only the first inserted pair is sent; any further pairs are silently
/// ignored. This mirrors the service's single-field query contract rather
/// than rejecting the extra pairs.
///
/// ```
/// use resilientdb_client::Filter;
///
/// let filter = Filter::by("category", "electronics");
/// assert_eq!(filter.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    entries: Vec<(String, Value)>,
}

impl Filter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a single-pair filter.
    pub fn by(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().field(key, value)
    }

    /// Add a field/value pair.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Returns true if the filter holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pairs held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The first inserted pair, the one actually queried.
    pub fn first(&self) -> Option<(&str, &Value)> {
        self.entries.first().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Render a filter value the way the service expects it: strings as their
/// raw text, every other scalar as its JSON text (`30`, `true`, `null`).
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filter() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);
        assert!(filter.first().is_none());
    }

    #[test]
    fn test_first_pair_wins() {
        let filter = Filter::new()
            .field("category", "electronics")
            .field("name", "Laptop");

        let (key, value) = filter.first().unwrap();
        assert_eq!(key, "category");
        assert_eq!(value, &json!("electronics"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_from_iterator_preserves_order() {
        let filter: Filter = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(filter.first().unwrap().0, "a");
    }

    #[test]
    fn test_stringify_string_is_unquoted() {
        assert_eq!(stringify(&json!("electronics")), "electronics");
    }

    #[test]
    fn test_stringify_scalars() {
        assert_eq!(stringify(&json!(30)), "30");
        assert_eq!(stringify(&json!(999.5)), "999.5");
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&json!(null)), "null");
    }
}

//! Query parameter construction with explicit omission rules.
//!
//! Responsibilities:
//! - Collect `(key, value)` pairs for a request's query string.
//! - Decide per parameter kind whether a value is "empty" and must be left out.
//!
//! Does NOT handle:
//! - URL encoding (reqwest serializes the pairs).
//! - Validation of allowed values (resource clients own that).
//!
//! Invariants:
//! - `None` and empty strings are never sent.
//! - Zero counts (page sizes, page numbers) are never sent.
//! - Empty lists are never sent; non-empty lists repeat the key once per element.
//! - Pairs keep insertion order.

use std::fmt;

/// Ordered set of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text parameter, omitted when `None` or empty.
    pub fn text(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add a parameter that is always sent (enum-valued options with defaults).
    pub fn required(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a count parameter, omitted when zero.
    pub fn count(mut self, key: &str, value: u32) -> Self {
        if value != 0 {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add a list parameter as repeated keys, omitted when empty.
    pub fn list<S: AsRef<str>>(mut self, key: &str, values: &[S]) -> Self {
        for value in values.iter().map(AsRef::as_ref).filter(|v| !v.is_empty()) {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_none_and_empty_text_are_omitted() {
        let params = QueryParams::new()
            .text("filter", None)
            .text("order", Some(""));
        assert!(params.is_empty());
    }

    #[test]
    fn test_zero_count_is_omitted() {
        let params = QueryParams::new().count("per_page", 0).count("page", 2);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("per_page"), None);
    }

    #[test]
    fn test_list_repeats_key() {
        let tokens = vec!["a".to_string(), "b".to_string()];
        let params = QueryParams::new().list("tokens", &tokens);
        assert_eq!(params.get_all("tokens").collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_list_is_omitted() {
        let tokens: Vec<String> = Vec::new();
        assert!(QueryParams::new().list("tokens", &tokens).is_empty());
    }

    #[test]
    fn test_required_is_always_sent() {
        let params = QueryParams::new().required("order", "desc");
        assert_eq!(params.pairs(), &[("order".to_string(), "desc".to_string())]);
    }

    proptest! {
        #[test]
        fn prop_no_empty_values_ever_sent(
            text in proptest::option::of(".{0,8}"),
            count in 0u32..5,
            list in proptest::collection::vec(".{0,4}", 0..4),
        ) {
            let params = QueryParams::new()
                .text("filter", text.as_deref())
                .count("per_page", count)
                .list("tokens", &list);

            for (_, value) in params.pairs() {
                prop_assert!(!value.is_empty());
            }
            prop_assert_ne!(params.get("per_page"), Some("0"));
            prop_assert_eq!(params.get("per_page").is_some(), count != 0);
        }
    }
}

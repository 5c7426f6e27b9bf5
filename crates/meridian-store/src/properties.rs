//! Searchable property bags saved alongside stored objects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A set of string-valued properties attached to a stored object.
///
/// Properties are the store's secondary index: a query matches every object
/// whose bag contains all of the filter's entries. Keys are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    /// Creates an empty property bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the bag for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Sets a property in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns a property value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if this bag contains every entry of `filter`.
    #[must_use]
    pub fn matches(&self, filter: &Properties) -> bool {
        filter
            .0
            .iter()
            .all(|(k, v)| self.0.get(k).is_some_and(|own| own == v))
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let props = Properties::new()
            .with("Currency", "USD")
            .with("Source", "MARKIT");
        assert_eq!(props.get("Currency"), Some("USD"));
        assert_eq!(props.get("MarketName"), None);
    }

    #[test]
    fn test_matches_subset() {
        let props = Properties::new()
            .with("Currency", "USD")
            .with("Source", "MARKIT")
            .with("MarketName", "LIVE");

        let filter = Properties::new().with("Currency", "USD");
        assert!(props.matches(&filter));

        let mismatching = Properties::new().with("Currency", "EUR");
        assert!(!props.matches(&mismatching));

        let absent_key = Properties::new().with("IndexName", "SOFR");
        assert!(!props.matches(&absent_key));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let props = Properties::new().with("Currency", "USD");
        assert!(props.matches(&Properties::new()));
    }
}

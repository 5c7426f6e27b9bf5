//! In-memory object store.

use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::key::{Category, Namespace, ObjectKey};
use crate::properties::Properties;
use crate::store::{ObjectStore, StoredObject};

/// A concurrent in-memory store.
///
/// The reference [`ObjectStore`] implementation, used by the engine in
/// tests and by deployments that rebuild their universe on startup. Backed
/// by a concurrent map keyed on the structured key; queries scan within
/// namespace and category.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: DashMap<ObjectKey, StoredObject>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Removes every object.
    pub fn clear(&self) {
        self.objects.clear();
    }
}

impl ObjectStore for MemoryStore {
    fn save(&self, key: &ObjectKey, properties: Properties, document: Value) -> StoreResult<()> {
        debug!(key = %key, properties = properties.len(), "saving object");
        self.objects.insert(
            key.clone(),
            StoredObject {
                key: key.clone(),
                properties,
                document,
            },
        );
        Ok(())
    }

    fn load(&self, key: &ObjectKey) -> StoreResult<StoredObject> {
        self.objects
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::not_found(key.to_string()))
    }

    fn query(
        &self,
        namespace: &Namespace,
        category: Category,
        filter: &Properties,
    ) -> StoreResult<Vec<StoredObject>> {
        let mut results: Vec<StoredObject> = self
            .objects
            .iter()
            .filter(|entry| {
                let key = &entry.key;
                key.namespace == *namespace
                    && key.category == category
                    && entry.properties.matches(filter)
            })
            .map(|entry| entry.value().clone())
            .collect();

        // Scan order over a concurrent map is arbitrary; deterministic
        // output is part of the query contract.
        results.sort_by(|a, b| a.key.name.cmp(&b.key.name));

        debug!(
            namespace = %namespace,
            category = %category,
            matched = results.len(),
            "query complete"
        );
        Ok(results)
    }

    fn delete(&self, key: &ObjectKey) -> StoreResult<bool> {
        Ok(self.objects.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn curve_key(name: &str) -> ObjectKey {
        ObjectKey::new(Namespace::new("GLOBAL"), Category::Curve, name)
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        let key = curve_key("MARKIT.USD.LIVE.SOFR");

        store
            .save(
                &key,
                Properties::new().with("Currency", "USD"),
                json!({"points": []}),
            )
            .unwrap();

        let loaded = store.load(&key).unwrap();
        assert_eq!(loaded.key, key);
        assert_eq!(loaded.properties.get("Currency"), Some("USD"));
    }

    #[test]
    fn test_load_missing_key() {
        let store = MemoryStore::new();
        let err = store.load(&curve_key("MARKIT.USD.LIVE.SOFR")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_save_supersedes() {
        let store = MemoryStore::new();
        let key = curve_key("MARKIT.USD.LIVE.SOFR");

        store
            .save(&key, Properties::new(), json!({"version": 1}))
            .unwrap();
        store
            .save(&key, Properties::new(), json!({"version": 2}))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.load(&key).unwrap().document["version"], 2);
    }

    #[test]
    fn test_query_filters_on_properties() {
        let store = MemoryStore::new();

        store
            .save(
                &curve_key("MARKIT.USD.LIVE.SOFR"),
                Properties::new().with("Currency", "USD").with("MarketName", "LIVE"),
                json!({}),
            )
            .unwrap();
        store
            .save(
                &curve_key("MARKIT.EUR.LIVE.ESTR"),
                Properties::new().with("Currency", "EUR").with("MarketName", "LIVE"),
                json!({}),
            )
            .unwrap();
        store
            .save(
                &ObjectKey::new(Namespace::new("GLOBAL"), Category::Trade, "SWAP-1"),
                Properties::new().with("Currency", "USD"),
                json!({}),
            )
            .unwrap();

        let usd_curves = store
            .query(
                &Namespace::new("GLOBAL"),
                Category::Curve,
                &Properties::new().with("Currency", "USD"),
            )
            .unwrap();
        assert_eq!(usd_curves.len(), 1);
        assert_eq!(usd_curves[0].key.name, "MARKIT.USD.LIVE.SOFR");

        let live_curves = store
            .query(
                &Namespace::new("GLOBAL"),
                Category::Curve,
                &Properties::new().with("MarketName", "LIVE"),
            )
            .unwrap();
        assert_eq!(live_curves.len(), 2);
        // Sorted by name for deterministic output.
        assert_eq!(live_curves[0].key.name, "MARKIT.EUR.LIVE.ESTR");
    }

    #[test]
    fn test_query_respects_namespace() {
        let store = MemoryStore::new();
        store
            .save(&curve_key("MARKIT.USD.LIVE.SOFR"), Properties::new(), json!({}))
            .unwrap();

        let other_ns = store
            .query(&Namespace::new("UAT"), Category::Curve, &Properties::new())
            .unwrap();
        assert!(other_ns.is_empty());
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let key = curve_key("MARKIT.USD.LIVE.SOFR");

        store.save(&key, Properties::new(), json!({})).unwrap();
        assert!(store.delete(&key).unwrap());
        assert!(!store.delete(&key).unwrap());
        assert!(store.load(&key).is_err());
    }
}

//! The object store trait.

use serde_json::Value;

use crate::error::StoreResult;
use crate::key::{Category, Namespace, ObjectKey};
use crate::properties::Properties;

/// A stored object: key, searchable properties, and the JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// The object's key.
    pub key: ObjectKey,
    /// Searchable properties saved with the object.
    pub properties: Properties,
    /// The object document.
    pub document: Value,
}

/// The keyed object store the platform persists through.
///
/// Each operation is an atomic primitive supplied by the backing
/// implementation; callers never wrap them in retries or transactions.
/// Saving under an existing key supersedes the previous object.
pub trait ObjectStore: Send + Sync {
    /// Saves an object under a key with its searchable properties.
    fn save(&self, key: &ObjectKey, properties: Properties, document: Value) -> StoreResult<()>;

    /// Loads the object under a key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when nothing is stored under the key.
    fn load(&self, key: &ObjectKey) -> StoreResult<StoredObject>;

    /// Returns every object in a namespace and category whose properties
    /// contain all entries of `filter`.
    fn query(
        &self,
        namespace: &Namespace,
        category: Category,
        filter: &Properties,
    ) -> StoreResult<Vec<StoredObject>>;

    /// Removes the object under a key, returning whether one existed.
    fn delete(&self, key: &ObjectKey) -> StoreResult<bool>;
}

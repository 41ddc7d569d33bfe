// File: src/store.rs
// Purpose: Document persistence behind a narrow store interface

use crate::document::{to_document, update_document};
use crate::session::create_uuid;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::{debug, warn};

/// A stored document: a JSON object whose `_id` key holds its identifier
pub type Document = Map<String, JsonValue>;

/// Key holding a document's identifier
pub const ID_KEY: &str = "_id";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Collection not found.")]
    CollectionNotFound(String),

    #[error("no document with id {id:?} in {collection:?}")]
    NotFound { collection: String, id: String },

    #[error("invalid document id {0:?}")]
    InvalidId(String),

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("document store failed: {0}")]
    Backend(String),
}

/// Storage backend holding named collections of JSON documents.
///
/// Connection handling belongs to the implementation. Filters match
/// documents whose top-level keys equal every entry of the filter.
pub trait DocumentStore {
    /// Store `doc` and return its id, assigning one when `_id` is absent
    fn insert(&self, collection: &str, doc: Document) -> Result<String, StoreError>;

    /// Apply a `{"$set": {..}}` update to the document with `id`
    fn update(&self, collection: &str, id: &str, update: &JsonValue) -> Result<(), StoreError>;

    fn find_one(&self, collection: &str, filter: &Document) -> Result<Option<Document>, StoreError>;

    fn count(&self, collection: &str, filter: &Document) -> Result<u64, StoreError>;

    fn drop_collection(&self, collection: &str) -> Result<(), StoreError>;
}

/// Typed access to one collection of a [`DocumentStore`]
pub struct Collection<'a> {
    store: &'a dyn DocumentStore,
    name: String,
}

impl<'a> Collection<'a> {
    pub fn new(store: &'a dyn DocumentStore, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert `model` as is; a blank `_id` / `id` is left for the store to assign
    pub fn insert<T: Serialize + ?Sized>(&self, model: &T) -> Result<String, StoreError> {
        let mut doc = to_document(model, false, false)?;
        for key in [ID_KEY, "id"] {
            if doc.get(key).is_some_and(is_blank_id) {
                doc.remove(key);
            }
        }
        if let Some(id) = doc.remove("id") {
            doc.entry(ID_KEY).or_insert(id);
        }

        let id = self.store.insert(&self.name, doc)?;
        debug!(collection = %self.name, %id, "document inserted");
        Ok(id)
    }

    /// Set the non-blank fields of `model` on the document with `id`
    pub fn update<T: Serialize + ?Sized>(&self, id: &str, model: &T) -> Result<(), StoreError> {
        let id = checked_id(id)?;
        let update = update_document(model)?;
        self.store.update(&self.name, id, &update).inspect_err(|err| {
            warn!(collection = %self.name, %id, "document update failed: {}", err);
        })
    }

    pub fn find(&self, id: &str) -> Result<Option<Document>, StoreError> {
        let id = checked_id(id)?;
        self.store.find_one(&self.name, &id_filter(id))
    }

    /// First document matching `filter`
    pub fn find_one(&self, filter: &Document) -> Result<Option<Document>, StoreError> {
        self.store.find_one(&self.name, filter)
    }

    /// Whether any document matches `filter`
    pub fn exists(&self, filter: &Document) -> Result<bool, StoreError> {
        Ok(self.store.count(&self.name, filter)? > 0)
    }

    /// Drop the whole collection
    pub fn remove(&self) -> Result<(), StoreError> {
        self.store.drop_collection(&self.name)?;
        debug!(collection = %self.name, "collection dropped");
        Ok(())
    }
}

fn is_blank_id(value: &JsonValue) -> bool {
    match value {
        JsonValue::String(s) => s.trim().is_empty(),
        JsonValue::Null => true,
        _ => false,
    }
}

fn checked_id(id: &str) -> Result<&str, StoreError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidId(id.to_string()));
    }
    Ok(trimmed)
}

fn id_filter(id: &str) -> Document {
    let mut filter = Document::new();
    filter.insert(ID_KEY.to_string(), JsonValue::String(id.to_string()));
    filter
}

fn matches_filter(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, value)| doc.get(key) == Some(value))
}

/// Process-local store, handy for tests and prototypes
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in `collection`
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(collection)
            .map_or(0, Vec::len)
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, collection: &str, mut doc: Document) -> Result<String, StoreError> {
        let id = match doc.get(ID_KEY) {
            Some(JsonValue::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => create_uuid().simple().to_string(),
        };
        doc.insert(ID_KEY.to_string(), JsonValue::String(id.clone()));

        let mut collections = self.collections.lock().unwrap_or_else(PoisonError::into_inner);
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|existing| existing.get(ID_KEY) == doc.get(ID_KEY)) {
            return Err(StoreError::Backend(format!("duplicate id {id:?}")));
        }
        docs.push(doc);
        Ok(id)
    }

    fn update(&self, collection: &str, id: &str, update: &JsonValue) -> Result<(), StoreError> {
        let set = update
            .get("$set")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| StoreError::Backend("update must be a $set document".to_string()))?;

        let mut collections = self.collections.lock().unwrap_or_else(PoisonError::into_inner);
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::CollectionNotFound(collection.to_string()))?;
        let filter = id_filter(id);
        let doc = docs
            .iter_mut()
            .find(|doc| matches_filter(doc, &filter))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        for (key, value) in set {
            doc.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn find_one(&self, collection: &str, filter: &Document) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| matches_filter(doc, filter)))
            .cloned())
    }

    fn count(&self, collection: &str, filter: &Document) -> Result<u64, StoreError> {
        let collections = self.collections.lock().unwrap_or_else(PoisonError::into_inner);
        let count = collections
            .get(collection)
            .map_or(0, |docs| docs.iter().filter(|doc| matches_filter(doc, filter)).count());
        Ok(count as u64)
    }

    fn drop_collection(&self, collection: &str) -> Result<(), StoreError> {
        self.collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(collection)
            .map(|_| ())
            .ok_or_else(|| StoreError::CollectionNotFound(collection.to_string()))
    }
}

//! In-process document store.
//!
//! Holds collections in a `BTreeMap` behind an `RwLock` so it is `Sync` and
//! works with parallel reads. An outage switch makes every call fail with
//! [`StoreError::Unavailable`], which is how tests simulate a store that is
//! down at startup and recovers later.

use super::document::{Document, DocumentStore, StoreError, check_id};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

type Collections = BTreeMap<String, BTreeMap<String, Value>>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
    offline: AtomicBool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_document(self, collection: &str, id: &str, body: Value) -> Self {
        self.insert(collection, id, body);
        self
    }

    /// Insert or replace a document. Works while offline.
    pub fn insert(&self, collection: &str, id: &str, body: Value) {
        let mut collections = self
            .collections
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), body);
    }

    /// Toggle the simulated outage.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of read calls that reached the store (including failed ones).
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of append calls that reached the store.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Inspect a collection without going through the outage switch.
    pub fn snapshot(&self, collection: &str) -> Vec<Document> {
        let collections = self
            .collections
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        to_documents(collection, collections.get(collection))
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".into()));
        }
        Ok(())
    }
}

fn to_documents(collection: &str, docs: Option<&BTreeMap<String, Value>>) -> Vec<Document> {
    docs.map(|docs| {
        docs.iter()
            .map(|(id, body)| Document::new(collection, id.as_str(), body.clone()))
            .collect()
    })
    .unwrap_or_default()
}

impl DocumentStore for MemoryStore {
    fn collection(&self, name: &str) -> Result<Vec<Document>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.snapshot(name))
    }

    fn document(&self, name: &str, id: &str) -> Result<Option<Document>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        check_id(id)?;
        let collections = self
            .collections
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(collections
            .get(name)
            .and_then(|docs| docs.get(id))
            .map(|body| Document::new(name, id, body.clone())))
    }

    fn append(&self, name: &str, body: Value) -> Result<String, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let mut collections = self
            .collections
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let docs = collections.entry(name.to_string()).or_default();
        let id = format!("msg-{:04}", docs.len() + 1);
        docs.insert(id.clone(), body);
        Ok(id)
    }
}

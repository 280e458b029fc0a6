//! Document store clients.
//!
//! The content layer never talks to storage directly; it goes through the
//! [`DocumentStore`] trait, which models a schemaless document database with
//! named collections of JSON documents:
//!
//! | Operation | Meaning |
//! |---|---|
//! | `collection` | every document in a collection (empty when absent) |
//! | `document` | one document by id (`None` when absent) |
//! | `first` | the singleton convention: first document of a collection |
//! | `append` | append-only write of one record, returns the assigned id |
//!
//! Absence is never an error. Errors mean the store itself could not answer,
//! and callers treat every error the same way ("unavailable").
//!
//! Implementations:
//! - [`DirectoryStore`]: one JSON file per document under `<root>/<collection>/`
//! - [`MemoryStore`]: in-process, with an outage switch for tests and demos

mod directory;
mod document;
mod memory;

pub use directory::DirectoryStore;
pub use document::{Document, DocumentStore, StoreError};
pub use memory::MemoryStore;

//! Store trait, document envelope, and error type.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid document id {0:?}")]
    InvalidId(String),
    #[error("Cannot decode {collection}/{id}: {source}")]
    Decode {
        collection: String,
        id: String,
        source: serde_json::Error,
    },
    #[error("Cannot resolve asset {0}")]
    Resolve(String),
}

/// A stored document: its id within the collection plus the raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub collection: String,
    pub id: String,
    pub body: Value,
}

impl Document {
    pub fn new(collection: impl Into<String>, id: impl Into<String>, body: Value) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
            body,
        }
    }

    /// Deserialize the body into a typed entity.
    ///
    /// Explicit `null` members are dropped first, so they read as missing and
    /// take the field default. The document id is then merged into the body
    /// under `id` unless the body already carries one, so entity types see
    /// their store id.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        let mut body = self.body.clone();
        drop_nulls(&mut body);
        if let Value::Object(map) = &mut body
            && !map.contains_key("id")
        {
            map.insert("id".to_string(), Value::String(self.id.clone()));
        }
        serde_json::from_value(body).map_err(|source| StoreError::Decode {
            collection: self.collection.clone(),
            id: self.id.clone(),
            source,
        })
    }
}

fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}

/// A schemaless document database.
///
/// Must be `Sync`: content reads fan out across threads.
pub trait DocumentStore: Send + Sync {
    /// All documents in a collection, ordered by id. Empty if the collection
    /// does not exist.
    fn collection(&self, name: &str) -> Result<Vec<Document>, StoreError>;

    /// One document by id.
    fn document(&self, name: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Append a record to a collection and return the id it was stored under.
    fn append(&self, name: &str, body: Value) -> Result<String, StoreError>;

    /// First document of a collection (the singleton convention).
    fn first(&self, name: &str) -> Result<Option<Document>, StoreError> {
        Ok(self.collection(name)?.into_iter().next())
    }

    /// Decode every document of a collection.
    fn decode_all<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError>
    where
        Self: Sized,
    {
        self.collection(name)?.iter().map(Document::decode).collect()
    }
}

/// Document ids become file names and map keys; reject anything that could
/// escape a collection.
pub(crate) fn check_id(id: &str) -> Result<(), StoreError> {
    let bad = id.is_empty()
        || id.starts_with('.')
        || id.contains(['/', '\\'])
        || id.chars().any(char::is_control);
    if bad {
        return Err(StoreError::InvalidId(id.to_string()));
    }
    Ok(())
}

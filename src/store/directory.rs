//! Filesystem-backed document store.
//!
//! ```text
//! content/                     # store root
//! ├── hero/
//! │   └── main.json            # singleton: first document wins
//! ├── projects/
//! │   ├── atrium.json          # id = file stem
//! │   └── harbour-house.json
//! ├── contact/
//! │   └── info.json            # contact info singleton
//! └── messages/
//!     ├── 3f2a91c0d4e5b6a7f8e1.json   # appended inquiry, content-addressed id
//!     └── 3f2a91c0d4e5b6a7f8e1-2.json # identical record appended again
//! ```
//!
//! A missing root means the store is unreachable; a missing collection
//! directory is simply an empty collection. Hidden files and non-`.json`
//! entries are ignored.

use super::document::{Document, DocumentStore, StoreError, check_id};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Hex characters kept from the SHA-256 of an appended record.
const ID_LEN: usize = 20;

#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, name: &str) -> Result<PathBuf, StoreError> {
        check_id(name)?;
        if !self.root.is_dir() {
            return Err(StoreError::Unavailable(format!(
                "store root {} is not a directory",
                self.root.display()
            )));
        }
        Ok(self.root.join(name))
    }
}

impl DocumentStore for DirectoryStore {
    fn collection(&self, name: &str) -> Result<Vec<Document>, StoreError> {
        let dir = self.collection_dir(name)?;
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if let Some(id) = document_id(path) {
                documents.push(read_document(name, &id, path)?);
            }
        }
        debug!(collection = name, count = documents.len(), "read collection");
        Ok(documents)
    }

    fn document(&self, name: &str, id: &str) -> Result<Option<Document>, StoreError> {
        check_id(id)?;
        let path = self.collection_dir(name)?.join(format!("{id}.json"));
        if !path.is_file() {
            return Ok(None);
        }
        read_document(name, id, &path).map(Some)
    }

    fn append(&self, name: &str, body: Value) -> Result<String, StoreError> {
        let dir = self.collection_dir(name)?;
        fs::create_dir_all(&dir)?;
        let json = serde_json::to_string_pretty(&body)?;
        let base = content_id(json.as_bytes());
        // Never overwrite: a repeat of an existing record gets a numbered suffix.
        let mut n = 1;
        loop {
            let id = if n == 1 { base.clone() } else { format!("{base}-{n}") };
            let file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(dir.join(format!("{id}.json")));
            match file {
                Ok(mut file) => {
                    file.write_all(json.as_bytes())?;
                    debug!(collection = name, id = %id, "appended document");
                    return Ok(id);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Document id for a directory entry, or `None` if it is not a document.
fn document_id(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    let is_json = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let stem = path.file_stem()?.to_string_lossy().to_string();
    (is_json && !stem.starts_with('.')).then_some(stem)
}

fn read_document(collection: &str, id: &str, path: &Path) -> Result<Document, StoreError> {
    let content = fs::read_to_string(path)?;
    let body: Value = serde_json::from_str(&content)?;
    Ok(Document::new(collection, id, body))
}

/// Content-addressed id: truncated SHA-256 of the serialized record.
fn content_id(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut hex = format!("{:x}", digest);
    hex.truncate(ID_LEN);
    hex
}

//! Shared test utilities for the folio test suite.
//!
//! Provides ready-made stores and forms so module tests can focus on the
//! behavior under test.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let source = ContentSource::connect(sample_store(), FallbackDataset::bundled());
//! assert_eq!(source.hero().name, "Ada Lovelace");
//!
//! let tmp = setup_fixtures();
//! let store = DirectoryStore::new(tmp.path());
//! ```

use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

use crate::inquiry::{Field, Inquiry, InquiryForm};
use crate::store::MemoryStore;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/store/` to a temp directory and return it.
///
/// Tests get an isolated copy they can append to without affecting other
/// tests or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/store");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Stores
// =========================================================================

/// In-memory store with the singletons, two projects, one testimonial and
/// one timeline entry. Certificates, affiliations, publications, awards
/// and books are left empty.
pub fn sample_store() -> MemoryStore {
    MemoryStore::new()
        .with_document(
            "hero",
            "main",
            json!({ "name": "Ada Lovelace", "title": "Architect" }),
        )
        .with_document(
            "about",
            "main",
            json!({ "name": "Ada Lovelace", "email": "studio@example.com" }),
        )
        .with_document(
            "contact",
            "info",
            json!({ "title": "Start a project", "email": "studio@example.com" }),
        )
        .with_document(
            "stats",
            "main",
            json!({ "items": [{ "label": "Projects", "value": "42" }] }),
        )
        .with_document("skills", "main", json!({ "list": ["Revit", "Rhino"] }))
        .with_document(
            "projects",
            "atrium",
            json!({ "title": "The Atrium", "slug": "the-atrium", "category": "Residential" }),
        )
        .with_document(
            "projects",
            "harbour",
            json!({ "title": "Harbour House", "category": "Civic" }),
        )
        .with_document(
            "testimonials",
            "t1",
            json!({ "name": "Sam Patel", "content": "Calm and clear." }),
        )
        .with_document(
            "timeline",
            "2018",
            json!({ "year": 2018, "event": "Studio founded" }),
        )
}

// =========================================================================
// Forms
// =========================================================================

/// A form with default rules that passes validation.
pub fn valid_form() -> InquiryForm {
    let mut form = InquiryForm::default();
    form.set(Field::FirstName, "Ada");
    form.set(Field::LastName, "Lovelace");
    form.set(Field::Email, "ada@example.com");
    form.set(Field::ProjectType, "Residential");
    form.set(Field::Message, "I would like to discuss a new house.");
    form
}

pub fn sample_inquiry() -> Inquiry {
    valid_form().normalized()
}

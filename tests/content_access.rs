//! Library-level tests: content reads and the contact pipeline running
//! against a directory store on disk.

use folio::access::{Availability, ContentSource};
use folio::content::PublicationCategory;
use folio::fallback::FallbackDataset;
use folio::inquiry::{Field, OTHER};
use folio::store::{DirectoryStore, DocumentStore};
use folio::submission::{ContactPipeline, SUCCESS_MESSAGE, SubmissionStatus};
use std::fs;
use tempfile::TempDir;

fn write_doc(root: &std::path::Path, collection: &str, id: &str, body: &str) {
    let dir = root.join(collection);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{id}.json")), body).unwrap();
}

fn site_store() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_doc(tmp.path(), "hero", "main", r#"{ "name": "Ada Lovelace" }"#);
    write_doc(
        tmp.path(),
        "publications",
        "b",
        r#"{ "title": "Second", "order": 2, "abstract": "B", "category": "conference" }"#,
    );
    write_doc(
        tmp.path(),
        "publications",
        "a",
        r#"{ "title": "First", "order": 1, "abstract": "A" }"#,
    );
    tmp
}

fn fill_valid(pipeline: &mut ContactPipeline) {
    let form = pipeline.form_mut();
    form.set(Field::FirstName, "Ada");
    form.set(Field::Email, "ADA@example.com");
    form.set(Field::ProjectType, OTHER);
    form.set(Field::CustomProjectType, " Boathouse ");
    form.set(Field::Message, "A small community boathouse on the quay.");
}

#[test]
fn missing_store_root_serves_fallback_for_every_entity() {
    let tmp = TempDir::new().unwrap();
    let source = ContentSource::connect(
        DirectoryStore::new(tmp.path().join("missing")),
        FallbackDataset::bundled(),
    );
    assert_eq!(source.availability(), Availability::Unavailable);

    let site = source.snapshot();
    let fallback = FallbackDataset::bundled();
    assert_eq!(site.hero, fallback.hero);
    assert_eq!(site.projects, fallback.projects);
    assert_eq!(site.publications, fallback.publications);
    assert_eq!(site.awards.len(), fallback.awards.len());
}

#[test]
fn store_created_after_failed_probe_is_ignored() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("content");
    let source = ContentSource::connect(DirectoryStore::new(&root), FallbackDataset::bundled());

    write_doc(&root, "hero", "main", r#"{ "name": "Late Arrival" }"#);
    assert_eq!(source.hero(), FallbackDataset::bundled().hero);
}

#[test]
fn live_publications_are_ordered_and_typed() {
    let tmp = site_store();
    let source = ContentSource::connect(DirectoryStore::new(tmp.path()), FallbackDataset::bundled());
    let publications = source.publications();
    let titles: Vec<&str> = publications.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
    assert_eq!(publications[0].category, PublicationCategory::Article);
    assert_eq!(publications[1].category, PublicationCategory::Conference);
    assert_eq!(publications[1].summary, "B");
}

#[test]
fn corrupt_document_falls_back_for_that_collection_only() {
    let tmp = site_store();
    write_doc(tmp.path(), "testimonials", "broken", "{ not json");
    let source = ContentSource::connect(DirectoryStore::new(tmp.path()), FallbackDataset::bundled());
    assert_eq!(source.testimonials(), FallbackDataset::bundled().testimonials);
    assert_eq!(source.hero().name, "Ada Lovelace");
}

#[test]
fn pipeline_writes_normalized_record() {
    let tmp = site_store();
    let store = DirectoryStore::new(tmp.path());
    let source = ContentSource::connect(store.clone(), FallbackDataset::bundled());

    let mut pipeline = ContactPipeline::default();
    fill_valid(&mut pipeline);
    let status = pipeline.submit(&source).clone();
    assert_eq!(status, SubmissionStatus::Success(SUCCESS_MESSAGE.into()));
    assert!(pipeline.form().is_empty());

    let records = store.collection("messages").unwrap();
    assert_eq!(records.len(), 1);
    let body = &records[0].body;
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["projectType"], "Boathouse");
    assert_eq!(body["lastName"], "");
    assert!(body["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn pipeline_with_unavailable_store_reports_success_without_writing() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("missing");
    let source = ContentSource::connect(DirectoryStore::new(&root), FallbackDataset::bundled());

    let mut pipeline = ContactPipeline::default();
    fill_valid(&mut pipeline);
    assert!(pipeline.submit(&source).is_success());
    assert!(!root.exists());
}

#[test]
fn pipeline_reports_write_failure_and_keeps_values() {
    let tmp = site_store();
    let source = ContentSource::connect(DirectoryStore::new(tmp.path()), FallbackDataset::bundled());
    // A plain file where the collection directory should be.
    fs::write(tmp.path().join("messages"), "occupied").unwrap();

    let mut pipeline = ContactPipeline::default();
    fill_valid(&mut pipeline);
    let status = pipeline.submit(&source).clone();
    assert!(matches!(status, SubmissionStatus::Error(ref m) if !m.is_empty()));
    assert_eq!(pipeline.form().value(Field::FirstName), "Ada");
}

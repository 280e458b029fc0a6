//! Bundled fallback content.
//!
//! One default per entity type, shaped exactly like what the store returns,
//! so consumers cannot tell live data from fallback data. The stock dataset is
//! embedded at compile time from `static/fallback.json`; a site can replace it
//! with its own file via `[fallback] path` in the config.
//!
//! Collections in a fallback dataset must be non-empty. An empty fallback
//! would let "store is empty" leak through to consumers, which is exactly
//! what the content layer promises never happens.

use crate::content::{
    About, Affiliation, Award, Book, Certificate, ContactInfo, Hero, Project, Publication, Stats,
    Testimonial, TimelineItem,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

const BUNDLED: &str = include_str!("../static/fallback.json");

#[derive(Error, Debug)]
pub enum FallbackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Fallback collection '{0}' must not be empty")]
    EmptyCollection(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackDataset {
    pub hero: Hero,
    pub about: About,
    pub contact: ContactInfo,
    pub stats: Stats,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub timeline: Vec<TimelineItem>,
    pub certificates: Vec<Certificate>,
    pub affiliations: Vec<Affiliation>,
    pub publications: Vec<Publication>,
    pub awards: Vec<Award>,
    pub books: Vec<Book>,
}

impl FallbackDataset {
    /// The dataset compiled into the binary.
    pub fn bundled() -> Self {
        serde_json::from_str(BUNDLED).expect("bundled fallback.json must parse")
    }

    /// Load a replacement dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FallbackError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(json: &str) -> Result<Self, FallbackError> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reject datasets with empty collections.
    pub fn validate(&self) -> Result<(), FallbackError> {
        let checks: [(&'static str, bool); 10] = [
            ("skills", self.skills.is_empty()),
            ("projects", self.projects.is_empty()),
            ("testimonials", self.testimonials.is_empty()),
            ("timeline", self.timeline.is_empty()),
            ("certificates", self.certificates.is_empty()),
            ("affiliations", self.affiliations.is_empty()),
            ("publications", self.publications.is_empty()),
            ("awards", self.awards.is_empty()),
            ("books", self.books.is_empty()),
            ("stats.items", self.stats.items.is_empty()),
        ];
        match checks.into_iter().find(|(_, empty)| *empty) {
            Some((name, _)) => Err(FallbackError::EmptyCollection(name)),
            None => Ok(()),
        }
    }
}

impl Default for FallbackDataset {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bundled_dataset_is_valid() {
        let dataset: FallbackDataset = serde_json::from_str(BUNDLED).unwrap();
        dataset.validate().unwrap();
    }

    #[test]
    fn bundled_dataset_has_expected_profile() {
        let dataset = FallbackDataset::bundled();
        assert_eq!(dataset.hero.name, "Mayank Singh");
        assert_eq!(dataset.contact.title, "Get in Touch");
        assert_eq!(dataset.timeline.len(), 3);
        assert_eq!(dataset.stats.items[0].value, "50+");
    }

    #[test]
    fn bundled_projects_are_routable() {
        let dataset = FallbackDataset::bundled();
        assert!(dataset.projects.iter().all(|p| !p.route_slug().is_empty()));
    }

    #[test]
    fn empty_collection_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED).unwrap();
        value["books"] = serde_json::json!([]);
        let err = FallbackDataset::parse(&value.to_string()).unwrap_err();
        assert!(matches!(err, FallbackError::EmptyCollection("books")));
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED).unwrap();
        value["blog"] = serde_json::json!([]);
        assert!(matches!(
            FallbackDataset::parse(&value.to_string()),
            Err(FallbackError::Json(_))
        ));
    }

    #[test]
    fn load_reads_replacement_file() {
        let tmp = TempDir::new().unwrap();
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED).unwrap();
        value["hero"]["name"] = serde_json::json!("Someone Else");
        let path = tmp.path().join("fallback.json");
        fs::write(&path, value.to_string()).unwrap();

        let dataset = FallbackDataset::load(&path).unwrap();
        assert_eq!(dataset.hero.name, "Someone Else");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = FallbackDataset::load(&tmp.path().join("nope.json"));
        assert!(matches!(result, Err(FallbackError::Io(_))));
    }
}

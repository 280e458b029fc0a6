//! Resilient content access.
//!
//! [`ContentSource`] is the only way consumers read portfolio content. Every
//! read returns a value: live store data when the store answers with
//! something, otherwise the matching entry of the [`FallbackDataset`].
//!
//! ## Availability
//!
//! [`ContentSource::connect`] issues exactly one probe read (the hero
//! singleton). If it fails, the source is [`Availability::Unavailable`] for
//! its whole lifetime and never touches the store again, even if the store
//! comes back. A successful but empty probe still counts as available.
//!
//! ## Fallback rules
//!
//! ```text
//! unavailable ───────────────────────────▶ fallback
//! available ── store error ──────────────▶ fallback (warn)
//!           ── empty / missing ──────────▶ fallback (warn)
//!           ── decode / resolve error ───▶ fallback (warn)
//!           ── data ─────────────────────▶ data
//! ```
//!
//! All reads go through [`ContentSource::read_with_fallback`].

use crate::content::{
    About, Affiliation, Award, Book, Certificate, ContactInfo, Hero, Presence, Project,
    Publication, SiteContent, SkillsDocument, Stats, Testimonial, TimelineItem, collections,
};
use crate::fallback::FallbackDataset;
use crate::inquiry::{Inquiry, InquiryRecord};
use crate::store::{Document, DocumentStore, StoreError};
use crate::submission::{InquirySink, SinkError, SubmitOutcome};
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cmp::Reverse;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
}

/// Turns a stored asset path into the URL consumers should load.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, path: &str) -> Result<String, StoreError>;
}

/// Prefixes relative asset paths with a base URL.
///
/// Absolute URLs (`http://`, `https://`, `data:`) and empty paths pass through
/// unchanged. Paths with `..` segments or backslashes are refused.
#[derive(Debug, Clone)]
pub struct BaseUrlResolver {
    base: String,
}

impl BaseUrlResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl AssetResolver for BaseUrlResolver {
    fn resolve(&self, path: &str) -> Result<String, StoreError> {
        if path.is_empty()
            || path.starts_with("http://")
            || path.starts_with("https://")
            || path.starts_with("data:")
        {
            return Ok(path.to_string());
        }
        if path.contains('\\') || path.split('/').any(|seg| seg == "..") {
            return Err(StoreError::Resolve(path.to_string()));
        }
        if self.base.is_empty() {
            return Ok(path.to_string());
        }
        Ok(format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }
}

pub struct ContentSource<S> {
    store: S,
    fallback: FallbackDataset,
    resolver: Option<Box<dyn AssetResolver>>,
    availability: Availability,
}

impl<S: DocumentStore> ContentSource<S> {
    /// Probe the store once and remember the answer.
    pub fn connect(store: S, fallback: FallbackDataset) -> Self {
        let availability = match store.first(collections::HERO) {
            Ok(_) => {
                info!("content store available");
                Availability::Available
            }
            Err(e) => {
                warn!(error = %e, "content store unavailable; serving fallback content");
                Availability::Unavailable
            }
        };
        Self::with_availability(store, fallback, availability)
    }

    /// Build without probing.
    pub fn with_availability(
        store: S,
        fallback: FallbackDataset,
        availability: Availability,
    ) -> Self {
        Self {
            store,
            fallback,
            resolver: None,
            availability,
        }
    }

    pub fn with_resolver(mut self, resolver: impl AssetResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn fallback(&self) -> &FallbackDataset {
        &self.fallback
    }

    /// Run `remote` against the store and fall back to `default` when the
    /// source is unavailable, the call fails, or the result is empty.
    pub fn read_with_fallback<R, F, D>(&self, label: &str, remote: F, default: D) -> R::Value
    where
        R: Presence,
        F: FnOnce(&S) -> Result<R, StoreError>,
        D: FnOnce() -> R::Value,
    {
        if !self.is_available() {
            warn!(entity = label, "store unavailable, using fallback");
            return default();
        }
        match remote(&self.store) {
            Ok(result) => match result.present() {
                Some(value) => {
                    debug!(entity = label, "served from store");
                    value
                }
                None => {
                    warn!(entity = label, "store returned no content, using fallback");
                    default()
                }
            },
            Err(e) => {
                warn!(entity = label, error = %e, "store read failed, using fallback");
                default()
            }
        }
    }

    fn resolve_assets<T>(
        &self,
        mut items: Vec<T>,
        asset: impl Fn(&mut T) -> Option<&mut String>,
    ) -> Result<Vec<T>, StoreError> {
        let Some(resolver) = &self.resolver else {
            return Ok(items);
        };
        for item in &mut items {
            if let Some(path) = asset(item) {
                *path = resolver.resolve(path)?;
            }
        }
        Ok(items)
    }

    // ---- singletons -------------------------------------------------------

    pub fn hero(&self) -> Hero {
        self.read_with_fallback(
            "hero",
            |s| first_decoded::<_, Hero>(s, collections::HERO),
            || self.fallback.hero.clone(),
        )
    }

    pub fn about(&self) -> About {
        self.read_with_fallback(
            "about",
            |s| first_decoded::<_, About>(s, collections::ABOUT),
            || self.fallback.about.clone(),
        )
    }

    pub fn contact(&self) -> ContactInfo {
        self.read_with_fallback(
            "contact",
            |s| first_decoded::<_, ContactInfo>(s, collections::CONTACT),
            || self.fallback.contact.clone(),
        )
    }

    pub fn stats(&self) -> Stats {
        self.read_with_fallback(
            "stats",
            |s| first_decoded::<_, Stats>(s, collections::STATS),
            || self.fallback.stats.clone(),
        )
    }

    pub fn skills(&self) -> Vec<String> {
        self.read_with_fallback(
            "skills",
            |s| {
                let doc: Option<SkillsDocument> = first_decoded(s, collections::SKILLS)?;
                Ok(doc.map(|d| d.list).unwrap_or_default())
            },
            || self.fallback.skills.clone(),
        )
    }

    // ---- projects ---------------------------------------------------------

    pub fn projects(&self) -> Vec<Project> {
        self.read_with_fallback(
            "projects",
            |s| s.decode_all::<Project>(collections::PROJECTS),
            || self.fallback.projects.clone(),
        )
    }

    /// One project by document id. Falls back to the first bundled project.
    pub fn project(&self, id: &str) -> Project {
        self.read_with_fallback(
            "project",
            |s| {
                s.document(collections::PROJECTS, id)?
                    .map(|d| d.decode::<Project>())
                    .transpose()
            },
            || self.first_fallback_project(),
        )
    }

    /// One project by route slug. Falls back to the bundled project with the
    /// same slug, else the first bundled project.
    pub fn project_by_slug(&self, slug: &str) -> Project {
        self.read_with_fallback(
            "project",
            |s| {
                let projects: Vec<Project> = s.decode_all(collections::PROJECTS)?;
                Ok(projects.into_iter().find(|p| p.route_slug() == slug))
            },
            || {
                self.fallback
                    .projects
                    .iter()
                    .find(|p| p.route_slug() == slug)
                    .cloned()
                    .unwrap_or_else(|| self.first_fallback_project())
            },
        )
    }

    /// Projects in a category. The fallback is filtered the same way and may
    /// be empty.
    pub fn projects_by_category(&self, category: &str) -> Vec<Project> {
        self.read_with_fallback(
            "projects",
            |s| {
                let projects: Vec<Project> = s.decode_all(collections::PROJECTS)?;
                Ok(projects
                    .into_iter()
                    .filter(|p| p.category == category)
                    .collect::<Vec<_>>())
            },
            || {
                self.fallback
                    .projects
                    .iter()
                    .filter(|p| p.category == category)
                    .cloned()
                    .collect()
            },
        )
    }

    fn first_fallback_project(&self) -> Project {
        self.fallback.projects.first().cloned().unwrap_or_default()
    }

    // ---- collections ------------------------------------------------------

    pub fn testimonials(&self) -> Vec<Testimonial> {
        self.read_with_fallback(
            "testimonials",
            |s| s.decode_all::<Testimonial>(collections::TESTIMONIALS),
            || self.fallback.testimonials.clone(),
        )
    }

    pub fn timeline(&self) -> Vec<TimelineItem> {
        self.read_with_fallback(
            "timeline",
            |s| s.decode_all::<TimelineItem>(collections::TIMELINE),
            || self.fallback.timeline.clone(),
        )
    }

    pub fn certificates(&self) -> Vec<Certificate> {
        self.read_with_fallback(
            "certificates",
            |s| {
                let items = s.decode_all(collections::CERTIFICATES)?;
                self.resolve_assets(items, |c: &mut Certificate| Some(&mut c.image))
            },
            || self.fallback.certificates.clone(),
        )
    }

    /// Highest `order` first.
    pub fn affiliations(&self) -> Vec<Affiliation> {
        let mut items = self.read_with_fallback(
            "affiliations",
            |s| s.decode_all::<Affiliation>(collections::AFFILIATIONS),
            || self.fallback.affiliations.clone(),
        );
        items.sort_by_key(|a| Reverse(a.order));
        items
    }

    /// Lowest `order` first.
    pub fn publications(&self) -> Vec<Publication> {
        let mut items = self.read_with_fallback(
            "publications",
            |s| {
                let items = s.decode_all(collections::PUBLICATIONS)?;
                self.resolve_assets(items, |p: &mut Publication| Some(&mut p.cover_image))
            },
            || self.fallback.publications.clone(),
        );
        items.sort_by_key(|p| p.order);
        items
    }

    /// Lowest `order` first.
    pub fn awards(&self) -> Vec<Award> {
        let mut items = self.read_with_fallback(
            "awards",
            |s| {
                let items = s.decode_all(collections::AWARDS)?;
                self.resolve_assets(items, |a: &mut Award| a.image.as_mut())
            },
            || self.fallback.awards.clone(),
        );
        items.sort_by_key(|a| a.order);
        items
    }

    pub fn books(&self) -> Vec<Book> {
        self.read_with_fallback(
            "books",
            |s| {
                let items = s.decode_all(collections::BOOKS)?;
                self.resolve_assets(items, |b: &mut Book| Some(&mut b.cover_image))
            },
            || self.fallback.books.clone(),
        )
    }

    /// Write an inquiry to the `messages` collection.
    ///
    /// An unavailable source reports success without writing, so visitors
    /// are never shown an error for an outage they cannot fix. Store errors
    /// on an available source become [`SubmitOutcome::Rejected`]. No retry.
    pub fn submit_message(&self, inquiry: &Inquiry) -> SubmitOutcome {
        if !self.is_available() {
            warn!(email = %inquiry.email, "store unavailable, inquiry not stored");
            return SubmitOutcome::Accepted {
                fallback_mode: true,
                id: None,
            };
        }

        let record = InquiryRecord::stamped(inquiry.clone(), Utc::now());
        let result = serde_json::to_value(&record)
            .map_err(StoreError::from)
            .and_then(|body| self.store.append(collections::MESSAGES, body));
        match result {
            Ok(id) => {
                info!(id = %id, "inquiry stored");
                SubmitOutcome::Accepted {
                    fallback_mode: false,
                    id: Some(id),
                }
            }
            Err(e) => {
                warn!(error = %e, "inquiry write failed");
                SubmitOutcome::Rejected {
                    error: e.to_string(),
                }
            }
        }
    }
}

impl<S: DocumentStore> ContentSource<S> {
    /// Read every entity. Independent reads run in parallel on the rayon pool.
    pub fn snapshot(&self) -> SiteContent {
        let (((hero, about), (contact, stats)), ((skills, projects), (testimonials, timeline))) =
            rayon::join(
                || {
                    rayon::join(
                        || rayon::join(|| self.hero(), || self.about()),
                        || rayon::join(|| self.contact(), || self.stats()),
                    )
                },
                || {
                    rayon::join(
                        || rayon::join(|| self.skills(), || self.projects()),
                        || rayon::join(|| self.testimonials(), || self.timeline()),
                    )
                },
            );
        let ((certificates, affiliations), (publications, (awards, books))) = rayon::join(
            || rayon::join(|| self.certificates(), || self.affiliations()),
            || {
                rayon::join(
                    || self.publications(),
                    || rayon::join(|| self.awards(), || self.books()),
                )
            },
        );

        SiteContent {
            hero,
            about,
            contact,
            stats,
            skills,
            projects,
            testimonials,
            timeline,
            certificates,
            affiliations,
            publications,
            awards,
            books,
        }
    }
}

impl<S: DocumentStore> InquirySink for ContentSource<S> {
    fn submit_message(&self, inquiry: &Inquiry) -> Result<SubmitOutcome, SinkError> {
        Ok(ContentSource::submit_message(self, inquiry))
    }
}

fn first_decoded<S: DocumentStore, T: DeserializeOwned>(
    store: &S,
    collection: &str,
) -> Result<Option<T>, StoreError> {
    store
        .first(collection)?
        .as_ref()
        .map(Document::decode::<T>)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DirectoryStore, MemoryStore};
    use crate::test_helpers::{sample_inquiry, sample_store, setup_fixtures};
    use serde_json::json;

    fn unavailable(store: MemoryStore) -> ContentSource<MemoryStore> {
        store.set_offline(true);
        ContentSource::connect(store, FallbackDataset::bundled())
    }

    #[test]
    fn probe_failure_marks_unavailable() {
        let source = unavailable(sample_store());
        assert_eq!(source.availability(), Availability::Unavailable);
        assert_eq!(source.store().read_count(), 1);
    }

    #[test]
    fn empty_probe_is_still_available() {
        let source = ContentSource::connect(MemoryStore::new(), FallbackDataset::bundled());
        assert!(source.is_available());
    }

    #[test]
    fn unavailable_reads_equal_fallback() {
        let source = unavailable(sample_store());
        let fallback = FallbackDataset::bundled();
        assert_eq!(source.hero(), fallback.hero);
        assert_eq!(source.about(), fallback.about);
        assert_eq!(source.contact(), fallback.contact);
        assert_eq!(source.stats(), fallback.stats);
        assert_eq!(source.skills(), fallback.skills);
        assert_eq!(source.projects(), fallback.projects);
        assert_eq!(source.testimonials(), fallback.testimonials);
        assert_eq!(source.timeline(), fallback.timeline);
        assert_eq!(source.certificates(), fallback.certificates);
        assert_eq!(source.affiliations(), fallback.affiliations);
        assert_eq!(source.publications(), fallback.publications);
        assert_eq!(source.awards(), fallback.awards);
        assert_eq!(source.books(), fallback.books);
    }

    #[test]
    fn unsorted_fallback_is_ordered_on_read() {
        let mut fallback = FallbackDataset::bundled();
        let affiliation = fallback.affiliations[0].clone();
        fallback.affiliations = [1, 3, 2]
            .map(|order| Affiliation {
                order,
                ..affiliation.clone()
            })
            .to_vec();
        let publication = fallback.publications[0].clone();
        fallback.publications = [3, 1, 2]
            .map(|order| Publication {
                order,
                ..publication.clone()
            })
            .to_vec();
        let award = fallback.awards[0].clone();
        fallback.awards = [2, 1]
            .map(|order| Award {
                order,
                ..award.clone()
            })
            .to_vec();

        let store = sample_store();
        store.set_offline(true);
        let source = ContentSource::connect(store, fallback);

        let affiliations: Vec<i32> = source.affiliations().iter().map(|a| a.order).collect();
        assert_eq!(affiliations, vec![3, 2, 1]);
        let publications: Vec<i32> = source.publications().iter().map(|p| p.order).collect();
        assert_eq!(publications, vec![1, 2, 3]);
        let awards: Vec<i32> = source.awards().iter().map(|a| a.order).collect();
        assert_eq!(awards, vec![1, 2]);
    }

    #[test]
    fn null_and_fractional_fields_keep_live_collection() {
        let store = sample_store()
            .with_document("testimonials", "t2", json!({ "name": "Lee", "image": null }))
            .with_document("books", "b", json!({ "title": "Live", "rating": 4.5 }));
        let source = ContentSource::connect(store, FallbackDataset::bundled());

        let names: Vec<String> = source.testimonials().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Sam Patel", "Lee"]);

        let books = source.books();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Live");
        assert_eq!(books[0].rating, 4.5);
    }

    #[test]
    fn recovered_store_is_never_consulted() {
        let source = unavailable(sample_store());
        source.store().set_offline(false);

        assert_eq!(source.hero(), FallbackDataset::bundled().hero);
        assert_eq!(source.projects().len(), 1);
        // Only the probe ever reached the store.
        assert_eq!(source.store().read_count(), 1);
    }

    #[test]
    fn live_data_is_served_when_available() {
        let source = ContentSource::connect(sample_store(), FallbackDataset::bundled());
        assert_eq!(source.hero().name, "Ada Lovelace");
        assert_eq!(source.skills(), vec!["Revit", "Rhino"]);
        let projects = source.projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, "atrium");
    }

    #[test]
    fn empty_collection_falls_back() {
        let source = ContentSource::connect(sample_store(), FallbackDataset::bundled());
        assert_eq!(source.books(), FallbackDataset::bundled().books);
        assert!(!source.books().is_empty());
    }

    #[test]
    fn empty_skills_list_falls_back() {
        let store = sample_store().with_document("skills", "main", json!({ "list": [] }));
        let source = ContentSource::connect(store, FallbackDataset::bundled());
        assert_eq!(source.skills(), FallbackDataset::bundled().skills);
    }

    #[test]
    fn read_error_after_probe_falls_back() {
        let source = ContentSource::connect(sample_store(), FallbackDataset::bundled());
        source.store().set_offline(true);
        assert_eq!(source.testimonials(), FallbackDataset::bundled().testimonials);
    }

    #[test]
    fn undecodable_singleton_falls_back() {
        let store =
            sample_store().with_document("about", "main", json!({ "name": ["not", "text"] }));
        let source = ContentSource::connect(store, FallbackDataset::bundled());
        assert_eq!(source.about(), FallbackDataset::bundled().about);
    }

    #[test]
    fn project_by_id_and_fallback() {
        let source = ContentSource::connect(sample_store(), FallbackDataset::bundled());
        assert_eq!(source.project("harbour").title, "Harbour House");
        let missing = source.project("nope");
        assert_eq!(missing, FallbackDataset::bundled().projects[0]);
    }

    #[test]
    fn project_by_slug_prefers_store_then_matching_fallback() {
        let source = ContentSource::connect(sample_store(), FallbackDataset::bundled());
        assert_eq!(source.project_by_slug("the-atrium").id, "atrium");

        let offline = unavailable(sample_store());
        let fallback = FallbackDataset::bundled();
        let slug = fallback.projects[0].route_slug().to_string();
        assert_eq!(offline.project_by_slug(&slug), fallback.projects[0]);
        assert_eq!(offline.project_by_slug("unknown"), fallback.projects[0]);
    }

    #[test]
    fn projects_by_category_filters_both_paths() {
        let source = ContentSource::connect(sample_store(), FallbackDataset::bundled());
        let civic = source.projects_by_category("Civic");
        assert_eq!(civic.len(), 1);
        assert_eq!(civic[0].id, "harbour");

        let offline = unavailable(sample_store());
        assert!(offline.projects_by_category("Civic").is_empty());
    }

    #[test]
    fn ordering_of_ranked_collections() {
        let store = sample_store()
            .with_document("awards", "a", json!({ "title": "Late", "order": 3 }))
            .with_document("awards", "b", json!({ "title": "Early", "order": 1 }))
            .with_document("affiliations", "x", json!({ "name": "Low", "order": 1 }))
            .with_document("affiliations", "y", json!({ "name": "High", "order": 5 }))
            .with_document("publications", "p", json!({ "title": "Two", "order": 2 }))
            .with_document("publications", "q", json!({ "title": "One", "order": 1 }));
        let source = ContentSource::connect(store, FallbackDataset::bundled());

        let awards: Vec<String> = source.awards().into_iter().map(|a| a.title).collect();
        assert_eq!(awards, vec!["Early", "Late"]);
        let affiliations: Vec<String> =
            source.affiliations().into_iter().map(|a| a.name).collect();
        assert_eq!(affiliations, vec!["High", "Low"]);
        let publications: Vec<String> =
            source.publications().into_iter().map(|p| p.title).collect();
        assert_eq!(publications, vec!["One", "Two"]);
    }

    #[test]
    fn resolver_rewrites_asset_paths() {
        let store = sample_store().with_document(
            "certificates",
            "c1",
            json!({ "title": "LEED", "image": "/certs/leed.png" }),
        );
        let source = ContentSource::connect(store, FallbackDataset::bundled())
            .with_resolver(BaseUrlResolver::new("https://cdn.example.com/"));
        assert_eq!(
            source.certificates()[0].image,
            "https://cdn.example.com/certs/leed.png"
        );
    }

    #[test]
    fn resolver_failure_falls_back() {
        let store = sample_store().with_document(
            "books",
            "b1",
            json!({ "title": "Towards", "coverImage": "../secret.png" }),
        );
        let source = ContentSource::connect(store, FallbackDataset::bundled())
            .with_resolver(BaseUrlResolver::new("https://cdn.example.com"));
        assert_eq!(source.books(), FallbackDataset::bundled().books);
    }

    #[test]
    fn base_url_resolver_passthroughs() {
        let resolver = BaseUrlResolver::new("");
        assert_eq!(resolver.resolve("/a.png").unwrap(), "/a.png");
        let resolver = BaseUrlResolver::new("https://cdn.example.com");
        assert_eq!(resolver.resolve("").unwrap(), "");
        assert_eq!(
            resolver.resolve("https://other.example/x.png").unwrap(),
            "https://other.example/x.png"
        );
        assert!(resolver.resolve("a\\b.png").is_err());
    }

    #[test]
    fn snapshot_reads_everything() {
        let source = ContentSource::connect(sample_store(), FallbackDataset::bundled());
        let site = source.snapshot();
        assert_eq!(site.hero.name, "Ada Lovelace");
        assert_eq!(site.projects.len(), 2);
        assert!(!site.books.is_empty());
        assert!(!site.awards.is_empty());
    }

    #[test]
    fn submit_when_available_appends_record() {
        let source = ContentSource::connect(sample_store(), FallbackDataset::bundled());
        let outcome = source.submit_message(&sample_inquiry());
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                fallback_mode: false,
                id: Some("msg-0001".into())
            }
        );
        let stored = source.store().snapshot("messages");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].body["email"], "ada@example.com");
        assert!(stored[0].body["createdAt"].is_string());
        // The contact singleton is untouched.
        assert_eq!(source.store().snapshot("contact").len(), 1);
    }

    #[test]
    fn submit_when_unavailable_is_synthesized() {
        let source = unavailable(sample_store());
        let outcome = source.submit_message(&sample_inquiry());
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                fallback_mode: true,
                id: None
            }
        );
        assert_eq!(source.store().write_count(), 0);
    }

    #[test]
    fn submit_write_failure_is_rejected() {
        let source = ContentSource::connect(sample_store(), FallbackDataset::bundled());
        source.store().set_offline(true);
        match source.submit_message(&sample_inquiry()) {
            SubmitOutcome::Rejected { error } => assert!(error.contains("offline")),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn directory_fixtures_serve_live_content() {
        let tmp = setup_fixtures();
        let source =
            ContentSource::connect(DirectoryStore::new(tmp.path()), FallbackDataset::bundled());
        assert!(source.is_available());
        assert_eq!(source.contact().title, "Start a project");
        assert_eq!(source.project_by_slug("harbour-house").title, "Harbour House");
        let awards: Vec<String> = source.awards().into_iter().map(|a| a.year).collect();
        assert_eq!(awards, vec!["2024", "2011"]);
        // No books collection on disk.
        assert_eq!(source.books(), FallbackDataset::bundled().books);
    }
}

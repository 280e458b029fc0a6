//! Typed portfolio content.
//!
//! Every document in the store is loosely shaped: administrators edit them by
//! hand, fields go missing, extra keys appear. These types absorb that at the
//! deserialization boundary: every struct is `#[serde(default)]`, so a missing
//! field becomes its type default and unknown keys are ignored. Code that
//! consumes content never has to guard against absent fields.
//!
//! Field names follow the store's camelCase convention on the wire.
//!
//! ## Singletons and collections
//!
//! | Kind | Types |
//! |------|-------|
//! | Singleton (first document of its collection) | [`Hero`], [`About`], [`ContactInfo`], [`Stats`], skills list |
//! | Collection | [`Project`], [`Testimonial`], [`TimelineItem`], [`Certificate`], [`Affiliation`], [`Publication`], [`Award`], [`Book`] |
//!
//! [`Presence`] decides when a store result counts as "there": a collection
//! must be non-empty, a singleton must exist.

use serde::{Deserialize, Deserializer, Serialize};

/// Collection names used in the document store.
pub mod collections {
    pub const HERO: &str = "hero";
    pub const ABOUT: &str = "about";
    pub const CONTACT: &str = "contact";
    pub const STATS: &str = "stats";
    pub const SKILLS: &str = "skills";
    pub const PROJECTS: &str = "projects";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const TIMELINE: &str = "timeline";
    pub const CERTIFICATES: &str = "certificates";
    pub const AFFILIATIONS: &str = "affiliations";
    pub const PUBLICATIONS: &str = "publications";
    pub const AWARDS: &str = "awards";
    pub const BOOKS: &str = "books";
    /// Append-only inquiry log. Kept apart from `contact` so appended records
    /// can never shadow the contact info singleton.
    pub const MESSAGES: &str = "messages";
}

/// Landing banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub stats: HeroStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroStats {
    #[serde(deserialize_with = "lenient_int")]
    pub projects: u32,
    #[serde(deserialize_with = "lenient_int")]
    pub awards: u32,
    #[serde(deserialize_with = "lenient_int")]
    pub experience: u32,
}

/// Profile shown on the about page and next to the contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub image: String,
    pub email: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub linkedin: String,
    pub instagram: String,
    pub resume: String,
    pub services: Vec<String>,
}

/// Contact block ("Get in touch").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub availability: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub items: Vec<StatItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub icon: String,
    pub label: String,
    pub value: String,
}

/// The skills singleton stores its entries under a single `list` key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SkillsDocument {
    pub list: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    /// URL slug matched against route parameters; falls back to `id` when blank.
    pub slug: String,
    pub category: String,
    pub location: String,
    pub date: String,
    #[serde(deserialize_with = "lenient_int")]
    pub year: i32,
    pub cover_image: String,
    pub description: String,
    pub client: String,
    pub featured: bool,
    pub area: String,
    pub status: String,
    pub details: Vec<String>,
    pub gallery: Vec<GalleryImage>,
}

impl Project {
    /// Slug used for routing: the explicit slug, else the document id.
    pub fn route_slug(&self) -> &str {
        if self.slug.is_empty() {
            &self.id
        } else {
            &self.slug
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub role: String,
    pub content: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "lenient_int")]
    pub year: i32,
    pub event: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub organization: String,
    #[serde(deserialize_with = "text_or_number")]
    pub year: String,
    pub description: String,
    pub image: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Affiliation {
    pub acronym: String,
    pub icon: String,
    pub name: String,
    pub place: String,
    pub timeline: String,
    pub role: String,
    #[serde(deserialize_with = "lenient_int")]
    pub order: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationCategory {
    Journal,
    Conference,
    Book,
    #[default]
    Article,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Publication {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub journal: String,
    #[serde(deserialize_with = "lenient_int")]
    pub year: i32,
    pub link: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub cover_image: String,
    pub category: PublicationCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(deserialize_with = "lenient_int")]
    pub order: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwardCategory {
    Competition,
    Academic,
    #[default]
    Professional,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub organization: String,
    #[serde(deserialize_with = "text_or_number")]
    pub year: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: AwardCategory,
    #[serde(deserialize_with = "lenient_int")]
    pub order: i32,
}

/// Reading-list entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_image: String,
    /// 0-5 stars; half stars allowed.
    pub rating: f32,
    pub review: String,
    pub category: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Year-like text fields are edited by hand and arrive as `"2023"` or `2023`.
fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Integer fields accept `12`, `12.0`, `"12"` or `null`. Fractions round to
/// the nearest integer; text that is not a number, or a value out of range,
/// becomes the default.
fn lenient_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Default,
{
    let n = match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Some(TextOrNumber::Text(text)) => {
            text.trim().parse::<f64>().ok().map(|f| f.round() as i64)
        }
        None => None,
    };
    Ok(n.and_then(|n| T::try_from(n).ok()).unwrap_or_default())
}

/// Everything a page can ask for, read in one go.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
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

/// Whether a store result carries usable content.
///
/// Emptiness is treated exactly like unavailability: an empty collection or a
/// missing singleton yields `None` and the caller substitutes its default.
pub trait Presence {
    type Value;

    fn present(self) -> Option<Self::Value>;
}

impl<T> Presence for Vec<T> {
    type Value = Vec<T>;

    fn present(self) -> Option<Vec<T>> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl<T> Presence for Option<T> {
    type Value = T;

    fn present(self) -> Option<T> {
        self
    }
}

//! # Folio
//!
//! The content backend of a personal portfolio site. Two things live here:
//!
//! 1. **Resilient content access.** Typed reads of portfolio content (hero,
//!    about, projects, testimonials, timeline, publications, ...) from a
//!    document store. When the store is unreachable or a collection is empty,
//!    the read quietly returns the bundled fallback instead. Callers always
//!    get a value; they never see a store error.
//! 2. **The contact pipeline.** Field validation for the inquiry form, a
//!    profanity filter, and the submission state machine that hands
//!    validated inquiries to the store.
//!
//! ```text
//!  consumer ──read──▶ ContentSource ──▶ DocumentStore ──ok, non-empty──▶ data
//!                          │                 │
//!                          │                 └─err / empty──▶ FallbackDataset
//!                          └─unavailable at startup─────────▶ FallbackDataset
//!
//!  form ──▶ InquiryForm::validate ──ok──▶ ContactPipeline::submit ──▶ InquirySink
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`access`] | `ContentSource`: one-shot availability probe, `read_with_fallback`, every read, the inquiry write |
//! | [`store`] | `DocumentStore` trait with directory-backed and in-memory implementations |
//! | [`content`] | Entity types; loosely shaped documents become structs with defaults |
//! | [`fallback`] | The bundled fallback dataset and loading a replacement |
//! | [`inquiry`] | Inquiry form values, touched state, field and form validation |
//! | [`profanity`] | Leetspeak-aware deny-list filter |
//! | [`submission`] | Submission state machine and the `InquirySink` seam |
//! | [`config`] | `folio.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Probe, No Re-Probe
//!
//! Availability is decided once, when a [`access::ContentSource`] is built,
//! and never revisited. A store that comes back mid-run is not consulted
//! again until the next run. The handle is explicit, so tests and the CLI
//! can also build a source that is offline from the start.
//!
//! ## Empty Means Missing
//!
//! An empty collection is treated exactly like a failed read. A page is
//! never rendered with a blank project grid just because an administrator
//! cleared the collection.
//!
//! ## Defaults at the Boundary
//!
//! Store documents are hand-edited JSON. Every entity struct defaults every
//! field, so a missing key becomes an empty string or zero at
//! deserialization and consumers never guard against absence.
//!
//! ## Inquiries Are Append-Only
//!
//! Inquiries go to their own `messages` collection and are never read back.
//! The directory store names each file after a hash of its content and never
//! overwrites: an identical record appended twice gets a numbered second
//! file.

pub mod access;
pub mod config;
pub mod content;
pub mod fallback;
pub mod inquiry;
pub mod output;
pub mod profanity;
pub mod store;
pub mod submission;

#[cfg(test)]
pub(crate) mod test_helpers;

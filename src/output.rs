//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Content is shown as an inventory: each entity leads with its positional
//! index and title, with secondary details on indented context lines. Where
//! the data came from (store or fallback) is reported once, up front, by the
//! probe line.
//!
//! # Output Format
//!
//! ## Probe
//!
//! ```text
//! Store: content/
//!     Availability: unavailable (serving fallback content)
//! ```
//!
//! ## Snapshot
//!
//! ```text
//! Hero
//!     Mayank Singh: Architect & Designer
//!
//! Projects (2)
//! 001 Urban Harmony Center
//!     Slug: urban-harmony-center
//!     Category: Commercial
//! 002 Harbour House
//!     ...
//!
//! Skills (11)
//!     AutoCAD, Revit, SketchUp, ...
//! ```
//!
//! ## Contact
//!
//! ```text
//! firstName: First name is required
//! message: Message must be at least 10 characters
//! Error: Please fix the errors in the form
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::access::Availability;
use crate::content::SiteContent;
use crate::inquiry::FieldErrors;
use crate::submission::{SubmissionStatus, SubmitOutcome};
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Section header with an item count.
///
/// ```text
/// Projects (2)
/// ```
fn section_header(name: &str, count: usize) -> String {
    format!("{} ({})", name, count)
}

/// Indexed entity line; an untitled entity shows its id in parens.
///
/// ```text
/// 001 Urban Harmony Center
/// 002 (p-42)
/// ```
fn entity_line(index: usize, title: &str, id: &str) -> String {
    if title.is_empty() {
        format!("{} ({})", format_index(index), id)
    } else {
        format!("{} {}", format_index(index), title)
    }
}

/// Indented `Label: value` line, skipped when the value is empty.
fn context_line(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{}{}: {}", indent(1), label, value));
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

// ============================================================================
// Probe
// ============================================================================

pub fn format_probe(root: &Path, availability: Availability) -> Vec<String> {
    let state = match availability {
        Availability::Available => "available",
        Availability::Unavailable => "unavailable (serving fallback content)",
    };
    vec![
        format!("Store: {}", root.display()),
        format!("{}Availability: {}", indent(1), state),
    ]
}

pub fn print_probe(root: &Path, availability: Availability) {
    for line in format_probe(root, availability) {
        println!("{}", line);
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Inventory of everything a page could render.
pub fn format_site_summary(site: &SiteContent) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Hero".to_string());
    lines.push(format!("{}{}: {}", indent(1), site.hero.name, site.hero.title));

    lines.push(String::new());
    lines.push("About".to_string());
    context_line(&mut lines, "Name", &site.about.name);
    context_line(&mut lines, "Email", &site.about.email);
    context_line(&mut lines, "Summary", &truncate_desc(&site.about.short_description, 60));

    lines.push(String::new());
    lines.push("Contact".to_string());
    context_line(&mut lines, "Email", &site.contact.email);
    context_line(&mut lines, "Phone", &site.contact.phone);
    context_line(&mut lines, "Availability", &site.contact.availability);

    lines.push(String::new());
    lines.push(section_header("Stats", site.stats.items.len()));
    for item in &site.stats.items {
        lines.push(format!("{}{} {}", indent(1), item.value, item.label));
    }

    lines.push(String::new());
    lines.push(section_header("Skills", site.skills.len()));
    lines.push(format!("{}{}", indent(1), site.skills.join(", ")));

    lines.push(String::new());
    lines.push(section_header("Projects", site.projects.len()));
    for (i, p) in site.projects.iter().enumerate() {
        lines.push(entity_line(i + 1, &p.title, &p.id));
        context_line(&mut lines, "Slug", p.route_slug());
        context_line(&mut lines, "Category", &p.category);
        context_line(&mut lines, "Location", &p.location);
    }

    lines.push(String::new());
    lines.push(section_header("Testimonials", site.testimonials.len()));
    for (i, t) in site.testimonials.iter().enumerate() {
        lines.push(entity_line(i + 1, &t.name, &t.id));
        context_line(&mut lines, "Role", &t.role);
    }

    lines.push(String::new());
    lines.push(section_header("Timeline", site.timeline.len()));
    for (i, t) in site.timeline.iter().enumerate() {
        lines.push(entity_line(i + 1, &format!("{} {}", t.year, t.event), &t.id));
    }

    lines.push(String::new());
    lines.push(section_header("Certificates", site.certificates.len()));
    for (i, c) in site.certificates.iter().enumerate() {
        lines.push(entity_line(i + 1, &c.title, &c.id));
        context_line(&mut lines, "Issued by", &c.organization);
    }

    lines.push(String::new());
    lines.push(section_header("Affiliations", site.affiliations.len()));
    for (i, a) in site.affiliations.iter().enumerate() {
        lines.push(entity_line(i + 1, &a.name, &a.acronym));
        context_line(&mut lines, "Role", &a.role);
    }

    lines.push(String::new());
    lines.push(section_header("Publications", site.publications.len()));
    for (i, p) in site.publications.iter().enumerate() {
        lines.push(entity_line(i + 1, &p.title, &p.id));
        context_line(&mut lines, "Journal", &p.journal);
    }

    lines.push(String::new());
    lines.push(section_header("Awards", site.awards.len()));
    for (i, a) in site.awards.iter().enumerate() {
        lines.push(entity_line(i + 1, &a.title, &a.id));
        context_line(&mut lines, "Year", &a.year);
    }

    lines.push(String::new());
    lines.push(section_header("Books", site.books.len()));
    for (i, b) in site.books.iter().enumerate() {
        lines.push(entity_line(i + 1, &b.title, &b.id));
        context_line(&mut lines, "Author", &b.author);
    }

    lines
}

pub fn print_site_summary(site: &SiteContent) {
    for line in format_site_summary(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Contact
// ============================================================================

/// One line per failing field, in form order.
pub fn format_field_errors(errors: &FieldErrors) -> Vec<String> {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect()
}

pub fn format_status(status: &SubmissionStatus) -> String {
    match status {
        SubmissionStatus::Idle => "Idle".to_string(),
        SubmissionStatus::Loading => "Sending...".to_string(),
        SubmissionStatus::Success(m) => format!("Success: {}", m),
        SubmissionStatus::Error(m) => format!("Error: {}", m),
    }
}

/// Detail line for what the write path did with an accepted inquiry.
pub fn format_outcome(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Accepted {
            fallback_mode: true,
            ..
        } => "Stored: no (store unavailable, accepted in fallback mode)".to_string(),
        SubmitOutcome::Accepted { id, .. } => {
            format!("Stored: {}", id.as_deref().unwrap_or("yes"))
        }
        SubmitOutcome::Rejected { error } => format!("Rejected: {}", error),
    }
}

pub fn print_contact_result(errors: &FieldErrors, status: &SubmissionStatus) {
    for line in format_field_errors(errors) {
        println!("{}", line);
    }
    println!("{}", format_status(status));
}

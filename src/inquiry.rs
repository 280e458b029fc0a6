//! Contact inquiry form: field values, touched state, and validation.
//!
//! The form mirrors what a visitor sees. A field's error is recomputed when
//! it loses focus ([`InquiryForm::blur`]) and, once touched, on every change
//! ([`InquiryForm::set`]). [`InquiryForm::validate`] re-derives every error
//! from the current values without touching form state, so it can be called
//! any number of times with the same result.
//!
//! ## Rules
//!
//! Checked in order, first failure wins:
//!
//! 1. Blank (after trimming) → "`<Label>` is required". `lastName` is
//!    optional. `customProjectType` is only required when the project type
//!    is `Other`.
//! 2. Free-text fields (`firstName`, `lastName`, `message`,
//!    `customProjectType`) go through the [`ProfanityFilter`].
//! 3. Field-specific shape rules (name characters, email pattern, message
//!    length).

use crate::profanity::ProfanityFilter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;

static NAME_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z\s\-']+$").expect("name pattern must compile")
});

static EMAIL_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern must compile")
});

/// Project type value that unlocks the free-text `customProjectType` field.
pub const OTHER: &str = "Other";

pub const DEFAULT_MESSAGE_MIN: usize = 10;
pub const DEFAULT_MESSAGE_MAX: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    ProjectType,
    CustomProjectType,
    Message,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::ProjectType,
        Field::CustomProjectType,
        Field::Message,
    ];

    /// Wire name, as used by the form and the stored record.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::ProjectType => "projectType",
            Field::CustomProjectType => "customProjectType",
            Field::Message => "message",
        }
    }

    /// Human label used in "is required" messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::ProjectType => "Project type",
            Field::CustomProjectType => "Custom project type",
            Field::Message => "Message",
        }
    }

    fn is_free_text(self) -> bool {
        matches!(
            self,
            Field::FirstName | Field::LastName | Field::Message | Field::CustomProjectType
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Choices offered by the project type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProjectType {
    Residential,
    Commercial,
    Interior,
    Landscape,
    Renovation,
    Other,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Interior => "Interior",
            ProjectType::Landscape => "Landscape",
            ProjectType::Renovation => "Renovation",
            ProjectType::Other => OTHER,
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field → error message. Only failing fields are present.
pub type FieldErrors = BTreeMap<Field, String>;

/// Tunable parts of validation, built from the `[contact]` config section.
#[derive(Debug, Clone)]
pub struct InquiryRules {
    pub profanity: ProfanityFilter,
    pub message_min: usize,
    pub message_max: usize,
}

impl Default for InquiryRules {
    fn default() -> Self {
        Self {
            profanity: ProfanityFilter::default(),
            message_min: DEFAULT_MESSAGE_MIN,
            message_max: DEFAULT_MESSAGE_MAX,
        }
    }
}

/// A normalized inquiry, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

/// What the store receives: the inquiry plus its write timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord {
    #[serde(flatten)]
    pub inquiry: Inquiry,
    pub created_at: DateTime<Utc>,
}

impl InquiryRecord {
    pub fn stamped(inquiry: Inquiry, created_at: DateTime<Utc>) -> Self {
        Self {
            inquiry,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InquiryForm {
    values: BTreeMap<Field, String>,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    rules: InquiryRules,
}

impl InquiryForm {
    pub fn new(rules: InquiryRules) -> Self {
        Self {
            values: BTreeMap::new(),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            rules,
        }
    }

    pub fn rules(&self) -> &InquiryRules {
        &self.rules
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Change a value. A touched field is re-validated immediately.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        if self.touched.contains(&field) {
            self.refresh_error(field);
        }
    }

    /// Mark a field touched and validate it.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.refresh_error(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Last computed error for a field, touched or not.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The error a visitor would see: only shown once the field was touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    fn refresh_error(&mut self, field: Field) {
        let value = self.value(field).to_string();
        match self.validate_field(field, &value) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(&field),
        };
    }

    fn other_selected(&self) -> bool {
        self.value(Field::ProjectType) == OTHER
    }

    /// Validate one value as if it were in `field`.
    pub fn validate_field(&self, field: Field, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return match field {
                Field::LastName => None,
                Field::CustomProjectType if !self.other_selected() => None,
                Field::CustomProjectType => Some("Please specify the project type".to_string()),
                _ => Some(format!("{} is required", field.label())),
            };
        }

        if field.is_free_text() {
            let matches = self.rules.profanity.profanity_matches(value);
            if !matches.is_empty() {
                return Some(format!(
                    "Please remove inappropriate language: {}",
                    matches.join(", ")
                ));
            }
        }

        match field {
            Field::FirstName => {
                if value.chars().count() < 2 {
                    Some("First name must be at least 2 characters".to_string())
                } else if !NAME_RE.is_match(value) {
                    Some(
                        "First name can only contain letters, spaces, hyphens, and apostrophes"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            Field::LastName => (!NAME_RE.is_match(value)).then(|| {
                "Last name can only contain letters, spaces, hyphens, and apostrophes".to_string()
            }),
            Field::Email => (!EMAIL_RE.is_match(value))
                .then(|| "Please enter a valid email address".to_string()),
            Field::Message => {
                let len = value.chars().count();
                if len < self.rules.message_min {
                    Some(format!(
                        "Message must be at least {} characters",
                        self.rules.message_min
                    ))
                } else if len > self.rules.message_max {
                    Some(format!(
                        "Message must not exceed {} characters",
                        self.rules.message_max
                    ))
                } else {
                    None
                }
            }
            Field::ProjectType | Field::CustomProjectType => None,
        }
    }

    /// Full-form validation from current values. Does not modify the form.
    pub fn validate(&self) -> FieldErrors {
        Field::ALL
            .into_iter()
            .filter(|&f| f != Field::CustomProjectType || self.other_selected())
            .filter_map(|f| self.validate_field(f, self.value(f)).map(|e| (f, e)))
            .collect()
    }

    /// Replace the stored error map with a fresh full validation.
    /// Returns `true` when the form is valid.
    pub fn revalidate(&mut self) -> bool {
        self.errors = self.validate();
        self.errors.is_empty()
    }

    /// The inquiry as it should be written: trimmed, email lower-cased, and
    /// the custom project type substituted when `Other` was chosen.
    pub fn normalized(&self) -> Inquiry {
        let project_type = if self.other_selected() {
            self.value(Field::CustomProjectType).trim().to_string()
        } else {
            self.value(Field::ProjectType).trim().to_string()
        };
        Inquiry {
            first_name: self.value(Field::FirstName).trim().to_string(),
            last_name: self.value(Field::LastName).trim().to_string(),
            email: self.value(Field::Email).trim().to_lowercase(),
            project_type,
            message: self.value(Field::Message).trim().to_string(),
        }
    }

    /// Clear values, touched state and errors. Rules are kept.
    pub fn reset(&mut self) {
        self.values.clear();
        self.touched.clear();
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}

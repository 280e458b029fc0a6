//! Contact submission state machine.
//!
//! ```text
//! Idle ──submit──▶ Loading ──▶ Success(msg)
//!                     │
//!                     └──────▶ Error(msg)
//! ```
//!
//! `Success` and `Error` both accept another submit. A submit while `Loading`
//! is ignored. Validation failures never reach the sink.

use crate::inquiry::{Inquiry, InquiryForm, InquiryRules};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors in the form";
pub const REJECTED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Result of handing an inquiry to the write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Stored, or synthesized when the store was unreachable at startup
    /// (`fallback_mode`, no id).
    #[serde(rename_all = "camelCase")]
    Accepted {
        fallback_mode: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    Rejected { error: String },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// A transport-level failure the write path did not turn into an outcome.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Sink failure: {0}")]
    Failed(String),
}

/// Where validated inquiries go.
pub trait InquirySink {
    fn submit_message(&self, inquiry: &Inquiry) -> Result<SubmitOutcome, SinkError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "camelCase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Success(m) | SubmissionStatus::Error(m) => Some(m),
            SubmissionStatus::Idle | SubmissionStatus::Loading => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success(_))
    }
}

/// A contact form together with its submission status.
#[derive(Debug, Clone, Default)]
pub struct ContactPipeline {
    form: InquiryForm,
    status: SubmissionStatus,
}

impl ContactPipeline {
    pub fn new(rules: InquiryRules) -> Self {
        Self {
            form: InquiryForm::new(rules),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn form(&self) -> &InquiryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InquiryForm {
        &mut self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Run one submission attempt and return the resulting status.
    ///
    /// A call made while the status is `Loading` is ignored. With a
    /// synchronous sink the status never stays `Loading` past this call; the
    /// guard matters for callers that drive the sink from another task and
    /// publish `Loading` while it runs.
    pub fn submit(&mut self, sink: &impl InquirySink) -> &SubmissionStatus {
        if self.status == SubmissionStatus::Loading {
            debug!("submit ignored: already in flight");
            return &self.status;
        }

        self.form.touch_all();
        if !self.form.revalidate() {
            debug!(errors = self.form.errors().len(), "inquiry failed validation");
            self.status = SubmissionStatus::Error(INVALID_FORM_MESSAGE.to_string());
            return &self.status;
        }

        self.status = SubmissionStatus::Loading;
        let inquiry = self.form.normalized();
        self.status = match sink.submit_message(&inquiry) {
            Ok(SubmitOutcome::Accepted { fallback_mode, id }) => {
                info!(fallback_mode, id = id.as_deref().unwrap_or("-"), "inquiry accepted");
                self.form.reset();
                SubmissionStatus::Success(SUCCESS_MESSAGE.to_string())
            }
            Ok(SubmitOutcome::Rejected { error }) => {
                warn!(%error, "inquiry rejected");
                if error.trim().is_empty() {
                    SubmissionStatus::Error(REJECTED_MESSAGE.to_string())
                } else {
                    SubmissionStatus::Error(error)
                }
            }
            Err(e) => {
                warn!(error = %e, "inquiry sink failed");
                SubmissionStatus::Error(UNEXPECTED_MESSAGE.to_string())
            }
        };
        &self.status
    }
}

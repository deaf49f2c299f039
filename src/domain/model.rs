use serde::{Deserialize, Serialize};
use std::fmt;

/// The four inputs of the contact form, in submit-validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validity and error tracking for one input. Validity starts unknown and is
/// only decided by a blur, a corrective input or a submit pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub valid: Option<bool>,
    pub error: Option<&'static str>,
}

impl FieldState {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A field rule violation. Recoverable by construction: it only ever feeds
/// the field's own error slot, never an error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// The validated tuple of trimmed values. Only constructible through a submit
/// pass in which every field was valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerState {
    #[default]
    Hidden,
    Shown,
}

/// Events the UI surface feeds into the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input { field: Field, value: String },
    Blur { field: Field },
    Submit,
}

/// Where the presentation layer should bring the user's viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Banner,
    Field(Field),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(FormSubmission),
    Rejected {
        first_invalid: Field,
        invalid_count: usize,
    },
}

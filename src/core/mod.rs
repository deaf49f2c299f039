pub mod engine;
pub mod rules;
pub mod validator;

pub use crate::domain::model::{
    Field, FieldState, FieldValidationError, FormEvent, FormSubmission, ScrollTarget,
    SubmitOutcome,
};
pub use crate::domain::ports::{ConfigProvider, EventSource, FormSurface, Scheduler, SubmissionSink};
pub use crate::utils::error::Result;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{
    ConsoleSurface, JsonFileSink, ScriptedEvents, TokioScheduler, TracingSink,
};
pub use crate::core::engine::{EngineReport, FormEngine};
pub use crate::core::validator::FormValidator;
pub use crate::domain::model::{Field, FormEvent, FormSubmission, SubmitOutcome};
pub use crate::utils::error::{FormError, Result};

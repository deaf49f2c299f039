use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contact-form")]
#[command(about = "Validates and submits a contact form from the command line")]
pub struct CliConfig {
    /// Value for the name field
    #[arg(long, default_value = "")]
    pub name: String,

    /// Value for the email field
    #[arg(long, default_value = "")]
    pub email: String,

    /// Value for the subject field
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Value for the message field
    #[arg(long, default_value = "")]
    pub message: String,

    /// Load timing/delivery settings from a TOML file
    #[arg(long)]
    pub config: Option<String>,

    /// Append accepted submissions as JSON lines under this directory
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, default_value = "5000")]
    pub banner_visible_ms: u64,

    #[arg(long, default_value = "500")]
    pub restore_delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn banner_visible(&self) -> Duration {
        Duration::from_millis(self.banner_visible_ms)
    }

    fn restore_delay(&self) -> Duration {
        Duration::from_millis(self.restore_delay_ms)
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}

impl Validate for CliConfig {
    // The form field values themselves are deliberately NOT checked here;
    // they are the input the validator core exists to judge.
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("banner_visible_ms", self.banner_visible_ms, 1)?;
        validation::validate_range("restore_delay_ms", self.restore_delay_ms, 0, 60_000)?;

        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }

        Ok(())
    }
}

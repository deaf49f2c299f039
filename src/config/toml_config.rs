use crate::core::engine::{BANNER_VISIBLE, FORM_RESTORE_DELAY};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub form: FormMeta,
    pub timing: Option<TimingConfig>,
    pub delivery: Option<DeliveryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormMeta {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    pub banner_visible_ms: Option<u64>,
    pub restore_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    pub output_path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUBMISSIONS_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("form.name", &self.form.name)?;

        if let Some(timing) = &self.timing {
            if let Some(ms) = timing.banner_visible_ms {
                validation::validate_positive_number("timing.banner_visible_ms", ms, 1)?;
            }
            if let Some(ms) = timing.restore_delay_ms {
                validation::validate_range("timing.restore_delay_ms", ms, 0, 60_000)?;
            }
        }

        if let Some(delivery) = &self.delivery {
            if let Some(path) = &delivery.output_path {
                validation::validate_path("delivery.output_path", path)?;
            }
        }

        Ok(())
    }

    pub fn banner_visible_ms(&self) -> u64 {
        self.timing
            .as_ref()
            .and_then(|t| t.banner_visible_ms)
            .unwrap_or(BANNER_VISIBLE.as_millis() as u64)
    }

    pub fn restore_delay_ms(&self) -> u64 {
        self.timing
            .as_ref()
            .and_then(|t| t.restore_delay_ms)
            .unwrap_or(FORM_RESTORE_DELAY.as_millis() as u64)
    }
}

impl ConfigProvider for TomlConfig {
    fn banner_visible(&self) -> Duration {
        Duration::from_millis(self.banner_visible_ms())
    }

    fn restore_delay(&self) -> Duration {
        Duration::from_millis(self.restore_delay_ms())
    }

    fn output_path(&self) -> Option<&str> {
        self.delivery.as_ref().and_then(|d| d.output_path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

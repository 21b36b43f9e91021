#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate, LOG_LEVELS};
use toml_config::DEFAULT_TITLE;

/// Effective settings after merging the config file with command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistConfig {
    pub title: String,
    pub trim_input: bool,
    pub log_level: Option<String>,
}

impl WaitlistConfig {
    pub fn from_provider<C: ConfigProvider + ?Sized>(provider: &C) -> Self {
        Self {
            title: provider.title().to_string(),
            trim_input: provider.trim_input(),
            log_level: provider.log_level().map(str::to_string),
        }
    }
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            trim_input: true,
            log_level: None,
        }
    }
}

impl ConfigProvider for WaitlistConfig {
    fn title(&self) -> &str {
        &self.title
    }

    fn trim_input(&self) -> bool {
        self.trim_input
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

impl Validate for WaitlistConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("title", &self.title)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("log_level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

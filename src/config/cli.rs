use super::toml_config::TomlConfig;
use super::WaitlistConfig;
use crate::utils::error::Result;
use crate::utils::validation;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "waitlist")]
#[command(about = "Interactive customer waitlist manager")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Keep surrounding whitespace in typed input
    #[arg(long)]
    pub no_trim: bool,

    /// Override the menu title
    #[arg(long)]
    pub title: Option<String>,
}

impl CliConfig {
    /// 載入設定檔 (若有指定) 並套用命令列覆蓋
    pub fn resolve(&self) -> Result<WaitlistConfig> {
        let mut resolved = match &self.config {
            Some(path) => {
                validation::validate_path("config", path)?;
                tracing::info!("Loading configuration from: {}", path);
                WaitlistConfig::from_provider(&TomlConfig::from_file(path)?)
            }
            None => WaitlistConfig::default(),
        };

        if let Some(title) = &self.title {
            resolved.title = title.clone();
        }
        if self.no_trim {
            resolved.trim_input = false;
        }

        Ok(resolved)
    }
}

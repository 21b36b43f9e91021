pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, WaitlistConfig};
pub use crate::core::{command::Command, shell::Shell, waitlist::Waitlist};
pub use crate::domain::model::{Entry, RemoveOutcome};
pub use crate::utils::error::{Result, WaitlistError};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid menu option: '{choice}'")]
    InvalidOption { choice: String },
}

impl WaitlistError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            WaitlistError::ConfigParseError { .. } | WaitlistError::InvalidConfigValueError { .. }
        )
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            WaitlistError::IoError(e) => format!("Could not read or write: {}", e),
            WaitlistError::ConfigParseError { message } => {
                format!("The configuration file is not valid TOML ({})", message)
            }
            WaitlistError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            WaitlistError::InvalidOption { .. } => "Invalid option. Please choose 1–5.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WaitlistError::IoError(_) => "Check that the file exists and the terminal is still attached",
            WaitlistError::ConfigParseError { .. } => {
                "Fix the TOML syntax or run without --config to use the defaults"
            }
            WaitlistError::InvalidConfigValueError { .. } => {
                "Correct the value in the configuration file or override it on the command line"
            }
            WaitlistError::InvalidOption { .. } => "Enter a number between 1 and 5",
        }
    }
}

pub type Result<T> = std::result::Result<T, WaitlistError>;

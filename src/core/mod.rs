pub mod command;
pub mod shell;
pub mod waitlist;

pub use crate::domain::model::{Entry, RemoveOutcome};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;

//! Domain model and pure search logic for slotwatch.
//!
//! Everything in this crate is free of I/O except [`load_app_config`], which
//! reads environment variables. The HTTP side lives in `slotwatch-cowin`.

pub mod app_config;
pub mod config;
pub mod criteria;
pub mod filter;
pub mod types;
pub mod window;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use criteria::{CriteriaError, SearchCriteria, SearchLocator, SearchMode};
pub use filter::filter_available;
pub use types::{AvailabilityEntry, Center, CenterSession};
pub use window::date_window;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

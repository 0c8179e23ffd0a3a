//! Configuration: command-line flags with environment fallbacks, validation,
//! and the resolved runtime config.

pub mod app_config;
pub mod args;
pub mod validation;

pub use app_config::{Action, AppConfig};
pub use args::Cli;

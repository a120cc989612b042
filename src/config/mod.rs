#[cfg(feature = "cli")]
pub mod cli;
pub mod resume_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use resume_config::load;

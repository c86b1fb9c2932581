//! Shared plumbing for the puzzle command-line tools: configuration,
//! prompting, JSON files and logging setup.

pub mod config;
pub mod convert;
pub mod error;
pub mod files;
pub mod import;
pub mod logging;
pub mod prompt;

pub use config::ToolConfig;
pub use error::ToolError;

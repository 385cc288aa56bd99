//! Configuration module for zonecheck
//!
//! Configuration structures organised by concern:
//! - `root`: main configuration, loading and CLI overrides
//! - `server`: web server binding
//! - `resolver`: upstream validating resolver settings
//! - `upload`: bulk upload limits
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;
pub mod upload;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upload::UploadConfig;

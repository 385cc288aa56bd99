use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;
use super::upload::UploadConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Overrides supplied on the command line; applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from an optional TOML file and apply CLI
    /// overrides. Without a path every section falls back to its defaults.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_string(),
                    source,
                })?;
                toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_string(),
                    source,
                })?
            }
            None => Config::default(),
        };

        if let Some(port) = overrides.web_port {
            config.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            config.server.bind_address = bind;
        }
        if let Some(upstream) = overrides.upstream {
            config.resolver.upstream = upstream;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upload.max_domains == 0 {
            return Err(ConfigError::Validation(
                "upload.max_domains must be greater than zero".to_string(),
            ));
        }

        self.resolver.upstream.parse::<SocketAddr>().map_err(|_| {
            ConfigError::Validation(format!(
                "resolver.upstream '{}' is not a valid socket address",
                self.resolver.upstream
            ))
        })?;

        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.query_timeout_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

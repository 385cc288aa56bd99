use tracing::info;
use zonecheck_domain::config::{CliOverrides, Config};

/// Load and validate configuration. Runs before the tracing subscriber
/// exists (the config file owns the log level), so it stays quiet; the
/// summary is reported separately once logging is up.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn report_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        upstream = %config.resolver.upstream,
        max_domains = config.upload.max_domains,
        "Configuration loaded"
    );
}

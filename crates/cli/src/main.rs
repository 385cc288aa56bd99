//! # Zonecheck
//!
//! Web service reporting the DNSSEC status of domain names, singly or in
//! bulk, as compact comma-separated lines.

mod bootstrap;

use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use zonecheck_api::{create_api_routes, AppState};
use zonecheck_application::ports::DnsResolver;
use zonecheck_application::{CheckBatchUseCase, CheckDomainUseCase};
use zonecheck_domain::config::CliOverrides;
use zonecheck_infrastructure::HickoryDnsClient;

#[derive(Parser)]
#[command(name = "zonecheck")]
#[command(version)]
#[command(about = "DNSSEC status checker for domain portfolios")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Validating upstream resolver (host:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Log level (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        upstream: cli.upstream,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    bootstrap::init_logging(level);
    bootstrap::report_config(&config, cli.config.as_deref());

    let resolver: Arc<dyn DnsResolver> =
        Arc::new(HickoryDnsClient::from_config(&config.resolver)?);

    let state = AppState {
        check_domain: Arc::new(CheckDomainUseCase::new(resolver.clone())),
        check_batch: Arc::new(CheckBatchUseCase::new(resolver)),
        config: Arc::new(config.clone()),
    };

    let app = create_api_routes(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()?;

    tracing::info!("Zonecheck starting");
    tracing::info!(addr = %web_addr, "Web server listening");

    let listener = tokio::net::TcpListener::bind(&web_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

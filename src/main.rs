// Main entry point - Configuration and dependency wiring
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::dashboards_builder::DashboardsBuilder;
use crate::application::grafana_api::GrafanaApi;
use crate::application::progress::ProgressWriter;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::grafana_http::GrafanaHttpClient;
use crate::presentation::cli::Cli;
use crate::presentation::dry_run::render_dashboards;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG=grafana_access=info shows every request
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = load_app_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let interval = cli.interval.unwrap_or(config.build.interval);
    tracing::debug!(?config.grafana, organization = %cli.organization, %interval, "Configuration loaded");

    if cli.dry_run {
        let stdout = std::io::stdout();
        render_dashboards(
            &mut stdout.lock(),
            &cli.organization,
            &interval,
            &config.datasource.name,
            &cli.products,
        )?;
        return Ok(());
    }

    // Create the Grafana client (infrastructure layer)
    let api: Arc<dyn GrafanaApi> = Arc::new(GrafanaHttpClient::new(
        config.grafana.base_url(),
        config.grafana.username.clone(),
        config.grafana.password.clone(),
    ));

    // Run one builder per product (application layer)
    let mut progress = if cli.quiet {
        ProgressWriter::silent()
    } else {
        ProgressWriter::stdout()
    };
    for product in cli.products {
        let builder = DashboardsBuilder::new(product, api.clone(), config.datasource.to_datasource())
            .register_datasource(config.datasource.register);
        builder
            .build(&cli.organization, &interval, &mut progress)
            .await
            .with_context(|| format!("Failed to build `{}` dashboards", builder.product()))?;
    }

    Ok(())
}

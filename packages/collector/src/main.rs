// Main entry point for the collector

use agentql_client::{AgentQlClient, QueryParams};
use anyhow::{Context, Result};
use collector_core::{run_collection, AgentQlSearchProvider, Config, GithubRepository};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,collector_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GitHub repository collector");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url())
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // One collection pass. Result pages get a settle window before
    // extraction; engines render result blocks late.
    let client = AgentQlClient::new(config.agentql_api_key.clone())
        .with_params(QueryParams::default().with_wait_for(2));
    let provider = AgentQlSearchProvider::new(client);
    let report = run_collection(
        &provider,
        &pool,
        &config.search_engine_url,
        &config.search_query,
        config.search_max_pages,
    )
    .await
    .context("Collection run failed")?;

    let total = GithubRepository::count(&pool)
        .await
        .context("Failed to count stored repositories")?;
    tracing::info!(
        pages_fetched = report.pages_fetched,
        entries_seen = report.entries_seen,
        entries_skipped = report.entries_skipped,
        repositories_upserted = report.repositories_upserted,
        total_repositories = total,
        "Collector finished"
    );

    Ok(())
}

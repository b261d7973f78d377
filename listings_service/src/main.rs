use anyhow::Context;
use listings_entrypoint::ListingsEntrypoint;
use listings_service::{
    api::{self, context::ApiContext},
    config::Config,
    domain::services::PropertyServiceImpl,
    outbound::PropertiesPgStorage,
};
use sqlx::{Executor, postgres::PgPoolOptions};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ListingsEntrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::info!(
        environment = %config.environment,
        match_mode = %config.match_mode,
        "initialized config"
    );

    let (min_connections, max_connections) = config.pool_bounds();
    let statement_timeout = config.statement_timeout;

    // Lazy so an unreachable database fails requests instead of startup
    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .acquire_timeout(config.acquire_timeout)
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                if let Some(timeout) = statement_timeout {
                    conn.execute(
                        format!("SET statement_timeout = {}", timeout.as_millis()).as_str(),
                    )
                    .await?;
                }
                Ok(())
            })
        })
        .connect_lazy(&config.database_url)
        .context("could not configure listings db pool")?;

    tracing::info!(
        min_connections,
        max_connections,
        acquire_timeout_secs = config.acquire_timeout.as_secs(),
        statement_timeout_ms = statement_timeout.map(|t| t.as_millis() as u64),
        "initialized listings db pool"
    );

    let storage = PropertiesPgStorage::new(db, config.match_mode);

    api::setup_and_serve(ApiContext {
        property_service: Arc::new(PropertyServiceImpl::new(storage)),
        config: Arc::new(config),
    })
    .await?;
    Ok(())
}

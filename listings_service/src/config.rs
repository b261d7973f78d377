use anyhow::Context;
use listings_env::ENVIRONMENT_VAR;
pub use listings_env::Environment;
use models_listings::MatchMode;
use std::{str::FromStr, time::Duration};

const DEFAULT_PORT: usize = 8080;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Configuration parameters for the application.
#[derive(Debug)]
pub struct Config {
    /// The connection string of the listings database, handed to sqlx as-is
    pub database_url: String,
    /// The port to listen for HTTP requests on.
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// How the name and address filters compare text
    pub match_mode: MatchMode,
    /// How long a search may wait for a pooled connection
    pub acquire_timeout: Duration,
    /// Server side limit applied to every statement, if any
    pub statement_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port = parse_var(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);
        let environment = lookup(ENVIRONMENT_VAR)
            .and_then(|v| Environment::from_str(&v).ok())
            .unwrap_or(Environment::Production);
        let match_mode = parse_var(&lookup, "PROPERTY_MATCH_MODE")?.unwrap_or_default();
        let acquire_timeout = Duration::from_secs(
            parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS")?.unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        );
        let statement_timeout =
            parse_var::<u64>(&lookup, "DB_STATEMENT_TIMEOUT_MS")?.map(Duration::from_millis);

        Ok(Config {
            database_url,
            port,
            environment,
            match_mode,
            acquire_timeout,
            statement_timeout,
        })
    }

    /// (min, max) connections of the database pool
    pub fn pool_bounds(&self) -> (u32, u32) {
        match self.environment {
            Environment::Production => (5, 30),
            Environment::Develop => (3, 20),
            Environment::Local => (3, 10),
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(name)
        .map(|value| {
            value
                .parse::<T>()
                .with_context(|| format!("{name} has an invalid value: {value}"))
        })
        .transpose()
}

#![deny(missing_docs)]
//! Standard process initialisation for every listings binary.
//! Gives all entrypoints the same dotenv, panic and tracing behaviour.

use listings_env::Environment;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Describes how a binary initialises itself
#[derive(Debug)]
pub struct ListingsEntrypoint {
    env: Environment,
    default_directive: String,
}

impl Default for ListingsEntrypoint {
    fn default() -> Self {
        ListingsEntrypoint {
            env: Environment::new_or_prod(),
            default_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

/// sentinel struct which guarantees that we called [ListingsEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl ListingsEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            ..Default::default()
        }
    }

    /// replace the filter directive used when `RUST_LOG` is not set
    pub fn default_directive(mut self, directive: impl Into<String>) -> Self {
        self.default_directive = directive.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_directive))
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let filter = self.env_filter();

        if self.env.is_local() {
            tracing_subscriber::fmt()
                .with_ansi(true)
                .with_env_filter(filter)
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(filter)
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init();
        }

        tracing::debug!(environment = %self.env, "initialized tracing");

        InitializedEntrypoint(())
    }
}

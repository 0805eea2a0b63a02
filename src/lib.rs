pub mod config;
pub mod entities;
pub mod error;
pub mod models;
pub mod schema;
pub mod utils;

pub use config::DataConfig;
pub use error::DataError;
pub use utils::validation::InsertValidator;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Loads .env and installs the default tracing subscriber. For binaries and
/// integration tests embedding this crate; safe to call more than once.
pub fn init() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolhub_data=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}

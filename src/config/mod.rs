use std::env;

/// Tunables for the data layer.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// Reject comment ratings outside 1..=5 (default: true)
    pub enforce_rating_bounds: bool,

    /// Treat (fromCurrency, toCurrency) as an upsert key instead of keeping
    /// append-only rate history (default: false). Consulted by the
    /// data-access layer; rows themselves are never deduplicated here.
    pub rate_upsert_by_pair: bool,

    /// Maximum comment length in characters (default: 10000)
    pub max_content_length: usize,

    /// Maximum regex pattern length in characters (default: 2000)
    pub max_pattern_length: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            enforce_rating_bounds: true,
            rate_upsert_by_pair: false,
            max_content_length: 10_000,
            max_pattern_length: 2_000,
        }
    }
}

impl DataConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            enforce_rating_bounds: env::var("RATING_BOUNDS")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(default.enforce_rating_bounds),

            rate_upsert_by_pair: env::var("RATE_UPSERT_BY_PAIR")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(default.rate_upsert_by_pair),

            max_content_length: env::var("MAX_CONTENT_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_content_length),

            max_pattern_length: env::var("MAX_PATTERN_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_pattern_length),
        }
    }
}

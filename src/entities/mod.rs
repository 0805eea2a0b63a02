pub mod prelude;

pub mod comments;
pub mod crypto_rates;
pub mod file_jobs;
pub mod shared_regex_patterns;
pub mod visibility;

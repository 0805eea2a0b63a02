pub use super::comments::Entity as Comments;
pub use super::crypto_rates::Entity as CryptoRates;
pub use super::file_jobs::Entity as FileJobs;
pub use super::shared_regex_patterns::Entity as SharedRegexPatterns;

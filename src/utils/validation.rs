//! Insert-payload validation pipeline.
//!
//! Ties the three layers together: structural check against the insertable
//! projection, deserialization into the typed insert model, then the
//! `validator` field checks plus config-gated rules. All failures for one
//! payload are reported in a single `ValidationFailure`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use validator::Validate;

use crate::config::DataConfig;
use crate::models::{NewComment, NewCryptoRate, NewFileJob, NewRegexPattern};
use crate::schema::{
    comments_insert, crypto_rates_insert, file_jobs_insert, shared_regex_patterns_insert,
    DefinitionError, FieldFailure, InsertableDef, ValidationFailure,
};

/// Validates untyped insert payloads for all four tables.
///
/// Construction builds the insertable projections and is the point where a
/// bad projection definition becomes a startup error. Validation itself is
/// pure and deterministic; the same payload always yields the same verdict.
pub struct InsertValidator {
    config: DataConfig,
    file_jobs: InsertableDef,
    crypto_rates: InsertableDef,
    comments: InsertableDef,
    regex_patterns: InsertableDef,
}

impl InsertValidator {
    pub fn new(config: DataConfig) -> Result<Self, DefinitionError> {
        Ok(Self {
            config,
            file_jobs: file_jobs_insert()?,
            crypto_rates: crypto_rates_insert()?,
            comments: comments_insert()?,
            regex_patterns: shared_regex_patterns_insert()?,
        })
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    pub fn file_job(&self, payload: &Value) -> Result<NewFileJob, ValidationFailure> {
        let job: NewFileJob = parse_insert(&self.file_jobs, payload)?;
        finish(&self.file_jobs, run_validate(&job))?;
        Ok(job)
    }

    pub fn crypto_rate(&self, payload: &Value) -> Result<NewCryptoRate, ValidationFailure> {
        let rate: NewCryptoRate = parse_insert(&self.crypto_rates, payload)?;
        finish(&self.crypto_rates, run_validate(&rate))?;
        Ok(rate)
    }

    pub fn comment(&self, payload: &Value) -> Result<NewComment, ValidationFailure> {
        let comment: NewComment = parse_insert(&self.comments, payload)?;
        let mut failures = run_validate(&comment);

        if self.config.enforce_rating_bounds && !(1..=5).contains(&comment.rating) {
            failures.push(FieldFailure {
                field: "rating".to_string(),
                code: "range".to_string(),
                message: format!("Rating must be between 1 and 5, got {}", comment.rating),
            });
        }
        if comment.content.chars().count() > self.config.max_content_length {
            failures.push(FieldFailure {
                field: "content".to_string(),
                code: "length".to_string(),
                message: format!(
                    "Content exceeds the maximum of {} characters",
                    self.config.max_content_length
                ),
            });
        }

        finish(&self.comments, failures)?;
        Ok(comment)
    }

    pub fn regex_pattern(&self, payload: &Value) -> Result<NewRegexPattern, ValidationFailure> {
        let pattern: NewRegexPattern = parse_insert(&self.regex_patterns, payload)?;
        let mut failures = run_validate(&pattern);

        // Pattern syntax is left to the consumer's regex engine; only the
        // length is bounded here.
        if pattern.pattern.chars().count() > self.config.max_pattern_length {
            failures.push(FieldFailure {
                field: "pattern".to_string(),
                code: "length".to_string(),
                message: format!(
                    "Pattern exceeds the maximum of {} characters",
                    self.config.max_pattern_length
                ),
            });
        }

        finish(&self.regex_patterns, failures)?;
        Ok(pattern)
    }
}

/// Structural check followed by deserialization into the insert model.
fn parse_insert<T: DeserializeOwned>(
    def: &InsertableDef,
    payload: &Value,
) -> Result<T, ValidationFailure> {
    def.check(payload)?;
    serde_json::from_value(payload.clone()).map_err(|e| {
        ValidationFailure::single(
            def.table_name(),
            FieldFailure {
                field: "$payload".to_string(),
                code: "malformed".to_string(),
                message: e.to_string(),
            },
        )
    })
}

/// Folds `validator` errors into field failures, reported under the wire
/// (camelCase) field names.
fn run_validate<T: Validate>(value: &T) -> Vec<FieldFailure> {
    let mut failures = Vec::new();
    if let Err(errors) = value.validate() {
        for (field, field_errors) in errors.field_errors() {
            let wire = camel_case(&field.to_string());
            for error in field_errors {
                failures.push(FieldFailure {
                    field: wire.clone(),
                    code: error.code.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Field '{}' is invalid", wire)),
                });
            }
        }
        failures.sort_by(|a, b| a.field.cmp(&b.field));
    }
    failures
}

fn finish(def: &InsertableDef, failures: Vec<FieldFailure>) -> Result<(), ValidationFailure> {
    if failures.is_empty() {
        Ok(())
    } else {
        debug!(
            table = def.table_name(),
            count = failures.len(),
            "insert payload rejected"
        );
        Err(ValidationFailure::new(def.table_name(), failures))
    }
}

fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for c in snake.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

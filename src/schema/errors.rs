//! Schema error types.
//!
//! Two kinds exist: definition errors, which are programming mistakes and
//! fatal at startup, and validation failures, which describe a rejected
//! insert payload and are always reported back to the caller.

use serde::Serialize;
use thiserror::Error;

/// An insertable projection was declared against columns its table does not
/// have, or against columns the server manages. Raised when the projections
/// are built at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("table '{table}' has no column '{column}'")]
    UnknownColumn {
        table: &'static str,
        column: &'static str,
    },
    #[error("column '{column}' of table '{table}' is server-managed and cannot be insertable")]
    ServerManaged {
        table: &'static str,
        column: &'static str,
    },
}

/// One field-level problem in a rejected payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    /// Wire (camelCase) field name
    pub field: String,
    /// Stable machine code: "missing_field", "wrong_type", or the
    /// validator code ("length", "range", "email", ...)
    pub code: String,
    pub message: String,
}

impl FieldFailure {
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("required field '{}' is missing", field);
        Self {
            field,
            code: "missing_field".to_string(),
            message,
        }
    }

    pub fn wrong_type(field: impl Into<String>, expected: &str, actual: &str) -> Self {
        let field = field.into();
        let message = format!("field '{}' expects {}, got {}", field, expected, actual);
        Self {
            field,
            code: "wrong_type".to_string(),
            message,
        }
    }
}

/// A rejected insert payload, enumerating every field-level failure.
/// Never fatal; the caller gets the full list in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub table: &'static str,
    pub failures: Vec<FieldFailure>,
}

impl ValidationFailure {
    pub fn new(table: &'static str, failures: Vec<FieldFailure>) -> Self {
        Self { table, failures }
    }

    pub fn single(table: &'static str, failure: FieldFailure) -> Self {
        Self {
            table,
            failures: vec![failure],
        }
    }

    /// True if some failure names the given wire field.
    pub fn names_field(&self, field: &str) -> bool {
        self.failures.iter().any(|f| f.field == field)
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "insert into '{}' rejected:", self.table)?;
        for failure in &self.failures {
            write!(f, " [{}] {};", failure.code, failure.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// The type a JSON value would be reported as in a failure message.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

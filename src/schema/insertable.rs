//! Insertable projections: the caller-suppliable subset of each table.
//!
//! A projection is declared with an allow-list of wire column names. Building
//! one fails if the list names a column the table does not have, or a column
//! the server manages (generated ids, timestamps). Checking a payload against
//! a projection is pure and deterministic and enumerates every failure.

use serde_json::Value;
use tracing::debug;

use super::errors::{json_type_name, DefinitionError, FieldFailure, ValidationFailure};
use super::types::{ColumnDef, TableDef, COMMENTS, CRYPTO_RATES, FILE_JOBS, SHARED_REGEX_PATTERNS};

#[derive(Debug, Clone)]
pub struct InsertableDef {
    table: &'static TableDef,
    columns: Vec<&'static ColumnDef>,
}

impl InsertableDef {
    pub fn new(
        table: &'static TableDef,
        allow: &'static [&'static str],
    ) -> Result<Self, DefinitionError> {
        let mut columns = Vec::with_capacity(allow.len());
        for &name in allow {
            let column = table.column(name).ok_or(DefinitionError::UnknownColumn {
                table: table.name,
                column: name,
            })?;
            if column.default.is_server_managed() {
                return Err(DefinitionError::ServerManaged {
                    table: table.name,
                    column: name,
                });
            }
            columns.push(column);
        }
        Ok(Self { table, columns })
    }

    pub fn table_name(&self) -> &'static str {
        self.table.name
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Structural check of an untyped insert payload: presence of required
    /// fields and primitive type conformance. Unknown fields are dropped by
    /// deserialization later, so they are only logged here.
    pub fn check(&self, payload: &Value) -> Result<(), ValidationFailure> {
        let object = match payload.as_object() {
            Some(object) => object,
            None => {
                return Err(ValidationFailure::single(
                    self.table.name,
                    FieldFailure::wrong_type("$payload", "object", json_type_name(payload)),
                ));
            }
        };

        let mut failures = Vec::new();
        for column in &self.columns {
            match object.get(column.name) {
                None | Some(Value::Null) => {
                    if column.required {
                        failures.push(FieldFailure::missing(column.name));
                    }
                }
                Some(value) => {
                    if !column.ty.accepts(value) {
                        failures.push(FieldFailure::wrong_type(
                            column.name,
                            column.ty.type_name(),
                            json_type_name(value),
                        ));
                    }
                }
            }
        }

        for key in object.keys() {
            if !self.contains(key) {
                debug!(table = self.table.name, field = %key, "ignoring unknown insert field");
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::new(self.table.name, failures))
        }
    }
}

pub fn file_jobs_insert() -> Result<InsertableDef, DefinitionError> {
    InsertableDef::new(
        &FILE_JOBS,
        &["filename", "fileType", "conversionType", "originalSize"],
    )
}

pub fn crypto_rates_insert() -> Result<InsertableDef, DefinitionError> {
    InsertableDef::new(
        &CRYPTO_RATES,
        &["fromCurrency", "toCurrency", "rate", "marketData"],
    )
}

pub fn comments_insert() -> Result<InsertableDef, DefinitionError> {
    InsertableDef::new(
        &COMMENTS,
        &[
            "authorName",
            "authorEmail",
            "content",
            "toolId",
            "rating",
            "isPublished",
        ],
    )
}

pub fn shared_regex_patterns_insert() -> Result<InsertableDef, DefinitionError> {
    InsertableDef::new(
        &SHARED_REGEX_PATTERNS,
        &[
            "title",
            "description",
            "pattern",
            "flags",
            "category",
            "authorName",
            "authorEmail",
            "exampleText",
            "isPublic",
            "tags",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_inserts() -> Vec<InsertableDef> {
        vec![
            file_jobs_insert().unwrap(),
            crypto_rates_insert().unwrap(),
            comments_insert().unwrap(),
            shared_regex_patterns_insert().unwrap(),
        ]
    }

    #[test]
    fn test_projections_exclude_server_managed_columns() {
        for def in all_inserts() {
            assert!(!def.contains("id"), "{}", def.table_name());
            assert!(!def.contains("createdAt"), "{}", def.table_name());
            assert!(!def.contains("updatedAt"), "{}", def.table_name());
            assert!(!def.contains("lastUpdated"), "{}", def.table_name());
            assert!(!def.contains("usageCount"), "{}", def.table_name());
            assert!(!def.contains("likes"), "{}", def.table_name());
        }
    }

    #[test]
    fn test_projection_is_strict_subset_of_table() {
        for def in all_inserts() {
            let table = match def.table_name() {
                "file_jobs" => &FILE_JOBS,
                "crypto_rates" => &CRYPTO_RATES,
                "comments" => &COMMENTS,
                _ => &SHARED_REGEX_PATTERNS,
            };
            let projected = def.columns().count();
            assert!(projected > 0);
            assert!(projected < table.columns.len());
            for column in def.columns() {
                assert!(table.column(column.name).is_some());
            }
        }
    }

    #[test]
    fn test_unknown_column_is_a_definition_error() {
        let err = InsertableDef::new(&COMMENTS, &["authorName", "nickname"]).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::UnknownColumn {
                table: "comments",
                column: "nickname",
            }
        );
    }

    #[test]
    fn test_server_managed_column_is_a_definition_error() {
        let err = InsertableDef::new(&COMMENTS, &["id"]).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::ServerManaged {
                table: "comments",
                column: "id",
            }
        );
    }

    #[test]
    fn test_missing_required_field_is_enumerated() {
        let def = comments_insert().unwrap();
        let err = def.check(&json!({ "authorName": "Bob" })).unwrap_err();
        assert!(err.names_field("content"));
        assert!(!err.names_field("authorName"));
    }

    #[test]
    fn test_wrong_primitive_type_is_enumerated() {
        let def = file_jobs_insert().unwrap();
        let err = def
            .check(&json!({
                "filename": "a.pdf",
                "fileType": "pdf",
                "conversionType": "to_text",
                "originalSize": "big"
            }))
            .unwrap_err();
        assert!(err.names_field("originalSize"));
        assert_eq!(err.failures.len(), 1);
    }

    #[test]
    fn test_check_is_idempotent() {
        let def = comments_insert().unwrap();
        let payload = json!({ "authorName": "Bob" });
        assert_eq!(def.check(&payload), def.check(&payload));
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let def = file_jobs_insert().unwrap();
        let err = def.check(&json!("a.pdf")).unwrap_err();
        assert!(err.names_field("$payload"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let def = comments_insert().unwrap();
        let payload = json!({
            "authorName": "Bob",
            "content": "Great tool",
            "browserFingerprint": "zz"
        });
        assert!(def.check(&payload).is_ok());
    }

    #[test]
    fn test_null_optional_field_is_allowed() {
        let def = comments_insert().unwrap();
        let payload = json!({
            "authorName": "Bob",
            "content": "Great tool",
            "authorEmail": null
        });
        assert!(def.check(&payload).is_ok());
    }
}

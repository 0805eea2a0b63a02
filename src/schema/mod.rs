//! Table metadata and insertable projections.
//!
//! The sea-orm entities in [`crate::entities`] are the read-side record
//! shapes; this module carries the wire-facing metadata used to validate
//! insert payloads before a row is constructed.

pub mod errors;
pub mod insertable;
pub mod types;

pub use errors::{DefinitionError, FieldFailure, ValidationFailure};
pub use insertable::{
    comments_insert, crypto_rates_insert, file_jobs_insert, shared_regex_patterns_insert,
    InsertableDef,
};
pub use types::{
    ColumnDef, ColumnType, DefaultValue, TableDef, ALL_TABLES, COMMENTS, CRYPTO_RATES, FILE_JOBS,
    SHARED_REGEX_PATTERNS,
};

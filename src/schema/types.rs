//! Table and column metadata for the four toolhub tables.
//!
//! Column names here are the wire names (camelCase) that insert payloads
//! carry; the sea-orm entities own the snake_case storage mapping.

use serde_json::Value;

/// Semantic column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// UTF-8 text
    Text,
    /// 64-bit signed integer
    Integer,
    /// Exact decimal carried as text; accepts a JSON string or number
    Decimal,
    /// Arbitrary structured value
    Json,
    /// RFC 3339 timestamp
    Timestamp,
    /// Text restricted to a fixed set of values
    Enum { allowed: &'static [&'static str] },
}

impl ColumnType {
    /// Returns the type name for failure messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::Text => "string",
            ColumnType::Integer => "integer",
            ColumnType::Decimal => "decimal",
            ColumnType::Json => "json",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Enum { .. } => "enum",
        }
    }

    /// Structural conformance of a JSON value to this column type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ColumnType::Text => value.is_string(),
            ColumnType::Integer => value.as_i64().is_some(),
            ColumnType::Decimal => value.is_string() || value.is_number(),
            ColumnType::Json => true,
            ColumnType::Timestamp => value.is_string(),
            ColumnType::Enum { allowed } => value
                .as_str()
                .map(|s| allowed.contains(&s))
                .unwrap_or(false),
        }
    }
}

/// Declared default for a column omitted at insert time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// No default; nullable column stays null
    None,
    /// Server-generated unique id
    GeneratedId,
    /// Server clock at insert time
    Now,
    Text(&'static str),
    Int(i64),
    EmptyObject,
    EmptyArray,
}

impl DefaultValue {
    /// True for defaults the server computes; such columns are never
    /// caller-supplied.
    pub fn is_server_managed(&self) -> bool {
        matches!(self, DefaultValue::GeneratedId | DefaultValue::Now)
    }

    /// The literal JSON form of the default, where one exists.
    pub fn literal(&self) -> Option<Value> {
        match self {
            DefaultValue::Text(s) => Some(Value::String((*s).to_string())),
            DefaultValue::Int(n) => Some(Value::from(*n)),
            DefaultValue::EmptyObject => Some(serde_json::json!({})),
            DefaultValue::EmptyArray => Some(serde_json::json!([])),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub required: bool,
    pub default: DefaultValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

const JOB_STATUSES: &[&str] = &["pending", "processing", "completed", "failed"];
const TEXT_BOOLS: &[&str] = &["true", "false"];

pub const FILE_JOBS: TableDef = TableDef {
    name: "file_jobs",
    columns: &[
        ColumnDef {
            name: "id",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::GeneratedId,
        },
        ColumnDef {
            name: "filename",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "fileType",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "conversionType",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "status",
            ty: ColumnType::Enum {
                allowed: JOB_STATUSES,
            },
            required: true,
            default: DefaultValue::Text("pending"),
        },
        ColumnDef {
            name: "originalSize",
            ty: ColumnType::Integer,
            required: false,
            default: DefaultValue::Int(0),
        },
        ColumnDef {
            name: "resultData",
            ty: ColumnType::Json,
            required: false,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "errorMessage",
            ty: ColumnType::Text,
            required: false,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "createdAt",
            ty: ColumnType::Timestamp,
            required: false,
            default: DefaultValue::Now,
        },
        ColumnDef {
            name: "completedAt",
            ty: ColumnType::Timestamp,
            required: false,
            default: DefaultValue::None,
        },
    ],
};

pub const CRYPTO_RATES: TableDef = TableDef {
    name: "crypto_rates",
    columns: &[
        ColumnDef {
            name: "id",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::GeneratedId,
        },
        ColumnDef {
            name: "fromCurrency",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "toCurrency",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "rate",
            ty: ColumnType::Decimal,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "marketData",
            ty: ColumnType::Json,
            required: false,
            default: DefaultValue::EmptyObject,
        },
        ColumnDef {
            name: "lastUpdated",
            ty: ColumnType::Timestamp,
            required: false,
            default: DefaultValue::Now,
        },
    ],
};

pub const COMMENTS: TableDef = TableDef {
    name: "comments",
    columns: &[
        ColumnDef {
            name: "id",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::GeneratedId,
        },
        ColumnDef {
            name: "authorName",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "authorEmail",
            ty: ColumnType::Text,
            required: false,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "content",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "toolId",
            ty: ColumnType::Text,
            required: false,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "rating",
            ty: ColumnType::Integer,
            required: false,
            default: DefaultValue::Int(5),
        },
        ColumnDef {
            name: "isPublished",
            ty: ColumnType::Enum {
                allowed: TEXT_BOOLS,
            },
            required: false,
            default: DefaultValue::Text("true"),
        },
        ColumnDef {
            name: "createdAt",
            ty: ColumnType::Timestamp,
            required: false,
            default: DefaultValue::Now,
        },
    ],
};

pub const SHARED_REGEX_PATTERNS: TableDef = TableDef {
    name: "shared_regex_patterns",
    columns: &[
        ColumnDef {
            name: "id",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::GeneratedId,
        },
        ColumnDef {
            name: "title",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "description",
            ty: ColumnType::Text,
            required: false,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "pattern",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "flags",
            ty: ColumnType::Text,
            required: false,
            default: DefaultValue::Text("g"),
        },
        ColumnDef {
            name: "category",
            ty: ColumnType::Text,
            required: false,
            default: DefaultValue::Text("general"),
        },
        ColumnDef {
            name: "authorName",
            ty: ColumnType::Text,
            required: true,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "authorEmail",
            ty: ColumnType::Text,
            required: false,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "exampleText",
            ty: ColumnType::Text,
            required: false,
            default: DefaultValue::None,
        },
        ColumnDef {
            name: "usageCount",
            ty: ColumnType::Integer,
            required: false,
            default: DefaultValue::Int(0),
        },
        ColumnDef {
            name: "likes",
            ty: ColumnType::Integer,
            required: false,
            default: DefaultValue::Int(0),
        },
        ColumnDef {
            name: "isPublic",
            ty: ColumnType::Enum {
                allowed: TEXT_BOOLS,
            },
            required: false,
            default: DefaultValue::Text("true"),
        },
        ColumnDef {
            name: "tags",
            ty: ColumnType::Json,
            required: false,
            default: DefaultValue::EmptyArray,
        },
        ColumnDef {
            name: "createdAt",
            ty: ColumnType::Timestamp,
            required: false,
            default: DefaultValue::Now,
        },
        ColumnDef {
            name: "updatedAt",
            ty: ColumnType::Timestamp,
            required: false,
            default: DefaultValue::Now,
        },
    ],
};

/// All table definitions, for registry-style iteration.
pub const ALL_TABLES: &[&TableDef] = &[&FILE_JOBS, &CRYPTO_RATES, &COMMENTS, &SHARED_REGEX_PATTERNS];

//! Write-facing insert models.
//!
//! One struct per table, carrying exactly the caller-suppliable columns of
//! the matching insertable projection. Optional fields default to the table
//! defaults, so a deserialized model converts into a fully-populated
//! `ActiveModel` without touching the database.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::entities::file_jobs::{self, JobStatus};
use crate::entities::visibility::Visibility;
use crate::entities::{comments, crypto_rates, shared_regex_patterns};

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewFileJob {
    #[validate(length(min = 1, max = 255, message = "Filename must be between 1 and 255 characters"))]
    pub filename: String,
    #[validate(length(min = 1, max = 32, message = "Source format tag is required"))]
    pub file_type: String,
    #[validate(length(min = 1, max = 64, message = "Conversion type is required"))]
    pub conversion_type: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "File size cannot be negative"))]
    pub original_size: i64,
}

impl NewFileJob {
    /// Builds the row to insert: fresh id, pending status, zeroed result.
    pub fn into_active_model(self) -> file_jobs::ActiveModel {
        file_jobs::ActiveModel {
            id: Set(generate_id()),
            filename: Set(self.filename),
            file_type: Set(self.file_type),
            conversion_type: Set(self.conversion_type),
            status: Set(JobStatus::Pending),
            original_size: Set(self.original_size),
            result_data: Set(None),
            error_message: Set(None),
            created_at: Set(Utc::now()),
            completed_at: Set(None),
        }
    }
}

fn default_market_data() -> Value {
    json!({})
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCryptoRate {
    #[validate(length(min = 1, max = 16, message = "Source currency code is required"))]
    pub from_currency: String,
    #[validate(length(min = 1, max = 16, message = "Target currency code is required"))]
    pub to_currency: String,
    /// Exact decimal; accepted as a JSON string or number, stored as text.
    pub rate: Decimal,
    #[serde(default = "default_market_data")]
    pub market_data: Value,
}

impl NewCryptoRate {
    pub fn into_active_model(self) -> crypto_rates::ActiveModel {
        crypto_rates::ActiveModel {
            id: Set(generate_id()),
            from_currency: Set(self.from_currency),
            to_currency: Set(self.to_currency),
            rate: Set(self.rate.to_string()),
            market_data: Set(self.market_data),
            last_updated: Set(Utc::now()),
        }
    }
}

fn default_rating() -> i32 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[validate(length(min = 1, max = 100, message = "Author name must be between 1 and 100 characters"))]
    pub author_name: String,
    #[validate(email(message = "Author email must be a valid address"))]
    pub author_email: Option<String>,
    #[validate(length(min = 1, message = "Comment content cannot be empty"))]
    pub content: String,
    pub tool_id: Option<String>,
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[serde(default)]
    pub is_published: Visibility,
}

impl NewComment {
    pub fn into_active_model(self) -> comments::ActiveModel {
        comments::ActiveModel {
            id: Set(generate_id()),
            author_name: Set(self.author_name),
            author_email: Set(self.author_email),
            content: Set(self.content),
            tool_id: Set(self.tool_id),
            rating: Set(self.rating),
            is_published: Set(self.is_published),
            created_at: Set(Utc::now()),
        }
    }
}

fn default_flags() -> String {
    "g".to_string()
}

fn default_category() -> String {
    "general".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRegexPattern {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    pub description: Option<String>,
    // Raw regex source for the consumer's engine; syntax is not checked here.
    #[validate(length(min = 1, message = "Pattern cannot be empty"))]
    pub pattern: String,
    #[serde(default = "default_flags")]
    pub flags: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[validate(length(min = 1, max = 100, message = "Author name must be between 1 and 100 characters"))]
    pub author_name: String,
    #[validate(email(message = "Author email must be a valid address"))]
    pub author_email: Option<String>,
    pub example_text: Option<String>,
    #[serde(default)]
    pub is_public: Visibility,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewRegexPattern {
    pub fn into_active_model(self) -> shared_regex_patterns::ActiveModel {
        let now = Utc::now();
        shared_regex_patterns::ActiveModel {
            id: Set(generate_id()),
            title: Set(self.title),
            description: Set(self.description),
            pattern: Set(self.pattern),
            flags: Set(self.flags),
            category: Set(self.category),
            author_name: Set(self.author_name),
            author_email: Set(self.author_email),
            example_text: Set(self.example_text),
            usage_count: Set(0),
            likes: Set(0),
            is_public: Set(self.is_public),
            tags: Set(json!(self.tags)),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

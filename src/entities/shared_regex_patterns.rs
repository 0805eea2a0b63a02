use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::visibility::Visibility;

/// Community-contributed regex snippet.
///
/// The pattern targets the consumer's regex engine and is stored unvalidated.
/// usage_count and likes are monotone counters bumped by the engagement
/// services; updated_at tracks those bumps.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shared_regex_patterns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub pattern: String,
    #[sea_orm(default_value = "g")]
    pub flags: String,
    #[sea_orm(default_value = "general")]
    pub category: String,
    pub author_name: String,
    pub author_email: Option<String>,
    pub example_text: Option<String>,
    #[sea_orm(default_value = 0)]
    pub usage_count: i64,
    #[sea_orm(default_value = 0)]
    pub likes: i64,
    pub is_public: Visibility,
    pub tags: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl Model {
    /// Tags as a plain string list; rows written by this crate always hold a
    /// JSON array of strings.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_array()
            .map(|tags| {
                tags.iter()
                    .filter_map(|t| t.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

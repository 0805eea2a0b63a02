use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::visibility::Visibility;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
    // Loose reference into the tool catalog, not a foreign key.
    pub tool_id: Option<String>,
    #[sea_orm(default_value = 5)]
    pub rating: i32,
    pub is_published: Visibility,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

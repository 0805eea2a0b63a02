use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Publication flag stored as the legacy strings "true"/"false".
///
/// The frontend and existing rows use textual booleans, so the stored and
/// serialized representation stays textual while Rust code gets a real
/// two-valued type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum Visibility {
    #[sea_orm(string_value = "true")]
    #[serde(rename = "true")]
    Public,
    #[sea_orm(string_value = "false")]
    #[serde(rename = "false")]
    Hidden,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Public
    }
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

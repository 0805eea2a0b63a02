use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cached exchange rate between two currency codes.
///
/// The rate is stored as decimal text to avoid floating-point precision loss.
/// (from_currency, to_currency) is a logical cache key only; duplicates are
/// allowed and readers must pick the freshest row by last_updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "crypto_rates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub rate: String,
    pub market_data: Json,
    pub last_updated: DateTimeUtc,
}

impl Model {
    /// Decodes the stored rate text into an exact decimal.
    pub fn rate(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.rate)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

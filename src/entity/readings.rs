use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One ingested sensor sample. Values are kept as the decimal text the device sent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ras_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub temp: String,
    #[sea_orm(column_name = "do")]
    #[serde(rename = "do")]
    pub dissolved_oxygen: String,
    pub ph: String,
    pub ammonia: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use crate::entity::readings;
use crate::filters::DateFilter;
use crate::parameter::Parameter;

/// Sanitised reading values ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReading {
    pub temp: String,
    pub dissolved_oxygen: String,
    pub ph: String,
    pub ammonia: String,
}

impl NewReading {
    #[must_use]
    pub fn value(&self, parameter: Parameter) -> &str {
        match parameter {
            Parameter::Temperature => &self.temp,
            Parameter::DissolvedOxygen => &self.dissolved_oxygen,
            Parameter::Ph => &self.ph,
            Parameter::Ammonia => &self.ammonia,
        }
    }
}

/// Filters accepted by the query-by-parameter endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingQuery {
    pub parameter: Parameter,
    /// Exact text match on the parameter's own column.
    pub exact_value: Option<String>,
    pub dates: DateFilter,
}

impl ReadingQuery {
    #[must_use]
    pub fn condition(&self, today: NaiveDate) -> Condition {
        let mut cond = Condition::all();
        if let Some(value) = &self.exact_value {
            cond = cond.add(self.parameter.column().eq(value.as_str()));
        }
        cond.add(self.dates.condition(readings::Column::CreatedAt, today))
    }

    /// Select for every matching row, oldest first.
    #[must_use]
    pub fn select(&self, today: NaiveDate) -> Select<readings::Entity> {
        readings::Entity::find()
            .filter(self.condition(today))
            .order_by_asc(readings::Column::Id)
    }
}

pub async fn insert(
    db: &DatabaseConnection,
    reading: &NewReading,
    created_at: NaiveDateTime,
) -> Result<readings::Model, DbErr> {
    readings::ActiveModel {
        id: NotSet,
        temp: Set(reading.temp.clone()),
        dissolved_oxygen: Set(reading.dissolved_oxygen.clone()),
        ph: Set(reading.ph.clone()),
        ammonia: Set(reading.ammonia.clone()),
        created_at: Set(created_at),
    }
    .insert(db)
    .await
}

pub async fn find_matching(
    db: &DatabaseConnection,
    query: &ReadingQuery,
    today: NaiveDate,
) -> Result<Vec<readings::Model>, DbErr> {
    query.select(today).all(db).await
}

/// Most recent non-empty value recorded for `parameter`, with its timestamp.
pub async fn latest_value(
    db: &DatabaseConnection,
    parameter: Parameter,
) -> Result<Option<(String, NaiveDateTime)>, DbErr> {
    let column = parameter.column();

    readings::Entity::find()
        .select_only()
        .column(column)
        .column(readings::Column::CreatedAt)
        .filter(column.is_not_null())
        .filter(column.ne(""))
        .order_by_desc(readings::Column::CreatedAt)
        .order_by_desc(readings::Column::Id)
        .into_tuple::<(String, NaiveDateTime)>()
        .one(db)
        .await
}

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use crate::common::Pagination;
use crate::entity::alerts;
use crate::filters::DateFilter;
use crate::thresholds::AlertDraft;

/// Alert history page size.
pub const PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone)]
pub struct AlertPage {
    pub rows: Vec<alerts::Model>,
    pub pagination: Pagination,
}

pub async fn insert(
    db: &DatabaseConnection,
    draft: &AlertDraft,
    created_at: NaiveDateTime,
) -> Result<alerts::Model, DbErr> {
    alerts::ActiveModel {
        id: NotSet,
        title: Set(draft.title.to_string()),
        description: Set(draft.description.to_string()),
        value: Set(draft.value.clone()),
        created_at: Set(created_at),
    }
    .insert(db)
    .await
}

/// Filtered select with no ordering or paging; the count query runs on exactly this.
#[must_use]
pub fn filtered(condition: Condition) -> Select<alerts::Entity> {
    alerts::Entity::find().filter(condition)
}

/// One page (1-based) of the filtered select, oldest first.
#[must_use]
pub fn page_select(condition: Condition, page: u64) -> Select<alerts::Entity> {
    filtered(condition)
        .order_by_asc(alerts::Column::Id)
        .offset(page.saturating_sub(1).saturating_mul(PAGE_SIZE))
        .limit(PAGE_SIZE)
}

pub async fn find_page(
    db: &DatabaseConnection,
    filter: &DateFilter,
    today: NaiveDate,
    page: u64,
) -> Result<AlertPage, DbErr> {
    let condition = filter.condition(alerts::Column::CreatedAt, today);

    let rows = page_select(condition.clone(), page).all(db).await?;
    let total_records = filtered(condition).count(db).await?;

    Ok(AlertPage {
        rows,
        pagination: Pagination {
            current_page: page,
            total_pages: total_records.div_ceil(PAGE_SIZE),
            total_records,
        },
    })
}

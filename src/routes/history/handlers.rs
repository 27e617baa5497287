use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::common::{AppState, ResponseStatus};
use crate::error::{AppError, AppResult};
use crate::filters::DateFilter;
use crate::store;

use super::types::{AlertResponse, HistoryQuery, HistoryResponse};

/// List alert history with filtering and pagination
///
/// Pages hold 10 alerts. The total is counted with the same filter as the page,
/// so `total_pages` always describes the filtered set.
#[utoipa::path(
    get,
    path = "/api/v1/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Success or error envelope", body = HistoryResponse),
    ),
    tag = "history"
)]
pub async fn list_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> AppResult<Json<HistoryResponse>> {
    let Query(query) = query
        .map_err(|e| AppError::Validation(format!("Invalid query parameters: {}", e.body_text())))?;

    let filter = DateFilter::parse(
        query.start_date.as_deref(),
        query.end_date.as_deref(),
        query.range.as_deref(),
    )?;
    let page = query.page_number()?;

    let today = state.now_local().date();
    let result = store::alerts::find_page(&state.db, &filter, today, page)
        .await
        .map_err(AppError::storage("Error retrieving history"))?;

    Ok(Json(HistoryResponse {
        status: ResponseStatus::Success,
        data: result.rows.into_iter().map(AlertResponse::from).collect(),
        pagination: result.pagination,
    }))
}

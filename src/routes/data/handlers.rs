use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::common::{AppState, ResponseStatus};
use crate::error::{AppError, AppResult};
use crate::store;
use crate::thresholds;

use super::types::{
    IngestRequest, MessageResponse, ReadingResponse, ReadingsListResponse, ReadingsQuery,
};

/// Ingest a sensor reading
///
/// Stores the reading stamped with the current local time, then records an alert
/// for every parameter outside its safe range. Alert write failures are logged only.
#[utoipa::path(
    post,
    path = "/api/v1/data",
    request_body = IngestRequest,
    responses(
        (status = 200, description = "Success or error envelope", body = MessageResponse),
    ),
    tag = "data"
)]
pub async fn ingest_reading(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    // Devices do not always send a content type, so the body is decoded by hand.
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        IngestRequest::default()
    } else {
        IngestRequest::from_json(&body)
            .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?
    };

    let reading = request.into_reading()?;
    let created_at = state.now_local();

    let row = store::readings::insert(&state.db, &reading, created_at)
        .await
        .map_err(AppError::storage("Error inserting data"))?;

    let mut alerts_raised = 0usize;
    for draft in thresholds::evaluate_reading(&reading) {
        match store::alerts::insert(&state.db, &draft, created_at).await {
            Ok(_) => alerts_raised += 1,
            Err(e) => tracing::warn!(
                reading_id = row.id,
                title = draft.title,
                value = %draft.value,
                error = %e,
                "alert_insert_failed"
            ),
        }
    }

    tracing::info!(
        reading_id = row.id,
        alerts = alerts_raised,
        "reading_ingested"
    );

    Ok(Json(MessageResponse {
        status: ResponseStatus::Success,
        message: "Data inserted successfully".to_string(),
    }))
}

/// Query readings by parameter
///
/// Returns full reading rows, optionally filtered by an exact value of the selected
/// parameter, an inclusive date range and a coarse range selector.
#[utoipa::path(
    get,
    path = "/api/v1/data",
    params(ReadingsQuery),
    responses(
        (status = 200, description = "Success or error envelope", body = ReadingsListResponse),
    ),
    tag = "data"
)]
pub async fn query_readings(
    State(state): State<AppState>,
    query: Result<Query<ReadingsQuery>, QueryRejection>,
) -> AppResult<Json<ReadingsListResponse>> {
    let Query(query) = query
        .map_err(|e| AppError::Validation(format!("Invalid query parameters: {}", e.body_text())))?;
    let query = query.into_reading_query()?;

    let today = state.now_local().date();
    let rows = store::readings::find_matching(&state.db, &query, today)
        .await
        .map_err(AppError::storage("Error retrieving data"))?;

    tracing::debug!(
        param = %query.parameter,
        rows = rows.len(),
        "readings_queried"
    );

    Ok(Json(ReadingsListResponse {
        status: ResponseStatus::Success,
        data: rows.into_iter().map(ReadingResponse::from).collect(),
    }))
}

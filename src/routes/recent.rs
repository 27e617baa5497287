use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::time::format_timestamp;
use crate::common::{AppState, ResponseStatus};
use crate::error::{AppError, AppResult};
use crate::parameter::Parameter;
use crate::store;

/// Latest value of one parameter; both fields are null when it was never recorded.
#[derive(Debug, Serialize, ToSchema)]
pub struct LatestValue {
    pub value: Option<String>,
    #[schema(example = "2024-05-01 08:30:00")]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LatestValues {
    pub temp: LatestValue,
    #[serde(rename = "do")]
    pub dissolved_oxygen: LatestValue,
    pub ph: LatestValue,
    pub ammonia: LatestValue,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentResponse {
    pub status: ResponseStatus,
    pub data: LatestValues,
}

async fn latest(state: &AppState, parameter: Parameter) -> AppResult<LatestValue> {
    let row = store::readings::latest_value(&state.db, parameter)
        .await
        .map_err(AppError::storage(format!(
            "Error retrieving latest value for {parameter}"
        )))?;

    Ok(match row {
        Some((value, created_at)) => LatestValue {
            value: Some(value),
            created_at: Some(format_timestamp(&created_at)),
        },
        None => LatestValue {
            value: None,
            created_at: None,
        },
    })
}

/// Latest value per parameter
///
/// Looks up each parameter independently; any lookup failure fails the whole request.
#[utoipa::path(
    get,
    path = "/api/v1/recent",
    responses(
        (status = 200, description = "Success or error envelope", body = RecentResponse),
    ),
    tag = "data"
)]
pub async fn latest_values(State(state): State<AppState>) -> AppResult<Json<RecentResponse>> {
    let data = LatestValues {
        temp: latest(&state, Parameter::Temperature).await?,
        dissolved_oxygen: latest(&state, Parameter::DissolvedOxygen).await?,
        ph: latest(&state, Parameter::Ph).await?,
        ammonia: latest(&state, Parameter::Ammonia).await?,
    };

    Ok(Json(RecentResponse {
        status: ResponseStatus::Success,
        data,
    }))
}

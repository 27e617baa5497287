use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::common::time::format_timestamp;
use crate::common::{Pagination, ResponseStatus};
use crate::entity::alerts;
use crate::error::{AppError, AppResult};
use crate::store::alerts::PAGE_SIZE;

/// Query parameters for the alert history endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// First day to include (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Last day to include (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// yearly, monthly, weekly, daily or all (default)
    pub range: Option<String>,
    /// Page number (1-indexed, 10 alerts per page)
    pub page: Option<String>,
}

impl HistoryQuery {
    /// Requested page, defaulting to 1.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` unless the page is a positive integer whose
    /// row offset fits a signed 64-bit SQL integer.
    pub fn page_number(&self) -> AppResult<u64> {
        let Some(raw) = self.page.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(1);
        };

        raw.parse::<u64>()
            .ok()
            .filter(|page| {
                page.checked_sub(1)
                    .and_then(|skipped| skipped.checked_mul(PAGE_SIZE))
                    .is_some_and(|offset| i64::try_from(offset).is_ok())
            })
            .ok_or_else(|| {
                AppError::Validation("Invalid page number. Please use a positive integer.".to_string())
            })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlertResponse {
    pub id: i32,
    #[schema(example = "pH Level")]
    pub title: String,
    pub description: String,
    /// The out-of-range reading as sent by the device
    pub value: String,
    #[schema(example = "2024-05-01 08:30:00")]
    pub created_at: String,
}

impl From<alerts::Model> for AlertResponse {
    fn from(a: alerts::Model) -> Self {
        Self {
            id: a.id,
            title: a.title,
            description: a.description,
            value: a.value,
            created_at: format_timestamp(&a.created_at),
        }
    }
}

/// Paginated alert history
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub status: ResponseStatus,
    pub data: Vec<AlertResponse>,
    pub pagination: Pagination,
}

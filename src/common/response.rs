use serde::Serialize;
use utoipa::ToSchema;

/// Value of the `status` field carried by every API envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_records: u64,
}

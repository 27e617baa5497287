mod handlers;
mod types;

pub use handlers::list_history;
pub use types::{AlertResponse, HistoryQuery, HistoryResponse};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::__path_list_history;

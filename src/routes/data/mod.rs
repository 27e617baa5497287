mod handlers;
mod types;

pub use handlers::{ingest_reading, query_readings};
pub use types::{
    IngestRequest, MessageResponse, ReadingResponse, ReadingsListResponse, ReadingsQuery,
};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{__path_ingest_reading, __path_query_readings};

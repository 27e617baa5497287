mod response;
mod state;
pub mod text;
pub mod time;

pub use response::{Pagination, ResponseStatus};
pub use state::AppState;

//! Persistence functions over `ras_data` and `ras_history`.

pub mod alerts;
pub mod readings;

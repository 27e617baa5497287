//! Schema CLI for the `ras_data` / `ras_history` tables.
//!
//! `cargo run -p migration -- up` applies pending migrations against `DATABASE_URL`;
//! the server also applies them on startup.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    cli::run_cli(migration::Migrator).await;
}

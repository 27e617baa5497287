#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::util::ServiceExt;

use ras_monitor::common::AppState;
use ras_monitor::config::{Config, Deployment};
use ras_monitor::routes;
use ras_monitor::store;
use ras_monitor::store::readings::NewReading;
use ras_monitor::thresholds::AlertDraft;

pub struct TestContext {
    pub state: AppState,
    pub app: axum::Router,
}

impl TestContext {
    pub fn db(&self) -> &DatabaseConnection {
        &self.state.db
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        api_host: "127.0.0.1".to_string(),
        api_port: 0,
        request_body_limit_bytes: 65_536,
        timezone: chrono_tz::Asia::Manila,
        deployment: Deployment::Local,
    }
}

/// Router backed by a freshly migrated in-memory SQLite database.
pub async fn build_test_context() -> TestContext {
    let config = test_config();

    // A single pooled connection keeps every statement on the same in-memory database.
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("sqlite should connect");
    migration::Migrator::up(&db, None)
        .await
        .expect("migrations should apply");

    let state = AppState::new(db, config);
    let app = routes::build_router(state.clone());

    TestContext { state, app }
}

pub async fn request_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
    send(app, method, uri, body).await
}

pub async fn request_raw(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: &'static str,
) -> (StatusCode, Value) {
    send(app, method, uri, Body::from(body)).await
}

pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    request_json(app, "GET", uri, None).await
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(body)
        .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("request should be handled");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    (status, json)
}

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S")
        .expect("test timestamp should parse")
}

pub fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("test date should parse")
}

pub fn reading(temp: &str, dissolved_oxygen: &str, ph: &str, ammonia: &str) -> NewReading {
    NewReading {
        temp: temp.to_string(),
        dissolved_oxygen: dissolved_oxygen.to_string(),
        ph: ph.to_string(),
        ammonia: ammonia.to_string(),
    }
}

pub async fn seed_reading(db: &DatabaseConnection, reading: &NewReading, created_at: NaiveDateTime) {
    store::readings::insert(db, reading, created_at)
        .await
        .expect("reading should insert");
}

pub async fn seed_alert(db: &DatabaseConnection, title: &'static str, value: &str, created_at: NaiveDateTime) {
    let draft = AlertDraft {
        title,
        description: "test alert",
        value: value.to_string(),
    };
    store::alerts::insert(db, &draft, created_at)
        .await
        .expect("alert should insert");
}

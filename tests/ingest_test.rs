//! Integration tests for `POST /api/v1/data`.
//!
//! Run with: cargo test --test ingest_test

mod common;

use axum::http::StatusCode;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder};
use serde_json::json;

use common::{build_test_context, request_json, request_raw};
use ras_monitor::entity::{alerts, readings};
use ras_monitor::thresholds::RULES;

async fn post_reading(ctx: &common::TestContext, body: serde_json::Value) -> serde_json::Value {
    let (status, json) = request_json(&ctx.app, "POST", "/api/v1/data", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    json
}

async fn all_alerts(ctx: &common::TestContext) -> Vec<alerts::Model> {
    alerts::Entity::find()
        .order_by_asc(alerts::Column::Id)
        .all(ctx.db())
        .await
        .expect("alerts should load")
}

#[tokio::test]
async fn empty_required_fields_are_rejected_without_writing() {
    let ctx = build_test_context().await;

    let cases = [
        (json!({"do": "7", "ph": "7"}), "Temperature cannot be empty"),
        (json!({"temp": "   ", "do": "7", "ph": "7"}), "Temperature cannot be empty"),
        (json!({"temp": "25", "ph": "7"}), "Dissolved Oxygen cannot be empty"),
        (json!({"temp": "25", "do": "", "ph": "7"}), "Dissolved Oxygen cannot be empty"),
        (json!({"temp": "25", "do": "7"}), "PH cannot be empty"),
        (json!({"temp": "25", "do": "7", "ph": null}), "PH cannot be empty"),
    ];

    for (body, message) in cases {
        let json = post_reading(&ctx, body).await;
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], message);
    }

    let count = readings::Entity::find().count(ctx.db()).await.unwrap();
    assert_eq!(count, 0);
    let alert_count = alerts::Entity::find().count(ctx.db()).await.unwrap();
    assert_eq!(alert_count, 0);
}

#[tokio::test]
async fn missing_ammonia_stores_empty_value() {
    let ctx = build_test_context().await;

    let json = post_reading(&ctx, json!({"temp": "25", "do": "7", "ph": "7"})).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Data inserted successfully");

    let rows = readings::Entity::find().all(ctx.db()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].temp, "25");
    assert_eq!(rows[0].dissolved_oxygen, "7");
    assert_eq!(rows[0].ph, "7");
    assert_eq!(rows[0].ammonia, "");

    // In-range values and an empty ammonia raise nothing.
    assert!(all_alerts(&ctx).await.is_empty());
}

#[tokio::test]
async fn ph_breaches_use_matching_message() {
    let ctx = build_test_context().await;
    let ph_rule = &RULES[0];

    post_reading(&ctx, json!({"temp": "25", "do": "7", "ph": "6.0"})).await;
    let alerts = all_alerts(&ctx).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "pH Level");
    assert_eq!(alerts[0].value, "6.0");
    assert_eq!(Some(alerts[0].description.as_str()), ph_rule.low_message);

    post_reading(&ctx, json!({"temp": "25", "do": "7", "ph": "9.0"})).await;
    let alerts = all_alerts(&ctx).await;
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[1].title, "pH Level");
    assert_eq!(alerts[1].description, ph_rule.high_message);

    post_reading(&ctx, json!({"temp": "25", "do": "7", "ph": "7.0"})).await;
    assert_eq!(all_alerts(&ctx).await.len(), 2);
}

#[tokio::test]
async fn ammonia_alerts_only_on_high_side() {
    let ctx = build_test_context().await;

    post_reading(&ctx, json!({"temp": "25", "do": "7", "ph": "7", "ammonia": "0.5"})).await;
    let alerts = all_alerts(&ctx).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "Ammonia");
    assert_eq!(alerts[0].description, RULES[3].high_message);

    post_reading(&ctx, json!({"temp": "25", "do": "7", "ph": "7", "ammonia": "0"})).await;
    post_reading(&ctx, json!({"temp": "25", "do": "7", "ph": "7", "ammonia": "-1"})).await;
    assert_eq!(all_alerts(&ctx).await.len(), 1);
}

#[tokio::test]
async fn every_breached_parameter_gets_its_own_alert() {
    let ctx = build_test_context().await;

    post_reading(
        &ctx,
        json!({"temp": "30", "do": "4", "ph": "9.5", "ammonia": "0.2"}),
    )
    .await;

    let alerts = all_alerts(&ctx).await;
    let titles: Vec<&str> = alerts.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        ["pH Level", "Dissolved Oxygen", "Temperature", "Ammonia"]
    );

    // Alerts carry the reading's timestamp.
    let reading = readings::Entity::find().one(ctx.db()).await.unwrap().unwrap();
    assert!(alerts.iter().all(|a| a.created_at == reading.created_at));
}

#[tokio::test]
async fn numeric_json_values_are_accepted() {
    let ctx = build_test_context().await;

    let json = post_reading(&ctx, json!({"temp": 25.5, "do": 7, "ph": 7.1, "ammonia": 0.01})).await;
    assert_eq!(json["status"], "success");

    let row = readings::Entity::find().one(ctx.db()).await.unwrap().unwrap();
    assert_eq!(row.temp, "25.5");
    assert_eq!(row.dissolved_oxygen, "7");
    assert_eq!(row.ph, "7.1");
    assert_eq!(row.ammonia, "0.01");
}

#[tokio::test]
async fn values_are_trimmed_and_escaped() {
    let ctx = build_test_context().await;

    post_reading(&ctx, json!({"temp": " 25 ", "do": "<7>", "ph": "7", "ammonia": "a&b"})).await;

    let row = readings::Entity::find().one(ctx.db()).await.unwrap().unwrap();
    assert_eq!(row.temp, "25");
    assert_eq!(row.dissolved_oxygen, "&lt;7&gt;");
    assert_eq!(row.ammonia, "a&amp;b");

    // Non-numeric text is stored but never compared against a threshold.
    assert!(all_alerts(&ctx).await.is_empty());
}

#[tokio::test]
async fn malformed_bodies_return_error_envelope() {
    let ctx = build_test_context().await;

    let (status, json) = request_raw(&ctx.app, "POST", "/api/v1/data", "{not json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "error");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));

    let (_, json) = request_raw(&ctx.app, "POST", "/api/v1/data", r#"{"temp": true}"#).await;
    assert_eq!(json["status"], "error");

    // Well-formed JSON that is not an object is rejected before validation.
    for body in [r#"["25", "7", "7"]"#, r#""25""#, "42", "null"] {
        let (_, json) = request_raw(&ctx.app, "POST", "/api/v1/data", body).await;
        assert_eq!(json["status"], "error", "{body}");
        assert!(
            json["message"].as_str().unwrap().starts_with("Invalid request body"),
            "{body}"
        );
    }

    // An empty body reads as a reading with every field missing.
    let (_, json) = request_raw(&ctx.app, "POST", "/api/v1/data", "").await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Temperature cannot be empty");

    let count = readings::Entity::find().count(ctx.db()).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn alert_write_failure_still_reports_success() {
    let ctx = build_test_context().await;
    ctx.db()
        .execute_unprepared("DROP TABLE ras_history")
        .await
        .expect("history table should drop");

    let json = post_reading(&ctx, json!({"temp": "35", "do": "2", "ph": "4", "ammonia": "1"})).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Data inserted successfully");

    let rows = readings::Entity::find().all(ctx.db()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].temp, "35");
}

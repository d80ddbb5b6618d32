//! Shared helpers for API integration tests: app construction, request
//! helpers, and row seeding.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use chrono::{DateTime, NaiveDate, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use wfm_api::config::ServerConfig;
use wfm_api::router::build_app_router;
use wfm_api::state::AppState;
use wfm_core::filters::DateRange;

/// Build a test `ServerConfig` with safe defaults.
///
/// The default report range matches the seeded reporting week so tests
/// can exercise the date-defaulting path.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        default_report_range: DateRange::new(date("2025-07-07"), date("2025-07-13")).unwrap(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Same construction path as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the in-memory app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request build failed"),
    )
    .await
    .expect("request failed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read failed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body was not valid JSON")
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("bad test date")
}

pub fn instant(s: &str) -> DateTime<Utc> {
    s.parse().expect("bad test instant")
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

pub async fn seed_site(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO sites (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("seed site")
}

pub async fn seed_team(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO teams (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("seed team")
}

pub async fn seed_activity(pool: &PgPool, name: &str, enabled: bool) -> i64 {
    sqlx::query_scalar("INSERT INTO activities (name, enabled) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(enabled)
        .fetch_one(pool)
        .await
        .expect("seed activity")
}

/// Insert a user (role 1) plus its `agent_users` placement row.
pub async fn seed_agent(
    pool: &PgPool,
    email: &str,
    first_name: &str,
    last_name: &str,
    site_id: Option<i64>,
) -> i64 {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, first_name, last_name, role, site_id) \
         VALUES ($1, $2, $3, 1, $4) RETURNING id",
    )
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .bind(site_id)
    .fetch_one(pool)
    .await
    .expect("seed user");

    sqlx::query("INSERT INTO agent_users (id) VALUES ($1)")
        .bind(id)
        .execute(pool)
        .await
        .expect("seed agent_users");

    id
}

/// Give an agent a currently-active contract of the given nature.
pub async fn seed_active_contract(pool: &PgPool, agent_id: i64, contract_nature: i16) {
    sqlx::query(
        "INSERT INTO agent_contracts (agent_id, contract_nature, hire_date) \
         VALUES ($1, $2, DATE '2020-01-01')",
    )
    .bind(agent_id)
    .bind(contract_nature)
    .execute(pool)
    .await
    .expect("seed contract");
}

/// Give an agent a contract that ended before today.
pub async fn seed_ended_contract(pool: &PgPool, agent_id: i64, contract_nature: i16) {
    sqlx::query(
        "INSERT INTO agent_contracts (agent_id, contract_nature, hire_date, departure_date) \
         VALUES ($1, $2, DATE '2020-01-01', DATE '2021-01-01')",
    )
    .bind(agent_id)
    .bind(contract_nature)
    .execute(pool)
    .await
    .expect("seed ended contract");
}

pub async fn seed_schedule(
    pool: &PgPool,
    agent_id: i64,
    day: &str,
    start_sec: i32,
    end_sec: i32,
    lunch: Option<(i32, i32)>,
) {
    let (lunch_start, lunch_end) = match lunch {
        Some((s, e)) => (Some(s), Some(e)),
        None => (None, None),
    };
    sqlx::query(
        "INSERT INTO schedule_entries \
         (agent_id, date, start_sec, end_sec, lunch_start_sec, lunch_end_sec) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(agent_id)
    .bind(date(day))
    .bind(start_sec)
    .bind(end_sec)
    .bind(lunch_start)
    .bind(lunch_end)
    .execute(pool)
    .await
    .expect("seed schedule");
}

pub async fn seed_assignment(
    pool: &PgPool,
    agent_id: i64,
    activity_id: i64,
    start_at: &str,
    end_at: &str,
) {
    sqlx::query(
        "INSERT INTO assignment_entries (agent_id, activity_id, start_at, end_at) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(agent_id)
    .bind(activity_id)
    .bind(instant(start_at))
    .bind(instant(end_at))
    .execute(pool)
    .await
    .expect("seed assignment");
}

pub async fn seed_sizing(
    pool: &PgPool,
    activity_id: i64,
    begin_at: &str,
    target_size: i32,
    min_size: Option<i32>,
    max_size: Option<i32>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO activity_sizings (activity_id, begin_at, target_size, min_size, max_size) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(activity_id)
    .bind(instant(begin_at))
    .bind(target_size)
    .bind(min_size)
    .bind(max_size)
    .fetch_one(pool)
    .await
    .expect("seed sizing")
}

pub async fn seed_skill(pool: &PgPool, agent_id: i64, activity_id: i64, level: i16) {
    sqlx::query("INSERT INTO skills (agent_id, activity_id, level) VALUES ($1, $2, $3)")
        .bind(agent_id)
        .bind(activity_id)
        .bind(level)
        .execute(pool)
        .await
        .expect("seed skill");
}

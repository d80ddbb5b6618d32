//! Integration tests for the planning reports, centered on the daily
//! utilization breakdown.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

/// Seed one active CDI agent with an 8h net schedule (lunch deducted)
/// and a 4h assignment on Monday 2025-07-07.
async fn seed_half_utilized_monday(pool: &PgPool) -> i64 {
    let site_id = common::seed_site(pool, "Paris").await;
    let agent_id = common::seed_agent(pool, "a.martin@example.com", "Alice", "Martin", Some(site_id)).await;
    common::seed_active_contract(pool, agent_id, 0).await;

    // 08:00 - 17:00 with a 12:00 - 13:00 lunch: 8h net.
    common::seed_schedule(pool, agent_id, "2025-07-07", 28800, 61200, Some((43200, 46800))).await;

    let activity_id = common::seed_activity(pool, "Support", true).await;
    common::seed_assignment(
        pool,
        agent_id,
        activity_id,
        "2025-07-07T09:00:00Z",
        "2025-07-07T13:00:00Z",
    )
    .await;

    agent_id
}

// ---------------------------------------------------------------------------
// Daily breakdown
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn daily_breakdown_reports_half_utilized_monday(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/planning/daily-breakdown?startDate=2025-07-07&endDate=2025-07-13",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let point = &json["data"][0];
    assert_eq!(point["date"], "2025-07-07");
    assert_eq!(point["dayOfWeek"], "Lundi");
    assert_eq!(point["plannedHours"], 8.0);
    assert_eq!(point["assignedHours"], 4.0);
    assert_eq!(point["utilizationRate"], 50.0);

    assert_eq!(json["totalPlannedHours"], 8.0);
    assert_eq!(json["totalAssignedHours"], 4.0);
    assert_eq!(json["averageUtilizationRate"], 50.0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn daily_breakdown_defaults_dates_when_absent(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;
    let app = common::build_test_app(pool);

    // The test config's default range covers the seeded week.
    let response = get(app, "/api/planning/daily-breakdown").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"][0]["date"], "2025-07-07");
}

#[sqlx::test(migrations = "../../migrations")]
async fn daily_breakdown_includes_unscheduled_assignment_day(pool: PgPool) {
    let agent_id = seed_half_utilized_monday(&pool).await;
    let activity_id = common::seed_activity(&pool, "Formation", true).await;

    // Tuesday has an assignment but no schedule entry at all.
    common::seed_assignment(
        &pool,
        agent_id,
        activity_id,
        "2025-07-08T10:00:00Z",
        "2025-07-08T12:00:00Z",
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/planning/daily-breakdown?startDate=2025-07-07&endDate=2025-07-13",
    )
    .await;
    let json = body_json(response).await;

    let days = json["data"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[1]["date"], "2025-07-08");
    assert_eq!(days[1]["plannedHours"], 0.0);
    assert_eq!(days[1]["assignedHours"], 2.0);
    // No planned time means the rate is pinned to zero.
    assert_eq!(days[1]["utilizationRate"], 0.0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn daily_breakdown_empty_range_yields_empty_series(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/planning/daily-breakdown?startDate=2030-01-01&endDate=2030-01-07",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["totalPlannedHours"], 0.0);
    assert_eq!(json["totalAssignedHours"], 0.0);
    assert_eq!(json["averageUtilizationRate"], 0.0);
    // An empty success is not the failure envelope.
    assert!(json.get("code").is_none());
    assert!(json.get("error").is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn daily_breakdown_degrades_to_empty_shape_on_storage_failure(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;

    // Kill the pool so both day-sum queries fail at acquire time.
    pool.close().await;
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/planning/daily-breakdown?startDate=2025-07-07&endDate=2025-07-13",
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert!(json["error"].is_string());
    // The payload still carries the series shape, empty, so a client can
    // render it while telling the outage apart from a genuinely idle week.
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["totalPlannedHours"], 0.0);
    assert_eq!(json["totalAssignedHours"], 0.0);
    assert_eq!(json["averageUtilizationRate"], 0.0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn daily_breakdown_rejects_inverted_range(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/planning/daily-breakdown?startDate=2025-07-13&endDate=2025-07-07",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn daily_breakdown_rejects_malformed_date(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/planning/daily-breakdown?startDate=07/07/2025").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn daily_breakdown_contract_filter_narrows(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;
    let app = common::build_test_app(pool);

    // The seeded agent is CDI; a CDD filter must exclude them.
    let response = get(
        app,
        "/api/planning/daily-breakdown?startDate=2025-07-07&endDate=2025-07-13&contractType=CDD",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn daily_breakdown_unknown_contract_type_widens_with_warning(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/planning/daily-breakdown?startDate=2025-07-07&endDate=2025-07-13&contractType=Freelance",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // The filter was dropped, so the full series comes back, flagged.
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["warnings"][0]["kind"], "unknownContractType");
    assert_eq!(json["warnings"][0]["label"], "Freelance");
}

#[sqlx::test(migrations = "../../migrations")]
async fn daily_breakdown_excludes_agents_without_active_contract(pool: PgPool) {
    let site_id = common::seed_site(&pool, "Lyon").await;
    let agent_id =
        common::seed_agent(&pool, "b.durand@example.com", "Bruno", "Durand", Some(site_id)).await;
    common::seed_ended_contract(&pool, agent_id, 0).await;
    common::seed_schedule(&pool, agent_id, "2025-07-07", 28800, 61200, None).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/planning/daily-breakdown?startDate=2025-07-07&endDate=2025-07-13",
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Occupancy, assignments, max agents
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn agent_occupancy_reports_hours_and_rate(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/planning/agent/occupancy?startDate=2025-07-07&endDate=2025-07-13",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["lastName"], "Martin");
    assert_eq!(rows[0]["plannedHours"], 8.0);
    assert_eq!(rows[0]["assignedHours"], 4.0);
    assert_eq!(rows[0]["utilizationRate"], 50.0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn agent_assignments_report_per_activity_ratio(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/planning/agent/assignments?startDate=2025-07-07&endDate=2025-07-13",
    )
    .await;
    let json = body_json(response).await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["activity"], "Support");
    assert_eq!(rows[0]["assignedHours"], 4.0);
    assert_eq!(rows[0]["plannedHours"], 8.0);
    assert_eq!(rows[0]["ratio"], 50.0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn max_planned_agents_takes_larger_source(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;

    // A second active agent with only an assignment, no schedule.
    let other =
        common::seed_agent(&pool, "c.petit@example.com", "Chloe", "Petit", None).await;
    common::seed_active_contract(&pool, other, 1).await;
    let activity_id = common::seed_activity(&pool, "Back-office", true).await;
    common::seed_assignment(
        &pool,
        other,
        activity_id,
        "2025-07-09T08:00:00Z",
        "2025-07-09T10:00:00Z",
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/planning/kpi/agents/max?startDate=2025-07-07&endDate=2025-07-13",
    )
    .await;
    let json = body_json(response).await;

    // 1 scheduled agent vs 2 assigned agents.
    assert_eq!(json["data"]["maxAgents"], 2);
}

// ---------------------------------------------------------------------------
// Repartitions and summary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn activity_repartition_rounds_duration_hours(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/planning/activity/repartition?startDate=2025-07-07&endDate=2025-07-13",
    )
    .await;
    let json = body_json(response).await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["activity"], "Support");
    assert_eq!(rows[0]["date"], "2025-07-07");
    assert_eq!(rows[0]["dayOfWeek"], "Lundi");
    assert_eq!(rows[0]["durationHours"], 4.0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn schedule_repartition_formats_span(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/planning/schedule/repartition?startDate=2025-07-07&endDate=2025-07-13",
    )
    .await;
    let json = body_json(response).await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["firstName"], "Alice");
    assert_eq!(rows[0]["schedule"], "08:00 - 17:00");
}

#[sqlx::test(migrations = "../../migrations")]
async fn schedule_summary_counts_filtered_population(pool: PgPool) {
    seed_half_utilized_monday(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/planning/schedule-summary").await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["totalAgents"], 1);
    assert_eq!(json["data"]["totalSites"], 1);
    assert_eq!(json["data"]["activeActivities"], 1);
}

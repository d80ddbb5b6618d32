//! Planning report handlers, including the daily utilization breakdown.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use wfm_core::filters::FilterWarning;
use wfm_core::types::DbId;
use wfm_core::utilization::{
    build_daily_series, day_name, round1, seconds_to_hours, utilization_rate, DailySeriesResult,
};
use wfm_db::models::planning::DaySecondsRow;
use wfm_db::repositories::{KpiRepo, PlanningRepo};

use crate::error::AppResult;
use crate::handlers::normalize_params;
use crate::query::ReportFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn to_day_map(rows: Vec<DaySecondsRow>) -> BTreeMap<NaiveDate, i64> {
    rows.into_iter().map(|row| (row.date, row.seconds)).collect()
}

// ---------------------------------------------------------------------------
// Daily breakdown
// ---------------------------------------------------------------------------

/// Success payload: the series plus any non-fatal filter warnings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DailyBreakdownResponse {
    #[serde(flatten)]
    series: DailySeriesResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<FilterWarning>,
}

/// Failure payload: an error envelope carrying the empty series shape,
/// so clients can render an empty chart without special-casing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DailyBreakdownFailure {
    error: &'static str,
    code: &'static str,
    #[serde(flatten)]
    series: DailySeriesResult,
}

/// GET /api/planning/daily-breakdown -- the daily utilization series.
///
/// Scheduled and assigned day sums are fetched concurrently and only
/// combined per calendar day, never joined at the row level. Validation
/// problems are a 400; a storage failure degrades to a 500 carrying the
/// empty series shape.
pub async fn daily_breakdown(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Response> {
    let (predicate, warnings) = normalize_params(params, &state)?;

    let fetched = tokio::try_join!(
        PlanningRepo::scheduled_seconds_by_day(&state.pool, &predicate),
        PlanningRepo::assigned_seconds_by_day(&state.pool, &predicate),
    );

    let response = match fetched {
        Ok((scheduled, assigned)) => {
            let series = build_daily_series(&to_day_map(scheduled), &to_day_map(assigned));
            Json(DailyBreakdownResponse { series, warnings }).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "daily breakdown query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DailyBreakdownFailure {
                    error: "Failed to fetch daily breakdown",
                    code: "STORAGE_ERROR",
                    series: DailySeriesResult::default(),
                }),
            )
                .into_response()
        }
    };

    Ok(response)
}

// ---------------------------------------------------------------------------
// Schedule summary
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPayload {
    pub total_agents: i64,
    pub total_sites: i64,
    pub total_teams: i64,
    pub active_activities: i64,
}

/// GET /api/planning/schedule-summary -- filtered headline counts.
pub async fn schedule_summary(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Json<DataResponse<SummaryPayload>>> {
    let (predicate, _warnings) = normalize_params(params, &state)?;
    let row = KpiRepo::schedule_summary(&state.pool, &predicate).await?;

    Ok(Json(DataResponse {
        data: SummaryPayload {
            total_agents: row.total_agents,
            total_sites: row.total_sites,
            total_teams: row.total_teams,
            active_activities: row.active_activities,
        },
    }))
}

// ---------------------------------------------------------------------------
// Repartitions
// ---------------------------------------------------------------------------

/// Assigned duration of one activity on one day.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityShareItem {
    pub id: DbId,
    pub activity: String,
    pub date: NaiveDate,
    pub day_of_week: &'static str,
    pub duration_hours: f64,
}

/// GET /api/planning/activity/repartition -- per-activity daily durations.
pub async fn activity_repartition(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Json<DataResponse<Vec<ActivityShareItem>>>> {
    let (predicate, _warnings) = normalize_params(params, &state)?;
    let rows = PlanningRepo::activity_repartition(&state.pool, &predicate).await?;

    let data = rows
        .into_iter()
        .map(|row| ActivityShareItem {
            id: row.id,
            activity: row.name,
            date: row.date,
            day_of_week: day_name(row.date),
            duration_hours: round1(seconds_to_hours(row.seconds)),
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// One agent's schedule span on one day, formatted for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSpanItem {
    pub agent_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    pub day_of_week: &'static str,
    pub schedule: String,
}

fn format_day_seconds(seconds: i32) -> String {
    format!("{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
}

/// GET /api/planning/schedule/repartition -- per-agent daily spans.
pub async fn schedule_repartition(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Json<DataResponse<Vec<ScheduleSpanItem>>>> {
    let (predicate, _warnings) = normalize_params(params, &state)?;
    let rows = PlanningRepo::schedule_repartition(&state.pool, &predicate).await?;

    let data = rows
        .into_iter()
        .map(|row| ScheduleSpanItem {
            agent_id: row.agent_id,
            first_name: row.first_name,
            last_name: row.last_name,
            date: row.date,
            day_of_week: day_name(row.date),
            schedule: format!(
                "{} - {}",
                format_day_seconds(row.start_sec),
                format_day_seconds(row.end_sec)
            ),
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// Occupancy and assignment ratios
// ---------------------------------------------------------------------------

/// Per-agent planned vs assigned hours over the range.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentOccupancyItem {
    pub agent_id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub planned_hours: f64,
    pub assigned_hours: f64,
    pub utilization_rate: f64,
}

/// GET /api/planning/agent/occupancy -- planned vs assigned per agent.
pub async fn agent_occupancy(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Json<DataResponse<Vec<AgentOccupancyItem>>>> {
    let (predicate, _warnings) = normalize_params(params, &state)?;
    let rows = PlanningRepo::agent_occupancy(&state.pool, &predicate).await?;

    let data = rows
        .into_iter()
        .map(|row| AgentOccupancyItem {
            agent_id: row.agent_id,
            last_name: row.last_name,
            first_name: row.first_name,
            planned_hours: round1(seconds_to_hours(row.planned_seconds)),
            assigned_hours: round1(seconds_to_hours(row.assigned_seconds)),
            utilization_rate: utilization_rate(row.assigned_seconds, row.planned_seconds),
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// Per-agent-per-activity assigned hours with the share of the agent's
/// planned time. The ratio is absent when the agent has no planned time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAssignmentItem {
    pub agent_id: DbId,
    pub activity: String,
    pub last_name: String,
    pub first_name: String,
    pub assigned_hours: f64,
    pub planned_hours: f64,
    pub ratio: Option<f64>,
}

/// GET /api/planning/agent/assignments -- per-agent-per-activity ratios.
pub async fn agent_assignments(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Json<DataResponse<Vec<AgentAssignmentItem>>>> {
    let (predicate, _warnings) = normalize_params(params, &state)?;
    let rows = PlanningRepo::agent_assignment_ratios(&state.pool, &predicate).await?;

    let data = rows
        .into_iter()
        .map(|row| {
            let ratio = (row.planned_seconds > 0)
                .then(|| utilization_rate(row.assigned_seconds, row.planned_seconds));
            AgentAssignmentItem {
                agent_id: row.agent_id,
                activity: row.activity_name,
                last_name: row.last_name,
                first_name: row.first_name,
                assigned_hours: round1(seconds_to_hours(row.assigned_seconds)),
                planned_hours: round1(seconds_to_hours(row.planned_seconds)),
                ratio,
            }
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// Max planned agents
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxAgentsPayload {
    pub max_agents: i64,
}

/// GET /api/planning/kpi/agents/max -- larger of distinct scheduled and
/// distinct assigned agent counts within the range.
pub async fn max_planned_agents(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Json<DataResponse<MaxAgentsPayload>>> {
    let (predicate, _warnings) = normalize_params(params, &state)?;
    let max_agents = PlanningRepo::max_planned_agents(&state.pool, &predicate).await?;

    Ok(Json(DataResponse {
        data: MaxAgentsPayload { max_agents },
    }))
}

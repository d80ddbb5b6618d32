//! Activity staffing handler.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use wfm_core::types::DbId;
use wfm_core::utilization::day_name;
use wfm_db::repositories::StaffingRepo;

use crate::error::AppResult;
use crate::handlers::normalize_params;
use crate::query::ReportFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// One staffing slot with its target/assigned delta.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffingSlot {
    pub id: DbId,
    pub activity: String,
    pub date: NaiveDate,
    pub day_of_week: &'static str,
    pub time: String,
    pub target_size: i32,
    pub min_size: Option<i32>,
    pub max_size: Option<i32>,
    pub assigned_count: i64,
    pub delta: i64,
}

/// GET /api/staffing/activity -- sizing targets vs assigned counts per
/// activity slot within the range.
pub async fn activity_staffing(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Json<DataResponse<Vec<StaffingSlot>>>> {
    let (predicate, _warnings) = normalize_params(params, &state)?;
    let rows = StaffingRepo::activity_staffing(&state.pool, predicate.range).await?;

    let data = rows
        .into_iter()
        .map(|row| {
            let begin = row.begin_at.naive_utc();
            StaffingSlot {
                id: row.id,
                activity: row.name,
                date: begin.date(),
                day_of_week: day_name(begin.date()),
                time: begin.time().format("%H:%M").to_string(),
                target_size: row.target_size,
                min_size: row.min_size,
                max_size: row.max_size,
                assigned_count: row.assigned_count,
                delta: row.assigned_count - i64::from(row.target_size),
            }
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

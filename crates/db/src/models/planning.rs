//! Planning report rows.

use chrono::NaiveDate;
use sqlx::FromRow;
use wfm_core::types::DbId;

/// One day's seconds total from a single source (schedule or assignment).
#[derive(Debug, Clone, Copy, FromRow)]
pub struct DaySecondsRow {
    pub date: NaiveDate,
    pub seconds: i64,
}

/// Per-activity assigned duration on one day.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityShareRow {
    pub id: DbId,
    pub name: String,
    pub date: NaiveDate,
    pub seconds: i64,
}

/// Per-agent schedule span (earliest start, latest end) on one day.
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleSpanRow {
    pub agent_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    pub start_sec: i32,
    pub end_sec: i32,
}

/// Per-agent planned and assigned seconds over the whole range.
#[derive(Debug, Clone, FromRow)]
pub struct AgentOccupancyRow {
    pub agent_id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub planned_seconds: i64,
    pub assigned_seconds: i64,
}

/// Per-agent-per-activity assigned seconds, with the agent's planned
/// seconds over the range alongside for ratio derivation.
#[derive(Debug, Clone, FromRow)]
pub struct AgentAssignmentRow {
    pub agent_id: DbId,
    pub activity_name: String,
    pub last_name: String,
    pub first_name: String,
    pub assigned_seconds: i64,
    pub planned_seconds: i64,
}

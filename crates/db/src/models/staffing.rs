//! Activity staffing rows.

use sqlx::FromRow;
use wfm_core::types::{DbId, Timestamp};

/// One staffing slot: the sizing target for an activity at a given start
/// time, with the number of agents actually assigned to that slot.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityStaffingRow {
    pub id: DbId,
    pub name: String,
    pub begin_at: Timestamp,
    pub target_size: i32,
    pub min_size: Option<i32>,
    pub max_size: Option<i32>,
    pub assigned_count: i64,
}

//! Headline KPI rows.

use sqlx::FromRow;

/// Filtered staffing summary counts.
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleSummaryRow {
    pub total_agents: i64,
    pub total_sites: i64,
    pub total_teams: i64,
    pub active_activities: i64,
}

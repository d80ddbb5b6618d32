//! Skill reporting rows.

use sqlx::FromRow;
use wfm_core::types::DbId;

/// One cell of the skills matrix: how many filtered agents hold `level`
/// for `activity_id`. Level 0 counts agents with no skill row at all.
#[derive(Debug, Clone, FromRow)]
pub struct SkillCellRow {
    pub activity_id: DbId,
    pub activity_name: String,
    pub level: i16,
    pub count: i64,
}

/// One agent-activity skill row.
#[derive(Debug, Clone, FromRow)]
pub struct AgentSkillRow {
    pub last_name: String,
    pub first_name: String,
    pub activity_name: String,
    pub level: i16,
}

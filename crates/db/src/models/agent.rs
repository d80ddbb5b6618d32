//! Agent roster rows.

use chrono::NaiveDate;
use sqlx::FromRow;
use wfm_core::types::DbId;

/// One agent with an active contract, joined to contract and org metadata.
///
/// `contract_nature` is the raw stored code; the API layer maps it to its
/// display label.
#[derive(Debug, Clone, FromRow)]
pub struct AgentRow {
    pub id: DbId,
    pub contract_nature: i16,
    pub contract: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub site_name: Option<String>,
    pub team_name: Option<String>,
    pub group_name: Option<String>,
    pub experience_name: Option<String>,
    pub context_name: Option<String>,
}

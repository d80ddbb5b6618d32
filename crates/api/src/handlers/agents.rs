//! Agent roster handler.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use wfm_core::contract::label_for_code;
use wfm_core::types::DbId;
use wfm_db::models::agent::AgentRow;
use wfm_db::repositories::AgentRepo;

use crate::error::AppResult;
use crate::handlers::normalize_params;
use crate::query::ReportFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// One roster entry. The stored contract nature code is mapped to its
/// display label here; an unknown code renders as "Inconnu".
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentItem {
    pub id: DbId,
    pub contract_type: &'static str,
    pub contract: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub site: Option<String>,
    pub team: Option<String>,
    pub group: Option<String>,
    pub experience: Option<String>,
    pub context: Option<String>,
}

impl From<AgentRow> for AgentItem {
    fn from(row: AgentRow) -> Self {
        Self {
            id: row.id,
            contract_type: label_for_code(row.contract_nature),
            contract: row.contract,
            departure_date: row.departure_date,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            site: row.site_name,
            team: row.team_name,
            group: row.group_name,
            experience: row.experience_name,
            context: row.context_name,
        }
    }
}

/// GET /api/agents -- filtered roster of agents with an active contract.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Json<DataResponse<Vec<AgentItem>>>> {
    let (predicate, _warnings) = normalize_params(params, &state)?;
    let rows = AgentRepo::list(&state.pool, &predicate).await?;
    let data = rows.into_iter().map(AgentItem::from).collect();
    Ok(Json(DataResponse { data }))
}

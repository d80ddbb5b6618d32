//! Headline KPI handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use wfm_db::repositories::KpiRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Single headline count payload.
#[derive(Debug, Serialize)]
pub struct CountPayload {
    pub total: i64,
}

/// GET /api/kpis/agents -- agents with an active contract.
pub async fn total_agents(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CountPayload>>> {
    let total = KpiRepo::total_agents(&state.pool).await?;
    Ok(Json(DataResponse {
        data: CountPayload { total },
    }))
}

/// GET /api/kpis/sites -- sites with at least one active agent.
pub async fn total_sites(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CountPayload>>> {
    let total = KpiRepo::total_sites(&state.pool).await?;
    Ok(Json(DataResponse {
        data: CountPayload { total },
    }))
}

/// GET /api/kpis/teams -- teams with at least one active agent.
pub async fn total_teams(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CountPayload>>> {
    let total = KpiRepo::total_teams(&state.pool).await?;
    Ok(Json(DataResponse {
        data: CountPayload { total },
    }))
}

/// GET /api/kpis/activities -- enabled activities.
pub async fn total_activities(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CountPayload>>> {
    let total = KpiRepo::total_activities(&state.pool).await?;
    Ok(Json(DataResponse {
        data: CountPayload { total },
    }))
}

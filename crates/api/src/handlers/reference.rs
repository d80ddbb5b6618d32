//! Reference list handlers backing the filter dropdowns.

use axum::extract::State;
use axum::Json;
use wfm_db::models::reference::NamedItem;
use wfm_db::repositories::ReferenceRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/sites
pub async fn sites(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<NamedItem>>>> {
    let data = ReferenceRepo::sites(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/teams
pub async fn teams(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<NamedItem>>>> {
    let data = ReferenceRepo::teams(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/groups
pub async fn groups(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<NamedItem>>>> {
    let data = ReferenceRepo::groups(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/experiences
pub async fn experiences(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<NamedItem>>>> {
    let data = ReferenceRepo::experiences(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/contexts
pub async fn contexts(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<NamedItem>>>> {
    let data = ReferenceRepo::contexts(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/activities -- enabled activities only.
pub async fn activities(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<NamedItem>>>> {
    let data = ReferenceRepo::activities(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

//! Skill reporting handlers.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use wfm_core::types::DbId;
use wfm_db::models::reference::NamedItem;
use wfm_db::repositories::SkillRepo;

use crate::error::AppResult;
use crate::handlers::normalize_params;
use crate::query::ReportFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Skill level display labels, indexed by stored level code. Codes past
/// the table clamp to the highest label.
pub const SKILL_LEVEL_NAMES: [&str; 4] = ["Aucun", "En cours", "Acquis", "Expert"];

fn level_name(level: i16) -> &'static str {
    match level {
        0 => SKILL_LEVEL_NAMES[0],
        1 => SKILL_LEVEL_NAMES[1],
        2 => SKILL_LEVEL_NAMES[2],
        _ => SKILL_LEVEL_NAMES[3],
    }
}

/// One pivoted matrix row: agent counts per level label for an activity.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    pub activity_id: DbId,
    pub activity_name: String,
    pub counts: BTreeMap<&'static str, i64>,
}

/// The skills matrix: activities on one axis, level labels on the other.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsMatrix {
    pub activities: Vec<NamedItem>,
    pub levels: Vec<&'static str>,
    pub rows: Vec<MatrixRow>,
}

/// GET /api/skills/matrix -- agent counts per activity per skill level.
///
/// Every level label appears in every row, zero-filled, so the client
/// never has to guess at missing cells.
pub async fn matrix(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Json<DataResponse<SkillsMatrix>>> {
    let (predicate, _warnings) = normalize_params(params, &state)?;
    let cells = SkillRepo::matrix(&state.pool, &predicate).await?;

    let mut activities: Vec<NamedItem> = Vec::new();
    let mut rows: Vec<MatrixRow> = Vec::new();

    for cell in cells {
        let needs_new_row = rows
            .last()
            .map(|row| row.activity_id != cell.activity_id)
            .unwrap_or(true);

        if needs_new_row {
            activities.push(NamedItem {
                id: cell.activity_id,
                name: cell.activity_name.clone(),
            });
            rows.push(MatrixRow {
                activity_id: cell.activity_id,
                activity_name: cell.activity_name.clone(),
                counts: SKILL_LEVEL_NAMES.iter().map(|name| (*name, 0)).collect(),
            });
        }

        // Multiple stored codes can clamp to the same label.
        let row = rows.last_mut().expect("row pushed above");
        *row.counts.entry(level_name(cell.level)).or_insert(0) += cell.count;
    }

    Ok(Json(DataResponse {
        data: SkillsMatrix {
            activities,
            levels: SKILL_LEVEL_NAMES.to_vec(),
            rows,
        },
    }))
}

/// One agent-activity skill entry with its display label.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkillItem {
    pub last_name: String,
    pub first_name: String,
    pub activity: String,
    pub level: &'static str,
}

/// GET /api/skills/agent -- skill rows per filtered agent.
pub async fn by_agent(
    State(state): State<AppState>,
    Query(params): Query<ReportFilterParams>,
) -> AppResult<Json<DataResponse<Vec<AgentSkillItem>>>> {
    let (predicate, _warnings) = normalize_params(params, &state)?;
    let rows = SkillRepo::by_agent(&state.pool, &predicate).await?;

    let data = rows
        .into_iter()
        .map(|row| AgentSkillItem {
            last_name: row.last_name,
            first_name: row.first_name,
            activity: row.activity_name,
            level: level_name(row.level),
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

//! Reference lookup rows (sites, teams, groups, experiences, contexts,
//! activities).

use serde::Serialize;
use sqlx::FromRow;
use wfm_core::types::DbId;

/// An `id` + `name` row from any of the reference tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NamedItem {
    pub id: DbId,
    pub name: String,
}

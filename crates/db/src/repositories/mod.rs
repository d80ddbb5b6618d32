//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Dynamic filter clauses
//! are composed with [`sqlx::QueryBuilder`] so every caller value goes
//! through `push_bind`, never string interpolation.

pub mod agent_repo;
pub mod kpi_repo;
pub mod planning_repo;
pub mod reference_repo;
pub mod skill_repo;
pub mod staffing_repo;

pub use agent_repo::AgentRepo;
pub use kpi_repo::KpiRepo;
pub use planning_repo::PlanningRepo;
pub use reference_repo::ReferenceRepo;
pub use skill_repo::SkillRepo;
pub use staffing_repo::StaffingRepo;

use sqlx::{Postgres, QueryBuilder};
use wfm_core::filters::FilterPredicate;

/// Active-contract window, evaluated at query time (not at the date being
/// aggregated): hired by today and not yet departed.
pub(crate) const ACTIVE_CONTRACT_WINDOW: &str =
    "ac.hire_date <= CURRENT_DATE AND (ac.departure_date IS NULL OR ac.departure_date >= CURRENT_DATE)";

/// Append the optional org-placement equality filters.
///
/// Assumes the query aliases `users` as `u` and `agent_users` as `au`.
/// Absent filters append nothing ("match any").
pub(crate) fn push_org_filters(qb: &mut QueryBuilder<'_, Postgres>, predicate: &FilterPredicate) {
    if let Some(site_id) = predicate.site_id {
        qb.push(" AND u.site_id = ").push_bind(site_id);
    }
    if let Some(team_id) = predicate.team_id {
        qb.push(" AND au.team_id = ").push_bind(team_id);
    }
    if let Some(group_id) = predicate.group_id {
        qb.push(" AND au.group_id = ").push_bind(group_id);
    }
    if let Some(experience_id) = predicate.experience_id {
        qb.push(" AND au.experience_id = ").push_bind(experience_id);
    }
    if let Some(context_id) = predicate.context_id {
        qb.push(" AND au.context_id = ").push_bind(context_id);
    }
}

/// Append an `EXISTS` clause requiring an active contract for
/// `agent_col`, optionally constrained to a contract nature.
///
/// `agent_contracts` is one-to-many per agent, so joining it directly
/// would multiply schedule/assignment rows; the EXISTS form filters
/// without changing row counts.
pub(crate) fn push_active_contract(
    qb: &mut QueryBuilder<'_, Postgres>,
    agent_col: &str,
    contract_nature: Option<i16>,
) {
    qb.push(" AND EXISTS (SELECT 1 FROM agent_contracts ac WHERE ac.agent_id = ");
    qb.push(agent_col);
    qb.push(" AND ");
    qb.push(ACTIVE_CONTRACT_WINDOW);
    if let Some(code) = contract_nature {
        qb.push(" AND ac.contract_nature = ").push_bind(code);
    }
    qb.push(")");
}

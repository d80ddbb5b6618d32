//! Headline KPI queries.

use sqlx::{PgPool, Postgres, QueryBuilder};
use wfm_core::filters::FilterPredicate;

use crate::models::kpi::ScheduleSummaryRow;
use crate::repositories::{push_org_filters, ACTIVE_CONTRACT_WINDOW};

/// Unfiltered and filtered headline counts.
pub struct KpiRepo;

impl KpiRepo {
    /// Distinct agents (role 1) holding an active contract.
    pub async fn total_agents(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(DISTINCT u.id) FROM users u \
             WHERE u.role = 1 AND EXISTS ( \
                 SELECT 1 FROM agent_contracts ac \
                 WHERE ac.agent_id = u.id AND {ACTIVE_CONTRACT_WINDOW})"
        );
        sqlx::query_scalar(&query).fetch_one(pool).await
    }

    /// Distinct sites with at least one active agent.
    pub async fn total_sites(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(DISTINCT u.site_id) FROM users u \
             WHERE u.role = 1 AND u.site_id IS NOT NULL AND EXISTS ( \
                 SELECT 1 FROM agent_contracts ac \
                 WHERE ac.agent_id = u.id AND {ACTIVE_CONTRACT_WINDOW})"
        );
        sqlx::query_scalar(&query).fetch_one(pool).await
    }

    /// Distinct teams with at least one active agent.
    pub async fn total_teams(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(DISTINCT au.team_id) FROM agent_users au \
             JOIN users u ON u.id = au.id \
             WHERE u.role = 1 AND au.team_id IS NOT NULL AND EXISTS ( \
                 SELECT 1 FROM agent_contracts ac \
                 WHERE ac.agent_id = u.id AND {ACTIVE_CONTRACT_WINDOW})"
        );
        sqlx::query_scalar(&query).fetch_one(pool).await
    }

    /// Enabled activities.
    pub async fn total_activities(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM activities WHERE enabled")
            .fetch_one(pool)
            .await
    }

    /// Filtered summary counts over the active-agent population.
    ///
    /// Only the categorical filters apply; the predicate's date range has
    /// no bearing on who counts as active.
    pub async fn schedule_summary(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<ScheduleSummaryRow, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT COUNT(DISTINCT u.id) AS total_agents, \
                    COUNT(DISTINCT u.site_id) AS total_sites, \
                    COUNT(DISTINCT au.team_id) AS total_teams, \
                    (SELECT COUNT(*) FROM activities WHERE enabled) AS active_activities \
             FROM users u \
             LEFT JOIN agent_users au ON au.id = u.id \
             JOIN agent_contracts ac ON ac.agent_id = u.id \
             WHERE u.role = 1 AND {ACTIVE_CONTRACT_WINDOW}"
        ));
        if let Some(code) = predicate.contract_nature {
            qb.push(" AND ac.contract_nature = ").push_bind(code);
        }
        push_org_filters(&mut qb, predicate);

        qb.build_query_as::<ScheduleSummaryRow>()
            .fetch_one(pool)
            .await
    }
}

//! Skill reporting queries.

use sqlx::{PgPool, Postgres, QueryBuilder};
use wfm_core::filters::FilterPredicate;

use crate::models::skills::{AgentSkillRow, SkillCellRow};
use crate::repositories::{push_active_contract, push_org_filters};

/// Skills matrix and per-agent skill listings.
pub struct SkillRepo;

impl SkillRepo {
    /// Agent counts per enabled activity per skill level, over the
    /// filtered active-agent population.
    ///
    /// Every filtered agent contributes one row per activity: agents
    /// without a skill record land in level 0, so the level counts per
    /// activity always sum to the population size.
    pub async fn matrix(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<Vec<SkillCellRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT a.id AS activity_id, a.name AS activity_name, \
                    COALESCE(s.level, 0)::SMALLINT AS level, COUNT(*) AS count \
             FROM activities a \
             CROSS JOIN (SELECT u.id AS agent_id FROM users u \
                         JOIN agent_users au ON au.id = u.id \
                         WHERE 1=1",
        );
        push_active_contract(&mut qb, "u.id", predicate.contract_nature);
        push_org_filters(&mut qb, predicate);
        qb.push(
            ") ag \
             LEFT JOIN skills s ON s.activity_id = a.id AND s.agent_id = ag.agent_id \
             WHERE a.enabled \
             GROUP BY a.id, a.name, COALESCE(s.level, 0) \
             ORDER BY a.name, level",
        );

        qb.build_query_as::<SkillCellRow>().fetch_all(pool).await
    }

    /// Skill rows per agent over the filtered active-agent population.
    pub async fn by_agent(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<Vec<AgentSkillRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT u.last_name AS last_name, u.first_name AS first_name, \
                    a.name AS activity_name, s.level AS level \
             FROM skills s \
             JOIN users u ON u.id = s.agent_id \
             JOIN agent_users au ON au.id = s.agent_id \
             JOIN activities a ON a.id = s.activity_id \
             WHERE u.role = 1",
        );
        push_active_contract(&mut qb, "u.id", predicate.contract_nature);
        push_org_filters(&mut qb, predicate);
        qb.push(" ORDER BY u.last_name, u.first_name, a.name");

        qb.build_query_as::<AgentSkillRow>().fetch_all(pool).await
    }
}

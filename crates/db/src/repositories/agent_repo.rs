//! Agent roster queries.

use sqlx::{PgPool, Postgres, QueryBuilder};
use wfm_core::filters::FilterPredicate;

use crate::models::agent::AgentRow;
use crate::repositories::{push_org_filters, ACTIVE_CONTRACT_WINDOW};

/// Roster of agents holding an active contract.
pub struct AgentRepo;

impl AgentRepo {
    /// List agents with an active contract, joined to contract and org
    /// metadata, narrowed by the categorical filters. The predicate's
    /// date range is not used: "active" is evaluated against today.
    pub async fn list(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<Vec<AgentRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT ac.agent_id AS id, ac.contract_nature AS contract_nature, \
                    ci.name AS contract, ac.departure_date AS departure_date, \
                    u.email AS email, u.first_name AS first_name, u.last_name AS last_name, \
                    s.name AS site_name, t.name AS team_name, g.name AS group_name, \
                    e.name AS experience_name, c.name AS context_name \
             FROM agent_contracts ac \
             JOIN users u ON u.id = ac.agent_id \
             LEFT JOIN sites s ON s.id = u.site_id \
             LEFT JOIN agent_users au ON au.id = u.id \
             LEFT JOIN teams t ON t.id = au.team_id \
             LEFT JOIN agent_groups g ON g.id = au.group_id \
             LEFT JOIN contract_infos ci ON ci.id = ac.contract_id \
             LEFT JOIN experiences e ON e.id = au.experience_id \
             LEFT JOIN contexts c ON c.id = au.context_id \
             WHERE {ACTIVE_CONTRACT_WINDOW}"
        ));
        if let Some(code) = predicate.contract_nature {
            qb.push(" AND ac.contract_nature = ").push_bind(code);
        }
        push_org_filters(&mut qb, predicate);
        qb.push(" ORDER BY u.last_name, u.first_name");

        qb.build_query_as::<AgentRow>().fetch_all(pool).await
    }
}

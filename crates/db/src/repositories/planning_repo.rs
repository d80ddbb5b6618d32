//! Planning report queries: the two daily-hours sources plus the
//! repartition, occupancy, and assignment-ratio reports.

use sqlx::{PgPool, Postgres, QueryBuilder};
use wfm_core::filters::FilterPredicate;

use crate::models::planning::{
    ActivityShareRow, AgentAssignmentRow, AgentOccupancyRow, DaySecondsRow, ScheduleSpanRow,
};
use crate::repositories::{push_active_contract, push_org_filters};

/// Net scheduled seconds of one schedule entry: interval length minus the
/// lunch break when both bounds are present (a half-open lunch is ignored,
/// and a negative lunch interval clamps to zero).
const NET_SCHEDULE_SECONDS: &str =
    "se.end_sec - se.start_sec - GREATEST(COALESCE(se.lunch_end_sec - se.lunch_start_sec, 0), 0)";

/// Calendar day of an assignment, bucketed by its start instant in UTC.
const ASSIGNMENT_DAY: &str = "(ae.start_at AT TIME ZONE 'UTC')::date";

/// Assigned seconds of one assignment entry.
const ASSIGNMENT_SECONDS: &str = "EXTRACT(EPOCH FROM (ae.end_at - ae.start_at))";

/// Provides the planning report queries.
///
/// The scheduled and assigned sums are independent queries over the two
/// sources; they are never joined to each other at the row level.
pub struct PlanningRepo;

impl PlanningRepo {
    /// Total net scheduled seconds per day within the predicate's range.
    pub async fn scheduled_seconds_by_day(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<Vec<DaySecondsRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT se.date AS date, \
                    COALESCE(SUM({NET_SCHEDULE_SECONDS}), 0)::BIGINT AS seconds \
             FROM schedule_entries se \
             JOIN users u ON u.id = se.agent_id \
             JOIN agent_users au ON au.id = se.agent_id \
             WHERE se.date BETWEEN "
        ));
        qb.push_bind(predicate.range.start);
        qb.push(" AND ");
        qb.push_bind(predicate.range.end);
        push_active_contract(&mut qb, "se.agent_id", predicate.contract_nature);
        push_org_filters(&mut qb, predicate);
        qb.push(" GROUP BY se.date ORDER BY se.date");

        qb.build_query_as::<DaySecondsRow>().fetch_all(pool).await
    }

    /// Total assigned seconds per day within the predicate's range.
    pub async fn assigned_seconds_by_day(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<Vec<DaySecondsRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {ASSIGNMENT_DAY} AS date, \
                    COALESCE(SUM({ASSIGNMENT_SECONDS}), 0)::BIGINT AS seconds \
             FROM assignment_entries ae \
             JOIN users u ON u.id = ae.agent_id \
             JOIN agent_users au ON au.id = ae.agent_id \
             WHERE {ASSIGNMENT_DAY} BETWEEN "
        ));
        qb.push_bind(predicate.range.start);
        qb.push(" AND ");
        qb.push_bind(predicate.range.end);
        push_active_contract(&mut qb, "ae.agent_id", predicate.contract_nature);
        push_org_filters(&mut qb, predicate);
        qb.push(format!(" GROUP BY {ASSIGNMENT_DAY} ORDER BY {ASSIGNMENT_DAY}"));

        qb.build_query_as::<DaySecondsRow>().fetch_all(pool).await
    }

    /// Assigned seconds per activity per day within the range.
    pub async fn activity_repartition(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<Vec<ActivityShareRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT a.id AS id, a.name AS name, {ASSIGNMENT_DAY} AS date, \
                    COALESCE(SUM({ASSIGNMENT_SECONDS}), 0)::BIGINT AS seconds \
             FROM assignment_entries ae \
             JOIN activities a ON a.id = ae.activity_id \
             JOIN users u ON u.id = ae.agent_id \
             JOIN agent_users au ON au.id = ae.agent_id \
             WHERE {ASSIGNMENT_DAY} BETWEEN "
        ));
        qb.push_bind(predicate.range.start);
        qb.push(" AND ");
        qb.push_bind(predicate.range.end);
        push_active_contract(&mut qb, "ae.agent_id", predicate.contract_nature);
        push_org_filters(&mut qb, predicate);
        qb.push(format!(
            " GROUP BY a.id, a.name, {ASSIGNMENT_DAY} ORDER BY {ASSIGNMENT_DAY}, a.name"
        ));

        qb.build_query_as::<ActivityShareRow>().fetch_all(pool).await
    }

    /// Per-agent schedule span (earliest start, latest end) per day.
    pub async fn schedule_repartition(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<Vec<ScheduleSpanRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT se.agent_id AS agent_id, u.first_name AS first_name, \
                    u.last_name AS last_name, se.date AS date, \
                    MIN(se.start_sec) AS start_sec, MAX(se.end_sec) AS end_sec \
             FROM schedule_entries se \
             JOIN users u ON u.id = se.agent_id \
             JOIN agent_users au ON au.id = se.agent_id \
             WHERE se.date BETWEEN ",
        );
        qb.push_bind(predicate.range.start);
        qb.push(" AND ");
        qb.push_bind(predicate.range.end);
        push_active_contract(&mut qb, "se.agent_id", predicate.contract_nature);
        push_org_filters(&mut qb, predicate);
        qb.push(
            " GROUP BY se.agent_id, u.first_name, u.last_name, se.date \
              ORDER BY se.agent_id, se.date",
        );

        qb.build_query_as::<ScheduleSpanRow>().fetch_all(pool).await
    }

    /// Per-agent planned and assigned seconds over the whole range.
    ///
    /// Agents appearing in either source are included (missing side zero).
    /// The optional activity filter narrows the assigned side only.
    pub async fn agent_occupancy(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<Vec<AgentOccupancyRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT u.id AS agent_id, u.last_name AS last_name, u.first_name AS first_name, \
                    COALESCE(p.seconds, 0) AS planned_seconds, \
                    COALESCE(asn.seconds, 0) AS assigned_seconds \
             FROM users u \
             JOIN agent_users au ON au.id = u.id \
             LEFT JOIN (",
        );

        qb.push(format!(
            "SELECT se.agent_id, COALESCE(SUM({NET_SCHEDULE_SECONDS}), 0)::BIGINT AS seconds \
             FROM schedule_entries se WHERE se.date BETWEEN "
        ));
        qb.push_bind(predicate.range.start);
        qb.push(" AND ");
        qb.push_bind(predicate.range.end);
        qb.push(" GROUP BY se.agent_id) p ON p.agent_id = u.id LEFT JOIN (");

        qb.push(format!(
            "SELECT ae.agent_id, COALESCE(SUM({ASSIGNMENT_SECONDS}), 0)::BIGINT AS seconds \
             FROM assignment_entries ae WHERE {ASSIGNMENT_DAY} BETWEEN "
        ));
        qb.push_bind(predicate.range.start);
        qb.push(" AND ");
        qb.push_bind(predicate.range.end);
        if let Some(activity_id) = predicate.activity_id {
            qb.push(" AND ae.activity_id = ").push_bind(activity_id);
        }
        qb.push(" GROUP BY ae.agent_id) asn ON asn.agent_id = u.id");

        qb.push(" WHERE (p.agent_id IS NOT NULL OR asn.agent_id IS NOT NULL)");
        push_active_contract(&mut qb, "u.id", predicate.contract_nature);
        push_org_filters(&mut qb, predicate);
        qb.push(" ORDER BY u.last_name, u.first_name");

        qb.build_query_as::<AgentOccupancyRow>()
            .fetch_all(pool)
            .await
    }

    /// Assigned seconds per agent per activity, with the agent's planned
    /// seconds over the range alongside.
    ///
    /// The planned-hours subquery is bounded by the date range but not by
    /// the categorical filters, matching the upstream report's behavior.
    pub async fn agent_assignment_ratios(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<Vec<AgentAssignmentRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT ae.agent_id AS agent_id, a.name AS activity_name, \
                    u.last_name AS last_name, u.first_name AS first_name, \
                    COALESCE(SUM({ASSIGNMENT_SECONDS}), 0)::BIGINT AS assigned_seconds, \
                    COALESCE(p.seconds, 0) AS planned_seconds \
             FROM assignment_entries ae \
             JOIN users u ON u.id = ae.agent_id \
             JOIN activities a ON a.id = ae.activity_id \
             JOIN agent_users au ON au.id = ae.agent_id \
             LEFT JOIN (SELECT se.agent_id, \
                               COALESCE(SUM({NET_SCHEDULE_SECONDS}), 0)::BIGINT AS seconds \
                        FROM schedule_entries se WHERE se.date BETWEEN "
        ));
        qb.push_bind(predicate.range.start);
        qb.push(" AND ");
        qb.push_bind(predicate.range.end);
        qb.push(format!(
            " GROUP BY se.agent_id) p ON p.agent_id = ae.agent_id \
              WHERE {ASSIGNMENT_DAY} BETWEEN "
        ));
        qb.push_bind(predicate.range.start);
        qb.push(" AND ");
        qb.push_bind(predicate.range.end);
        push_active_contract(&mut qb, "ae.agent_id", predicate.contract_nature);
        push_org_filters(&mut qb, predicate);
        qb.push(
            " GROUP BY ae.agent_id, a.name, u.last_name, u.first_name, p.seconds \
              ORDER BY ae.agent_id, a.name",
        );

        qb.build_query_as::<AgentAssignmentRow>()
            .fetch_all(pool)
            .await
    }

    /// Larger of: distinct agents with a schedule in range, distinct
    /// agents with an assignment in range.
    pub async fn max_planned_agents(
        pool: &PgPool,
        predicate: &FilterPredicate,
    ) -> Result<i64, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT GREATEST( \
                 (SELECT COUNT(DISTINCT se.agent_id) \
                  FROM schedule_entries se \
                  JOIN users u ON u.id = se.agent_id \
                  JOIN agent_users au ON au.id = se.agent_id \
                  WHERE se.date BETWEEN ",
        );
        qb.push_bind(predicate.range.start);
        qb.push(" AND ");
        qb.push_bind(predicate.range.end);
        push_active_contract(&mut qb, "se.agent_id", predicate.contract_nature);
        push_org_filters(&mut qb, predicate);
        qb.push(format!(
            "), \
             (SELECT COUNT(DISTINCT ae.agent_id) \
              FROM assignment_entries ae \
              JOIN users u ON u.id = ae.agent_id \
              JOIN agent_users au ON au.id = ae.agent_id \
              WHERE {ASSIGNMENT_DAY} BETWEEN "
        ));
        qb.push_bind(predicate.range.start);
        qb.push(" AND ");
        qb.push_bind(predicate.range.end);
        push_active_contract(&mut qb, "ae.agent_id", predicate.contract_nature);
        push_org_filters(&mut qb, predicate);
        qb.push("))");

        qb.build_query_scalar::<i64>().fetch_one(pool).await
    }
}

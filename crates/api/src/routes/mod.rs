pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /agents                            filtered agent roster (GET)
///
/// /sites                             reference list (GET)
/// /teams                             reference list (GET)
/// /groups                            reference list (GET)
/// /experiences                       reference list (GET)
/// /contexts                          reference list (GET)
/// /activities                        enabled activities (GET)
///
/// /kpis/agents                       active agent count (GET)
/// /kpis/sites                        site count with active agents (GET)
/// /kpis/teams                        team count with active agents (GET)
/// /kpis/activities                   enabled activity count (GET)
///
/// /skills/matrix                     activity x level counts (GET)
/// /skills/agent                      per-agent skill rows (GET)
///
/// /staffing/activity                 sizing targets vs assigned counts (GET)
///
/// /planning/schedule-summary         filtered summary counts (GET)
/// /planning/daily-breakdown          daily utilization series (GET)
/// /planning/activity/repartition     per-activity daily durations (GET)
/// /planning/schedule/repartition     per-agent daily schedule spans (GET)
/// /planning/agent/occupancy          per-agent planned vs assigned hours (GET)
/// /planning/agent/assignments        per-agent-per-activity ratios (GET)
/// /planning/kpi/agents/max           max distinct planned/assigned agents (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Agent roster.
        .route("/agents", get(handlers::agents::list))
        // Reference lists for filter dropdowns.
        .route("/sites", get(handlers::reference::sites))
        .route("/teams", get(handlers::reference::teams))
        .route("/groups", get(handlers::reference::groups))
        .route("/experiences", get(handlers::reference::experiences))
        .route("/contexts", get(handlers::reference::contexts))
        .route("/activities", get(handlers::reference::activities))
        // Headline KPI counts.
        .route("/kpis/agents", get(handlers::kpi::total_agents))
        .route("/kpis/sites", get(handlers::kpi::total_sites))
        .route("/kpis/teams", get(handlers::kpi::total_teams))
        .route("/kpis/activities", get(handlers::kpi::total_activities))
        // Skills reporting.
        .route("/skills/matrix", get(handlers::skills::matrix))
        .route("/skills/agent", get(handlers::skills::by_agent))
        // Staffing targets vs assigned counts.
        .route("/staffing/activity", get(handlers::staffing::activity_staffing))
        // Planning reports.
        .route(
            "/planning/schedule-summary",
            get(handlers::planning::schedule_summary),
        )
        .route(
            "/planning/daily-breakdown",
            get(handlers::planning::daily_breakdown),
        )
        .route(
            "/planning/activity/repartition",
            get(handlers::planning::activity_repartition),
        )
        .route(
            "/planning/schedule/repartition",
            get(handlers::planning::schedule_repartition),
        )
        .route(
            "/planning/agent/occupancy",
            get(handlers::planning::agent_occupancy),
        )
        .route(
            "/planning/agent/assignments",
            get(handlers::planning::agent_assignments),
        )
        .route(
            "/planning/kpi/agents/max",
            get(handlers::planning::max_planned_agents),
        )
}

//! Activity staffing queries.

use sqlx::{PgPool, Postgres, QueryBuilder};
use wfm_core::filters::DateRange;

use crate::models::staffing::ActivityStaffingRow;

/// Staffing targets versus actual assignment counts per activity slot.
pub struct StaffingRepo;

impl StaffingRepo {
    /// Sizing slots within the range, each paired with the number of
    /// agents assigned to that exact activity and start instant. Slots
    /// with no matching assignments are omitted, as are assignments
    /// without a sizing slot.
    pub async fn activity_staffing(
        pool: &PgPool,
        range: DateRange,
    ) -> Result<Vec<ActivityStaffingRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT asz.id AS id, a.name AS name, asz.begin_at AS begin_at, \
                    asz.target_size AS target_size, asz.min_size AS min_size, \
                    asz.max_size AS max_size, cnt.assigned_count AS assigned_count \
             FROM activity_sizings asz \
             JOIN activities a ON a.id = asz.activity_id \
             JOIN (SELECT ae.activity_id, ae.start_at, COUNT(*) AS assigned_count \
                   FROM assignment_entries ae \
                   GROUP BY ae.activity_id, ae.start_at) cnt \
               ON cnt.activity_id = asz.activity_id AND cnt.start_at = asz.begin_at \
             WHERE (asz.begin_at AT TIME ZONE 'UTC')::date BETWEEN ",
        );
        qb.push_bind(range.start);
        qb.push(" AND ");
        qb.push_bind(range.end);
        qb.push(" ORDER BY asz.begin_at, a.name");

        qb.build_query_as::<ActivityStaffingRow>()
            .fetch_all(pool)
            .await
    }
}

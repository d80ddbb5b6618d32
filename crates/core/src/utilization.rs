//! Daily planned-vs-assigned utilization aggregation.
//!
//! Takes the two independent day-to-seconds mappings produced by the
//! storage layer (scheduled seconds from schedule entries, assigned
//! seconds from activity assignments) and derives one ordered series
//! point per calendar day present in either source, plus range totals
//! and the weighted average utilization rate.
//!
//! Policy decisions that must hold exactly:
//! - a day with zero scheduled seconds has utilization 0, never NaN;
//! - the average rate is total-assigned over total-planned, not the
//!   mean of the per-day rates;
//! - sums are computed in seconds and rounded once per output field.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Seconds per hour (3600.0).
pub const SECS_PER_HOUR: f64 = 3600.0;

/// French weekday labels, indexed with Sunday = 0.
pub const DAY_NAMES: [&str; 7] = [
    "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi",
];

/// Per-day totals in seconds. One bucket per distinct date in either
/// source; the side a date is missing from is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub scheduled_seconds: i64,
    pub assigned_seconds: i64,
}

/// One output row of the daily series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySeriesPoint {
    pub date: NaiveDate,
    pub day_of_week: &'static str,
    pub planned_hours: f64,
    pub assigned_hours: f64,
    pub utilization_rate: f64,
}

/// The full daily series plus range totals.
///
/// `Default` yields the empty shape (`data: []`, all totals 0) used as
/// the fallback payload when storage is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySeriesResult {
    pub data: Vec<DailySeriesPoint>,
    pub total_planned_hours: f64,
    pub total_assigned_hours: f64,
    pub average_utilization_rate: f64,
}

/// Round to one decimal, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a seconds total to (unrounded) hours.
pub fn seconds_to_hours(seconds: i64) -> f64 {
    seconds as f64 / SECS_PER_HOUR
}

/// Weekday label for a date, from the fixed 7-name table.
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Utilization rate in percent, rounded to one decimal. Zero when no
/// seconds were scheduled, regardless of the assigned side.
pub fn utilization_rate(assigned_seconds: i64, scheduled_seconds: i64) -> f64 {
    if scheduled_seconds > 0 {
        round1(assigned_seconds as f64 / scheduled_seconds as f64 * 100.0)
    } else {
        0.0
    }
}

/// Union the two mappings into ordered day buckets (ascending date).
///
/// A day present in only one source still appears, with the missing
/// side as zero. Two empty mappings produce an empty vec, not an error.
pub fn merge_day_series(
    scheduled: &BTreeMap<NaiveDate, i64>,
    assigned: &BTreeMap<NaiveDate, i64>,
) -> Vec<DayBucket> {
    let mut dates: BTreeMap<NaiveDate, ()> = BTreeMap::new();
    dates.extend(scheduled.keys().map(|d| (*d, ())));
    dates.extend(assigned.keys().map(|d| (*d, ())));

    dates
        .into_keys()
        .map(|date| DayBucket {
            date,
            scheduled_seconds: scheduled.get(&date).copied().unwrap_or(0),
            assigned_seconds: assigned.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Build the full daily series from the two day-to-seconds mappings.
pub fn build_daily_series(
    scheduled: &BTreeMap<NaiveDate, i64>,
    assigned: &BTreeMap<NaiveDate, i64>,
) -> DailySeriesResult {
    let buckets = merge_day_series(scheduled, assigned);

    let mut total_scheduled_seconds: i64 = 0;
    let mut total_assigned_seconds: i64 = 0;

    let data: Vec<DailySeriesPoint> = buckets
        .iter()
        .map(|bucket| {
            total_scheduled_seconds += bucket.scheduled_seconds;
            total_assigned_seconds += bucket.assigned_seconds;

            DailySeriesPoint {
                date: bucket.date,
                day_of_week: day_name(bucket.date),
                planned_hours: round1(seconds_to_hours(bucket.scheduled_seconds)),
                assigned_hours: round1(seconds_to_hours(bucket.assigned_seconds)),
                utilization_rate: utilization_rate(
                    bucket.assigned_seconds,
                    bucket.scheduled_seconds,
                ),
            }
        })
        .collect();

    DailySeriesResult {
        data,
        total_planned_hours: round1(seconds_to_hours(total_scheduled_seconds)),
        total_assigned_hours: round1(seconds_to_hours(total_assigned_seconds)),
        average_utilization_rate: utilization_rate(
            total_assigned_seconds,
            total_scheduled_seconds,
        ),
    }
}

//! Report filter normalization.
//!
//! Raw caller input (all fields optional) is normalized into a
//! [`FilterPredicate`]: a mandatory inclusive date range plus AND-composed
//! optional equality constraints. Date defaulting happens at the edge --
//! callers supply the fallback range explicitly, the core never bakes one in.

use chrono::NaiveDate;
use serde::Serialize;

use crate::contract::ContractNature;
use crate::error::CoreError;
use crate::types::DbId;

/// Inclusive calendar date range. Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `end < start` as a validation error.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if end < start {
            return Err(CoreError::Validation(format!(
                "end date {end} is before start date {start}"
            )));
        }
        Ok(Self { start, end })
    }
}

/// Raw, possibly-missing report filters as supplied by a caller.
#[derive(Debug, Clone, Default)]
pub struct ReportFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub site_id: Option<DbId>,
    pub contract_type: Option<String>,
    pub team_id: Option<DbId>,
    pub group_id: Option<DbId>,
    pub experience_id: Option<DbId>,
    pub context_id: Option<DbId>,
    pub activity_id: Option<DbId>,
}

/// Normalized filter set: mandatory range, optional equality constraints.
/// Absence of a constraint means "match any".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPredicate {
    pub range: DateRange,
    pub site_id: Option<DbId>,
    pub contract_nature: Option<i16>,
    pub team_id: Option<DbId>,
    pub group_id: Option<DbId>,
    pub experience_id: Option<DbId>,
    pub context_id: Option<DbId>,
    pub activity_id: Option<DbId>,
}

/// Non-fatal normalization findings, returned beside the predicate so the
/// caller can tell when a filter was dropped and the query widened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FilterWarning {
    #[serde(rename_all = "camelCase")]
    UnknownContractType { label: String },
}

/// Normalize raw filters against a caller-supplied fallback range.
///
/// Absent dates take the fallback side; an inverted range (after
/// defaulting) is a [`CoreError::Validation`]. An unrecognized contract
/// label yields no constraint plus a [`FilterWarning::UnknownContractType`].
pub fn normalize(
    filters: &ReportFilters,
    fallback: DateRange,
) -> Result<(FilterPredicate, Vec<FilterWarning>), CoreError> {
    let start = filters.start_date.unwrap_or(fallback.start);
    let end = filters.end_date.unwrap_or(fallback.end);
    let range = DateRange::new(start, end)?;

    let mut warnings = Vec::new();
    let contract_nature = match filters.contract_type.as_deref() {
        None | Some("") => None,
        Some(label) => match ContractNature::from_label(label) {
            Some(nature) => Some(nature.code()),
            None => {
                warnings.push(FilterWarning::UnknownContractType {
                    label: label.to_string(),
                });
                None
            }
        },
    };

    let predicate = FilterPredicate {
        range,
        site_id: filters.site_id,
        contract_nature,
        team_id: filters.team_id,
        group_id: filters.group_id,
        experience_id: filters.experience_id,
        context_id: filters.context_id,
        activity_id: filters.activity_id,
    };

    Ok((predicate, warnings))
}

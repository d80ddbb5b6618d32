//! Shared query-string parameter types for report endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use wfm_core::error::CoreError;
use wfm_core::filters::ReportFilters;
use wfm_core::types::DbId;

/// Query parameters accepted by every report endpoint.
///
/// All fields are optional; dates arrive as raw strings so a malformed
/// value can be reported as a validation error instead of an opaque
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilterParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub site_id: Option<DbId>,
    pub contract_type: Option<String>,
    pub team_id: Option<DbId>,
    pub group_id: Option<DbId>,
    pub experience_id: Option<DbId>,
    pub context_id: Option<DbId>,
    pub activity_id: Option<DbId>,
}

impl ReportFilterParams {
    /// Convert raw query parameters into core [`ReportFilters`].
    ///
    /// Empty date strings count as absent; non-empty strings must parse
    /// as `YYYY-MM-DD` or the whole request is rejected.
    pub fn into_filters(self) -> Result<ReportFilters, CoreError> {
        Ok(ReportFilters {
            start_date: parse_date_param("startDate", self.start_date.as_deref())?,
            end_date: parse_date_param("endDate", self.end_date.as_deref())?,
            site_id: self.site_id,
            contract_type: self.contract_type,
            team_id: self.team_id,
            group_id: self.group_id,
            experience_id: self.experience_id,
            context_id: self.context_id,
            activity_id: self.activity_id,
        })
    }
}

fn parse_date_param(name: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, CoreError> {
    match raw {
        None => Ok(None),
        Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            CoreError::Validation(format!("{name} must be a YYYY-MM-DD date, got '{value}'"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_params_yield_empty_filters() {
        let filters = ReportFilterParams::default().into_filters().unwrap();
        assert!(filters.start_date.is_none());
        assert!(filters.end_date.is_none());
        assert!(filters.contract_type.is_none());
    }

    #[test]
    fn valid_dates_parse() {
        let params = ReportFilterParams {
            start_date: Some("2025-07-07".into()),
            end_date: Some("2025-07-13".into()),
            ..Default::default()
        };
        let filters = params.into_filters().unwrap();
        assert_eq!(filters.start_date.unwrap().to_string(), "2025-07-07");
        assert_eq!(filters.end_date.unwrap().to_string(), "2025-07-13");
    }

    #[test]
    fn empty_date_string_counts_as_absent() {
        let params = ReportFilterParams {
            start_date: Some(String::new()),
            ..Default::default()
        };
        let filters = params.into_filters().unwrap();
        assert!(filters.start_date.is_none());
    }

    #[test]
    fn malformed_date_is_a_validation_error() {
        let params = ReportFilterParams {
            start_date: Some("07/07/2025".into()),
            ..Default::default()
        };
        assert_matches!(params.into_filters(), Err(CoreError::Validation(_)));
    }
}

//! HTTP request handlers, grouped by report area.

pub mod agents;
pub mod kpi;
pub mod planning;
pub mod reference;
pub mod skills;
pub mod staffing;

use wfm_core::filters::{self, FilterPredicate, FilterWarning};

use crate::error::AppError;
use crate::query::ReportFilterParams;
use crate::state::AppState;

/// Parse and normalize report query parameters against the configured
/// default date range. Shared by every filtered report handler.
pub(crate) fn normalize_params(
    params: ReportFilterParams,
    state: &AppState,
) -> Result<(FilterPredicate, Vec<FilterWarning>), AppError> {
    let filters = params.into_filters()?;
    let normalized = filters::normalize(&filters, state.config.default_report_range)?;
    Ok(normalized)
}

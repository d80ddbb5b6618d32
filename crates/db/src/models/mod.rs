//! Row models for the reporting queries.
//!
//! Each submodule contains `FromRow` structs matching the rows a
//! repository returns. Presentation shaping (labels, formatting,
//! derived rates) happens in the API layer, not here.

pub mod agent;
pub mod kpi;
pub mod planning;
pub mod reference;
pub mod skills;
pub mod staffing;

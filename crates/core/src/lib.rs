//! Pure domain logic for the workforce planning reporting backend.
//!
//! This crate has zero internal deps so it can be used by both the
//! repository layer and the API handlers. It owns filter normalization,
//! the contract-nature lookup table, and the daily planned-vs-assigned
//! utilization aggregation.

pub mod contract;
pub mod error;
pub mod filters;
pub mod types;
pub mod utilization;

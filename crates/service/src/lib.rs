//! Service layer for the pharmacy dashboards.
//! - `storage`: the record store abstraction (memory and JSON file backends).
//! - `pharmacy`: lookups, prescription issuing, sessions and dashboard views.
//! - `runtime`: builds a configured service for a presentation layer.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod pharmacy;

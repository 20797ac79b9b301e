//! Pharmacy records: lookups, prescription issuing, sessions and the
//! role-specific dashboard views built on top of them.

pub mod dashboards;
pub mod lookup;
pub mod mutation;
pub mod service;
pub mod session;

pub use service::PharmacyService;

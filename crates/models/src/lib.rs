//! Domain records persisted in the pharmacy record store.
//!
//! The JSON shapes here are the stored format: field names match what the
//! registration and login collaborators write.

pub mod errors;
pub mod keys;
pub mod profile;
pub mod prescription;
pub mod session;

pub use prescription::{DetailedPrescription, NewPrescription, PrescriptionKind, PrescriptionRecord};
pub use profile::{Role, UserProfile};
pub use session::SessionUser;

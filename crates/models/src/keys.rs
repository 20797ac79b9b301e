//! Fixed record store keys.

/// Object mapping an internal user key to a [`crate::UserProfile`].
pub const REGISTERED_USERS: &str = "registeredUsers";
/// Array of [`crate::PrescriptionRecord`], most-recent-first.
pub const PRESCRIPTIONS: &str = "prescriptions";
pub const LOGGED_IN_DOCTOR: &str = "loggedInDoctor";
pub const LOGGED_IN_PATIENT: &str = "loggedInPatient";

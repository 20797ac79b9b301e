//! Role-specific view models.
//!
//! Each dashboard reads what it needs through the lookup functions and maps
//! stored records onto what the page shows. The pages display prescription
//! text as "medication"; that label is derived here from `details`.

use models::prescription::UNKNOWN_PLACEHOLDER;
use models::{DetailedPrescription, PrescriptionKind, PrescriptionRecord, Role, UserProfile};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::pharmacy::{lookup, mutation, session};
use crate::storage::RecordStore;

pub const PATIENT_NOT_FOUND_MESSAGE: &str = "Patient not found. Please check the UID.";
pub const NO_MEDICATION_LABEL: &str = "No medication listed";

/// What the patient page renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatientDashboard {
    Ready { profile: UserProfile, prescriptions: Vec<PrescriptionRecord> },
    /// No profile for the logged-in patient; the page sends them to registration.
    RegistrationRequired { redirect: &'static str },
}

/// Result of a doctor's "Fetch Details" by uid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatientLookup {
    Found { profile: UserProfile, recent: Vec<PrescriptionRecord> },
    NotFound { message: &'static str },
}

impl PatientLookup {
    pub fn is_found(&self) -> bool { matches!(self, PatientLookup::Found { .. }) }
}

/// One row of the pharmacist's list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PharmacistLine {
    #[serde(flatten)]
    pub detailed: DetailedPrescription,
    pub medication: String,
}

impl From<DetailedPrescription> for PharmacistLine {
    fn from(detailed: DetailedPrescription) -> Self {
        let medication = medication_label(&detailed.prescription).to_string();
        Self { detailed, medication }
    }
}

/// Text shown in the "Medication" column for a prescription.
pub fn medication_label(prescription: &PrescriptionRecord) -> &str {
    if prescription.details.trim().is_empty() {
        NO_MEDICATION_LABEL
    } else {
        &prescription.details
    }
}

/// Logged-in patient's profile and full prescription history.
#[instrument(skip(store))]
pub fn patient_dashboard<S: RecordStore + ?Sized>(store: &S) -> PatientDashboard {
    let profile = session::current_session(store, Role::Patient)
        .and_then(|s| lookup::find_profile_by_uid(store, &s.uid));
    match profile {
        Some(profile) => {
            let prescriptions = lookup::prescriptions_for_uid(store, &profile.uid, None);
            PatientDashboard::Ready { profile, prescriptions }
        }
        None => {
            debug!("patient dashboard without registered profile");
            PatientDashboard::RegistrationRequired { redirect: Role::Patient.registration_route() }
        }
    }
}

/// Profile and the `recent_limit` most recent prescriptions for the entered uid.
#[instrument(skip(store))]
pub fn doctor_fetch_patient<S: RecordStore + ?Sized>(store: &S, uid: &str, recent_limit: usize) -> PatientLookup {
    match lookup::find_profile_by_uid(store, uid) {
        Some(profile) => {
            let recent = lookup::prescriptions_for_uid(store, uid, Some(recent_limit));
            PatientLookup::Found { profile, recent }
        }
        None => PatientLookup::NotFound { message: PATIENT_NOT_FOUND_MESSAGE },
    }
}

/// Save a prescription signed by the logged-in doctor.
pub fn doctor_save_prescription<S: RecordStore + ?Sized>(
    store: &S,
    uid: &str,
    kind: PrescriptionKind,
    details: &str,
    date: String,
) -> Result<PrescriptionRecord, ServiceError> {
    let doctor = session::current_session(store, Role::Doctor)
        .map(|s| s.username)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string());
    mutation::add_prescription_on(store, uid, kind, details, &doctor, date)
}

/// Every stored prescription with patient contact details, newest first.
pub fn pharmacist_dashboard<S: RecordStore + ?Sized>(store: &S) -> Vec<PharmacistLine> {
    lookup::attach_all_patient_details(store).into_iter().map(PharmacistLine::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryRecordStore;
    use crate::test_support::{log_in, profile, record, seeded};

    #[test]
    fn patient_sees_full_history() {
        let list: Vec<_> = (0..7).map(|i| record("U1", &format!("rx{i}"), "1/1/2025")).collect();
        let store = seeded(&[("k1", profile("U1", "Alice"))], &list);
        log_in(&store, Role::Patient, "U1", "Alice");

        match patient_dashboard(&store) {
            PatientDashboard::Ready { profile, prescriptions } => {
                assert_eq!(profile.username, "Alice");
                assert_eq!(prescriptions.len(), 7);
                assert_eq!(prescriptions[0].details, "rx0");
            }
            other => panic!("expected ready dashboard, got {other:?}"),
        }
    }

    #[test]
    fn unregistered_patient_is_redirected() {
        let store = seeded(&[("k1", profile("U1", "Alice"))], &[]);
        log_in(&store, Role::Patient, "U9", "Ghost");
        assert_eq!(
            patient_dashboard(&store),
            PatientDashboard::RegistrationRequired { redirect: "/register/patient" }
        );
        assert_eq!(
            patient_dashboard(&MemoryRecordStore::new()),
            PatientDashboard::RegistrationRequired { redirect: "/register/patient" }
        );
    }

    #[test]
    fn doctor_lookup_limits_recent_list() {
        let list: Vec<_> = (0..9).map(|i| record("U1", &format!("rx{i}"), "1/1/2025")).collect();
        let store = seeded(&[("k1", profile("U1", "Alice"))], &list);
        match doctor_fetch_patient(&store, "U1", 5) {
            PatientLookup::Found { recent, .. } => {
                let details: Vec<_> = recent.iter().map(|r| r.details.as_str()).collect();
                assert_eq!(details, vec!["rx0", "rx1", "rx2", "rx3", "rx4"]);
            }
            other => panic!("expected found, got {other:?}"),
        }
    }

    #[test]
    fn doctor_lookup_miss_carries_message() {
        let store = seeded(&[("k1", profile("U1", "Alice"))], &[]);
        let res = doctor_fetch_patient(&store, "U9", 5);
        assert!(!res.is_found());
        assert_eq!(res, PatientLookup::NotFound { message: PATIENT_NOT_FOUND_MESSAGE });
    }

    #[test]
    fn doctor_signature_comes_from_session() -> Result<(), ServiceError> {
        let store = seeded(&[("k1", profile("U1", "Alice"))], &[]);
        log_in(&store, Role::Doctor, "D1", "Dr. Grey");
        let rec = doctor_save_prescription(&store, "U1", PrescriptionKind::Diabetes, "Insulin", "4/5/2025".into())?;
        assert_eq!(rec.doctor, "Dr. Grey");
        assert_eq!(rec.date, "4/5/2025");
        Ok(())
    }

    #[test]
    fn unsigned_prescription_uses_placeholder_doctor() -> Result<(), ServiceError> {
        let store = MemoryRecordStore::new();
        let rec = doctor_save_prescription(&store, "U1", PrescriptionKind::General, "Rest", "4/5/2025".into())?;
        assert_eq!(rec.doctor, UNKNOWN_PLACEHOLDER);
        Ok(())
    }

    #[test]
    fn pharmacist_rows_label_medication() {
        let list = vec![record("U1", "Amoxicillin", "1/1/2025"), record("U404", "", "1/1/2025")];
        let store = seeded(&[("k1", profile("U1", "Alice"))], &list);
        let rows = pharmacist_dashboard(&store);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].medication, "Amoxicillin");
        assert_eq!(rows[0].detailed.username, "Alice");
        assert_eq!(rows[1].medication, NO_MEDICATION_LABEL);
        assert_eq!(rows[1].detailed.phone, UNKNOWN_PLACEHOLDER);
    }

    #[test]
    fn views_serialize_with_status_tag() -> Result<(), serde_json::Error> {
        let v = serde_json::to_value(PatientLookup::NotFound { message: PATIENT_NOT_FOUND_MESSAGE })?;
        assert_eq!(v["status"], "not_found");
        assert_eq!(v["message"], PATIENT_NOT_FOUND_MESSAGE);
        Ok(())
    }
}

use models::{keys, DetailedPrescription, PrescriptionRecord, UserProfile};
use serde_json::{Map, Value};
use tracing::debug;

use crate::storage::{decode_entries, read_collection, RecordStore};

/// All registered profiles in stored key order.
///
/// Entries that do not decode as a profile (e.g. missing `uid`) are skipped
/// one by one.
pub fn registered_users<S: RecordStore + ?Sized>(store: &S) -> Vec<UserProfile> {
    let raw: Map<String, Value> = read_collection(store, keys::REGISTERED_USERS);
    decode_entries(keys::REGISTERED_USERS, raw.into_iter().map(|(_, v)| v))
}

/// The stored prescription list exactly as persisted, including entries this
/// crate cannot decode. Writers must carry these through unchanged.
pub fn raw_prescriptions<S: RecordStore + ?Sized>(store: &S) -> Vec<Value> {
    read_collection(store, keys::PRESCRIPTIONS)
}

/// The decodable prescriptions, most-recent-first.
pub fn all_prescriptions<S: RecordStore + ?Sized>(store: &S) -> Vec<PrescriptionRecord> {
    decode_entries(keys::PRESCRIPTIONS, raw_prescriptions(store))
}

/// Find the first profile, in stored order, whose `uid` matches exactly.
/// `None` is an ordinary outcome.
pub fn find_profile_by_uid<S: RecordStore + ?Sized>(store: &S, uid: &str) -> Option<UserProfile> {
    let found = registered_users(store).into_iter().find(|p| p.uid == uid);
    if found.is_none() {
        debug!(%uid, "no profile for uid");
    }
    found
}

/// Prescriptions for `uid` in stored order, optionally truncated to the first `limit`.
///
/// Stored order is insertion order, newest first, so a limit means "the N most
/// recently issued". The `date` field is never consulted.
pub fn prescriptions_for_uid<S: RecordStore + ?Sized>(
    store: &S,
    uid: &str,
    limit: Option<usize>,
) -> Vec<PrescriptionRecord> {
    let matching = all_prescriptions(store).into_iter().filter(|p| p.uid == uid);
    match limit {
        Some(n) => matching.take(n).collect(),
        None => matching.collect(),
    }
}

/// Join a prescription with its owner's contact details, or placeholders.
pub fn attach_patient_details<S: RecordStore + ?Sized>(
    store: &S,
    prescription: PrescriptionRecord,
) -> DetailedPrescription {
    let patient = find_profile_by_uid(store, &prescription.uid);
    DetailedPrescription::new(prescription, patient.as_ref())
}

/// Every stored prescription joined with patient details, in stored order.
pub fn attach_all_patient_details<S: RecordStore + ?Sized>(store: &S) -> Vec<DetailedPrescription> {
    let users = registered_users(store);
    all_prescriptions(store)
        .into_iter()
        .map(|rx| {
            let patient = users.iter().find(|p| p.uid == rx.uid);
            DetailedPrescription::new(rx, patient)
        })
        .collect()
}

#![cfg(test)]
use models::{keys, PrescriptionKind, PrescriptionRecord, Role, SessionUser, UserProfile};

use crate::storage::{write_collection, MemoryRecordStore, RecordStore};

pub fn profile(uid: &str, username: &str) -> UserProfile {
    UserProfile {
        uid: uid.into(),
        username: username.into(),
        age: Some(34),
        gender: "female".into(),
        address: format!("{username} Street 1"),
        phone: format!("555-{uid}"),
        role: Some(Role::Patient),
    }
}

pub fn record(uid: &str, details: &str, date: &str) -> PrescriptionRecord {
    PrescriptionRecord {
        uid: uid.into(),
        kind: PrescriptionKind::General,
        details: details.into(),
        doctor: "Dr. Bob".into(),
        date: date.into(),
    }
}

/// Store seeded with `(user key, profile)` pairs, kept in the given order, and a prescription list.
pub fn seeded(users: &[(&str, UserProfile)], prescriptions: &[PrescriptionRecord]) -> MemoryRecordStore {
    let store = MemoryRecordStore::new();
    let map: serde_json::Map<String, serde_json::Value> = users
        .iter()
        .map(|(k, p)| (k.to_string(), serde_json::to_value(p).expect("encode profile")))
        .collect();
    write_collection(&store, keys::REGISTERED_USERS, &map).expect("seed users");
    write_collection(&store, keys::PRESCRIPTIONS, prescriptions).expect("seed prescriptions");
    store
}

pub fn log_in<S: RecordStore + ?Sized>(store: &S, role: Role, uid: &str, username: &str) {
    let key = role.session_key().expect("role has a session key");
    let session = SessionUser { uid: uid.into(), username: username.into() };
    write_collection(store, key, &session).expect("seed session");
}

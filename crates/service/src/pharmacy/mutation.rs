use std::fmt::Write as _;

use chrono::{Local, NaiveDate};
use models::{keys, NewPrescription, PrescriptionKind, PrescriptionRecord};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pharmacy::lookup::raw_prescriptions;
use crate::storage::{write_collection, RecordStore};

/// Display pattern matching a US-locale short date, e.g. `3/7/2025`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Issue a prescription dated today (local time) and persist it at the head of the list.
pub fn add_prescription<S: RecordStore + ?Sized>(
    store: &S,
    uid: &str,
    kind: PrescriptionKind,
    details: &str,
    prescribing_doctor: &str,
) -> Result<PrescriptionRecord, ServiceError> {
    let date = format_date(Local::now().date_naive(), DEFAULT_DATE_FORMAT)?;
    add_prescription_on(store, uid, kind, details, prescribing_doctor, date)
}

/// Issue a prescription with an explicit display date.
///
/// Validation failures return before anything is written. The new record is
/// prepended to the stored list as-is, so entries this crate cannot decode are
/// written back untouched. No deduplication, no cap on history size.
#[instrument(skip(store, details), fields(uid = %uid, kind = %kind))]
pub fn add_prescription_on<S: RecordStore + ?Sized>(
    store: &S,
    uid: &str,
    kind: PrescriptionKind,
    details: &str,
    prescribing_doctor: &str,
    date: String,
) -> Result<PrescriptionRecord, ServiceError> {
    let input = NewPrescription {
        uid: uid.to_string(),
        kind,
        details: details.to_string(),
        doctor: prescribing_doctor.to_string(),
    };
    input.validate()?;
    let record = input.into_record(date);

    let entry = serde_json::to_value(&record).map_err(|e| ServiceError::Storage(e.to_string()))?;
    let mut list = raw_prescriptions(store);
    list.insert(0, entry);
    write_collection(store, keys::PRESCRIPTIONS, &list)?;
    info!(doctor = %record.doctor, date = %record.date, total = list.len(), "prescription_added");
    Ok(record)
}

/// Render `date` with a strftime pattern, rejecting patterns chrono cannot format.
pub fn format_date(date: NaiveDate, pattern: &str) -> Result<String, ServiceError> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern))
        .map_err(|_| ServiceError::Validation(format!("invalid date format: {pattern}")))?;
    Ok(out)
}

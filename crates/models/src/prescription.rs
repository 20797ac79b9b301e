use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::profile::UserProfile;

/// Shown to the prescribing doctor when the form is submitted without text.
pub const EMPTY_DETAILS_MESSAGE: &str = "Please fill in the prescription details before saving.";

/// Substituted for patient fields when a prescription has no matching profile.
pub const UNKNOWN_PLACEHOLDER: &str = "Unknown";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrescriptionKind {
    Diabetes,
    General,
}

impl PrescriptionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PrescriptionKind::Diabetes => "diabetes",
            PrescriptionKind::General => "general",
        }
    }
}

impl fmt::Display for PrescriptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One issued prescription. Stored in `prescriptions`, newest first.
///
/// `date` is a display string stamped at creation; ordering never looks at it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionRecord {
    pub uid: String,
    #[serde(rename = "type")]
    pub kind: PrescriptionKind,
    #[serde(default)]
    pub details: String,
    pub doctor: String,
    pub date: String,
}

/// Input for issuing a prescription; `date` is assigned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrescription {
    pub uid: String,
    pub kind: PrescriptionKind,
    pub details: String,
    pub doctor: String,
}

impl NewPrescription {
    /// Presence checks only: a target patient and some prescription text.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.uid.trim().is_empty() {
            return Err(ModelError::Validation("patient uid required".into()));
        }
        if self.details.trim().is_empty() {
            return Err(ModelError::Validation(EMPTY_DETAILS_MESSAGE.into()));
        }
        Ok(())
    }

    pub fn into_record(self, date: String) -> PrescriptionRecord {
        PrescriptionRecord { uid: self.uid, kind: self.kind, details: self.details, doctor: self.doctor, date }
    }
}

/// A prescription joined with its patient's contact details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedPrescription {
    #[serde(flatten)]
    pub prescription: PrescriptionRecord,
    pub username: String,
    pub address: String,
    pub phone: String,
}

impl DetailedPrescription {
    pub fn new(prescription: PrescriptionRecord, patient: Option<&UserProfile>) -> Self {
        match patient {
            Some(p) => Self {
                prescription,
                username: p.username.clone(),
                address: p.address.clone(),
                phone: p.phone.clone(),
            },
            None => Self {
                prescription,
                username: UNKNOWN_PLACEHOLDER.to_string(),
                address: UNKNOWN_PLACEHOLDER.to_string(),
                phone: UNKNOWN_PLACEHOLDER.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(details: &str) -> NewPrescription {
        NewPrescription {
            uid: "U1".into(),
            kind: PrescriptionKind::General,
            details: details.into(),
            doctor: "Dr. Bob".into(),
        }
    }

    #[test]
    fn stored_shape_uses_type_field() -> Result<(), serde_json::Error> {
        let rec = input("Take X").into_record("1/2/2025".into());
        let v = serde_json::to_value(&rec)?;
        assert_eq!(
            v,
            json!({"uid": "U1", "type": "general", "details": "Take X", "doctor": "Dr. Bob", "date": "1/2/2025"})
        );
        Ok(())
    }

    #[test]
    fn legacy_medication_field_is_ignored() -> Result<(), serde_json::Error> {
        let rec: PrescriptionRecord = serde_json::from_value(json!({
            "uid": "U1", "type": "diabetes", "details": "Metformin", "doctor": "Dr. A",
            "date": "3/4/2024", "medication": "Insulin"
        }))?;
        assert_eq!(rec.kind, PrescriptionKind::Diabetes);
        assert_eq!(rec.details, "Metformin");
        Ok(())
    }

    #[test]
    fn record_without_details_decodes_empty() -> Result<(), serde_json::Error> {
        let rec: PrescriptionRecord = serde_json::from_value(json!({
            "uid": "U1", "type": "general", "medication": "Rest", "doctor": "Dr. A", "date": "3/4/2024"
        }))?;
        assert!(rec.details.is_empty());
        Ok(())
    }

    #[test]
    fn blank_details_fail_validation() {
        let err = input("   ").validate().unwrap_err();
        assert_eq!(err.to_string(), format!("validation error: {EMPTY_DETAILS_MESSAGE}"));
        assert!(input("Take X").validate().is_ok());
    }

    #[test]
    fn blank_uid_fails_validation() {
        let mut np = input("Take X");
        np.uid = String::new();
        assert!(np.validate().is_err());
    }

    #[test]
    fn detailed_flattens_record_fields() -> Result<(), serde_json::Error> {
        let rec = input("Take X").into_record("1/2/2025".into());
        let detailed = DetailedPrescription::new(rec, None);
        let v = serde_json::to_value(&detailed)?;
        assert_eq!(v["type"], "general");
        assert_eq!(v["username"], UNKNOWN_PLACEHOLDER);
        assert_eq!(v["phone"], UNKNOWN_PLACEHOLDER);
        Ok(())
    }
}

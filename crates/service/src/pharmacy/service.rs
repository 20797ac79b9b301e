use std::sync::Arc;

use chrono::Local;
use configs::DashboardConfig;
use models::{DetailedPrescription, PrescriptionKind, PrescriptionRecord, Role, SessionUser, UserProfile};
use tracing::instrument;

use super::dashboards::{self, PatientDashboard, PatientLookup, PharmacistLine};
use super::{lookup, mutation, session};
use crate::errors::ServiceError;
use crate::storage::RecordStore;

/// Pharmacy data-access service independent of any presentation layer.
pub struct PharmacyService<S: RecordStore + ?Sized> {
    repo: Arc<S>,
    cfg: DashboardConfig,
}

impl<S: RecordStore + ?Sized> PharmacyService<S> {
    pub fn new(repo: Arc<S>, cfg: DashboardConfig) -> Self { Self { repo, cfg } }

    pub fn store(&self) -> &Arc<S> { &self.repo }

    pub fn config(&self) -> &DashboardConfig { &self.cfg }

    /// Look up a registered profile by uid.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::pharmacy::PharmacyService;
    /// use service::storage::{MemoryRecordStore, write_collection};
    /// use models::{keys, UserProfile};
    ///
    /// let store = Arc::new(MemoryRecordStore::new());
    /// let users = std::collections::HashMap::from([
    ///     ("alice".to_string(), UserProfile { uid: "U1".into(), username: "Alice".into(), ..Default::default() }),
    /// ]);
    /// write_collection(store.as_ref(), keys::REGISTERED_USERS, &users).unwrap();
    ///
    /// let svc = PharmacyService::new(store, Default::default());
    /// assert_eq!(svc.find_profile_by_uid("U1").unwrap().username, "Alice");
    /// assert!(svc.find_profile_by_uid("U9").is_none());
    /// ```
    pub fn find_profile_by_uid(&self, uid: &str) -> Option<UserProfile> {
        lookup::find_profile_by_uid(self.repo.as_ref(), uid)
    }

    pub fn prescriptions_for_uid(&self, uid: &str, limit: Option<usize>) -> Vec<PrescriptionRecord> {
        lookup::prescriptions_for_uid(self.repo.as_ref(), uid, limit)
    }

    pub fn attach_patient_details(&self, prescription: PrescriptionRecord) -> DetailedPrescription {
        lookup::attach_patient_details(self.repo.as_ref(), prescription)
    }

    /// Issue a prescription dated today in the configured display format.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::pharmacy::PharmacyService;
    /// use service::storage::MemoryRecordStore;
    /// use models::PrescriptionKind;
    ///
    /// let svc = PharmacyService::new(Arc::new(MemoryRecordStore::new()), Default::default());
    /// svc.add_prescription("U1", PrescriptionKind::General, "Take X", "Dr. Bob").unwrap();
    /// let latest = svc.prescriptions_for_uid("U1", Some(5));
    /// assert_eq!(latest[0].details, "Take X");
    /// assert!(svc.add_prescription("U1", PrescriptionKind::General, "", "Dr. Bob").is_err());
    /// ```
    #[instrument(skip(self, details), fields(uid = %uid))]
    pub fn add_prescription(
        &self,
        uid: &str,
        kind: PrescriptionKind,
        details: &str,
        prescribing_doctor: &str,
    ) -> Result<PrescriptionRecord, ServiceError> {
        let date = self.today()?;
        mutation::add_prescription_on(self.repo.as_ref(), uid, kind, details, prescribing_doctor, date)
    }

    pub fn current_session(&self, role: Role) -> Option<SessionUser> {
        session::current_session(self.repo.as_ref(), role)
    }

    pub fn patient_dashboard(&self) -> PatientDashboard {
        dashboards::patient_dashboard(self.repo.as_ref())
    }

    /// Doctor view lookup, showing the configured number of recent prescriptions.
    pub fn doctor_fetch_patient(&self, uid: &str) -> PatientLookup {
        dashboards::doctor_fetch_patient(self.repo.as_ref(), uid, self.cfg.recent_limit)
    }

    pub fn doctor_save_prescription(
        &self,
        uid: &str,
        kind: PrescriptionKind,
        details: &str,
    ) -> Result<PrescriptionRecord, ServiceError> {
        let date = self.today()?;
        dashboards::doctor_save_prescription(self.repo.as_ref(), uid, kind, details, date)
    }

    pub fn pharmacist_dashboard(&self) -> Vec<PharmacistLine> {
        dashboards::pharmacist_dashboard(self.repo.as_ref())
    }

    fn today(&self) -> Result<String, ServiceError> {
        mutation::format_date(Local::now().date_naive(), &self.cfg.date_format)
    }
}

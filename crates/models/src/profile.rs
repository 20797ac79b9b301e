use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::keys;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Pharmacist,
}

impl Role {
    /// Key holding this role's logged-in session, if the role has one.
    pub fn session_key(self) -> Option<&'static str> {
        match self {
            Role::Patient => Some(keys::LOGGED_IN_PATIENT),
            Role::Doctor => Some(keys::LOGGED_IN_DOCTOR),
            Role::Pharmacist => None,
        }
    }

    /// Registration route the presentation layer redirects to for this role.
    pub fn registration_route(self) -> &'static str {
        match self {
            Role::Patient => "/register/patient",
            Role::Doctor => "/register/doctor",
            Role::Pharmacist => "/register/pharmacist",
        }
    }
}

/// A registered person, stored under an internal user key in `registeredUsers`.
///
/// Registration forms store text, so `age` may arrive as a numeric string and
/// any text field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_age", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

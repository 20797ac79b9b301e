use serde::{Deserialize, Serialize};

/// Session entry written by the login collaborator under
/// `loggedInDoctor` / `loggedInPatient`. Only `uid` is guaranteed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    #[serde(default)]
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_profile_fields_are_tolerated() -> Result<(), serde_json::Error> {
        let s: SessionUser = serde_json::from_value(json!({
            "uid": "D1", "username": "Dr. Bob", "phone": "555", "role": "doctor"
        }))?;
        assert_eq!(s.uid, "D1");
        assert_eq!(s.username, "Dr. Bob");
        Ok(())
    }
}

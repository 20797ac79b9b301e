use models::{Role, SessionUser};

use crate::storage::{read_collection, RecordStore};

/// The logged-in user for `role`, as written by the login collaborator.
///
/// Pharmacists have no session entry. A malformed or empty entry, or one
/// without a uid, reads as no session.
pub fn current_session<S: RecordStore + ?Sized>(store: &S, role: Role) -> Option<SessionUser> {
    let key = role.session_key()?;
    let session: Option<SessionUser> = read_collection(store, key);
    session.filter(|s| !s.uid.is_empty())
}

use super::hash::hash_password_salted;
use crate::db::{PatientLookupDb, PatientLookupDbError, User};

/// Decide a login attempt.
///
/// Returns the matched user. `None` covers an unknown username and a wrong
/// password alike, the two cases are not distinguished. Storage errors are
/// never reported as a failed login.
pub async fn authenticate(
    db: &(dyn PatientLookupDb + Send + Sync),
    username: &str,
    password: &str,
) -> Result<Option<User>, PatientLookupDbError> {
    let salt = match db.get_user_salt(username).await? {
        Some(salt) => salt,
        None => {
            return Ok(None);
        }
    };
    let hashed = hash_password_salted(password, &salt);
    db.check_user_credentials(username, &hashed).await
}

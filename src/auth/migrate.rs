use super::hash::hash_password_salted;
use super::salt::generate_salt;
use super::HASH_HEX_LENGTH;
use crate::db::{PatientLookupDb, PatientLookupDbError};
use crate::gettext;

/// Rewrite legacy plaintext passwords as salted digests.
///
/// A stored password is legacy iff its length differs from the digest hex
/// length, so rows written by an earlier run are skipped and the pass can be
/// repeated safely. Must run to completion before any login is served.
/// A plaintext password which is already at the digest length is mistaken
/// for a digest and left alone.
pub async fn hash_existing_passwords(
    db: &(dyn PatientLookupDb + Send + Sync),
) -> Result<usize, PatientLookupDbError> {
    let mut migrated = 0;
    for user in db.list_users().await? {
        if user.password.len() == HASH_HEX_LENGTH {
            continue;
        }
        let salt = generate_salt();
        let hashed = hash_password_salted(&user.password, &salt);
        db.update_user_password(user.id, &hashed, &salt).await?;
        migrated += 1;
    }
    if migrated > 0 {
        log::info!(
            "{} {}",
            gettext("Number of legacy passwords hashed:"),
            migrated
        );
    }
    Ok(migrated)
}

#[cfg(test)]
mod tests {
    use super::super::{authenticate, hash_password_salted, SALT_LENGTH};
    use super::*;
    use crate::db::{
        open_and_init_database, PatientLookupDbConfig, PatientLookupSqliteConfig,
    };
    use crate::error::PatientLookupError;
    use std::fs::{create_dir, remove_file};
    use std::path::Path;

    #[proc_macros::async_timeout_test(120s)]
    #[tokio::test(flavor = "multi_thread")]
    async fn test_hash_existing_passwords() -> Result<(), PatientLookupError> {
        let p = Path::new("./test");
        if !p.exists() {
            let re = create_dir("./test");
            assert!(re.is_ok() || p.exists());
        }
        let t = Path::new("./test/migrate.db");
        if t.exists() {
            remove_file(t)?;
        }
        let db = open_and_init_database(&PatientLookupDbConfig::Sqlite(
            PatientLookupSqliteConfig {
                path: String::from("./test/migrate.db"),
            },
        ))
        .await?;
        db.add_user("Alice Test", "alice", "hunter2", "").await?;
        let long_password = "B".repeat(HASH_HEX_LENGTH);
        db.add_user("Boundary Case", "bob", &long_password, "")
            .await?;
        let carol_salt = generate_salt();
        let carol_password = hash_password_salted("secret", &carol_salt);
        db.add_user("Already Hashed", "carol", &carol_password, &carol_salt)
            .await?;
        assert_eq!(hash_existing_passwords(&*db).await?, 1);
        let alice = db.get_user_by_username("alice").await?.unwrap();
        assert_eq!(alice.password.len(), HASH_HEX_LENGTH);
        assert_eq!(alice.salt.len(), SALT_LENGTH);
        assert_ne!(alice.password, "hunter2");
        assert_eq!(
            alice.password,
            hash_password_salted("hunter2", &alice.salt)
        );
        // the second pass performs no writes
        assert_eq!(hash_existing_passwords(&*db).await?, 0);
        let alice2 = db.get_user_by_username("alice").await?.unwrap();
        assert_eq!(alice.password, alice2.password);
        assert_eq!(alice.salt, alice2.salt);
        assert!(authenticate(&*db, "alice", "hunter2").await?.is_some());
        assert!(authenticate(&*db, "alice", "wrong").await?.is_none());
        assert!(authenticate(&*db, "doesnotexist", "x").await?.is_none());
        // a plaintext at the digest length is mistaken for a digest: the row
        // is skipped and the original password no longer works
        let bob = db.get_user_by_username("bob").await?.unwrap();
        assert_eq!(bob.password, long_password);
        assert_eq!(bob.salt, "");
        assert!(authenticate(&*db, "bob", &long_password).await?.is_none());
        // rows hashed before the pass still authenticate
        assert!(authenticate(&*db, "carol", "secret").await?.is_some());
        Ok(())
    }
}

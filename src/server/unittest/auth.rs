use super::UnitTestContext;
use crate::auth::{hash_existing_passwords, HASH_HEX_LENGTH, SALT_LENGTH};
use crate::db::PatientLookupDb;
use crate::error::PatientLookupError;
use crate::ext::json::FromJson;
use crate::server::result::JSONResult;

/// Test the login route against freshly migrated credentials
pub async fn test(ctx: &UnitTestContext) -> Result<(), PatientLookupError> {
    let db = ctx.db();
    db.add_user("Alice Test", "alice", "hunter2", "").await?;
    let long_password = "B".repeat(HASH_HEX_LENGTH);
    db.add_user("Boundary Case", "longpass", &long_password, "")
        .await?;
    assert_eq!(hash_existing_passwords(db).await?, 1);
    let alice = db.get_user_by_username("alice").await?.unwrap();
    assert_eq!(alice.password.len(), HASH_HEX_LENGTH);
    assert_eq!(alice.salt.len(), SALT_LENGTH);
    let re = ctx
        .request_json2(
            "/auth/login",
            &json::object! {
                "username": "alice",
                "password": "hunter2",
            },
        )
        .await?
        .unwrap();
    let result = JSONResult::from_json(&re)?.expect("Failed to login:");
    assert_eq!(result["username"].as_str(), Some("alice"));
    assert_eq!(result["name"].as_str(), Some("Alice Test"));
    let re = ctx
        .request_json2(
            "/auth/login",
            &json::object! {
                "username": "alice",
                "password": "wrong",
            },
        )
        .await?
        .unwrap();
    let result = JSONResult::from_json(&re)?.unwrap_err();
    assert_eq!(result.code, -401);
    // an unknown user gets the same verdict as a wrong password
    let re = ctx
        .request_json2(
            "/auth/login",
            &json::object! {
                "username": "doesnotexist",
                "password": "x",
            },
        )
        .await?
        .unwrap();
    let result = JSONResult::from_json(&re)?.unwrap_err();
    assert_eq!(result.code, -401);
    let re = ctx
        .request_json2(
            "/auth/login",
            &json::object! {
                "password": "hunter2",
            },
        )
        .await?
        .unwrap();
    let result = JSONResult::from_json(&re)?.unwrap_err();
    assert_eq!(result.code, 1);
    let re = ctx
        .request_json2(
            "/auth/login",
            &json::object! {
                "username": "alice",
            },
        )
        .await?
        .unwrap();
    let result = JSONResult::from_json(&re)?.unwrap_err();
    assert_eq!(result.code, 2);
    // a plaintext at the digest length was skipped by the migration, so its
    // original password no longer works
    let re = ctx
        .request_json2(
            "/auth/login",
            &json::object! {
                "username": "longpass",
                "password": long_password.as_str(),
            },
        )
        .await?
        .unwrap();
    let result = JSONResult::from_json(&re)?.unwrap_err();
    assert_eq!(result.code, -401);
    Ok(())
}

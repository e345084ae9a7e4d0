use super::UnitTestContext;
use crate::db::PatientLookupDb;
use crate::error::PatientLookupError;
use crate::ext::json::FromJson;
use crate::server::result::JSONResult;

/// Test the search route. Expects the users seeded by [super::auth::test].
pub async fn test(ctx: &UnitTestContext) -> Result<(), PatientLookupError> {
    let db = ctx.db();
    db.add_patient("Smith", "John", "1 High Street", "1970-01-01", "7", "Flu")
        .await?;
    db.add_patient("Smith", "Anna", "2 Low Road", "1982-06-12", "3", "Cold")
        .await?;
    db.add_patient("Jones", "Mary", "3 Mid Lane", "1993-11-30", "7", "Cough")
        .await?;
    let re = ctx
        .request_json2(
            "/patients/search",
            &json::object! {
                "username": "alice",
                "password": "wrong",
                "surname": "Smith",
            },
        )
        .await?
        .unwrap();
    assert_eq!(JSONResult::from_json(&re)?.unwrap_err().code, -401);
    // surname match ignores case
    let re = ctx
        .request_json2(
            "/patients/search",
            &json::object! {
                "username": "alice",
                "password": "hunter2",
                "surname": "smith",
            },
        )
        .await?
        .unwrap();
    let result = JSONResult::from_json(&re)?.expect("Failed to search:");
    assert_eq!(result["records"].len(), 2);
    for rec in result["records"].members() {
        assert_eq!(rec["surname"].as_str(), Some("Smith"));
    }
    let re = ctx
        .request_json2(
            "/patients/search",
            &json::object! {
                "username": "alice",
                "password": "hunter2",
                "surname": "Nobody",
            },
        )
        .await?
        .unwrap();
    let result = JSONResult::from_json(&re)?.expect("Failed to search:");
    assert_eq!(result["records"].len(), 0);
    let re = ctx
        .request_json2(
            "/patients/search",
            &json::object! {
                "username": "alice",
                "password": "hunter2",
            },
        )
        .await?
        .unwrap();
    assert_eq!(JSONResult::from_json(&re)?.unwrap_err().code, 3);
    Ok(())
}

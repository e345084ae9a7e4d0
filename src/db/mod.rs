pub mod config;
pub mod patient;
pub mod sqlite;
pub mod traits;
pub mod user;

pub use config::check_db_config;
pub use config::PatientLookupDbConfig;
pub use config::PatientLookupSqliteConfig;
pub use patient::Patient;
pub use sqlite::{PatientLookupSqlite, SqliteError};
pub use traits::PatientLookupDb;
pub use user::User;
pub type PatientLookupDbError = Box<dyn std::error::Error + Send + Sync>;

use crate::gettext;


/// Open the database
pub fn open_database(
    cfg: &PatientLookupDbConfig,
) -> Result<Box<dyn PatientLookupDb + Send + Sync>, PatientLookupDbError> {
    if matches!(cfg, PatientLookupDbConfig::Sqlite(_)) {
        return Ok(Box::new(PatientLookupSqlite::new(cfg)?));
    }
    Err(gettext("Unknown database type.").into())
}

/// Open the database and initialize it
pub async fn open_and_init_database(
    cfg: &PatientLookupDbConfig,
) -> Result<Box<dyn PatientLookupDb + Send + Sync>, PatientLookupDbError> {
    let db = open_database(cfg)?;
    db.init().await?;
    Ok(db)
}

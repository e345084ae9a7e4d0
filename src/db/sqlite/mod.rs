pub mod db;
pub mod error;

pub use db::PatientLookupSqlite;
pub use error::SqliteError;

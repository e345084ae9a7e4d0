use super::super::{
    Patient, PatientLookupDb, PatientLookupDbConfig, PatientLookupDbError,
    PatientLookupSqliteConfig, User,
};
use super::SqliteError;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use std::sync::Mutex;

const USERS_TABLE: &'static str = "CREATE TABLE users (
id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
name TEXT NOT NULL,
username TEXT NOT NULL UNIQUE,
password TEXT NOT NULL,
salt TEXT NOT NULL
);";
const PATIENTS_TABLE: &'static str = "CREATE TABLE patients (
id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
surname TEXT NOT NULL,
forename TEXT NOT NULL,
address TEXT NOT NULL,
date_of_birth TEXT NOT NULL,
doctor_id TEXT NOT NULL,
diagnosis TEXT NOT NULL
);";
const VERSION_TABLE: &'static str = "CREATE TABLE version (
id TEXT NOT NULL PRIMARY KEY,
v1 INT,
v2 INT,
v3 INT,
v4 INT
);";
const VERSION: [u8; 4] = [1, 0, 0, 0];

fn row_to_user(row: &Row) -> Result<User, rusqlite::Error> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        username: row.get(2)?,
        password: row.get(3)?,
        salt: row.get(4)?,
    })
}

fn row_to_patient(row: &Row) -> Result<Patient, rusqlite::Error> {
    Ok(Patient {
        id: row.get(0)?,
        surname: row.get(1)?,
        forename: row.get(2)?,
        address: row.get(3)?,
        date_of_birth: row.get(4)?,
        doctor_id: row.get(5)?,
        diagnosis: row.get(6)?,
    })
}

pub struct PatientLookupSqlite {
    db: Mutex<Connection>,
}

impl PatientLookupSqlite {
    fn _new(cfg: &PatientLookupSqliteConfig) -> Result<Self, SqliteError> {
        let con = Connection::open_with_flags(
            &cfg.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_FULL_MUTEX
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        Ok(Self {
            db: Mutex::new(con),
        })
    }

    fn _table_exists(db: &Connection, table: &str) -> Result<bool, SqliteError> {
        Ok(db
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?;",
                [table],
                |row| row.get::<_, String>(0),
            )
            .optional()?
            .is_some())
    }

    fn _init(&self) -> Result<(), SqliteError> {
        let db = self.db.lock().unwrap();
        if Self::_table_exists(&db, "version")? {
            let version: Option<[u8; 4]> = db
                .query_row(
                    "SELECT v1, v2, v3, v4 FROM version WHERE id = 'db';",
                    [],
                    |row| {
                        Ok([row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?])
                    },
                )
                .optional()?;
            if let Some(version) = version {
                if version > VERSION {
                    return Err(SqliteError::DatabaseVersionTooNew);
                }
            }
        } else {
            db.execute(VERSION_TABLE, [])?;
        }
        db.execute(
            "INSERT OR REPLACE INTO version VALUES ('db', ?, ?, ?, ?);",
            params![VERSION[0], VERSION[1], VERSION[2], VERSION[3]],
        )?;
        if !Self::_table_exists(&db, "users")? {
            db.execute(USERS_TABLE, [])?;
        }
        if !Self::_table_exists(&db, "patients")? {
            db.execute(PATIENTS_TABLE, [])?;
        }
        Ok(())
    }

    fn _add_patient(
        &self,
        surname: &str,
        forename: &str,
        address: &str,
        date_of_birth: &str,
        doctor_id: &str,
        diagnosis: &str,
    ) -> Result<Patient, SqliteError> {
        let db = self.db.lock().unwrap();
        db.execute(
            "INSERT INTO patients (surname, forename, address, date_of_birth, doctor_id, diagnosis) VALUES (?, ?, ?, ?, ?, ?);",
            params![surname, forename, address, date_of_birth, doctor_id, diagnosis],
        )?;
        Ok(Patient {
            id: db.last_insert_rowid() as u64,
            surname: surname.to_owned(),
            forename: forename.to_owned(),
            address: address.to_owned(),
            date_of_birth: date_of_birth.to_owned(),
            doctor_id: doctor_id.to_owned(),
            diagnosis: diagnosis.to_owned(),
        })
    }

    fn _add_user(
        &self,
        name: &str,
        username: &str,
        password: &str,
        salt: &str,
    ) -> Result<User, SqliteError> {
        let db = self.db.lock().unwrap();
        let exists = db
            .query_row(
                "SELECT id FROM users WHERE username = ?;",
                [username],
                |row| row.get::<_, u64>(0),
            )
            .optional()?;
        if exists.is_some() {
            return Err(SqliteError::UserNameAlreadyExists);
        }
        db.execute(
            "INSERT INTO users (name, username, password, salt) VALUES (?, ?, ?, ?);",
            params![name, username, password, salt],
        )?;
        Ok(User {
            id: db.last_insert_rowid() as u64,
            name: name.to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
            salt: salt.to_owned(),
        })
    }

    fn _check_user_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, SqliteError> {
        let db = self.db.lock().unwrap();
        Ok(db
            .query_row(
                "SELECT id, name, username, password, salt FROM users WHERE username = ? AND password = ?;",
                [username, password],
                row_to_user,
            )
            .optional()?)
    }

    fn _find_patients_by_surname(&self, surname: &str) -> Result<Vec<Patient>, SqliteError> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT id, surname, forename, address, date_of_birth, doctor_id, diagnosis FROM patients WHERE surname = ? COLLATE NOCASE;",
        )?;
        let mut rows = stmt.query([surname])?;
        let mut patients = Vec::new();
        while let Some(row) = rows.next()? {
            patients.push(row_to_patient(row)?);
        }
        Ok(patients)
    }

    fn _get_user(&self, id: u64) -> Result<Option<User>, SqliteError> {
        let db = self.db.lock().unwrap();
        Ok(db
            .query_row(
                "SELECT id, name, username, password, salt FROM users WHERE id = ?;",
                [id],
                row_to_user,
            )
            .optional()?)
    }

    fn _get_user_by_username(&self, username: &str) -> Result<Option<User>, SqliteError> {
        let db = self.db.lock().unwrap();
        Ok(db
            .query_row(
                "SELECT id, name, username, password, salt FROM users WHERE username = ?;",
                [username],
                row_to_user,
            )
            .optional()?)
    }

    fn _get_user_salt(&self, username: &str) -> Result<Option<String>, SqliteError> {
        let db = self.db.lock().unwrap();
        Ok(db
            .query_row(
                "SELECT salt FROM users WHERE username = ?;",
                [username],
                |row| row.get(0),
            )
            .optional()?)
    }

    fn _list_users(&self) -> Result<Vec<User>, SqliteError> {
        let db = self.db.lock().unwrap();
        // fixed statement, no user input is interpolated
        let mut stmt = db.prepare("SELECT id, name, username, password, salt FROM users;")?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(row_to_user(row)?);
        }
        Ok(users)
    }

    fn _update_user_password(
        &self,
        id: u64,
        password: &str,
        salt: &str,
    ) -> Result<(), SqliteError> {
        let db = self.db.lock().unwrap();
        db.execute(
            "UPDATE users SET password = ?, salt = ? WHERE id = ?;",
            params![password, salt, id],
        )?;
        Ok(())
    }
}

#[async_trait]
impl PatientLookupDb for PatientLookupSqlite {
    fn new<R: AsRef<PatientLookupDbConfig> + ?Sized>(
        cfg: &R,
    ) -> Result<Self, PatientLookupDbError> {
        match cfg.as_ref() {
            PatientLookupDbConfig::Sqlite(cfg) => {
                let db = Self::_new(cfg)?;
                Ok(db)
            }
            _ => Err("Config mismatched.".into()),
        }
    }

    async fn add_patient(
        &self,
        surname: &str,
        forename: &str,
        address: &str,
        date_of_birth: &str,
        doctor_id: &str,
        diagnosis: &str,
    ) -> Result<Patient, PatientLookupDbError> {
        Ok(self._add_patient(
            surname,
            forename,
            address,
            date_of_birth,
            doctor_id,
            diagnosis,
        )?)
    }

    async fn add_user(
        &self,
        name: &str,
        username: &str,
        password: &str,
        salt: &str,
    ) -> Result<User, PatientLookupDbError> {
        Ok(self._add_user(name, username, password, salt)?)
    }

    async fn check_user_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, PatientLookupDbError> {
        Ok(self._check_user_credentials(username, password)?)
    }

    async fn find_patients_by_surname(
        &self,
        surname: &str,
    ) -> Result<Vec<Patient>, PatientLookupDbError> {
        Ok(self._find_patients_by_surname(surname)?)
    }

    async fn get_user(&self, id: u64) -> Result<Option<User>, PatientLookupDbError> {
        Ok(self._get_user(id)?)
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, PatientLookupDbError> {
        Ok(self._get_user_by_username(username)?)
    }

    async fn get_user_salt(
        &self,
        username: &str,
    ) -> Result<Option<String>, PatientLookupDbError> {
        Ok(self._get_user_salt(username)?)
    }

    async fn init(&self) -> Result<(), PatientLookupDbError> {
        Ok(self._init()?)
    }

    async fn list_users(&self) -> Result<Vec<User>, PatientLookupDbError> {
        Ok(self._list_users()?)
    }

    async fn update_user_password(
        &self,
        id: u64,
        password: &str,
        salt: &str,
    ) -> Result<(), PatientLookupDbError> {
        Ok(self._update_user_password(id, password, salt)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatientLookupError;
    use std::fs::{create_dir, remove_file};
    use std::path::Path;

    #[proc_macros::async_timeout_test(120s)]
    #[tokio::test(flavor = "multi_thread")]
    async fn test_sqlite() -> Result<(), PatientLookupError> {
        let p = Path::new("./test");
        if !p.exists() {
            let re = create_dir("./test");
            assert!(re.is_ok() || p.exists());
        }
        let t = Path::new("./test/sqlite.db");
        if t.exists() {
            remove_file(t)?;
        }
        let cfg = PatientLookupDbConfig::Sqlite(PatientLookupSqliteConfig {
            path: String::from("./test/sqlite.db"),
        });
        let db = PatientLookupSqlite::new(&cfg)?;
        db.init().await?;
        // initializing twice is harmless
        db.init().await?;
        let user = db.add_user("Test User", "test", "password", "").await?;
        assert_eq!(user.id, 1);
        assert!(db
            .add_user("Test User 2", "test", "password2", "")
            .await
            .is_err());
        let user2 = db.get_user(1).await?.unwrap();
        assert_eq!(user2.username, "test");
        assert_eq!(user2.password, "password");
        assert!(db.get_user(100).await?.is_none());
        assert_eq!(db.get_user_salt("test").await?, Some(String::from("")));
        assert!(db.get_user_salt("unknown").await?.is_none());
        db.update_user_password(1, "digest", "salt").await?;
        let user3 = db.get_user_by_username("test").await?.unwrap();
        assert_eq!(user3.password, "digest");
        assert_eq!(user3.salt, "salt");
        assert!(db
            .check_user_credentials("test", "digest")
            .await?
            .is_some());
        assert!(db
            .check_user_credentials("test", "password")
            .await?
            .is_none());
        assert_eq!(db.list_users().await?.len(), 1);
        db.add_patient("Smith", "John", "1 High Street", "1970-01-01", "7", "Flu")
            .await?;
        let patients = db.find_patients_by_surname("sMiTh").await?;
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].surname, "Smith");
        assert!(db.find_patients_by_surname("Jones").await?.is_empty());
        Ok(())
    }
}

use super::PatientLookupDbConfig;
use super::PatientLookupDbError;
use super::{Patient, User};

#[async_trait]
pub trait PatientLookupDb {
    /// Create a new instance of database
    /// * `cfg` - The database configuration
    fn new<R: AsRef<PatientLookupDbConfig> + ?Sized>(
        cfg: &R,
    ) -> Result<Self, PatientLookupDbError>
    where
        Self: Sized + Send + Sync;
    /// Add a patient record.
    async fn add_patient(
        &self,
        surname: &str,
        forename: &str,
        address: &str,
        date_of_birth: &str,
        doctor_id: &str,
        diagnosis: &str,
    ) -> Result<Patient, PatientLookupDbError>;
    /// Add a user to database.
    /// * `name` - User name
    /// * `username` - Unique user name
    /// * `password` - Stored password (plaintext or salted digest)
    /// * `salt` - The salt used to hash the password. Empty for plaintext.
    async fn add_user(
        &self,
        name: &str,
        username: &str,
        password: &str,
        salt: &str,
    ) -> Result<User, PatientLookupDbError>;
    /// Find the user matching both username and stored password exactly.
    async fn check_user_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, PatientLookupDbError>;
    /// Patients whose surname matches, ignoring case.
    async fn find_patients_by_surname(
        &self,
        surname: &str,
    ) -> Result<Vec<Patient>, PatientLookupDbError>;
    /// Get a user by ID
    /// * `id`: The user's ID
    async fn get_user(&self, id: u64) -> Result<Option<User>, PatientLookupDbError>;
    /// Get a user by the unique user name
    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, PatientLookupDbError>;
    /// The stored salt of a user. [None] when the user does not exist.
    async fn get_user_salt(
        &self,
        username: &str,
    ) -> Result<Option<String>, PatientLookupDbError>;
    /// Initialize the database (create tables, migrate data, etc.)
    async fn init(&self) -> Result<(), PatientLookupDbError>;
    /// All credential rows. Used only by the startup password migration.
    async fn list_users(&self) -> Result<Vec<User>, PatientLookupDbError>;
    /// Overwrite a user's stored password and salt in place.
    async fn update_user_password(
        &self,
        id: u64,
        password: &str,
        salt: &str,
    ) -> Result<(), PatientLookupDbError>;
}

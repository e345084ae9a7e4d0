use crate::ext::try_err::TryErr;
use crate::gettext;
use json::JsonValue;

pub struct PatientLookupSqliteConfig {
    /// The path of database file
    pub path: String,
}

impl Default for PatientLookupSqliteConfig {
    fn default() -> Self {
        Self {
            #[cfg(feature = "docker")]
            path: "/app/data/data.db".to_string(),
            #[cfg(not(feature = "docker"))]
            path: "patient_lookup.db".to_string(),
        }
    }
}

pub enum PatientLookupDbConfig {
    Sqlite(PatientLookupSqliteConfig),
    #[allow(dead_code)]
    /// No default config is provided
    None,
}

#[derive(Debug)]
pub enum PatientLookupDbConfigError {
    UnknownDbType,
    MissingField(String),
}

impl std::fmt::Display for PatientLookupDbConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDbType => write!(f, "{}", gettext("Unknown database type.")),
            Self::MissingField(s) => write!(f, "{} {}", gettext("Missing field:"), s),
        }
    }
}

impl PatientLookupDbConfig {
    pub fn new(value: &JsonValue) -> Result<Self, PatientLookupDbConfigError> {
        let db_type = value["type"]
            .as_str()
            .try_err(PatientLookupDbConfigError::UnknownDbType)?;
        match db_type {
            "sqlite" => {
                let path =
                    value["path"]
                        .as_str()
                        .try_err(PatientLookupDbConfigError::MissingField(
                            "path".to_string(),
                        ))?;
                Ok(Self::Sqlite(PatientLookupSqliteConfig {
                    path: path.to_string(),
                }))
            }
            _ => Err(PatientLookupDbConfigError::UnknownDbType),
        }
    }
}

impl AsRef<PatientLookupDbConfig> for PatientLookupDbConfig {
    fn as_ref(&self) -> &PatientLookupDbConfig {
        self
    }
}

impl Default for PatientLookupDbConfig {
    fn default() -> Self {
        Self::Sqlite(PatientLookupSqliteConfig::default())
    }
}

pub fn check_db_config(value: &JsonValue) -> bool {
    PatientLookupDbConfig::new(value).is_ok()
}

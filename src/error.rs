#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum PatientLookupError {
    String(String),
    Hyper(hyper::Error),
    HTTP(http::Error),
    IOError(std::io::Error),
    DbError(crate::db::PatientLookupDbError),
    FromUtf8Error(std::string::FromUtf8Error),
    ToStrError(http::header::ToStrError),
    #[cfg(test)]
    JSONError(json::Error),
}

impl std::error::Error for PatientLookupError {}

impl From<&str> for PatientLookupError {
    fn from(p: &str) -> Self {
        Self::String(String::from(p))
    }
}

impl From<http::header::InvalidHeaderValue> for PatientLookupError {
    fn from(v: http::header::InvalidHeaderValue) -> Self {
        Self::HTTP(http::Error::from(v))
    }
}

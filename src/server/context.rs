use super::cors::CorsContext;
use super::result::JSONResult;
use crate::db::PatientLookupDb;
use crate::error::PatientLookupError;
use crate::ext::json::ToJson2;
use hyper::http::response::Builder;
use hyper::Response;
use json::JsonValue;
use std::sync::Arc;

pub struct ServerContext {
    pub cors: CorsContext,
    pub db: Arc<Box<dyn PatientLookupDb + Send + Sync>>,
}

impl ServerContext {
    pub fn new(db: Arc<Box<dyn PatientLookupDb + Send + Sync>>, cors: CorsContext) -> Self {
        Self { cors, db }
    }

    pub fn response_json_result(
        &self,
        builder: Builder,
        re: JSONResult,
    ) -> Result<Response<JsonValue>, PatientLookupError> {
        let builder = match &re {
            Ok(_) => builder,
            Err(err) => {
                if err.code <= -400 && err.code >= -600 {
                    builder.status((-err.code) as u16)
                } else if err.code < 0 {
                    builder.status(500)
                } else if err.code > 0 {
                    builder.status(400)
                } else {
                    builder
                }
            }
        };
        Ok(builder.body(re.to_json2())?)
    }
}

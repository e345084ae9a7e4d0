mod auth;
mod patients;
mod version;

use super::context::ServerContext;
use super::cors::CorsContext;
use super::preclude::HttpBodyType;
use super::route::ServerRoutes;
use crate::db::{
    open_and_init_database, PatientLookupDb, PatientLookupDbConfig, PatientLookupSqliteConfig,
};
use crate::error::PatientLookupError;
use hyper::{Body, Request, Response};
use json::JsonValue;
use std::fs::{create_dir, remove_file};
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;

pub struct UnitTestContext {
    ctx: Arc<ServerContext>,
    routes: ServerRoutes,
}

impl UnitTestContext {
    pub async fn new() -> Result<Self, PatientLookupError> {
        let db = open_and_init_database(&PatientLookupDbConfig::Sqlite(
            PatientLookupSqliteConfig {
                path: String::from("test/server.db"),
            },
        ))
        .await?;
        Ok(Self {
            ctx: Arc::new(ServerContext::new(
                Arc::new(db),
                CorsContext::new(true, vec![], vec![]),
            )),
            routes: ServerRoutes::new(),
        })
    }

    pub fn db(&self) -> &(dyn PatientLookupDb + Send + Sync) {
        &**self.ctx.db
    }

    pub async fn request(
        &self,
        req: Request<Body>,
    ) -> Result<Option<Response<Pin<Box<HttpBodyType>>>>, PatientLookupError> {
        Ok(match self.routes.match_route(&req, &self.ctx) {
            Some(r) => Some(r.response(req).await?),
            None => None,
        })
    }

    pub async fn request_json(
        &self,
        req: Request<Body>,
    ) -> Result<Option<JsonValue>, PatientLookupError> {
        Ok(match self.request(req).await? {
            Some(r) => Some(json::parse(&String::from_utf8_lossy(
                &hyper::body::to_bytes(r.into_body()).await?,
            ))?),
            None => None,
        })
    }

    pub async fn request_json2(
        &self,
        uri: &str,
        params: &JsonValue,
    ) -> Result<Option<JsonValue>, PatientLookupError> {
        let mut par = Vec::new();
        for (key, obj) in params.entries() {
            if let Some(s) = obj.as_str() {
                par.push(format!(
                    "{}={}",
                    urlparse::quote_plus(key, b"")?,
                    urlparse::quote_plus(s, b"")?
                ));
            } else {
                par.push(format!(
                    "{}={}",
                    urlparse::quote_plus(key, b"")?,
                    urlparse::quote_plus(&(obj.dump()), b"")?
                ));
            }
        }
        let par = par.join("&");
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(par))?;
        self.request_json(req).await
    }
}

#[proc_macros::async_timeout_test(120s)]
#[tokio::test(flavor = "multi_thread")]
async fn test() -> Result<(), PatientLookupError> {
    let p = Path::new("./test");
    if !p.exists() {
        let re = create_dir("./test");
        assert!(re.is_ok() || p.exists());
    }
    let t = Path::new("./test/server.db");
    if t.exists() {
        remove_file(t)?;
    }
    let ctx = UnitTestContext::new().await?;
    version::test(&ctx).await?;
    auth::test(&ctx).await?;
    patients::test(&ctx).await?;
    Ok(())
}

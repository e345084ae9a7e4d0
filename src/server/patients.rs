use super::preclude::*;
use crate::auth::authenticate;
use crate::db::PatientLookupDb;
use crate::ext::json::ToJson2;
use crate::ext::try_err::TryErr3;
use crate::gettext;

pub struct PatientSearchContext {
    ctx: Arc<ServerContext>,
}

impl PatientSearchContext {
    pub fn new(ctx: Arc<ServerContext>) -> Self {
        Self { ctx }
    }

    async fn handle(&self, params: &RequestParams) -> JSONResult {
        let username = params
            .get("username")
            .try_err3(1, gettext("No username specified."))?;
        let password = params
            .get("password")
            .try_err3(2, gettext("No password specified."))?;
        let surname = params
            .get("surname")
            .try_err3(3, gettext("No surname specified."))?;
        if authenticate(&**self.ctx.db, username, password)
            .await?
            .is_none()
        {
            return Err(JSONError::from((
                -401,
                gettext("Invalid username or password."),
            )));
        }
        let patients = self.ctx.db.find_patients_by_surname(surname).await?;
        Ok(json::object! {
            "records": JsonValue::Array(patients.iter().map(|p| p.to_json2()).collect()),
        })
    }
}

#[async_trait]
impl ResponseJsonFor<Body> for PatientSearchContext {
    async fn response_json(
        &self,
        mut req: Request<Body>,
    ) -> Result<Response<JsonValue>, PatientLookupError> {
        let builder = {
            filter_http_methods!(
                req,
                json::object! {},
                true,
                self.ctx,
                allow_headers = [CONTENT_TYPE],
                GET,
                OPTIONS,
                POST,
            );
            builder
        };
        let params = req.get_params().await?;
        let re = self.handle(&params).await;
        self.ctx.response_json_result(builder, re)
    }
}

pub struct PatientSearchRoute {
    regex: Regex,
}

impl PatientSearchRoute {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r"^(/+api)?/+patients/+search(/.*)?$").unwrap(),
        }
    }
}

impl MatchRoute<Body, Pin<Box<HttpBodyType>>> for PatientSearchRoute {
    fn match_route(
        &self,
        ctx: &Arc<ServerContext>,
        req: &http::Request<Body>,
    ) -> Option<Box<ResponseForType>> {
        if self.regex.is_match(req.uri().path()) {
            Some(Box::new(PatientSearchContext::new(Arc::clone(ctx))))
        } else {
            None
        }
    }
}

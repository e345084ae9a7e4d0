use super::super::preclude::*;
use crate::auth::authenticate;
use crate::ext::try_err::TryErr3;
use crate::gettext;

pub struct AuthLoginContext {
    ctx: Arc<ServerContext>,
}

impl AuthLoginContext {
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
        match authenticate(&**self.ctx.db, username, password).await? {
            Some(user) => Ok(json::object! {
                "id": user.id,
                "name": user.name.as_str(),
                "username": user.username.as_str(),
            }),
            None => Err(JSONError::from((
                -401,
                gettext("Invalid username or password."),
            ))),
        }
    }
}

#[async_trait]
impl ResponseJsonFor<Body> for AuthLoginContext {
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

pub struct AuthLoginRoute {
    regex: Regex,
}

impl AuthLoginRoute {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r"^(/+api)?/+auth/+login(/.*)?$").unwrap(),
        }
    }
}

impl MatchRoute<Body, Pin<Box<HttpBodyType>>> for AuthLoginRoute {
    fn match_route(
        &self,
        ctx: &Arc<ServerContext>,
        req: &http::Request<Body>,
    ) -> Option<Box<ResponseForType>> {
        if self.regex.is_match(req.uri().path()) {
            Some(Box::new(AuthLoginContext::new(Arc::clone(ctx))))
        } else {
            None
        }
    }
}

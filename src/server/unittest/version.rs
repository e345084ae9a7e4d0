use super::UnitTestContext;
use crate::error::PatientLookupError;
use hyper::{Body, Request};

pub async fn test(ctx: &UnitTestContext) -> Result<(), PatientLookupError> {
    let re = Request::builder().uri("/version").body(Body::empty())?;
    let res = ctx.request_json(re).await?.unwrap();
    assert_eq!(res["version"], json::array![0, 1, 0, 0]);
    Ok(())
}

use super::context::ServerContext;
use super::preclude::{HttpBodyType, HyperBody};
use super::route::ServerRoutes;
use crate::gettext;
use hyper::server::conn::AddrIncoming;
use hyper::server::Server;
use hyper::service::Service;
use hyper::Body;
use hyper::Request;
use hyper::Response;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::task::Context;
use std::task::Poll;

pub struct PatientLookupSvc {
    routes: Arc<ServerRoutes>,
    ctx: Arc<ServerContext>,
}

impl PatientLookupSvc {
    pub fn new(routes: Arc<ServerRoutes>, ctx: Arc<ServerContext>) -> Self {
        Self { routes, ctx }
    }
}

impl Service<Request<Body>> for PatientLookupSvc {
    type Response = Response<Pin<Box<HttpBodyType>>>;
    type Error = hyper::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut Context) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        match self.routes.match_route(&req, &self.ctx) {
            Some(route) => Box::pin(async move {
                match route.response(req).await {
                    Ok(data) => Ok(data),
                    Err(e) => {
                        log::error!("{} {}", gettext("Failed to handle request:"), e);
                        Ok(Response::builder()
                            .status(500)
                            .body::<Pin<Box<HttpBodyType>>>(Box::pin(HyperBody::from(
                                "Internal server error",
                            )))
                            .unwrap())
                    }
                }
            }),
            None => Box::pin(async {
                Ok(Response::builder()
                    .status(404)
                    .body::<Pin<Box<HttpBodyType>>>(Box::pin(HyperBody::from("404 Not Found")))
                    .unwrap())
            }),
        }
    }
}

pub struct PatientLookupMakeSvc {
    routes: Arc<ServerRoutes>,
    ctx: Arc<ServerContext>,
}

impl PatientLookupMakeSvc {
    pub fn new(ctx: Arc<ServerContext>) -> Self {
        Self {
            routes: Arc::new(ServerRoutes::new()),
            ctx,
        }
    }
}

impl<T> Service<T> for PatientLookupMakeSvc {
    type Response = PatientLookupSvc;
    type Error = hyper::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut Context) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _: T) -> Self::Future {
        let routes = Arc::clone(&self.routes);
        let ctx = Arc::clone(&self.ctx);
        let fut = async move { Ok(PatientLookupSvc::new(routes, ctx)) };
        Box::pin(fut)
    }
}

/// Start the server
pub fn start_server(
    addr: &SocketAddr,
    ctx: Arc<ServerContext>,
) -> Result<Server<AddrIncoming, PatientLookupMakeSvc>, hyper::Error> {
    Ok(Server::try_bind(addr)?.serve(PatientLookupMakeSvc::new(ctx)))
}

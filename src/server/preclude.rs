pub use super::body::hyper::HyperBody;
pub use super::context::ServerContext;
pub use super::params::RequestParams;
pub use super::result::{JSONError, JSONResult};
pub use super::route::ResponseForType;
pub use super::traits::{GetRequestParams, MatchRoute, ResponseFor, ResponseJsonFor};
pub use crate::error::PatientLookupError;
pub use hyper::body::HttpBody;
pub use hyper::Body;
pub use hyper::Method;
pub use hyper::Request;
pub use hyper::Response;
pub use json::JsonValue;
pub use proc_macros::filter_http_methods;
pub use regex::Regex;
pub use std::pin::Pin;
pub use std::sync::Arc;

pub type HttpBodyType =
    dyn HttpBody<Data = hyper::body::Bytes, Error = PatientLookupError> + Send;

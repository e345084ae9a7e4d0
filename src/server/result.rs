use crate::ext::json::{FromJson, ToJson, ToJson2};
use crate::gettext;
use json::JsonValue;

#[derive(Clone, Debug)]
/// Error information of a request
pub struct JSONError {
    /// Error code
    pub code: i32,
    /// Error message
    pub msg: String,
    /// The debug information of the error
    pub debug_msg: Option<JsonValue>,
}

impl From<(i32, String)> for JSONError {
    fn from((code, msg): (i32, String)) -> Self {
        Self {
            code,
            msg,
            debug_msg: None,
        }
    }
}

impl<S> From<(i32, &S)> for JSONError
where
    S: AsRef<str> + ?Sized,
{
    fn from((code, msg): (i32, &S)) -> Self {
        Self {
            code,
            msg: msg.as_ref().to_owned(),
            debug_msg: None,
        }
    }
}

impl From<(i32, String, Option<JsonValue>)> for JSONError {
    fn from((code, msg, debug_msg): (i32, String, Option<JsonValue>)) -> Self {
        Self {
            code,
            msg,
            debug_msg,
        }
    }
}

impl From<(i32, String, String)> for JSONError {
    fn from((code, msg, debug_msg): (i32, String, String)) -> Self {
        Self {
            code,
            msg,
            debug_msg: Some(debug_msg.to_json2()),
        }
    }
}

impl From<crate::db::PatientLookupDbError> for JSONError {
    fn from(e: crate::db::PatientLookupDbError) -> Self {
        Self::from((
            -1001,
            format!("{} {}", gettext("Failed to operate the database:"), e),
            format!("{}", e),
        ))
    }
}

pub type JSONResult = Result<JsonValue, JSONError>;

impl ToJson for JSONResult {
    fn to_json(&self) -> Option<JsonValue> {
        Some(match self {
            Self::Ok(v) => json::object! {
                "ok": true,
                "code": 0,
                "result": v.clone(),
            },
            Self::Err(e) => json::object! {
                "ok": false,
                "code": e.code,
                "msg": e.msg.as_str(),
                "debug_msg": e.debug_msg.clone().unwrap_or(JsonValue::Null),
            },
        })
    }
}

impl FromJson for JSONResult {
    type Err = crate::error::PatientLookupError;
    fn from_json<T: ToJson>(v: T) -> Result<Self, Self::Err> {
        let v = match v.to_json() {
            Some(v) => v,
            None => {
                return Err(gettext("No JSON data.").into());
            }
        };
        let ok = match v["ok"].as_bool() {
            Some(ok) => ok,
            None => {
                return Err(gettext("Failed to parse the result.").into());
            }
        };
        if ok {
            Ok(Ok(v["result"].clone()))
        } else {
            let code = match v["code"].as_i32() {
                Some(code) => code,
                None => {
                    return Err(gettext("Failed to parse the result.").into());
                }
            };
            let msg = v["msg"].as_str().unwrap_or("").to_owned();
            let debug_msg = if v["debug_msg"].is_null() {
                None
            } else {
                Some(v["debug_msg"].clone())
            };
            Ok(Err(JSONError {
                code,
                msg,
                debug_msg,
            }))
        }
    }
}

use crate::db::check_db_config;
use crate::gettext;
use crate::server::cors::check_cors_hosts;
use crate::settings::JsonValueType;
use crate::settings::SettingDes;
use json::JsonValue;
use std::net::SocketAddr;
use std::str::FromStr;

fn check_server(obj: &JsonValue) -> bool {
    match obj.as_str() {
        Some(s) => SocketAddr::from_str(s).is_ok(),
        None => false,
    }
}

pub fn get_settings_list() -> Vec<SettingDes> {
    vec![
        SettingDes::new("db", gettext("The database configuration."), JsonValueType::Object, Some(check_db_config)).unwrap(),
        SettingDes::new("server", gettext("The address the server listens on."), JsonValueType::Str, Some(check_server)).unwrap(),
        SettingDes::new("cors-allow-all", gettext("Whether to allow all hosts to access the server across origins."), JsonValueType::Boolean, None).unwrap(),
        SettingDes::new("cors-hosts", gettext("The hosts allowed to access the server across origins."), JsonValueType::Array, Some(check_cors_hosts)).unwrap(),
    ]
}

use crate::db::PatientLookupDbConfig;
use crate::gettext;
use crate::opts::CommandOpts;
use crate::server::cors::{CorsContext, CorsHost};
use crate::settings::SettingStore;
use std::convert::TryFrom;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Clone)]
pub struct OptHelper<'a> {
    opt: &'a CommandOpts,
    settings: &'a SettingStore,
}

impl<'a> OptHelper<'a> {
    pub fn new(opt: &'a CommandOpts, settings: &'a SettingStore) -> Self {
        Self { opt, settings }
    }

    pub fn db(&self) -> PatientLookupDbConfig {
        if let Some(path) = &self.opt.db_path {
            return PatientLookupDbConfig::Sqlite(crate::db::PatientLookupSqliteConfig {
                path: path.clone(),
            });
        }
        match self.settings.get("db") {
            Some(obj) => match PatientLookupDbConfig::new(&obj) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("{} {}", gettext("Invalid database configuration:"), e);
                    PatientLookupDbConfig::default()
                }
            },
            None => PatientLookupDbConfig::default(),
        }
    }

    pub fn server(&self) -> SocketAddr {
        if let Some(server) = self.opt.server {
            return server;
        }
        if self.settings.have_str("server") {
            let s = self.settings.get_str("server").unwrap();
            match SocketAddr::from_str(s.as_str()) {
                Ok(addr) => {
                    return addr;
                }
                Err(e) => {
                    log::warn!("{} {}", gettext("Failed to parse address:"), e);
                }
            }
        }
        #[cfg(feature = "docker")]
        return SocketAddr::from(([0, 0, 0, 0], 8080));
        #[cfg(not(feature = "docker"))]
        return SocketAddr::from(([127, 0, 0, 1], 8080));
    }

    pub fn cors(&self) -> CorsContext {
        let allow_all = if self.settings.have_bool("cors-allow-all") {
            self.settings.get_bool("cors-allow-all").unwrap()
        } else {
            true
        };
        let mut hosts = Vec::new();
        if let Some(list) = self.settings.get("cors-hosts") {
            for m in list.members() {
                if let Some(s) = m.as_str() {
                    match CorsHost::try_from(s) {
                        Ok(host) => {
                            hosts.push(host);
                        }
                        Err(e) => {
                            log::warn!("{} {}", gettext("Failed to parse host:"), e);
                        }
                    }
                }
            }
        }
        CorsContext::new(allow_all, hosts, Vec::new())
    }
}

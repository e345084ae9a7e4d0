#[macro_use]
extern crate async_trait;
#[macro_use]
extern crate cfg_if;
extern crate getopts;
extern crate hex;
extern crate hyper;
extern crate json;
#[macro_use]
extern crate lazy_static;
extern crate rand;
extern crate regex;
extern crate rusqlite;
extern crate sha2;
extern crate tokio;

mod auth;
mod db;
mod error;
/// Used to extend some thirdparty library
mod ext;
mod i18n;
mod log_cfg;
mod opthelper;
mod opts;
mod server;
mod settings;
mod settings_list;
mod utils;

use crate::auth::hash_existing_passwords;
use crate::db::open_and_init_database;
use crate::server::context::ServerContext;
use crate::server::service::start_server;
use i18n::gettext;
use opthelper::OptHelper;
use opts::Command;
use opts::CommandOpts;
use opts::ConfigCommand;
use settings::SettingStore;
use std::sync::Arc;

pub struct Main {
    pub cmd: Option<CommandOpts>,
    pub settings: Option<SettingStore>,
}

impl Main {
    pub fn deal_config_cmd(&mut self) -> i32 {
        let cmd = self.cmd.as_ref().unwrap();
        let subcmd = cmd.config_cmd.as_ref().unwrap();
        match subcmd {
            ConfigCommand::Fix => {
                let s = self.settings.as_ref().unwrap();
                let conf = cmd.config();
                if conf.is_some() {
                    if s.save(conf.as_ref().unwrap()) {
                        0
                    } else {
                        log::error!(
                            "{} {}",
                            gettext("Failed to save config file:"),
                            conf.as_ref().unwrap()
                        );
                        1
                    }
                } else {
                    0
                }
            }
            ConfigCommand::Help => {
                let s = self.settings.as_ref().unwrap();
                println!("{}", gettext("All available settings:"));
                s.basic.print_help();
                0
            }
        }
    }

    pub fn new() -> Self {
        Self {
            cmd: None,
            settings: None,
        }
    }

    /// Open the database, hash any legacy plaintext passwords and serve
    /// requests. The server is not started until the password migration
    /// finished.
    pub async fn server(&self) -> i32 {
        let cmd = self.cmd.as_ref().unwrap();
        let settings = self.settings.as_ref().unwrap();
        let helper = OptHelper::new(cmd, settings);
        let db = match open_and_init_database(&helper.db()).await {
            Ok(db) => Arc::new(db),
            Err(e) => {
                log::error!("{} {}", gettext("Failed to open database:"), e);
                return 1;
            }
        };
        match hash_existing_passwords(&**db).await {
            Ok(_) => {}
            Err(e) => {
                log::error!("{} {}", gettext("Failed to hash existing passwords:"), e);
                return 1;
            }
        }
        let addr = helper.server();
        let server = match start_server(&addr, Arc::new(ServerContext::new(db, helper.cors()))) {
            Ok(server) => server,
            Err(e) => {
                log::error!("{} {}", gettext("Failed to start the server:"), e);
                return 1;
            }
        };
        log::info!("{} {}", gettext("Server listening on"), addr);
        match server.await {
            Ok(_) => 0,
            Err(e) => {
                log::error!("{} {}", gettext("Server error:"), e);
                1
            }
        }
    }

    pub async fn run(&mut self) -> i32 {
        log_cfg::init_default();
        self.cmd = opts::parse_cmd();
        if self.cmd.is_none() {
            return 1;
        }
        let cmd = self.cmd.as_ref().unwrap();
        if cmd.cmd == Command::None {
            return 0;
        }
        if cmd.verbose {
            log_cfg::init_with_level(log::LevelFilter::Debug);
        }
        self.settings = Some(SettingStore::default());
        match cmd.config() {
            Some(conf) => {
                let fix_invalid = cmd.cmd == Command::Config
                    && cmd.config_cmd.as_ref().unwrap() == ConfigCommand::Fix;
                let r = self.settings.as_mut().unwrap().read(&conf, fix_invalid);
                if !r {
                    log::error!("{} {}", gettext("Can not read config file:"), conf.as_str());
                    return 1;
                }
            }
            None => {}
        }
        match cmd.cmd {
            Command::Config => self.deal_config_cmd(),
            Command::Server => self.server().await,
            Command::None => 0,
        }
    }
}

#[tokio::main]
async fn main() {
    let mut m = Main::new();
    std::process::exit(m.run().await);
}

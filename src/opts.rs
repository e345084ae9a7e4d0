use crate::gettext;
use crate::utils::check_file_exists;
use crate::utils::get_exe_path_else_current;
use getopts::Options;
use std::env;
use std::net::SocketAddr;
#[cfg(feature = "docker")]
use std::path::PathBuf;
use std::str::FromStr;

/// Command Line command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Do something for the config
    Config,
    /// Run as a server
    Server,
    /// Already handled when parsing options, just need return 0.
    None,
}

/// Subcommand for config
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigCommand {
    /// Fix the config file
    Fix,
    /// Print all available settings
    Help,
}

impl PartialEq<ConfigCommand> for &ConfigCommand {
    fn eq(&self, other: &ConfigCommand) -> bool {
        other == *self
    }
}

#[derive(Clone, Debug)]
/// Command Line Options
pub struct CommandOpts {
    /// Command
    pub cmd: Command,
    /// Config location
    pub _config: Option<String>,
    /// Config command
    pub config_cmd: Option<ConfigCommand>,
    /// The location of the database file
    pub db_path: Option<String>,
    /// Verbose logging
    pub verbose: bool,
    /// Server listen address
    pub server: Option<SocketAddr>,
}

impl CommandOpts {
    pub fn new(cmd: Command) -> Self {
        Self {
            cmd,
            _config: None,
            config_cmd: None,
            db_path: None,
            verbose: false,
            server: None,
        }
    }

    pub fn new_with_command<S: AsRef<str> + ?Sized>(cmd: &S) -> Option<Self> {
        let cmd = cmd.as_ref();
        if cmd == "config" {
            return Some(CommandOpts::new(Command::Config));
        }
        if cmd == "server" || cmd == "s" {
            return Some(CommandOpts::new(Command::Server));
        }
        None
    }

    pub fn config(&self) -> Option<String> {
        if self._config.is_some() {
            if check_file_exists(&self._config.as_ref().unwrap()) {
                self._config.clone()
            } else {
                log::error!(
                    "{}",
                    gettext("Warning: The specified config file not found.")
                );
                None
            }
        } else {
            #[cfg(feature = "docker")]
            {
                let pb = PathBuf::from("/app/data/config.json");
                if pb.exists() {
                    return Some(String::from(pb.to_str().unwrap()));
                }
            }
            let mut pb = get_exe_path_else_current();
            pb = pb.join("patient_lookup.json");
            if pb.exists() {
                return Some(String::from(pb.to_str().unwrap()));
            }
            if check_file_exists("config.json") {
                return Some(String::from("config.json"));
            }
            None
        }
    }
}

pub fn print_usage(prog: &str, opts: &Options) {
    let brief = format!(
        "{}
{} server/s [options] [address]  {}
{} config fix [options] {}
{} config help [options] {}",
        gettext("Usage:"),
        prog,
        gettext("Run as a server"),
        prog,
        gettext("Fix the config file"),
        prog,
        gettext("Print all available settings"),
    );
    log::error!("{}", opts.usage(brief.as_str()));
}

pub fn parse_cmd() -> Option<CommandOpts> {
    let argv: Vec<String> = env::args().collect();
    let mut opts = Options::new();
    opts.optflag("h", "help", gettext("Print help message."));
    opts.optopt(
        "c",
        "config",
        gettext("The location of config file."),
        "FILE",
    );
    opts.optopt(
        "d",
        "database",
        gettext("The location of the database file."),
        "FILE",
    );
    opts.optflag("v", "verbose", gettext("Verbose logging."));
    let result = match opts.parse(&argv[1..]) {
        Ok(m) => m,
        Err(err) => {
            log::error!("{}", err.to_string());
            return None;
        }
    };
    if result.opt_present("h") || result.free.len() == 0 {
        print_usage(&argv[0], &opts);
        return Some(CommandOpts::new(Command::None));
    }
    let mut re = CommandOpts::new_with_command(&result.free[0]);
    if re.is_none() {
        log::error!("{}", gettext("Unknown command."));
        print_usage(&argv[0], &opts);
        return None;
    }
    match re.as_ref().unwrap().cmd {
        Command::Config => {
            if result.free.len() < 2 {
                log::error!("{}", gettext("No detailed command specified."));
                print_usage(&argv[0], &opts);
                return None;
            }
            let subcmd = &result.free[1];
            re.as_mut().unwrap().config_cmd = if subcmd == "fix" {
                Some(ConfigCommand::Fix)
            } else if subcmd == "help" {
                Some(ConfigCommand::Help)
            } else {
                None
            };
            if re.as_ref().unwrap().config_cmd.is_none() {
                log::error!("{}", gettext("Unknown config subcommand."));
                print_usage(&argv[0], &opts);
                return None;
            }
        }
        Command::Server => {
            if result.free.len() >= 2 {
                let address = &result.free[1];
                match SocketAddr::from_str(address) {
                    Ok(address) => re.as_mut().unwrap().server = Some(address),
                    Err(e) => {
                        log::error!("{} {}", gettext("Failed to parse address:"), e);
                        return None;
                    }
                }
            }
        }
        Command::None => {}
    }
    if result.opt_present("config") {
        re.as_mut().unwrap()._config = Some(result.opt_str("config").unwrap());
    }
    if result.opt_present("database") {
        re.as_mut().unwrap().db_path = Some(result.opt_str("database").unwrap());
    }
    re.as_mut().unwrap().verbose = result.opt_present("verbose");
    re
}

impl Default for CommandOpts {
    cfg_if! {
        if #[cfg(test)] {
            fn default() -> Self {
                let mut re = Self::new(Command::None);
                re.verbose = true;
                re
            }
        } else {
            fn default() -> Self {
                Self::new(Command::None)
            }
        }
    }
}

//! Server configuration
//!
//! The server takes exactly three positional arguments: the web root, the IPv4
//! address to bind and the port. Validation happens in a fixed order and every
//! failure class maps to its own process exit code.

use clap::Parser;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the event log, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "myOwnWebServer.Log";

/// Environment variable overriding [`DEFAULT_LOG_PATH`].
pub const LOG_PATH_ENV: &str = "WEBSERVER_LOG";

pub const USAGE: &str = "Usage: myOwnWebServer <Directory> <IP address> <Port number> \n \
<Directory>  : the folder containing the assets (e.g. C:\\localWebSite) \n \
<IP address> : the IP address the server will listen to (e.g. 192.168.100.23)\n \
<Port number>: the port number the server will listen to (e.g 5300) \n";

/// Raw command-line arguments, before any validation.
#[derive(Parser, Debug)]
#[command(name = "myOwnWebServer")]
#[command(about = "Serves static text and image files over HTTP/1.1", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliArgs {
    /// The folder containing the assets
    #[arg(allow_hyphen_values = true)]
    pub root: String,

    /// The IPv4 address the server will listen to
    #[arg(allow_hyphen_values = true)]
    pub ip: String,

    /// The port number the server will listen to
    #[arg(allow_hyphen_values = true)]
    pub port: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{}", USAGE)]
    Usage,

    #[error("Specified directory does not exist. choose another one")]
    MissingDirectory,

    #[error("IP address is invalid. choose a valid IP address")]
    InvalidIp,

    #[error("Port number is too large. must be below 65,536.")]
    PortTooLarge,
}

impl ConfigError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::Usage => 1,
            ConfigError::MissingDirectory => 2,
            ConfigError::InvalidIp => 3,
            ConfigError::PortTooLarge => 4,
        }
    }
}

/// Validated, immutable server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory under which all servable files live
    pub root: String,
    /// Socket endpoint to bind
    pub addr: SocketAddrV4,
    /// Where the event log is written
    pub log_path: PathBuf,
}

impl ServerConfig {
    /// Parses and validates the process arguments (including the program name).
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = CliArgs::try_parse_from(args).map_err(|_| ConfigError::Usage)?;
        Self::from_cli(cli)
    }

    pub fn from_cli(cli: CliArgs) -> Result<Self, ConfigError> {
        if !valid_root_shape(&cli.root) || !valid_ip_shape(&cli.ip) || !valid_port_shape(&cli.port) {
            return Err(ConfigError::Usage);
        }

        if !Path::new(&cli.root).is_dir() {
            return Err(ConfigError::MissingDirectory);
        }

        let ip: Ipv4Addr = cli.ip.parse().map_err(|_| ConfigError::InvalidIp)?;

        // Digit strings too long for u16 are simply too large.
        let port: u16 = cli.port.parse().map_err(|_| ConfigError::PortTooLarge)?;

        Ok(Self {
            root: cli.root,
            addr: SocketAddrV4::new(ip, port),
            log_path: log_path_from_env(),
        })
    }

    pub fn ip(&self) -> &Ipv4Addr {
        self.addr.ip()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

fn log_path_from_env() -> PathBuf {
    std::env::var(LOG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH))
}

/// At least one non-whitespace character.
fn valid_root_shape(root: &str) -> bool {
    root.chars().any(|c| !c.is_whitespace())
}

/// Four dot-separated groups of one to three digits.
fn valid_ip_shape(ip: &str) -> bool {
    let groups: Vec<&str> = ip.split('.').collect();
    groups.len() == 4
        && groups
            .iter()
            .all(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()))
}

fn valid_port_shape(port: &str) -> bool {
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}

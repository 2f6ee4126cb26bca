use myownwebserver::config::{ConfigError, DEFAULT_LOG_PATH, LOG_PATH_ENV, ServerConfig};
use std::net::Ipv4Addr;
use std::path::PathBuf;

fn existing_dir() -> String {
    std::env::temp_dir().to_string_lossy().into_owned()
}

fn load(root: &str, ip: &str, port: &str) -> Result<ServerConfig, ConfigError> {
    ServerConfig::from_args(["myOwnWebServer", root, ip, port])
}

#[test]
fn test_config_valid_arguments() {
    let root = existing_dir();
    let cfg = load(&root, "127.0.0.1", "5300").unwrap();

    assert_eq!(cfg.root, root);
    assert_eq!(cfg.ip(), &Ipv4Addr::new(127, 0, 0, 1));
    assert_eq!(cfg.port(), 5300);
}

#[test]
fn test_config_port_boundaries() {
    let root = existing_dir();
    assert_eq!(load(&root, "0.0.0.0", "0").unwrap().port(), 0);
    assert_eq!(load(&root, "0.0.0.0", "65535").unwrap().port(), 65535);
}

#[test]
fn test_config_wrong_argument_count() {
    let root = existing_dir();

    let too_few = ServerConfig::from_args(["myOwnWebServer", root.as_str(), "127.0.0.1"]);
    assert_eq!(too_few, Err(ConfigError::Usage));

    let too_many =
        ServerConfig::from_args(["myOwnWebServer", root.as_str(), "127.0.0.1", "80", "extra"]);
    assert_eq!(too_many, Err(ConfigError::Usage));

    let none = ServerConfig::from_args(["myOwnWebServer"]);
    assert_eq!(none, Err(ConfigError::Usage));
}

#[test]
fn test_config_malformed_arguments_exit_with_usage() {
    let root = existing_dir();

    assert_eq!(load("   ", "127.0.0.1", "80"), Err(ConfigError::Usage));
    assert_eq!(load(&root, "localhost", "80"), Err(ConfigError::Usage));
    assert_eq!(load(&root, "127.0.0", "80"), Err(ConfigError::Usage));
    assert_eq!(load(&root, "127.0.0.1", "http"), Err(ConfigError::Usage));
    assert_eq!(load(&root, "127.0.0.1", ""), Err(ConfigError::Usage));
    assert_eq!(ConfigError::Usage.exit_code(), 1);
}

#[test]
fn test_config_usage_text() {
    let text = ConfigError::Usage.to_string();
    assert!(text.starts_with("Usage: myOwnWebServer <Directory> <IP address> <Port number>"));
    assert!(text.contains("<Port number>: the port number the server will listen to"));
}

#[test]
fn test_config_missing_directory() {
    let missing = std::env::temp_dir().join("myownwebserver-does-not-exist-anywhere");
    let result = load(&missing.to_string_lossy(), "127.0.0.1", "80");

    assert_eq!(result, Err(ConfigError::MissingDirectory));
    assert_eq!(ConfigError::MissingDirectory.exit_code(), 2);
}

#[test]
fn test_config_invalid_ip() {
    let result = load(&existing_dir(), "300.1.1.1", "80");

    assert_eq!(result, Err(ConfigError::InvalidIp));
    assert_eq!(ConfigError::InvalidIp.exit_code(), 3);
}

#[test]
fn test_config_port_too_large() {
    let root = existing_dir();

    assert_eq!(load(&root, "127.0.0.1", "65536"), Err(ConfigError::PortTooLarge));
    assert_eq!(
        load(&root, "127.0.0.1", "99999999999999999999999"),
        Err(ConfigError::PortTooLarge)
    );
    assert_eq!(ConfigError::PortTooLarge.exit_code(), 4);
}

#[test]
fn test_config_checks_directory_before_ip_and_port() {
    let missing = std::env::temp_dir().join("myownwebserver-does-not-exist-anywhere");
    let result = load(&missing.to_string_lossy(), "300.1.1.1", "70000");

    assert_eq!(result, Err(ConfigError::MissingDirectory));
}

#[test]
fn test_config_log_path_from_env() {
    let root = existing_dir();

    unsafe {
        std::env::remove_var(LOG_PATH_ENV);
    }
    let cfg = load(&root, "127.0.0.1", "80").unwrap();
    assert_eq!(cfg.log_path, PathBuf::from(DEFAULT_LOG_PATH));

    unsafe {
        std::env::set_var(LOG_PATH_ENV, "/tmp/custom.log");
    }
    let cfg = load(&root, "127.0.0.1", "80").unwrap();
    assert_eq!(cfg.log_path, PathBuf::from("/tmp/custom.log"));
    unsafe {
        std::env::remove_var(LOG_PATH_ENV);
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = load(&existing_dir(), "10.0.0.1", "8080").unwrap();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.addr, cfg2.addr);
}

#[test]
fn test_config_hyphen_prefixed_directories() {
    // Relative to the working directory so the argument itself starts with '-'.
    let existing = format!("-myownwebserver-root-{}", std::process::id());
    std::fs::create_dir_all(&existing).unwrap();

    let result = load(&existing, "127.0.0.1", "80");
    std::fs::remove_dir_all(&existing).ok();

    assert_eq!(result.unwrap().root, existing);
    assert_eq!(
        load("-myownwebserver-no-such-root", "127.0.0.1", "80"),
        Err(ConfigError::MissingDirectory)
    );
    assert_eq!(load("--help", "127.0.0.1", "80"), Err(ConfigError::MissingDirectory));
    assert_eq!(load("--version", "127.0.0.1", "80"), Err(ConfigError::MissingDirectory));
}

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use lazy_static::lazy_static;
use log::warn;
use crate::models::server::ServerConfig;

lazy_static! {
    static ref DEFAULT_SERVERS: Vec<ServerConfig> = vec![
        ServerConfig::new("FFA", "quake1", 27960),
        ServerConfig::new("CTF", "quake2", 27960),
        ServerConfig::new("Q3TA", "quake3", 27960),
    ];
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidJson(String),
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson(e) => write!(f, "Invalid SERVERS_JSON provided: {}", e),
            Self::InvalidPort(name) => write!(f, "Server {} has port 0", name),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,

    // Per-server query budget
    pub query_timeout_ms: u64,

    pub public_dir: PathBuf,
    pub servers: Vec<ServerConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            query_timeout_ms: 1000,
            public_dir: PathBuf::from("public"),
            servers: default_servers(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let servers = servers_from(env::var("SERVERS_JSON").ok().as_deref());

        Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),

            query_timeout_ms: env::var("QUERY_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.query_timeout_ms),

            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),

            servers,
        }
    }

    pub fn bind(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn tiles_dir(&self) -> PathBuf {
        self.public_dir.join("tiles")
    }
}

pub fn default_servers() -> Vec<ServerConfig> {
    DEFAULT_SERVERS.clone()
}

/// Server registry for the raw `SERVERS_JSON` value; a bad value is logged
/// and replaced by the default list.
pub fn servers_from(raw: Option<&str>) -> Vec<ServerConfig> {
    match parse_servers(raw) {
        Ok(servers) => servers,
        Err(e) => {
            warn!("{}. Falling back to defaults.", e);
            default_servers()
        }
    }
}

/// Parses the `SERVERS_JSON` blob. Absent, blank or `null` input selects the
/// default list; anything else must be an array of `{name, host, port}`.
pub fn parse_servers(raw: Option<&str>) -> Result<Vec<ServerConfig>, ConfigError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default_servers()),
        Some(raw) => raw,
    };

    let parsed: Option<Vec<ServerConfig>> =
        serde_json::from_str(raw).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;
    let servers = match parsed {
        Some(servers) => servers,
        None => return Ok(default_servers()),
    };

    if let Some(server) = servers.iter().find(|s| s.port == 0) {
        return Err(ConfigError::InvalidPort(server.name.clone()));
    }
    Ok(servers)
}

// src/query/mod.rs
pub mod quake3;

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use crate::models::server::ServerState;

pub use quake3::Quake3Client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Resolve(String),
    Io(String),
    Timeout(u128),
    InvalidResponse(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve(host) => write!(f, "Could not resolve host {}", host),
            Self::Io(msg) => write!(f, "Network error: {}", msg),
            Self::Timeout(ms) => write!(f, "Request timed out after {}ms", ms),
            Self::InvalidResponse(reason) => write!(f, "Invalid server response: {}", reason),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<std::io::Error> for QueryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Polls a single game server. Implementations make exactly one attempt and
/// must give up once `timeout` has elapsed.
#[async_trait]
pub trait GameQueryClient: Send + Sync {
    async fn query(&self, host: &str, port: u16, timeout: Duration) -> Result<ServerState, QueryError>;
}

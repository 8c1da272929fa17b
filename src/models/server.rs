// src/models/server.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One configured game server. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
    #[serde(rename = "displayPort", default, skip_serializing_if = "Option::is_none")]
    pub display_port: Option<u16>,
}

impl ServerConfig {
    pub fn new(name: &str, host: &str, port: u16) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
            port,
            display_port: None,
        }
    }

    /// Port shown to visitors. A display port of 0 counts as unset.
    pub fn shown_port(&self) -> u16 {
        self.display_port.filter(|p| *p != 0).unwrap_or(self.port)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInfo {
    pub name: String,
    pub score: i32,
    pub ping: u32,
}

/// Raw state reported by a game server in answer to a status query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerState {
    pub name: Option<String>,
    pub map: String,
    pub players: Vec<PlayerInfo>,
    pub max_players: u32,
    pub rules: HashMap<String, String>,
}

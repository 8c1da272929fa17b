// src/models/status.rs
use serde::ser::{Serialize, SerializeMap, Serializer};
use crate::models::server::{ServerConfig, ServerState};
use crate::query::QueryError;

#[derive(Debug, Clone, PartialEq)]
pub struct OnlineStatus {
    pub hostname: String,
    pub map: String,
    pub players: usize,
    pub max_players: u32,
    pub motd: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Online(OnlineStatus),
    Offline { error: String },
}

/// Normalized result of polling one configured server during one request.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRecord {
    pub config: ServerConfig,
    pub outcome: Outcome,
}

impl StatusRecord {
    pub fn online(config: ServerConfig, state: ServerState) -> Self {
        let hostname = state
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| config.name.clone());
        let motd = state.rules.get("g_motd").cloned().unwrap_or_default();

        Self {
            config,
            outcome: Outcome::Online(OnlineStatus {
                hostname,
                map: state.map,
                players: state.players.len(),
                max_players: state.max_players,
                motd,
            }),
        }
    }

    pub fn offline(config: ServerConfig, error: impl Into<String>) -> Self {
        Self {
            config,
            outcome: Outcome::Offline { error: error.into() },
        }
    }

    /// Total mapping from a query result to a record.
    pub fn from_result(config: ServerConfig, result: Result<ServerState, QueryError>) -> Self {
        match result {
            Ok(state) => Self::online(config, state),
            Err(e) => Self::offline(config, e.to_string()),
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self.outcome, Outcome::Online(_))
    }
}

impl Serialize for StatusRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.config.name)?;
        map.serialize_entry("host", &self.config.host)?;
        map.serialize_entry("port", &self.config.port)?;
        if let Some(display_port) = self.config.display_port {
            map.serialize_entry("displayPort", &display_port)?;
        }
        match &self.outcome {
            Outcome::Online(status) => {
                map.serialize_entry("online", &true)?;
                map.serialize_entry("hostname", &status.hostname)?;
                map.serialize_entry("map", &status.map)?;
                map.serialize_entry("players", &status.players)?;
                map.serialize_entry("maxPlayers", &status.max_players)?;
                map.serialize_entry("motd", &status.motd)?;
            }
            Outcome::Offline { error } => {
                map.serialize_entry("online", &false)?;
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}

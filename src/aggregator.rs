// src/aggregator.rs
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info};
use crate::models::server::ServerConfig;
use crate::models::status::{Outcome, StatusRecord};
use crate::query::GameQueryClient;

/// Immutable registry of servers plus the client used to poll them.
pub struct StatusAggregator {
    servers: Arc<[ServerConfig]>,
    client: Arc<dyn GameQueryClient>,
    timeout: Duration,
}

impl StatusAggregator {
    pub fn new(servers: Vec<ServerConfig>, client: Arc<dyn GameQueryClient>, timeout: Duration) -> Self {
        Self {
            servers: servers.into(),
            client,
            timeout,
        }
    }

    pub fn servers(&self) -> &[ServerConfig] {
        &self.servers
    }

    pub async fn query_all(&self) -> Vec<StatusRecord> {
        query_all(self.client.clone(), &self.servers, self.timeout).await
    }
}

/// Polls every server concurrently and returns one record per server in
/// registry order, whatever order the replies arrive in.
pub async fn query_all(
    client: Arc<dyn GameQueryClient>,
    servers: &[ServerConfig],
    timeout: Duration,
) -> Vec<StatusRecord> {
    let handles: Vec<_> = servers
        .iter()
        .cloned()
        .map(|server| {
            let client = client.clone();
            tokio::spawn(async move {
                let result = client.query(&server.host, server.port, timeout).await;
                StatusRecord::from_result(server, result)
            })
        })
        .collect();

    let mut records = Vec::with_capacity(servers.len());
    for (server, handle) in servers.iter().zip(handles) {
        let record = match handle.await {
            Ok(record) => record,
            Err(e) => StatusRecord::offline(server.clone(), format!("query task failed: {}", e)),
        };
        match &record.outcome {
            Outcome::Online(status) => debug!(
                "{} ({}:{}) online: {} on {}/{}",
                server.name, server.host, server.port, status.map, status.players, status.max_players
            ),
            Outcome::Offline { error } => {
                debug!("{} ({}:{}) offline: {}", server.name, server.host, server.port, error)
            }
        }
        records.push(record);
    }

    let online = records.iter().filter(|r| r.is_online()).count();
    info!("Status poll finished: {}/{} online", online, records.len());
    records
}

// src/query/quake3.rs
use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{lookup_host, UdpSocket};
use crate::models::server::{PlayerInfo, ServerState};
use super::{GameQueryClient, QueryError};

const OOB_HEADER: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
const STATUS_RESPONSE: &[u8] = b"statusResponse";

/// Quake III Arena `getstatus` probe over UDP.
#[derive(Debug, Default, Clone, Copy)]
pub struct Quake3Client;

impl Quake3Client {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GameQueryClient for Quake3Client {
    async fn query(&self, host: &str, port: u16, timeout: Duration) -> Result<ServerState, QueryError> {
        match tokio::time::timeout(timeout, get_status(host, port)).await {
            Ok(result) => result,
            Err(_) => {
                debug!("No status response from {}:{} within {:?}", host, port, timeout);
                Err(QueryError::Timeout(timeout.as_millis()))
            }
        }
    }
}

async fn get_status(host: &str, port: u16) -> Result<ServerState, QueryError> {
    let resolved = lookup_host((host, port))
        .await
        .map_err(|_| QueryError::Resolve(host.to_string()))?;
    let server_addr = pick_address(resolved).ok_or_else(|| QueryError::Resolve(host.to_string()))?;

    let bind_addr = match server_addr {
        SocketAddr::V4(_) => "0.0.0.0:0",
        SocketAddr::V6(_) => "[::]:0",
    };
    let socket = UdpSocket::bind(bind_addr).await?;

    let mut packet = OOB_HEADER.to_vec();
    packet.extend_from_slice(b"getstatus\n");
    socket.send_to(&packet, server_addr).await?;
    debug!("Status request sent to {}", server_addr);

    let mut buffer = [0u8; 4096];
    loop {
        let (len, from) = socket.recv_from(&mut buffer).await?;
        if from != server_addr {
            debug!("Ignoring datagram from {} while waiting on {}", from, server_addr);
            continue;
        }
        return parse_status_response(&buffer[..len]);
    }
}

/// Game servers commonly listen on IPv4 only, so an IPv4 address wins over
/// an IPv6 one listed first. Only one address is ever tried.
fn pick_address(addrs: impl IntoIterator<Item = SocketAddr>) -> Option<SocketAddr> {
    let mut first = None;
    for addr in addrs {
        if addr.is_ipv4() {
            return Some(addr);
        }
        first.get_or_insert(addr);
    }
    first
}

/// Parses a `statusResponse` datagram: an info string of `\key\value` pairs
/// followed by one `<score> <ping> "<name>"` line per client.
pub fn parse_status_response(data: &[u8]) -> Result<ServerState, QueryError> {
    let body = data
        .strip_prefix(&OOB_HEADER[..])
        .ok_or_else(|| QueryError::InvalidResponse("missing out-of-band header".to_string()))?;
    let body = body
        .strip_prefix(STATUS_RESPONSE)
        .ok_or_else(|| QueryError::InvalidResponse("not a statusResponse packet".to_string()))?;

    let text = String::from_utf8_lossy(body);
    let mut lines = text.trim_start_matches('\n').lines();

    let info = lines.next().unwrap_or("");
    let rules = parse_info_string(info);

    let mut players = Vec::new();
    for line in lines.filter(|l| !l.trim().is_empty()) {
        match parse_player_line(line) {
            Some(player) if player.ping == 0 => debug!("Skipping bot {}", player.name),
            Some(player) => {
                debug!("Player {} (score {}, ping {})", player.name, player.score, player.ping);
                players.push(player);
            }
            None => debug!("Skipping malformed player line: {:?}", line),
        }
    }

    let name = rules
        .get("sv_hostname")
        .map(|n| strip_colors(n))
        .filter(|n| !n.is_empty());
    let map = rules.get("mapname").cloned().unwrap_or_default();
    let max_players = rules
        .get("sv_maxclients")
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0);

    Ok(ServerState { name, map, players, max_players, rules })
}

fn parse_info_string(info: &str) -> HashMap<String, String> {
    let info = info.strip_prefix('\\').unwrap_or(info);
    let mut parts = info.split('\\');
    let mut rules = HashMap::new();
    while let Some(key) = parts.next() {
        let value = parts.next().unwrap_or("");
        if key.is_empty() {
            continue;
        }
        rules.insert(key.to_string(), value.to_string());
    }
    rules
}

fn parse_player_line(line: &str) -> Option<PlayerInfo> {
    let mut fields = line.splitn(3, ' ');
    let score = fields.next()?.parse().ok()?;
    let ping = fields.next()?.parse().ok()?;
    let name = fields.next()?.trim().trim_matches('"');
    Some(PlayerInfo {
        name: strip_colors(name),
        score,
        ping,
    })
}

/// Removes `^N` colour escapes from a Quake string.
pub fn strip_colors(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '^' {
            if let Some(&next) = chars.peek() {
                if next != '^' {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

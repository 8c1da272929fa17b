// src/utils.rs
use crate::models::server::ServerConfig;

const INTERNAL_HOST_PREFIX: &str = "quake";
const PUBLIC_HOST: &str = "quake.pklan.net";

/// Rewrites a leading internal `quake<digit>` name to the public domain.
/// Only that prefix is replaced; anything after it is kept.
pub fn public_host(host: &str) -> String {
    if let Some(rest) = host.strip_prefix(INTERNAL_HOST_PREFIX) {
        let mut chars = rest.chars();
        if chars.next().map_or(false, |c| c.is_ascii_digit()) {
            return format!("{}{}", PUBLIC_HOST, chars.as_str());
        }
    }
    host.to_string()
}

pub fn display_address(server: &ServerConfig) -> String {
    format!("{}:{}", public_host(&server.host), server.shown_port())
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_internal_quake_hosts() {
        assert_eq!(public_host("quake7"), "quake.pklan.net");
        assert_eq!(public_host("quake1"), "quake.pklan.net");
        assert_eq!(public_host("quake12"), "quake.pklan.net2");
    }

    #[test]
    fn leaves_other_hosts_alone() {
        assert_eq!(public_host("arena.example.com"), "arena.example.com");
        assert_eq!(public_host("quake"), "quake");
        assert_eq!(public_host("quakex"), "quakex");
        assert_eq!(public_host("myquake1"), "myquake1");
    }

    #[test]
    fn display_port_overrides_port() {
        let mut server = ServerConfig::new("FFA", "quake1", 27960);
        assert_eq!(display_address(&server), "quake.pklan.net:27960");

        server.display_port = Some(443);
        assert_eq!(display_address(&server), "quake.pklan.net:443");

        server.display_port = Some(0);
        assert_eq!(display_address(&server), "quake.pklan.net:27960");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
        assert_eq!(escape_html("q3dm17"), "q3dm17");
    }
}

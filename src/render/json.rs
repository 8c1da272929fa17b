// src/render/json.rs
use serde_json::Value;
use crate::models::status::StatusRecord;

/// One JSON object per record, in the same order.
pub fn render(records: &[StatusRecord]) -> Value {
    Value::Array(
        records
            .iter()
            .map(|record| serde_json::to_value(record).unwrap_or(Value::Null))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::aggregator::tests::q3dm17_state;
    use crate::models::server::ServerConfig;

    #[test]
    fn renders_mixed_records_in_order() {
        let records = vec![
            StatusRecord::online(ServerConfig::new("FFA", "quake1", 27960), q3dm17_state()),
            StatusRecord::offline(ServerConfig::new("CTF", "quake2", 27960), "Request timed out after 1000ms"),
        ];

        assert_eq!(
            render(&records),
            json!([
                {
                    "name": "FFA",
                    "host": "quake1",
                    "port": 27960,
                    "online": true,
                    "hostname": "FFA",
                    "map": "q3dm17",
                    "players": 2,
                    "maxPlayers": 8,
                    "motd": ""
                },
                {
                    "name": "CTF",
                    "host": "quake2",
                    "port": 27960,
                    "online": false,
                    "error": "Request timed out after 1000ms"
                }
            ])
        );
    }

    #[test]
    fn includes_display_port_when_configured() {
        let mut config = ServerConfig::new("Duel", "arena.example.com", 27961);
        config.display_port = Some(443);
        let value = render(&[StatusRecord::offline(config, "")]);

        assert_eq!(value[0]["displayPort"], 443);
        assert_eq!(value[0]["error"], "");
    }

    #[test]
    fn empty_input_is_an_empty_array() {
        assert_eq!(render(&[]), json!([]));
    }
}

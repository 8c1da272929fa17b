// src/render/html.rs
use crate::models::status::{Outcome, StatusRecord};
use crate::utils::{display_address, escape_html};

pub const ZEBRA_EVEN: &str = "#1a1a1a";
pub const ZEBRA_ODD: &str = "#111";
pub const ONLINE_BADGE: (&str, &str) = ("ONLINE", "#5dfc5d");
pub const OFFLINE_BADGE: (&str, &str) = ("OFFLINE", "#ff5e5e");
const NO_RESPONSE: &str = "No response";

const PAGE_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>QUAKE:PKLAN:NET</title>
<meta name="viewport" content="width=device-width, initial-scale=1" />
<style>
  body { margin: 0; font-family: 'Verdana', 'Geneva', sans-serif; background-color: #000; color: #f9f9f9; }
  .scanlines {
    position: fixed; inset: 0; pointer-events: none; opacity: 0.35;
    background-image: linear-gradient(rgba(0,0,0,0) 50%, rgba(0,0,0,0.2) 50%);
    background-size: 100% 2px;
  }
  .wrapper {
    max-width: 960px; margin: 40px auto; padding: 16px;
    background: rgba(10, 10, 10, 0.85); border: 4px double #ffae00; box-shadow: 0 0 40px rgba(0,0,0,0.8);
  }
  .logo { text-align: center; margin-bottom: 12px; }
  .logo img { max-width: 220px; height: auto; display: inline-block; }
  h1 {
    font-size: 48px; text-align: center; letter-spacing: 6px; color: #ffae00;
    text-shadow: 0 0 12px rgba(255, 174, 0, 0.7); margin-bottom: 6px;
  }
  .subtitle { text-align: center; font-size: 12px; letter-spacing: 0.6em; color: #aaa; margin-bottom: 24px; }
  table { width: 100%; border-collapse: collapse; }
  td { padding: 12px 16px; border: 1px solid #333; }
  .name { font-weight: bold; letter-spacing: 2px; color: #ffdd57; }
  .addr { font-size: 12px; color: #aaa; }
  .detail { color: #ddd; }
  .state { text-align: center; }
  .badge { display: inline-block; padding: 6px 12px; border: 1px solid #333; color: #111; font-weight: bold; min-width: 90px; }
</style>
</head>
<body>
<div id="bg-layers" aria-hidden="true"></div>
<div class="scanlines"></div>
<div class="wrapper">
  <div class="logo"><img src="/logo.png" alt="QUAKE:PKLAN:NET logo"/></div>
  <h1>QUAKE:PKLAN:NET</h1>
  <div class="subtitle">THE PORTAL OF PERMANENT DEATH</div>
  <table>
    <tbody>
"#;

const PAGE_TABLE_END: &str = r#"    </tbody>
  </table>
</div>
</body>
<script>
  (function(){
    const tiles = "#;

// Tiles drift on a grid behind the table; nothing happens without tiles.
const PAGE_SCRIPT: &str = r#";
    if (!tiles || tiles.length === 0) return;

    const container = document.getElementById('bg-layers');
    container.style.position = 'fixed';
    container.style.inset = '0';
    container.style.zIndex = '-1';
    container.style.pointerEvents = 'none';

    const CELL = 64;

    function buildGrid() {
      container.innerHTML = '';
      const cols = Math.ceil(Math.max(window.innerWidth, 1) / CELL);
      const rows = Math.ceil(Math.max(window.innerHeight, 1) / CELL);
      for (let r = 0; r < rows; r++) {
        for (let c = 0; c < cols; c++) {
          const el = document.createElement('div');
          el.className = 'bg-cell';
          el.style.cssText = 'position:absolute;background-repeat:no-repeat;background-size:cover;opacity:0.98;' +
            'left:' + (c * CELL) + 'px;top:' + (r * CELL) + 'px;width:' + CELL + 'px;height:' + CELL + 'px;';
          el.style.backgroundImage = 'url(' + tiles[Math.floor(Math.random() * tiles.length)] + ')';
          el.dataset.speed = (0.2 + Math.random() * 1.2).toString();
          el.dataset.phase = (Math.random() * Math.PI * 2).toString();
          container.appendChild(el);
        }
      }
    }

    let resizeTimeout = null;
    window.addEventListener('resize', () => {
      clearTimeout(resizeTimeout);
      resizeTimeout = setTimeout(buildGrid, 150);
    });
    buildGrid();

    function tick(now) {
      const t = now / 1000;
      document.querySelectorAll('.bg-cell').forEach((el) => {
        const speed = parseFloat(el.dataset.speed) || 0.6;
        const phase = parseFloat(el.dataset.phase) || 0;
        const x = Math.sin(t * (0.6 + speed * 0.2) + phase) * 6 * speed;
        const y = Math.cos(t * (0.5 + speed * 0.15) + phase) * 4 * speed;
        el.style.transform = 'translate3d(' + x + 'px, ' + y + 'px, 0)';
      });
      requestAnimationFrame(tick);
    }
    requestAnimationFrame(tick);
  })();
</script>
</html>
"#;

pub fn zebra(index: usize) -> &'static str {
    if index % 2 == 0 {
        ZEBRA_EVEN
    } else {
        ZEBRA_ODD
    }
}

pub fn badge(online: bool) -> (&'static str, &'static str) {
    if online {
        ONLINE_BADGE
    } else {
        OFFLINE_BADGE
    }
}

/// Unescaped detail line for a record.
pub fn detail(record: &StatusRecord) -> String {
    match &record.outcome {
        Outcome::Online(status) => format!(
            "{}/{} players — Map: {}",
            status.players, status.max_players, status.map
        ),
        Outcome::Offline { error } if error.is_empty() => NO_RESPONSE.to_string(),
        Outcome::Offline { error } => error.clone(),
    }
}

fn row(index: usize, record: &StatusRecord) -> String {
    let (badge_text, badge_color) = badge(record.is_online());
    format!(
        r#"      <tr style="background:{zebra};">
        <td>
          <div class="name">{name}</div>
          <div class="addr">{addr}</div>
        </td>
        <td class="detail">{detail}</td>
        <td class="state"><span class="badge" style="background:{badge_color};">{badge_text}</span></td>
      </tr>
"#,
        zebra = zebra(index),
        name = escape_html(&record.config.name),
        addr = escape_html(&display_address(&record.config)),
        detail = escape_html(&detail(record)),
        badge_color = badge_color,
        badge_text = badge_text,
    )
}

/// Asset list as a JS literal that cannot terminate the surrounding script tag.
fn tiles_literal(asset_paths: &[String]) -> String {
    serde_json::to_string(asset_paths)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/")
}

/// Renders the full landing page. Output depends only on the arguments.
pub fn render(records: &[StatusRecord], asset_paths: &[String]) -> String {
    let mut out = String::with_capacity(PAGE_HEAD.len() + PAGE_SCRIPT.len() + records.len() * 512);
    out.push_str(PAGE_HEAD);
    for (index, record) in records.iter().enumerate() {
        out.push_str(&row(index, record));
    }
    out.push_str(PAGE_TABLE_END);
    out.push_str(&tiles_literal(asset_paths));
    out.push_str(PAGE_SCRIPT);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::tests::q3dm17_state;
    use crate::models::server::ServerConfig;

    fn rows(html: &str) -> Vec<&str> {
        html.split("<tr ").skip(1).collect()
    }

    fn sample() -> Vec<StatusRecord> {
        vec![
            StatusRecord::online(ServerConfig::new("FFA", "quake1", 27960), q3dm17_state()),
            StatusRecord::offline(ServerConfig::new("CTF", "quake2", 27960), "Request timed out after 1000ms"),
            StatusRecord::offline(ServerConfig::new("Q3TA", "quake3", 27960), ""),
            StatusRecord::online(ServerConfig::new("Duel", "arena.example.com", 27961), q3dm17_state()),
        ]
    }

    #[test]
    fn one_row_per_record_in_order() {
        let html = render(&sample(), &[]);
        let rows = rows(&html);

        assert_eq!(rows.len(), 4);
        for (row, name) in rows.iter().zip(["FFA", "CTF", "Q3TA", "Duel"]) {
            assert!(row.contains(&format!(r#"<div class="name">{}</div>"#, name)));
        }
    }

    #[test]
    fn zebra_alternates_by_parity() {
        let html = render(&sample(), &[]);
        let rows = rows(&html);

        assert!(rows[0].starts_with(&format!(r#"style="background:{};""#, ZEBRA_EVEN)));
        assert!(rows[1].starts_with(&format!(r#"style="background:{};""#, ZEBRA_ODD)));
        assert!(rows[2].starts_with(&format!(r#"style="background:{};""#, ZEBRA_EVEN)));
        assert!(rows[3].starts_with(&format!(r#"style="background:{};""#, ZEBRA_ODD)));
        assert_ne!(ZEBRA_EVEN, ZEBRA_ODD);
    }

    #[test]
    fn badges_and_details_follow_status() {
        let html = render(&sample(), &[]);
        let rows = rows(&html);

        assert!(rows[0].contains("background:#5dfc5d;\">ONLINE</span>"));
        assert!(rows[0].contains("2/8 players — Map: q3dm17"));
        assert!(rows[1].contains("background:#ff5e5e;\">OFFLINE</span>"));
        assert!(rows[1].contains("Request timed out after 1000ms"));
        assert!(rows[2].contains("No response"));
    }

    #[test]
    fn hosts_are_shown_publicly() {
        let html = render(&sample(), &[]);
        let rows = rows(&html);

        assert!(rows[0].contains("quake.pklan.net:27960"));
        assert!(rows[3].contains("arena.example.com:27961"));
        assert!(!html.contains("quake1:"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let tiles = vec!["/tiles/a.png".to_string(), "/tiles/b.jpg".to_string()];
        assert_eq!(render(&sample(), &tiles), render(&sample(), &tiles));
    }

    #[test]
    fn embeds_asset_list() {
        let tiles = vec!["/tiles/a.png".to_string(), "/tiles/</script>.gif".to_string()];
        let html = render(&[], &tiles);

        assert!(html.contains(r#"const tiles = ["/tiles/a.png","/tiles/<\/script>.gif"];"#));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn empty_assets_leave_the_table_untouched() {
        let with_tiles = render(&sample(), &["/tiles/a.png".to_string()]);
        let without = render(&sample(), &[]);

        assert!(without.contains("const tiles = [];"));
        let table = |html: &str| html.split("<script>").next().unwrap_or("").to_string();
        assert_eq!(table(&with_tiles), table(&without));
    }

    #[test]
    fn server_text_is_escaped() {
        let records = vec![StatusRecord::offline(
            ServerConfig::new("<FFA>", "quake1", 27960),
            "bad <reply> & more",
        )];
        let html = render(&records, &[]);

        assert!(html.contains("&lt;FFA&gt;"));
        assert!(html.contains("bad &lt;reply&gt; &amp; more"));
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}

//! Web server command.

use console::style;

use crate::config::Settings;
use crate::repository::bootstrap;

/// Start the flag ingestion server.
///
/// The schema bootstrap runs before the listener binds; a broken store is
/// a startup failure, not a request-time surprise.
pub async fn cmd_serve(settings: &Settings, bind: Option<&str>) -> anyhow::Result<()> {
    // Refuse to start without the shared secret
    settings.require_api_key()?;

    let (host, port) = match bind {
        Some(bind) => parse_bind_address(bind, settings.port),
        None => ("0.0.0.0".to_string(), settings.port),
    };

    println!("{} Preparing flag database...", style("→").cyan());
    match bootstrap::ensure_schema(&settings.database_path) {
        Ok(()) => {
            println!("  {} Database ready", style("✓").green());
        }
        Err(e) => {
            eprintln!("  {} Schema bootstrap failed: {}", style("✗").red(), e);
            return Err(anyhow::anyhow!("database bootstrap failed: {}", e));
        }
    }

    println!(
        "{} Starting flag service at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8080" -> 0.0.0.0:8080
/// - Just a host: "127.0.0.1" -> 127.0.0.1:<default>
/// - Host and port: "127.0.0.1:8080" -> 127.0.0.1:8080
fn parse_bind_address(bind: &str, default_port: u16) -> (String, u16) {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return ("0.0.0.0".to_string(), port);
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return (host.to_string(), port);
        }
    }

    // Must be just a host, use the configured port
    (bind.to_string(), default_port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_address() {
        assert_eq!(parse_bind_address("8080", 5000), ("0.0.0.0".into(), 8080));
        assert_eq!(
            parse_bind_address("127.0.0.1", 5000),
            ("127.0.0.1".into(), 5000)
        );
        assert_eq!(
            parse_bind_address("10.0.0.5:9000", 5000),
            ("10.0.0.5".into(), 9000)
        );
    }
}

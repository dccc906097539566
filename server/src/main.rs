//! Campus Server – Einstiegspunkt
//!
//! Laedt die Konfiguration, initialisiert das Logging und startet den Server.

use anyhow::Result;
use campus_observability::logging_initialisieren;
use campus_server::{config::ServerConfig, Server};

#[tokio::main]
async fn main() -> Result<()> {
    // Konfigurationsdatei-Pfad aus Umgebungsvariable oder Standard
    let config_pfad = std::env::var("CAMPUS_CONFIG").unwrap_or_else(|_| "config.toml".into());

    // Konfiguration laden (Standardwerte falls Datei fehlt)
    let (config, gefunden) = ServerConfig::laden(&config_pfad)?;

    logging_initialisieren(&config.logging.level, &config.logging.format);

    if !gefunden {
        tracing::warn!(
            pfad = %config_pfad,
            "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
        );
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_pfad,
        "Campus Server wird initialisiert"
    );

    Server::neu(config).starten().await
}

//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass der Server ohne Konfigurationsdatei
//! lauffaehig ist.

use std::path::PathBuf;
use std::time::Duration;

use campus_chat::SEND_QUEUE_GROESSE;
use campus_db::DatabaseConfig;
use campus_flashcards::CursorGrenzen;
use serde::{Deserialize, Serialize};

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Allgemeine Server-Einstellungen
    pub server: ServerEinstellungen,
    /// Netzwerk-Einstellungen
    pub netzwerk: NetzwerkEinstellungen,
    /// Datenbank-Einstellungen
    pub datenbank: DatenbankEinstellungen,
    /// Chat-Einstellungen
    pub chat: ChatEinstellungen,
    /// Karteikarten-Einstellungen
    pub karteikarten: KarteikartenEinstellungen,
    /// Statische Dateien (CSS, JavaScript)
    pub statisch: StatischEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

/// Allgemeine Server-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerEinstellungen {
    /// Anzeigename des Servers
    pub name: String,
}

impl Default for ServerEinstellungen {
    fn default() -> Self {
        Self {
            name: "Campus".into(),
        }
    }
}

/// Netzwerk-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetzwerkEinstellungen {
    /// Bind-Adresse fuer HTTP und WebSocket
    pub bind_adresse: String,
    /// HTTP-Port
    pub port: u16,
}

impl Default for NetzwerkEinstellungen {
    fn default() -> Self {
        Self {
            bind_adresse: "127.0.0.1".into(),
            port: 8000,
        }
    }
}

/// Datenbank-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatenbankEinstellungen {
    /// Verbindungs-URL
    pub url: String,
    /// Maximale Verbindungspool-Groesse
    pub max_verbindungen: u32,
    /// WAL-Journal aktivieren
    pub wal: bool,
}

impl Default for DatenbankEinstellungen {
    fn default() -> Self {
        Self {
            url: "sqlite://data/campus.db".into(),
            max_verbindungen: 5,
            wal: true,
        }
    }
}

impl From<&DatenbankEinstellungen> for DatabaseConfig {
    fn from(e: &DatenbankEinstellungen) -> Self {
        Self {
            url: e.url.clone(),
            max_verbindungen: e.max_verbindungen,
            sqlite_wal: e.wal,
        }
    }
}

/// Chat-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatEinstellungen {
    /// Ausgehende Nachrichten pro Verbindung bevor der Sender wartet
    pub queue_groesse: usize,
}

impl Default for ChatEinstellungen {
    fn default() -> Self {
        Self {
            queue_groesse: SEND_QUEUE_GROESSE,
        }
    }
}

/// Karteikarten-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KarteikartenEinstellungen {
    /// Hoechstzahl gleichzeitig gehaltener Blaetter-Cursor
    pub max_sitzungen: usize,
    /// Sekunden ohne Blaettern bis ein Cursor verworfen wird
    pub cursor_ttl_sekunden: u64,
}

impl Default for KarteikartenEinstellungen {
    fn default() -> Self {
        let grenzen = CursorGrenzen::default();
        Self {
            max_sitzungen: grenzen.max_sitzungen,
            cursor_ttl_sekunden: grenzen.max_alter.as_secs(),
        }
    }
}

impl From<&KarteikartenEinstellungen> for CursorGrenzen {
    fn from(e: &KarteikartenEinstellungen) -> Self {
        Self {
            max_sitzungen: e.max_sitzungen,
            max_alter: Duration::from_secs(e.cursor_ttl_sekunden),
        }
    }
}

/// Statische Dateien
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatischEinstellungen {
    /// Verzeichnis fuer `/static` (fehlt es, wird `/static` nicht bedient)
    pub verzeichnis: PathBuf,
}

impl Default for StatischEinstellungen {
    fn default() -> Self {
        Self {
            verzeichnis: PathBuf::from("static"),
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    ///
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert;
    /// das zweite Feld ist dann `false`. Das Logging laeuft zu diesem
    /// Zeitpunkt noch nicht, der Aufrufer meldet die fehlende Datei selbst.
    pub fn laden(pfad: &str) -> anyhow::Result<(Self, bool)> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => {
                let config: Self = toml::from_str(&inhalt)
                    .map_err(|e| anyhow::anyhow!("Konfigurationsfehler in '{pfad}': {e}"))?;
                Ok((config, true))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok((Self::default(), false)),
            Err(e) => Err(anyhow::anyhow!(
                "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
            )),
        }
    }

    /// Gibt die vollstaendige Bind-Adresse fuer HTTP zurueck
    pub fn bind_adresse(&self) -> String {
        format!("{}:{}", self.netzwerk.bind_adresse, self.netzwerk.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn standard_config_ist_valide() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.server.name, "Campus");
        assert_eq!(cfg.netzwerk.port, 8000);
        assert_eq!(cfg.datenbank.url, "sqlite://data/campus.db");
        assert_eq!(cfg.chat.queue_groesse, 64);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn bind_adresse() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_adresse(), "127.0.0.1:8000");
    }

    #[test]
    fn config_aus_toml_string() {
        let toml = r#"
            [server]
            name = "Mein Campus"

            [netzwerk]
            port = 9000

            [datenbank]
            wal = false
        "#;
        let cfg: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.server.name, "Mein Campus");
        assert_eq!(cfg.netzwerk.port, 9000);
        assert!(!cfg.datenbank.wal);
        // Nicht angegebene Felder behalten Standardwerte
        assert_eq!(cfg.netzwerk.bind_adresse, "127.0.0.1");
        assert_eq!(cfg.datenbank.max_verbindungen, 5);
    }

    #[test]
    fn datenbank_einstellungen_umwandeln() {
        let cfg = ServerConfig::default();
        let db: DatabaseConfig = (&cfg.datenbank).into();
        assert_eq!(db.url, cfg.datenbank.url);
        assert!(db.sqlite_wal);
    }

    #[test]
    fn laden_aus_datei() {
        let mut datei = tempfile::NamedTempFile::new().unwrap();
        writeln!(datei, "[chat]\nqueue_groesse = 8\n\n[logging]\nformat = \"json\"").unwrap();

        let (cfg, gefunden) = ServerConfig::laden(datei.path().to_str().unwrap()).unwrap();
        assert!(gefunden);
        assert_eq!(cfg.chat.queue_groesse, 8);
        assert_eq!(cfg.logging.format, "json");
    }

    #[test]
    fn fehlende_datei_ergibt_standardwerte() {
        let verzeichnis = tempfile::tempdir().unwrap();
        let pfad = verzeichnis.path().join("gibt-es-nicht.toml");
        let (cfg, gefunden) = ServerConfig::laden(pfad.to_str().unwrap()).unwrap();
        assert!(!gefunden);
        assert_eq!(cfg.netzwerk.port, 8000);
    }

    #[test]
    fn karteikarten_grenzen_aus_toml() {
        let cfg: ServerConfig =
            toml::from_str("[karteikarten]\nmax_sitzungen = 50\ncursor_ttl_sekunden = 90").unwrap();
        let grenzen: CursorGrenzen = (&cfg.karteikarten).into();
        assert_eq!(grenzen.max_sitzungen, 50);
        assert_eq!(grenzen.max_alter, Duration::from_secs(90));

        let standard: CursorGrenzen = (&ServerConfig::default().karteikarten).into();
        assert_eq!(standard, CursorGrenzen::default());
    }

    #[test]
    fn kaputte_datei_ist_fehler() {
        let mut datei = tempfile::NamedTempFile::new().unwrap();
        writeln!(datei, "[netzwerk]\nport = \"kein port\"").unwrap();
        assert!(ServerConfig::laden(datei.path().to_str().unwrap()).is_err());
    }
}

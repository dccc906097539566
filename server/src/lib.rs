//! campus-server – Bibliotheks-Root
//!
//! Deklariert alle Server-Module und stellt den oeffentlichen Einstiegspunkt
//! fuer Integrationstests bereit.

pub mod config;

use std::future::Future;

use anyhow::Result;
use axum::Router;
use campus_db::SqliteDb;
use campus_observability::CampusMetrics;
use campus_web::AppState;
use config::ServerConfig;
use tokio::net::TcpListener;

/// Haelt den laufenden Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Startet den Server und laeuft bis zum Shutdown-Signal
    ///
    /// Reihenfolge:
    /// 1. Datenbank oeffnen und migrieren
    /// 2. Router aufbauen
    /// 3. HTTP-Listener binden
    /// 4. Auf Ctrl-C warten, laufende Anfragen noch abschliessen
    pub async fn starten(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_adresse()).await?;
        self.bedienen(listener, shutdown_signal()).await
    }

    /// Bedient Anfragen auf einem bereits gebundenen Listener
    pub async fn bedienen<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.anwendung().await?;

        tracing::info!(
            server_name = %self.config.server.name,
            adresse = %listener.local_addr()?,
            "Server laeuft"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server beendet");
        Ok(())
    }

    /// Oeffnet die Datenbank und baut die vollstaendige Anwendung
    pub async fn anwendung(&self) -> Result<Router> {
        tracing::info!(url = %self.config.datenbank.url, "Datenbankverbindung wird hergestellt");
        let db = SqliteDb::oeffnen(&(&self.config.datenbank).into()).await?;

        let metriken = CampusMetrics::neu()?;
        let state = AppState::neu(db, self.config.chat.queue_groesse, metriken)
            .mit_cursor_grenzen((&self.config.karteikarten).into());

        let verzeichnis = &self.config.statisch.verzeichnis;
        let statisch = if verzeichnis.is_dir() {
            Some(verzeichnis.as_path())
        } else {
            tracing::warn!(
                verzeichnis = %verzeichnis.display(),
                "Verzeichnis fuer statische Dateien fehlt, /static wird nicht bedient"
            );
            None
        };

        Ok(campus_web::app(state, statisch))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Ctrl-C-Handler konnte nicht installiert werden: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown-Signal empfangen, Server wird beendet");
}

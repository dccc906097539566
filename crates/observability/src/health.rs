//! Health-Check-Endpunkt fuer Campus
//!
//! Endpoint: `GET /health`
//! Response: JSON mit Status, Version, Uptime und Speicher-Erreichbarkeit

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

/// Status des Health-Checks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Antwort des Health-Check-Endpunkts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub db_connected: bool,
}

/// Typ-Alias fuer eine geboxte Send-Future
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Funktor-Typ: prueft ob der Speicher erreichbar ist
pub type SpeicherPruefung = Arc<dyn Fn() -> BoxFuture<'static, bool> + Send + Sync>;

/// Geteilter Zustand fuer den Health-Check-Handler
#[derive(Clone)]
pub struct HealthState {
    start_time: Arc<Instant>,
    pruefung: SpeicherPruefung,
}

impl HealthState {
    pub fn neu(pruefung: SpeicherPruefung) -> Self {
        Self {
            start_time: Arc::new(Instant::now()),
            pruefung,
        }
    }

    /// Baut den State aus einer async Pruef-Funktion
    pub fn mit_pruefung<F, Fut>(pruefung: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        let pruefung: SpeicherPruefung =
            Arc::new(move || Box::pin(pruefung()) as BoxFuture<'static, bool>);
        Self::neu(pruefung)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Fuehrt die Speicher-Pruefung aus und baut die Antwort
    pub async fn pruefen(&self) -> HealthResponse {
        let db_connected = (self.pruefung)().await;
        HealthResponse {
            status: if db_connected {
                HealthStatus::Healthy
            } else {
                HealthStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.uptime_seconds(),
            db_connected,
        }
    }
}

/// Axum-Router fuer den `/health`-Endpunkt
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// `GET /health` – gibt den Serverstatus zurueck
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    // 200 auch bei degraded (Probe soll nicht failen)
    (StatusCode::OK, Json(state.pruefen().await))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(ergebnis: bool) -> HealthState {
        HealthState::mit_pruefung(move || async move { ergebnis })
    }

    #[tokio::test]
    async fn gesund_wenn_speicher_erreichbar() {
        let state = state(true);
        let antwort = state.pruefen().await;
        assert_eq!(antwort.status, HealthStatus::Healthy);
        assert!(antwort.db_connected);
        assert!(antwort.uptime_seconds < 5);
    }

    #[tokio::test]
    async fn degradiert_wenn_speicher_fehlt() {
        let state = state(false);
        let antwort = state.pruefen().await;
        assert_eq!(antwort.status, HealthStatus::Degraded);
        assert!(!antwort.db_connected);
    }

    #[test]
    fn health_response_serialisierung() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "0.1.0".to_string(),
            uptime_seconds: 3600,
            db_connected: true,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"uptime_seconds\":3600"));
        assert!(json.contains("\"db_connected\":true"));
    }
}

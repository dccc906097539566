//! Prometheus-kompatible Metriken fuer Campus
//!
//! Registrierte Metriken:
//! - `campus_chat_connections` – Gauge: offene WebSocket-Verbindungen (bereich)
//! - `campus_chat_messages_total` – Counter: empfangene Chat-Nachrichten (bereich)
//! - `campus_flashcards_saved_total` – Counter: gespeicherte Karteikarten
//! - `campus_forum_posts_total` – Counter: neue Foren und Kommentare (art)
//! - `campus_http_requests_total` – Counter: HTTP-Anfragen (method, status)
//! - `campus_http_request_duration_seconds` – Histogram: HTTP-Antwortzeit (method)

use anyhow::Result;
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGaugeVec, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;

/// Alle Campus-Prometheus-Metriken
#[derive(Clone)]
pub struct CampusMetrics {
    pub registry: Arc<Registry>,

    // Chat
    pub chat_connections: IntGaugeVec,
    pub chat_messages_total: IntCounterVec,

    // Inhalte
    pub flashcards_saved_total: IntCounter,
    pub forum_posts_total: IntCounterVec,

    // HTTP
    pub http_requests_total: IntCounterVec,
    pub http_request_duration_seconds: HistogramVec,
}

impl CampusMetrics {
    /// Erstellt und registriert alle Metriken in einer neuen Registry
    pub fn neu() -> Result<Self> {
        let registry = Registry::new();

        let chat_connections = IntGaugeVec::new(
            Opts::new("campus_chat_connections", "Offene WebSocket-Verbindungen"),
            &["bereich"],
        )?;
        registry.register(Box::new(chat_connections.clone()))?;

        let chat_messages_total = IntCounterVec::new(
            Opts::new("campus_chat_messages_total", "Empfangene Chat-Nachrichten"),
            &["bereich"],
        )?;
        registry.register(Box::new(chat_messages_total.clone()))?;

        let flashcards_saved_total = IntCounter::with_opts(Opts::new(
            "campus_flashcards_saved_total",
            "Gespeicherte Karteikarten",
        ))?;
        registry.register(Box::new(flashcards_saved_total.clone()))?;

        let forum_posts_total = IntCounterVec::new(
            Opts::new("campus_forum_posts_total", "Neue Foren und Kommentare"),
            &["art"],
        )?;
        registry.register(Box::new(forum_posts_total.clone()))?;

        let http_requests_total = IntCounterVec::new(
            Opts::new("campus_http_requests_total", "Gesamtanzahl HTTP-Anfragen"),
            &["method", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "campus_http_request_duration_seconds",
                "HTTP-Antwortzeit in Sekunden",
            )
            .buckets(vec![
                0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5,
            ]),
            &["method"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            chat_connections,
            chat_messages_total,
            flashcards_saved_total,
            forum_posts_total,
            http_requests_total,
            http_request_duration_seconds,
        })
    }

    /// Exportiert alle Metriken im Prometheus-Textformat
    pub fn exportieren(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Axum-Router fuer den `/metrics`-Endpunkt
pub fn metrics_router(metriken: CampusMetrics) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metriken)
}

async fn metrics_handler(State(metriken): State<CampusMetrics>) -> impl IntoResponse {
    match metriken.exportieren() {
        Ok(text) => (
            axum::http::StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Metriken-Export fehlgeschlagen: {err}");
            axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_verbindungen_setzen() {
        let metriken = CampusMetrics::neu().unwrap();
        metriken.chat_connections.with_label_values(&["public"]).set(3);
        assert_eq!(metriken.chat_connections.with_label_values(&["public"]).get(), 3);
    }

    #[test]
    fn counter_inkrementieren() {
        let metriken = CampusMetrics::neu().unwrap();
        metriken.flashcards_saved_total.inc();
        metriken.flashcards_saved_total.inc_by(4);
        assert_eq!(metriken.flashcards_saved_total.get(), 5);
    }

    #[test]
    fn metriken_export_prometheus_format() {
        let metriken = CampusMetrics::neu().unwrap();
        metriken.chat_messages_total.with_label_values(&["private"]).inc();
        metriken.forum_posts_total.with_label_values(&["kommentar"]).inc();

        let output = metriken.exportieren().unwrap();
        assert!(output.contains("campus_chat_messages_total"));
        assert!(output.contains("campus_forum_posts_total"));
        assert!(output.contains("campus_flashcards_saved_total"));
        assert!(output.contains("# HELP"));
        assert!(output.contains("# TYPE"));
    }
}

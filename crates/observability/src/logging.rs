//! Structured Logging Setup via tracing-subscriber
//!
//! Konfigurierbar per Umgebungsvariable:
//! - `CAMPUS_LOG_LEVEL`: Log-Level oder Filter-Direktive, ueberschreibt die Konfiguration
//! - `CAMPUS_LOG_FORMAT`: Format (text/json), ueberschreibt die Konfiguration

use tracing_subscriber::{fmt, EnvFilter};

/// Initialisiert das Logging-System.
///
/// Umgebungsvariablen haben Vorrang vor den uebergebenen Werten. Ein
/// unbrauchbarer Filter faellt auf `info` zurueck, ein unbekanntes Format
/// auf `text`; beides wird nach dem Start als Warnung gemeldet.
pub fn logging_initialisieren(level: &str, format: &str) {
    let direktive = std::env::var("CAMPUS_LOG_LEVEL").unwrap_or_else(|_| level.to_string());
    let format = std::env::var("CAMPUS_LOG_FORMAT").unwrap_or_else(|_| format.to_string());

    let (filter, filter_ok) = match EnvFilter::try_new(&direktive) {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new("info"), false),
    };

    let builder = fmt().with_env_filter(filter).with_target(true);
    if format == "json" {
        builder
            .json()
            .with_thread_ids(true)
            .with_current_span(true)
            .init();
    } else {
        builder.init();
    }

    if !filter_ok {
        tracing::warn!(direktive = %direktive, "Ungueltiger Log-Filter, verwende info");
    } else if !log_level_gueltig(&direktive) {
        tracing::debug!(direktive = %direktive, "Log-Filter mit Direktiven aktiv");
    }
    if !log_format_gueltig(&format) {
        tracing::warn!(format = %format, "Unbekanntes Log-Format, verwende text");
    }
}

/// Validiert ob ein Log-Level-String gueltig ist.
pub fn log_level_gueltig(level: &str) -> bool {
    matches!(level, "trace" | "debug" | "info" | "warn" | "error")
}

/// Validiert ob ein Log-Format-String gueltig ist.
pub fn log_format_gueltig(format: &str) -> bool {
    matches!(format, "text" | "json")
}

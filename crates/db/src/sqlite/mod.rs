//! SQLite-Backend-Implementierungen fuer alle Repository-Traits

pub mod chat;
pub mod flashcards;
pub mod forums;
pub mod pool;

pub use pool::SqliteDb;

use chrono::{DateTime, Utc};

use crate::error::DbError;
use crate::repository::DbResult;

/// Aktueller Zeitpunkt im Speicherformat (RFC3339)
pub(crate) fn jetzt() -> (DateTime<Utc>, String) {
    let now = Utc::now();
    let text = now.to_rfc3339();
    (now, text)
}

pub(crate) fn parse_timestamp(s: &str) -> DbResult<DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::intern(format!("Ungueltige Zeitangabe '{s}': {e}")))
}

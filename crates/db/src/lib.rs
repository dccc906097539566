//! campus-db – Persistenz-Schicht
//!
//! Stellt das Repository-Pattern fuer Karteikarten, Chat-Verlaeufe und
//! Foren bereit. Die SQLite-Implementierung oeffnet fuer jede Mutation
//! eine eigene Transaktion und committet sie bevor der Aufruf
//! zurueckkehrt, damit Transaktionsgrenzen an jeder Aufrufstelle sichtbar
//! bleiben.

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::DbError;
pub use repository::{
    ChatHistoryRepository, DatabaseConfig, DbResult, FlashcardRepository, ForumRepository,
};
pub use sqlite::SqliteDb;

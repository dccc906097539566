//! Repository-Trait-Definitionen
//!
//! Das Repository-Pattern entkoppelt die Geschaeftslogik von der konkreten
//! Datenbank-Implementierung. Jede schreibende Methode ist eine
//! abgeschlossene Transaktion: kehrt sie mit `Ok` zurueck, ist die
//! Aenderung committet.

use campus_core::ForumId;

use crate::error::DbError;
use crate::models::{ChatNachrichtRecord, FlashcardRecord, ForumRecord, NeuesForum};

/// Result-Alias fuer alle Repository-Methoden
pub type DbResult<T> = Result<T, DbError>;

/// Konfiguration fuer die Datenbankverbindung
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Verbindungs-URL (z.B. "sqlite://data/campus.db")
    pub url: String,
    /// Maximale Anzahl gleichzeitiger Verbindungen im Pool
    pub max_verbindungen: u32,
    /// Ob WAL-Modus aktiviert werden soll
    pub sqlite_wal: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://data/campus.db".into(),
            max_verbindungen: 5,
            sqlite_wal: true,
        }
    }
}

/// Repository fuer Karteikarten (Schluessel: Begriff)
#[allow(async_fn_in_trait)]
pub trait FlashcardRepository: Send + Sync {
    /// Karte anlegen oder Definition eines vorhandenen Begriffs ersetzen
    async fn upsert(&self, term: &str, definition: &str) -> DbResult<FlashcardRecord>;

    /// Karte anhand ihres Begriffs laden
    async fn get_by_term(&self, term: &str) -> DbResult<Option<FlashcardRecord>>;

    /// Alle Begriffe in Schluesselreihenfolge
    async fn terms(&self) -> DbResult<Vec<String>>;

    /// Alle Karten in Schluesselreihenfolge
    async fn list_cards(&self) -> DbResult<Vec<FlashcardRecord>>;

    /// Anzahl gespeicherter Karten
    async fn count(&self) -> DbResult<i64>;

    /// Alle Karten loeschen, gibt die Anzahl entfernter Karten zurueck
    async fn delete_all(&self) -> DbResult<u64>;
}

/// Repository fuer Chat-Verlaeufe (ein Verlauf pro Benutzername)
#[allow(async_fn_in_trait)]
pub trait ChatHistoryRepository: Send + Sync {
    /// Legt einen leeren Verlauf an falls keiner existiert.
    /// Gibt true zurueck wenn ein neuer Verlauf angelegt wurde.
    async fn ensure_history(&self, owner: &str) -> DbResult<bool>;

    /// Prueft ob fuer den Benutzer ein Verlauf existiert
    async fn history_exists(&self, owner: &str) -> DbResult<bool>;

    /// Haengt eine Nachricht an den Verlauf von `owner` an.
    /// Fehlt der Verlauf, wird er in derselben Transaktion angelegt.
    async fn append_message(
        &self,
        owner: &str,
        sender: &str,
        message: &str,
    ) -> DbResult<ChatNachrichtRecord>;

    /// Alle Nachrichten eines Verlaufs in Einfuegereihenfolge
    async fn get_messages(&self, owner: &str) -> DbResult<Vec<ChatNachrichtRecord>>;

    /// Alle Benutzernamen mit Verlauf, alphabetisch
    async fn list_owners(&self) -> DbResult<Vec<String>>;
}

/// Repository fuer Foren und ihre Kommentare
#[allow(async_fn_in_trait)]
pub trait ForumRepository: Send + Sync {
    /// Neues Forum ohne Kommentare anlegen
    async fn create_forum(&self, data: NeuesForum<'_>) -> DbResult<ForumRecord>;

    /// Ein Forum inklusive Kommentaren laden
    async fn get_forum(&self, id: ForumId) -> DbResult<Option<ForumRecord>>;

    /// Alle Foren in Erstellungsreihenfolge
    async fn list_forums(&self) -> DbResult<Vec<ForumRecord>>;

    /// Kommentar anhaengen. Gibt false zurueck wenn kein Forum mit der ID existiert.
    async fn add_comment(&self, id: ForumId, comment: &str) -> DbResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_config_standard() {
        let cfg = DatabaseConfig::default();
        assert!(cfg.sqlite_wal);
        assert_eq!(cfg.max_verbindungen, 5);
        assert!(cfg.url.starts_with("sqlite://"));
    }
}

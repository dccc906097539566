//! Datenbankmodelle fuer Campus
//!
//! Diese Typen repraesentieren Datensaetze aus der Datenbank.
//! Sie sind von den Domain-Typen getrennt und dienen als reine Datenuebertragungsobjekte.

use campus_core::ForumId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Karteikarten
// ---------------------------------------------------------------------------

/// Karteikarten-Datensatz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardRecord {
    pub term: String,
    pub definition: String,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// Eine gespeicherte Chat-Nachricht innerhalb eines Verlaufs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatNachrichtRecord {
    pub id: i64,
    pub owner: String,
    pub sender: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Foren
// ---------------------------------------------------------------------------

/// Forum-Datensatz inklusive aller Kommentare (aelteste zuerst)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumRecord {
    pub id: ForumId,
    pub username: String,
    pub title: String,
    pub description: String,
    pub attachment: String,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Daten zum Anlegen eines neuen Forums
#[derive(Debug, Clone, Default)]
pub struct NeuesForum<'a> {
    pub username: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub attachment: &'a str,
}

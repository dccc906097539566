//! Gemeinsame Identifikationstypen fuer Campus
//!
//! Alle IDs verwenden das Newtype-Pattern um Verwechslungen zwischen
//! verschiedenen ID-Arten zur Compilezeit auszuschliessen.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Forum-ID, vom Speicher fortlaufend vergeben
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForumId(pub i64);

impl ForumId {
    /// Gibt den inneren Zahlenwert zurueck
    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ForumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "forum:{}", self.0)
    }
}

/// Eindeutige ID einer offenen WebSocket-Verbindung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerbindungsId(pub Uuid);

impl VerbindungsId {
    /// Erstellt eine neue zufaellige VerbindungsId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for VerbindungsId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VerbindungsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "verbindung:{}", self.0)
    }
}

/// ID einer Browser-Sitzung (traegt z.B. den Karteikarten-Cursor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SitzungsId(pub Uuid);

impl SitzungsId {
    /// Erstellt eine neue zufaellige SitzungsId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Liest eine SitzungsId aus ihrer Textform (z.B. Cookie-Wert)
    pub fn parsen(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }
}

impl Default for SitzungsId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SitzungsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbindungs_id_eindeutig() {
        let a = VerbindungsId::new();
        let b = VerbindungsId::new();
        assert_ne!(a, b, "Zwei neue VerbindungsIds muessen verschieden sein");
    }

    #[test]
    fn forum_id_display() {
        assert_eq!(ForumId(42).to_string(), "forum:42");
    }

    #[test]
    fn forum_id_serialisiert_als_zahl() {
        let json = serde_json::to_string(&ForumId(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn sitzungs_id_parsen() {
        let id = SitzungsId::new();
        let text = id.to_string();
        assert_eq!(SitzungsId::parsen(&text), Some(id));
        assert_eq!(SitzungsId::parsen("kein-uuid"), None);
    }
}

//! Oeffentliche Typen fuer den Chat

use serde::{Deserialize, Serialize};

/// Chat-Bereich eines Verbindungsregisters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatBereich {
    Oeffentlich,
    Privat,
}

impl ChatBereich {
    pub fn als_str(&self) -> &'static str {
        match self {
            Self::Oeffentlich => "public",
            Self::Privat => "private",
        }
    }
}

impl std::fmt::Display for ChatBereich {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.als_str())
    }
}

/// Ein Eintrag im Chat-Verlauf eines Benutzers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEintrag {
    pub sender: String,
    pub message: String,
}

impl ChatEintrag {
    /// Textform beim Abspielen des Verlaufs: `"{sender}: {message}"`
    pub fn als_zeile(&self) -> String {
        format!("{}: {}", self.sender, self.message)
    }
}

impl From<campus_db::models::ChatNachrichtRecord> for ChatEintrag {
    fn from(record: campus_db::models::ChatNachrichtRecord) -> Self {
        Self {
            sender: record.sender,
            message: record.message,
        }
    }
}

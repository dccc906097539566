//! Fehlertypen fuer das Chat-Crate

use campus_core::{FehlerArt, Klassifiziert, VerbindungsId};
use thiserror::Error;

/// Chat-Fehlertypen
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Verbindung geschlossen: {0}")]
    VerbindungGeschlossen(VerbindungsId),

    #[error("Datenbank-Fehler: {0}")]
    DatenbankFehler(#[from] campus_db::DbError),
}

impl Klassifiziert for ChatError {
    fn art(&self) -> FehlerArt {
        match self {
            Self::VerbindungGeschlossen(_) => FehlerArt::Verbindung,
            Self::DatenbankFehler(e) => e.art(),
        }
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

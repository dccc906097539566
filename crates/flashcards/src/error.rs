//! Fehlertypen fuer Karteikarten

use campus_core::{FehlerArt, Klassifiziert};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("Cursor {index} ausserhalb der Karteikarten (Anzahl: {anzahl})")]
    AusserhalbBereich { index: i64, anzahl: usize },

    #[error("Datenbank-Fehler: {0}")]
    Datenbank(#[from] campus_db::DbError),
}

impl Klassifiziert for FlashcardError {
    fn art(&self) -> FehlerArt {
        match self {
            Self::AusserhalbBereich { .. } => FehlerArt::NichtGefunden,
            Self::Datenbank(e) => e.art(),
        }
    }
}

pub type FlashcardResult<T> = Result<T, FlashcardError>;

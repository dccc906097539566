//! Fehlertypen fuer das Forum-Crate

use campus_core::{FehlerArt, Klassifiziert};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForumError {
    #[error("Datenbank-Fehler: {0}")]
    Datenbank(#[from] campus_db::DbError),
}

impl Klassifiziert for ForumError {
    fn art(&self) -> FehlerArt {
        match self {
            Self::Datenbank(e) => e.art(),
        }
    }
}

pub type ForumResult<T> = Result<T, ForumError>;

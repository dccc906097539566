//! Fehlertypen fuer das Datenbank-Crate

use campus_core::{FehlerArt, Klassifiziert};
use thiserror::Error;

/// Datenbank-Fehlertypen
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLx-Fehler: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration-Fehler: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Interner DB-Fehler: {0}")]
    Intern(String),
}

impl DbError {
    pub fn intern(msg: impl Into<String>) -> Self {
        Self::Intern(msg.into())
    }
}

impl Klassifiziert for DbError {
    fn art(&self) -> FehlerArt {
        match self {
            Self::Sqlx(_) | Self::Migration(_) | Self::Intern(_) => FehlerArt::Speicher,
        }
    }
}

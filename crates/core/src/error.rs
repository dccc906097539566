//! Fehlerarten fuer Campus
//!
//! Jedes Crate definiert eigene Fehler-Enums. Ueber [`Klassifiziert`]
//! ordnen sie sich einer gemeinsamen [`FehlerArt`] zu, damit Aufrufer
//! Validierungs-, Nicht-Gefunden- und Speicherfehler unterscheiden
//! koennen ohne die konkreten Typen zu kennen.

use serde::Serialize;

/// Grobe Einordnung eines Fehlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FehlerArt {
    /// Eingabe wurde abgelehnt
    Validierung,
    /// Angefragter Datensatz oder Index existiert nicht
    NichtGefunden,
    /// Persistenz-Schicht hat versagt
    Speicher,
    /// Gegenstelle nicht (mehr) erreichbar
    Verbindung,
}

impl FehlerArt {
    /// Kurzname fuer Logs und JSON-Antworten
    pub fn als_str(&self) -> &'static str {
        match self {
            Self::Validierung => "validierung",
            Self::NichtGefunden => "nicht_gefunden",
            Self::Speicher => "speicher",
            Self::Verbindung => "verbindung",
        }
    }

    /// Gibt true zurueck wenn der Fehler beim Server liegt
    pub fn ist_intern(&self) -> bool {
        matches!(self, Self::Speicher | Self::Verbindung)
    }
}

impl std::fmt::Display for FehlerArt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.als_str())
    }
}

/// Fehler die sich einer [`FehlerArt`] zuordnen lassen
pub trait Klassifiziert {
    fn art(&self) -> FehlerArt;
}

//! campus-core – Gemeinsame Typen und Fehlerarten
//!
//! Dieses Crate stellt die Bausteine bereit, die von allen anderen
//! Campus-Crates gemeinsam genutzt werden: Identifikationstypen und die
//! Fehlerklassifikation, mit der die Web-Fassade Statuscodes waehlt.

pub mod error;
pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use error::{FehlerArt, Klassifiziert};
pub use types::{ForumId, SitzungsId, VerbindungsId};

//! campus-flashcards – Karteikarten und Navigation
//!
//! - [`KarteiService`]: Karten speichern, zaehlen, alle loeschen, blaettern
//! - [`KartenCursor`]: Position einer Sitzung in der Begriffsliste
//! - [`CursorSpeicher`]: Cursor aller Sitzungen, begrenzt durch [`CursorGrenzen`]
//!
//! Die Begriffsliste wird bei jedem Blaettern neu aus dem Speicher
//! gelesen. Der Cursor wird dabei weder begrenzt noch zurueckgesetzt; ein
//! Index ausserhalb der Liste liefert [`FlashcardError::AusserhalbBereich`].

pub mod cursor;
pub mod error;
pub mod service;

pub use cursor::{CursorGrenzen, CursorSpeicher, KartenAnsicht, KartenCursor, Richtung};
pub use error::{FlashcardError, FlashcardResult};
pub use service::KarteiService;

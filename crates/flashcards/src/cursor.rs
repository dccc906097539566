//! Karteikarten-Cursor pro Sitzung

use std::time::{Duration, Instant};

use campus_core::SitzungsId;
use campus_db::models::FlashcardRecord;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::error::{FlashcardError, FlashcardResult};

/// Blaetterrichtung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Richtung {
    Vor,
    Zurueck,
}

/// Antwort von `/next_card` und `/prev_card`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KartenAnsicht {
    pub term: String,
    pub definition: String,
    #[serde(rename = "flashcardCount")]
    pub flashcard_count: usize,
}

/// Position in der Begriffsliste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KartenCursor {
    index: i64,
}

impl KartenCursor {
    /// Cursor auf der letzten Karte einer Sammlung mit `anzahl` Karten
    pub fn neu(anzahl: usize) -> Self {
        Self {
            index: anzahl as i64 - 1,
        }
    }

    pub fn bei(index: i64) -> Self {
        Self { index }
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    /// Bewegt den Cursor und liest die Karte an der neuen Position
    ///
    /// Der Cursor behaelt seine neue Position auch wenn sie ausserhalb der
    /// Liste liegt.
    pub fn schritt(
        &mut self,
        richtung: Richtung,
        karten: &[FlashcardRecord],
    ) -> FlashcardResult<KartenAnsicht> {
        self.index += match richtung {
            Richtung::Vor => 1,
            Richtung::Zurueck => -1,
        };

        let karte = usize::try_from(self.index)
            .ok()
            .and_then(|i| karten.get(i))
            .ok_or(FlashcardError::AusserhalbBereich {
                index: self.index,
                anzahl: karten.len(),
            })?;

        Ok(KartenAnsicht {
            term: karte.term.clone(),
            definition: karte.definition.clone(),
            flashcard_count: karten.len(),
        })
    }
}

/// Standardobergrenze fuer gleichzeitig gehaltene Cursor
pub const MAX_SITZUNGEN: usize = 10_000;

/// Standard-Lebensdauer eines unbenutzten Cursors
pub const MAX_CURSOR_ALTER: Duration = Duration::from_secs(30 * 60);

/// Grenzen fuer den [`CursorSpeicher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorGrenzen {
    /// Hoechstzahl an Sitzungen mit Cursor
    pub max_sitzungen: usize,
    /// Cursor die laenger unbenutzt sind werden verworfen
    pub max_alter: Duration,
}

impl Default for CursorGrenzen {
    fn default() -> Self {
        Self {
            max_sitzungen: MAX_SITZUNGEN,
            max_alter: MAX_CURSOR_ALTER,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CursorEintrag {
    cursor: KartenCursor,
    zuletzt: Instant,
}

impl CursorEintrag {
    fn neu(cursor: KartenCursor) -> Self {
        Self {
            cursor,
            zuletzt: Instant::now(),
        }
    }
}

/// Cursor aller Sitzungen
///
/// Ein Cursor entsteht beim ersten Blaettern einer Sitzung und startet
/// auf der letzten Karte der dann aktuellen Sammlung. Bevor eine neue
/// Sitzung aufgenommen wird, fallen abgelaufene Cursor weg; ist der
/// Speicher danach noch voll, weicht der am laengsten unbenutzte.
#[derive(Debug, Default)]
pub struct CursorSpeicher {
    cursors: DashMap<SitzungsId, CursorEintrag>,
    grenzen: CursorGrenzen,
}

impl CursorSpeicher {
    pub fn neu() -> Self {
        Self::default()
    }

    pub fn mit_grenzen(grenzen: CursorGrenzen) -> Self {
        Self {
            cursors: DashMap::new(),
            grenzen: CursorGrenzen {
                max_sitzungen: grenzen.max_sitzungen.max(1),
                ..grenzen
            },
        }
    }

    /// Bewegt den Cursor der Sitzung ueber der uebergebenen Kartenliste
    pub fn navigieren(
        &self,
        sitzung: SitzungsId,
        richtung: Richtung,
        karten: &[FlashcardRecord],
    ) -> FlashcardResult<KartenAnsicht> {
        if !self.cursors.contains_key(&sitzung) {
            self.platz_schaffen();
        }
        let mut eintrag = self
            .cursors
            .entry(sitzung)
            .or_insert_with(|| CursorEintrag::neu(KartenCursor::neu(karten.len())));
        eintrag.zuletzt = Instant::now();
        eintrag.cursor.schritt(richtung, karten)
    }

    /// Aktueller Cursor einer Sitzung, falls vorhanden
    pub fn cursor(&self, sitzung: SitzungsId) -> Option<KartenCursor> {
        self.cursors.get(&sitzung).map(|e| e.cursor)
    }

    /// Setzt den Cursor einer Sitzung explizit
    pub fn setzen(&self, sitzung: SitzungsId, cursor: KartenCursor) {
        if !self.cursors.contains_key(&sitzung) {
            self.platz_schaffen();
        }
        self.cursors.insert(sitzung, CursorEintrag::neu(cursor));
    }

    /// Verwirft abgelaufene Cursor
    ///
    /// Gibt die Anzahl entfernter Eintraege zurueck.
    pub fn aufraeumen(&self) -> usize {
        let vorher = self.cursors.len();
        let jetzt = Instant::now();
        let max_alter = self.grenzen.max_alter;
        self.cursors
            .retain(|_, e| jetzt.duration_since(e.zuletzt) < max_alter);
        vorher.saturating_sub(self.cursors.len())
    }

    fn platz_schaffen(&self) {
        let abgelaufen = self.aufraeumen();
        let mut verdraengt = 0;
        while self.cursors.len() >= self.grenzen.max_sitzungen {
            let aeltester = self
                .cursors
                .iter()
                .min_by_key(|e| e.zuletzt)
                .map(|e| *e.key());
            match aeltester {
                Some(id) => {
                    self.cursors.remove(&id);
                    verdraengt += 1;
                }
                None => break,
            }
        }
        if abgelaufen + verdraengt > 0 {
            tracing::debug!(abgelaufen, verdraengt, "Karteikarten-Cursor verworfen");
        }
    }

    pub fn anzahl(&self) -> usize {
        self.cursors.len()
    }

    pub fn grenzen(&self) -> CursorGrenzen {
        self.grenzen
    }
}

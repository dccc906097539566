//! KarteiService – Karteikarten speichern und durchblaettern

use std::sync::Arc;

use campus_core::SitzungsId;
use campus_db::{models::FlashcardRecord, FlashcardRepository};

use crate::{
    cursor::{CursorSpeicher, KartenAnsicht, Richtung},
    error::FlashcardResult,
};

/// Rueckmeldung nach erfolgreichem Speichern
pub const GESPEICHERT_MELDUNG: &str = "Flashcard added successfully";

/// Verwaltet die Karteikarten-Sammlung und die Cursor aller Sitzungen
pub struct KarteiService<R: FlashcardRepository> {
    repo: Arc<R>,
    cursors: CursorSpeicher,
}

impl<R: FlashcardRepository> KarteiService<R> {
    /// Erstellt einen neuen KarteiService
    pub fn neu(repo: Arc<R>) -> Arc<Self> {
        Self::mit_cursors(repo, CursorSpeicher::neu())
    }

    /// Erstellt einen KarteiService mit eigenem Cursor-Speicher
    pub fn mit_cursors(repo: Arc<R>, cursors: CursorSpeicher) -> Arc<Self> {
        Arc::new(Self { repo, cursors })
    }

    /// Speichert eine Karte; ein vorhandener Begriff wird ueberschrieben
    pub async fn speichern(&self, term: &str, definition: &str) -> FlashcardResult<FlashcardRecord> {
        let karte = self.repo.upsert(term, definition).await?;
        tracing::debug!(term = %term, "Karteikarte gespeichert");
        Ok(karte)
    }

    /// Naechste Karte fuer die Sitzung
    pub async fn naechste(&self, sitzung: SitzungsId) -> FlashcardResult<KartenAnsicht> {
        self.blaettern(sitzung, Richtung::Vor).await
    }

    /// Vorherige Karte fuer die Sitzung
    pub async fn vorherige(&self, sitzung: SitzungsId) -> FlashcardResult<KartenAnsicht> {
        self.blaettern(sitzung, Richtung::Zurueck).await
    }

    async fn blaettern(&self, sitzung: SitzungsId, richtung: Richtung) -> FlashcardResult<KartenAnsicht> {
        // Liste wird bei jedem Schritt neu gelesen
        let karten = self.repo.list_cards().await?;
        let ergebnis = self.cursors.navigieren(sitzung, richtung, &karten);

        match &ergebnis {
            Ok(ansicht) => {
                tracing::debug!(sitzung = %sitzung, ?richtung, term = %ansicht.term, "Karte gezeigt")
            }
            Err(e) => tracing::warn!(sitzung = %sitzung, ?richtung, "Blaettern fehlgeschlagen: {e}"),
        }
        ergebnis
    }

    /// Loescht alle Karten. Die Cursor bleiben unveraendert.
    pub async fn alle_loeschen(&self) -> FlashcardResult<u64> {
        let entfernt = self.repo.delete_all().await?;
        tracing::info!(entfernt, "Karteikarten-Sammlung geleert");
        Ok(entfernt)
    }

    pub async fn anzahl(&self) -> FlashcardResult<i64> {
        Ok(self.repo.count().await?)
    }

    /// Alle Karten in Schluesselreihenfolge
    pub async fn liste(&self) -> FlashcardResult<Vec<FlashcardRecord>> {
        Ok(self.repo.list_cards().await?)
    }

    /// Cursor-Verwaltung (fuer Diagnose und Tests)
    pub fn cursors(&self) -> &CursorSpeicher {
        &self.cursors
    }
}

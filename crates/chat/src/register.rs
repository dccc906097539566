//! Verbindungsregister – offene Kanaele eines Chat-Bereichs
//!
//! Jede WebSocket-Verbindung bekommt beim Verbinden eine eigene
//! Send-Queue. Der Schreib-Task der Verbindung liest aus dieser Queue und
//! sendet die Texte als Frames. Das Register haelt nur die Sende-Haelften.
//!
//! ## Zustellung
//! - `persoenlich_senden`: genau eine Verbindung, wartet auf freien Platz
//! - `an_alle_senden`: alle Mitglieder zum Zeitpunkt des Aufrufs, in
//!   Registrierungsreihenfolge; wartet bei voller Queue, eine geschlossene
//!   Queue wird uebersprungen

use std::sync::Arc;

use campus_core::VerbindungsId;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::error::{ChatError, ChatResult};
use crate::types::ChatBereich;

/// Standardgroesse der Send-Queue pro Verbindung
pub const SEND_QUEUE_GROESSE: usize = 64;

/// Sende-Haelfte einer registrierten Verbindung
#[derive(Clone, Debug)]
struct Verbindung {
    id: VerbindungsId,
    tx: mpsc::Sender<String>,
}

impl Verbindung {
    /// Reiht einen Text ein und wartet dabei auf freien Platz
    ///
    /// Gibt `false` zurueck wenn der Empfaenger bereits geschlossen ist.
    async fn senden(&self, text: String) -> bool {
        match self.tx.send(text).await {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(verbindung = %self.id, "Send-Queue geschlossen (Client getrennt)");
                false
            }
        }
    }
}

/// Register aller offenen Verbindungen eines Chat-Bereichs
///
/// Clone teilt den inneren Zustand. Die Mitgliederliste liegt hinter einem
/// Mutex; gesendet wird immer ausserhalb der Sperre.
#[derive(Clone)]
pub struct Verbindungsregister {
    inner: Arc<RegisterInner>,
}

struct RegisterInner {
    bereich: ChatBereich,
    queue_groesse: usize,
    verbindungen: Mutex<Vec<Verbindung>>,
}

impl Verbindungsregister {
    /// Erstellt ein leeres Register mit Standard-Queue-Groesse
    pub fn neu(bereich: ChatBereich) -> Self {
        Self::mit_queue_groesse(bereich, SEND_QUEUE_GROESSE)
    }

    /// Erstellt ein leeres Register mit eigener Queue-Groesse pro Verbindung
    pub fn mit_queue_groesse(bereich: ChatBereich, queue_groesse: usize) -> Self {
        Self {
            inner: Arc::new(RegisterInner {
                bereich,
                queue_groesse: queue_groesse.max(1),
                verbindungen: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Nimmt eine neue Verbindung auf und gibt ihre ID und Empfangs-Queue zurueck
    ///
    /// Keine Obergrenze, keine Deduplizierung.
    pub fn verbinden(&self) -> (VerbindungsId, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(self.inner.queue_groesse);
        let id = VerbindungsId::new();
        let anzahl = {
            let mut verbindungen = self.inner.verbindungen.lock();
            verbindungen.push(Verbindung { id, tx });
            verbindungen.len()
        };
        tracing::debug!(bereich = %self.inner.bereich, verbindung = %id, anzahl, "Verbindung registriert");
        (id, rx)
    }

    /// Entfernt eine Verbindung
    ///
    /// Gibt `false` zurueck wenn die ID nicht (mehr) registriert war.
    pub fn trennen(&self, id: VerbindungsId) -> bool {
        let entfernt = {
            let mut verbindungen = self.inner.verbindungen.lock();
            let vorher = verbindungen.len();
            verbindungen.retain(|v| v.id != id);
            verbindungen.len() != vorher
        };
        if entfernt {
            tracing::debug!(bereich = %self.inner.bereich, verbindung = %id, "Verbindung entfernt");
        }
        entfernt
    }

    /// Sendet einen Text an genau eine Verbindung
    ///
    /// Wartet auf freien Platz in der Queue. Schlaegt fehl wenn die
    /// Verbindung nicht registriert oder bereits geschlossen ist.
    pub async fn persoenlich_senden(&self, id: VerbindungsId, text: String) -> ChatResult<()> {
        let tx = self
            .inner
            .verbindungen
            .lock()
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.tx.clone())
            .ok_or(ChatError::VerbindungGeschlossen(id))?;

        tx.send(text)
            .await
            .map_err(|_| ChatError::VerbindungGeschlossen(id))
    }

    /// Sendet einen Text an alle Verbindungen
    ///
    /// Empfaenger sind die Mitglieder zum Zeitpunkt des Aufrufs. Bei voller
    /// Queue wird gewartet, eine geschlossene Verbindung haelt die uebrigen
    /// nicht auf. Gibt die Anzahl der erfolgreichen Zustellungen zurueck.
    pub async fn an_alle_senden(&self, text: &str) -> usize {
        let schnappschuss: Vec<Verbindung> = self.inner.verbindungen.lock().clone();

        let mut gesendet = 0;
        for verbindung in &schnappschuss {
            if verbindung.senden(text.to_string()).await {
                gesendet += 1;
            }
        }

        tracing::trace!(
            bereich = %self.inner.bereich,
            empfaenger = schnappschuss.len(),
            gesendet,
            "Broadcast"
        );
        gesendet
    }

    /// Anzahl registrierter Verbindungen
    pub fn anzahl(&self) -> usize {
        self.inner.verbindungen.lock().len()
    }

    /// Prueft ob eine Verbindung registriert ist
    pub fn ist_verbunden(&self, id: VerbindungsId) -> bool {
        self.inner.verbindungen.lock().iter().any(|v| v.id == id)
    }

    /// Chat-Bereich dieses Registers
    pub fn bereich(&self) -> ChatBereich {
        self.inner.bereich
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

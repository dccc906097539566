//! Ablauf einer Chat-Sitzung, unabhaengig vom Transport
//!
//! Die Web-Schicht liest Frames vom WebSocket und ruft `empfangen` auf;
//! ausgehende Texte landen in der Queue, die `eroeffnen` zurueckgibt.
//!
//! ## Privat
//! ```text
//! eroeffnen -> verlauf_abspielen -> empfangen* -> schliessen
//! ```
//! Verlauf und neue Nachrichten gehoeren dem Partner (`user` im Pfad),
//! nicht einem Gespraech aus Betrachter und Partner.
//!
//! ## Oeffentlich
//! Beitritt, jede Nachricht und das Verlassen werden an alle Verbindungen
//! des oeffentlichen Registers verteilt. Nichts wird gespeichert.

use std::sync::Arc;

use campus_core::VerbindungsId;
use campus_db::ChatHistoryRepository;
use tokio::sync::mpsc;

use crate::{
    error::ChatResult, register::Verbindungsregister, types::ChatEintrag, verlauf::ChatVerlauf,
};

// ---------------------------------------------------------------------------
// Private Sitzung
// ---------------------------------------------------------------------------

/// Eine private Chat-Sitzung (`/chat/{username}/{user}`)
pub struct PrivatSitzung<R: ChatHistoryRepository> {
    verlauf: Arc<ChatVerlauf<R>>,
    register: Verbindungsregister,
    verbindung: VerbindungsId,
    betrachter: String,
    partner: String,
}

impl<R: ChatHistoryRepository> PrivatSitzung<R> {
    /// Registriert die Verbindung und stellt den Verlauf des Betrachters sicher
    pub async fn eroeffnen(
        verlauf: Arc<ChatVerlauf<R>>,
        register: Verbindungsregister,
        betrachter: impl Into<String>,
        partner: impl Into<String>,
    ) -> ChatResult<(Self, mpsc::Receiver<String>)> {
        let betrachter = betrachter.into();
        let partner = partner.into();

        let (verbindung, rx) = register.verbinden();
        let sitzung = Self {
            verlauf,
            register,
            verbindung,
            betrachter,
            partner,
        };

        if let Err(e) = sitzung.verlauf.registrieren(&sitzung.betrachter).await {
            sitzung.register.trennen(verbindung);
            return Err(e);
        }

        tracing::info!(
            betrachter = %sitzung.betrachter,
            partner = %sitzung.partner,
            verbindung = %verbindung,
            "Private Chat-Sitzung eroeffnet"
        );
        Ok((sitzung, rx))
    }

    /// Spielt den gesamten Verlauf des Partners an den Betrachter ab
    ///
    /// Gibt die Anzahl abgespielter Eintraege zurueck.
    pub async fn verlauf_abspielen(&self) -> ChatResult<usize> {
        let eintraege = self.verlauf.nachrichten_laden(&self.partner).await?;
        for eintrag in &eintraege {
            self.register
                .persoenlich_senden(self.verbindung, eintrag.als_zeile())
                .await?;
        }
        Ok(eintraege.len())
    }

    /// Verarbeitet einen empfangenen Text
    ///
    /// Speichert `{sender: betrachter, message: text}` im Verlauf des
    /// Partners und bestaetigt nur an die eigene Verbindung.
    pub async fn empfangen(&self, text: &str) -> ChatResult<ChatEintrag> {
        let eintrag = self
            .verlauf
            .nachricht_hinzufuegen(&self.partner, &self.betrachter, text)
            .await?;

        self.register
            .persoenlich_senden(self.verbindung, privat_bestaetigung(&self.betrachter, text))
            .await?;

        Ok(eintrag)
    }

    /// Entfernt die Verbindung aus dem Register
    pub fn schliessen(self) {
        self.register.trennen(self.verbindung);
        tracing::info!(
            betrachter = %self.betrachter,
            partner = %self.partner,
            "Private Chat-Sitzung beendet"
        );
    }

    pub fn verbindung(&self) -> VerbindungsId {
        self.verbindung
    }
}

// ---------------------------------------------------------------------------
// Oeffentliche Sitzung
// ---------------------------------------------------------------------------

/// Eine oeffentliche Chat-Sitzung (`/public-chat/{username}`)
pub struct OeffentlicheSitzung {
    register: Verbindungsregister,
    verbindung: VerbindungsId,
    benutzer: String,
}

impl OeffentlicheSitzung {
    /// Registriert die Verbindung und kuendigt den Beitritt an alle an
    pub async fn eroeffnen(
        register: Verbindungsregister,
        benutzer: impl Into<String>,
    ) -> (Self, mpsc::Receiver<String>) {
        let benutzer = benutzer.into();
        let (verbindung, rx) = register.verbinden();

        register.an_alle_senden(&beigetreten(&benutzer)).await;
        tracing::info!(benutzer = %benutzer, verbindung = %verbindung, "Oeffentlichem Chat beigetreten");

        (
            Self {
                register,
                verbindung,
                benutzer,
            },
            rx,
        )
    }

    /// Verteilt einen empfangenen Text an alle (inklusive Absender)
    pub async fn empfangen(&self, text: &str) -> usize {
        self.register.an_alle_senden(&sagt(&self.benutzer, text)).await
    }

    /// Entfernt die Verbindung und kuendigt das Verlassen an
    pub async fn schliessen(self) -> usize {
        self.register.trennen(self.verbindung);
        tracing::info!(benutzer = %self.benutzer, "Oeffentlichen Chat verlassen");
        self.register.an_alle_senden(&verlassen(&self.benutzer)).await
    }

    pub fn verbindung(&self) -> VerbindungsId {
        self.verbindung
    }
}

// ---------------------------------------------------------------------------
// Texte
// ---------------------------------------------------------------------------

fn privat_bestaetigung(betrachter: &str, text: &str) -> String {
    format!("{betrachter} wrote: {text}")
}

fn beigetreten(benutzer: &str) -> String {
    format!("{benutzer} joined the chat")
}

fn sagt(benutzer: &str, text: &str) -> String {
    format!("{benutzer} says: {text}")
}

fn verlassen(benutzer: &str) -> String {
    format!("{benutzer} left the chat")
}

//! ChatVerlauf – persistente Nachrichtenlisten pro Benutzer

use std::sync::Arc;

use campus_db::ChatHistoryRepository;

use crate::{error::ChatResult, types::ChatEintrag};

/// Verwaltet die Chat-Verlaeufe aller Benutzer
///
/// Ein Verlauf hat zwei Zustaende: nicht vorhanden und vorhanden. Jeder
/// Zugriff (auch ein lesender) legt einen fehlenden Verlauf an.
pub struct ChatVerlauf<R: ChatHistoryRepository> {
    repo: Arc<R>,
}

impl<R: ChatHistoryRepository> ChatVerlauf<R> {
    /// Erstellt einen neuen ChatVerlauf
    pub fn neu(repo: Arc<R>) -> Arc<Self> {
        Arc::new(Self { repo })
    }

    /// Registriert einen Benutzer. Ein bestehender Verlauf bleibt erhalten.
    ///
    /// Gibt true zurueck wenn der Verlauf neu angelegt wurde.
    pub async fn registrieren(&self, benutzer: &str) -> ChatResult<bool> {
        let neu = self.repo.ensure_history(benutzer).await?;
        tracing::info!(benutzer = %benutzer, neu, "Benutzer registriert");
        Ok(neu)
    }

    /// Haengt `{sender, text}` an den Verlauf von `besitzer` an (committet)
    pub async fn nachricht_hinzufuegen(
        &self,
        besitzer: &str,
        sender: &str,
        text: &str,
    ) -> ChatResult<ChatEintrag> {
        let record = self.repo.append_message(besitzer, sender, text).await?;
        tracing::debug!(besitzer = %besitzer, sender = %sender, id = record.id, "Nachricht gespeichert");
        Ok(record.into())
    }

    /// Laedt den vollstaendigen Verlauf, legt ihn bei Bedarf an
    pub async fn nachrichten_laden(&self, besitzer: &str) -> ChatResult<Vec<ChatEintrag>> {
        self.repo.ensure_history(besitzer).await?;
        let records = self.repo.get_messages(besitzer).await?;
        Ok(records.into_iter().map(ChatEintrag::from).collect())
    }

    /// Alle Benutzer mit Verlauf, alphabetisch
    pub async fn benutzer_liste(&self) -> ChatResult<Vec<String>> {
        Ok(self.repo.list_owners().await?)
    }
}

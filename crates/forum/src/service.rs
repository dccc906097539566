//! ForumService – Foren anlegen, auflisten, kommentieren

use std::sync::Arc;

use campus_core::ForumId;
use campus_db::{models::NeuesForum, ForumRepository};

use crate::{
    error::ForumResult,
    types::{Forum, ForumAnlage},
};

pub struct ForumService<R: ForumRepository> {
    repo: Arc<R>,
}

impl<R: ForumRepository> ForumService<R> {
    pub fn neu(repo: Arc<R>) -> Arc<Self> {
        Arc::new(Self { repo })
    }

    /// Legt ein neues Forum ohne Kommentare an (committet)
    pub async fn erstellen(&self, anlage: &ForumAnlage) -> ForumResult<Forum> {
        let record = self
            .repo
            .create_forum(NeuesForum {
                username: &anlage.username,
                title: &anlage.title,
                description: &anlage.description,
                attachment: &anlage.file,
            })
            .await?;

        tracing::info!(forum = %record.id, username = %record.username, "Forum erstellt");
        Ok(record.into())
    }

    /// Haengt einen Kommentar an
    ///
    /// Existiert kein Forum mit der ID, passiert nichts; Rueckgabe ist dann false.
    pub async fn kommentieren(&self, id: ForumId, kommentar: &str) -> ForumResult<bool> {
        let angehaengt = self.repo.add_comment(id, kommentar).await?;
        if angehaengt {
            tracing::debug!(forum = %id, "Kommentar angehaengt");
        } else {
            tracing::debug!(forum = %id, "Kommentar fuer unbekanntes Forum ignoriert");
        }
        Ok(angehaengt)
    }

    /// Alle Foren in Erstellungsreihenfolge
    pub async fn liste(&self) -> ForumResult<Vec<Forum>> {
        let records = self.repo.list_forums().await?;
        Ok(records.into_iter().map(Forum::from).collect())
    }

    pub async fn detail(&self, id: ForumId) -> ForumResult<Option<Forum>> {
        Ok(self.repo.get_forum(id).await?.map(Forum::from))
    }
}

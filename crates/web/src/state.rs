//! Geteilter Axum-State

use std::sync::Arc;

use campus_chat::{ChatBereich, ChatVerlauf, Verbindungsregister};
use campus_db::SqliteDb;
use campus_flashcards::{CursorGrenzen, CursorSpeicher, KarteiService};
use campus_forum::ForumService;
use campus_observability::CampusMetrics;

/// Axum-State fuer alle Campus-Handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqliteDb>,
    pub kartei: Arc<KarteiService<SqliteDb>>,
    pub chat_verlauf: Arc<ChatVerlauf<SqliteDb>>,
    pub foren: Arc<ForumService<SqliteDb>>,
    /// Register fuer `/chat/:username/:user`
    pub privat: Verbindungsregister,
    /// Register fuer `/public-chat/:username`
    pub oeffentlich: Verbindungsregister,
    pub metriken: CampusMetrics,
}

impl AppState {
    /// Baut alle Dienste ueber derselben Datenbank auf
    pub fn neu(db: SqliteDb, queue_groesse: usize, metriken: CampusMetrics) -> Self {
        let db = Arc::new(db);
        Self {
            kartei: KarteiService::neu(Arc::clone(&db)),
            chat_verlauf: ChatVerlauf::neu(Arc::clone(&db)),
            foren: ForumService::neu(Arc::clone(&db)),
            privat: Verbindungsregister::mit_queue_groesse(ChatBereich::Privat, queue_groesse),
            oeffentlich: Verbindungsregister::mit_queue_groesse(
                ChatBereich::Oeffentlich,
                queue_groesse,
            ),
            metriken,
            db,
        }
    }

    /// Ersetzt den KarteiService durch einen mit begrenztem Cursor-Speicher
    pub fn mit_cursor_grenzen(mut self, grenzen: CursorGrenzen) -> Self {
        self.kartei = KarteiService::mit_cursors(
            Arc::clone(&self.db),
            CursorSpeicher::mit_grenzen(grenzen),
        );
        self
    }

    /// Register zum Chat-Bereich
    pub fn register(&self, bereich: ChatBereich) -> &Verbindungsregister {
        match bereich {
            ChatBereich::Privat => &self.privat,
            ChatBereich::Oeffentlich => &self.oeffentlich,
        }
    }
}

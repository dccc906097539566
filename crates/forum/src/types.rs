//! Oeffentliche Typen fuer Foren

use campus_core::ForumId;
use campus_db::models::ForumRecord;
use serde::{Deserialize, Serialize};

/// Ein Forum mit allen Kommentaren (aelteste zuerst)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forum {
    pub id: ForumId,
    pub username: String,
    pub title: String,
    pub description: String,
    /// Verweis auf einen Anhang, leer wenn keiner angegeben wurde
    pub file: String,
    pub comments: Vec<String>,
}

impl From<ForumRecord> for Forum {
    fn from(record: ForumRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            title: record.title,
            description: record.description,
            file: record.attachment,
            comments: record.comments,
        }
    }
}

/// Formulardaten zum Anlegen eines Forums
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForumAnlage {
    pub username: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub file: String,
}

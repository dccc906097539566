//! Fehlertypen der Web-Schicht und ihre HTTP-Abbildung

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use campus_chat::ChatError;
use campus_core::{FehlerArt, ForumId, Klassifiziert};
use campus_flashcards::FlashcardError;
use campus_forum::ForumError;
use serde_json::json;
use thiserror::Error;

/// Alle Fehler die ein Handler zurueckgeben kann
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Kartei(#[from] FlashcardError),

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error(transparent)]
    Forum(#[from] ForumError),

    #[error("Forum {0} nicht gefunden")]
    ForumFehlt(ForumId),
}

pub type WebResult<T> = Result<T, WebError>;

impl Klassifiziert for WebError {
    fn art(&self) -> FehlerArt {
        match self {
            Self::Kartei(e) => e.art(),
            Self::Chat(e) => e.art(),
            Self::Forum(e) => e.art(),
            Self::ForumFehlt(_) => FehlerArt::NichtGefunden,
        }
    }
}

/// HTTP-Statuscode zu einer Fehlerart
pub fn http_status(art: FehlerArt) -> StatusCode {
    match art {
        FehlerArt::Validierung => StatusCode::BAD_REQUEST,
        FehlerArt::NichtGefunden => StatusCode::NOT_FOUND,
        FehlerArt::Speicher | FehlerArt::Verbindung => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        http_status(self.art())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let art = self.art();
        let status = http_status(art);
        if art.ist_intern() {
            tracing::error!(art = %art, "Anfrage fehlgeschlagen: {self}");
        } else {
            tracing::debug!(art = %art, "Anfrage abgelehnt: {self}");
        }

        (
            status,
            Json(json!({
                "error": {
                    "code": status.as_u16(),
                    "art": art.als_str(),
                    "message": self.to_string()
                }
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fehlerarten_auf_status() {
        assert_eq!(http_status(FehlerArt::Validierung), StatusCode::BAD_REQUEST);
        assert_eq!(http_status(FehlerArt::NichtGefunden), StatusCode::NOT_FOUND);
        assert_eq!(
            http_status(FehlerArt::Speicher),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            http_status(FehlerArt::Verbindung),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn ausserhalb_bereich_ist_404() {
        let fehler = WebError::from(FlashcardError::AusserhalbBereich {
            index: 3,
            anzahl: 3,
        });
        assert_eq!(fehler.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn fehlendes_forum_ist_404() {
        let fehler = WebError::ForumFehlt(ForumId(42));
        assert_eq!(fehler.status(), StatusCode::NOT_FOUND);
        assert!(fehler.to_string().contains("forum:42"));
    }
}

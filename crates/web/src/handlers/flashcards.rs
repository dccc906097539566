//! Handler fuer Karteikarten
//!
//! Die Position beim Blaettern gehoert zur Sitzung des Browsers. Sie wird
//! ueber das Cookie `campus_karten` erkannt; fehlt es, wird eine neue
//! Sitzung angelegt und per `Set-Cookie` mitgeschickt.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Json, Response},
    Form,
};
use campus_core::{Klassifiziert, SitzungsId};
use campus_flashcards::{service::GESPEICHERT_MELDUNG, Richtung};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{WebError, WebResult},
    seiten,
    state::AppState,
};

/// Name des Sitzungs-Cookies
pub const KARTEN_COOKIE: &str = "campus_karten";

#[derive(Debug, Deserialize)]
pub struct KarteForm {
    pub term: String,
    pub definition: String,
}

/// GET /flashcard
pub async fn seite(State(state): State<AppState>) -> WebResult<Html<String>> {
    let karten = state.kartei.liste().await?;
    Ok(Html(seiten::karteikarten(&karten)))
}

/// POST /save_data
///
/// Fehler werden wie im Erfolgsfall mit Status 200 als `{"message": ...}`
/// gemeldet; die Fehlerart landet nur im Log.
pub async fn speichern(State(state): State<AppState>, Form(form): Form<KarteForm>) -> Response {
    match state.kartei.speichern(&form.term, &form.definition).await {
        Ok(_) => {
            state.metriken.flashcards_saved_total.inc();
            Json(json!({ "message": GESPEICHERT_MELDUNG })).into_response()
        }
        Err(e) => {
            tracing::error!(term = %form.term, art = %e.art(), "Karteikarte nicht gespeichert: {e}");
            Json(json!({ "message": format!("Error:{e}") })).into_response()
        }
    }
}

/// GET /next_card
pub async fn naechste(State(state): State<AppState>, headers: HeaderMap) -> Response {
    blaettern(&state, &headers, Richtung::Vor).await
}

/// GET /prev_card
pub async fn vorherige(State(state): State<AppState>, headers: HeaderMap) -> Response {
    blaettern(&state, &headers, Richtung::Zurueck).await
}

/// GET /delete_collection
pub async fn sammlung_loeschen(State(state): State<AppState>) -> WebResult<Json<Value>> {
    let entfernt = state.kartei.alle_loeschen().await?;
    Ok(Json(json!({ "deleted": entfernt })))
}

async fn blaettern(state: &AppState, headers: &HeaderMap, richtung: Richtung) -> Response {
    let (sitzung, neu) = match sitzung_aus_cookie(headers) {
        Some(sitzung) => (sitzung, false),
        None => (SitzungsId::new(), true),
    };

    let ergebnis = match richtung {
        Richtung::Vor => state.kartei.naechste(sitzung).await,
        Richtung::Zurueck => state.kartei.vorherige(sitzung).await,
    };

    let mut antwort = match ergebnis {
        Ok(ansicht) => Json(ansicht).into_response(),
        Err(e) => WebError::from(e).into_response(),
    };

    // Auch bei Fehlern setzen, der Cursor existiert bereits
    if neu {
        let cookie = format!("{KARTEN_COOKIE}={sitzung}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(wert) = HeaderValue::from_str(&cookie) {
            antwort.headers_mut().insert(header::SET_COOKIE, wert);
        }
    }
    antwort
}

/// Liest die Sitzung aus dem `Cookie`-Header
pub fn sitzung_aus_cookie(headers: &HeaderMap) -> Option<SitzungsId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|paar| paar.trim().split_once('='))
        .find(|(name, _)| *name == KARTEN_COOKIE)
        .and_then(|(_, wert)| SitzungsId::parsen(wert))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_wird_gefunden() {
        let id = SitzungsId::new();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; campus_karten={id}")).unwrap(),
        );
        assert_eq!(sitzung_aus_cookie(&headers), Some(id));
    }

    #[test]
    fn ungueltiges_cookie_ergibt_keine_sitzung() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("campus_karten=kein-uuid"),
        );
        assert_eq!(sitzung_aus_cookie(&headers), None);
    }

    #[test]
    fn ohne_cookie_keine_sitzung() {
        assert_eq!(sitzung_aus_cookie(&HeaderMap::new()), None);
    }
}

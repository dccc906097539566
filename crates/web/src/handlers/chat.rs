//! Handler fuer Registrierung und Chat-Seiten

use axum::{
    extract::{Path, Query, State},
    response::{Html, Json},
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{error::WebResult, seiten, state::AppState};

#[derive(Debug, Deserialize)]
pub struct BenutzerQuery {
    pub username: String,
}

/// POST /register/:user
pub async fn registrieren(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> WebResult<Json<Value>> {
    state.chat_verlauf.registrieren(&user).await?;
    Ok(Json(
        json!({ "message": format!("User {user} registered successfully.") }),
    ))
}

/// GET /chat
pub async fn uebersicht(State(state): State<AppState>) -> WebResult<Html<String>> {
    let benutzer = state.chat_verlauf.benutzer_liste().await?;
    Ok(Html(seiten::chat_uebersicht(&benutzer)))
}

/// GET /chat/private-chat?username=
pub async fn privat_seite(
    State(state): State<AppState>,
    Query(query): Query<BenutzerQuery>,
) -> WebResult<Html<String>> {
    // Legt den Verlauf beim ersten Aufruf an
    let verlauf = state.chat_verlauf.nachrichten_laden(&query.username).await?;
    let benutzer = state.chat_verlauf.benutzer_liste().await?;
    Ok(Html(seiten::privat_chat(&query.username, &benutzer, &verlauf)))
}

/// GET /chat/public-chat?username=
pub async fn oeffentlich_seite(
    State(state): State<AppState>,
    Query(query): Query<BenutzerQuery>,
) -> WebResult<Html<String>> {
    state.chat_verlauf.registrieren(&query.username).await?;
    Ok(Html(seiten::oeffentlicher_chat(&query.username)))
}

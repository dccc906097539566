//! Handler fuer das Forum

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Form,
};
use campus_core::ForumId;
use campus_forum::ForumAnlage;
use serde::Deserialize;

use crate::{
    error::{WebError, WebResult},
    seiten,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct KommentarForm {
    pub comment: String,
}

/// GET /forum
pub async fn liste(State(state): State<AppState>) -> WebResult<Html<String>> {
    let foren = state.foren.liste().await?;
    Ok(Html(seiten::forum_liste(&foren)))
}

/// GET /forum/to/:id
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Html<String>> {
    detail_seite(&state, ForumId(id)).await
}

/// POST /forum/comment/:id
///
/// Ein unbekanntes Forum wird stillschweigend uebergangen. Die Antwort
/// bleibt 200 und zeigt nur einen Hinweis statt der Detailseite.
pub async fn kommentieren(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<KommentarForm>,
) -> WebResult<Html<String>> {
    let id = ForumId(id);
    if state.foren.kommentieren(id, &form.comment).await? {
        state
            .metriken
            .forum_posts_total
            .with_label_values(&["kommentar"])
            .inc();
    }
    match state.foren.detail(id).await? {
        Some(forum) => Ok(Html(seiten::forum_detail(&forum))),
        None => Ok(Html(seiten::forum_fehlt(id))),
    }
}

/// GET /forum/create-forum
pub async fn anlegen_formular() -> Html<String> {
    Html(seiten::forum_anlegen())
}

/// POST /forum/redirect-to-forum
pub async fn anlegen(
    State(state): State<AppState>,
    Form(anlage): Form<ForumAnlage>,
) -> WebResult<(StatusCode, Html<String>)> {
    let forum = state.foren.erstellen(&anlage).await?;
    state
        .metriken
        .forum_posts_total
        .with_label_values(&["forum"])
        .inc();
    Ok((StatusCode::CREATED, Html(seiten::forum_angelegt(&forum))))
}

async fn detail_seite(state: &AppState, id: ForumId) -> WebResult<Html<String>> {
    match state.foren.detail(id).await? {
        Some(forum) => Ok(Html(seiten::forum_detail(&forum))),
        None => Err(WebError::ForumFehlt(id)),
    }
}

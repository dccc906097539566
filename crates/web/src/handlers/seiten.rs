//! Statische Seiten

use axum::response::Html;

use crate::seiten;

/// GET /
pub async fn startseite() -> Html<String> {
    Html(seiten::startseite())
}

/// GET /office-of-the-registra
pub async fn registratur() -> Html<String> {
    Html(seiten::registratur())
}

//! Route-Definitionen und Zusammenbau der Anwendung

use std::path::Path;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use campus_observability::{
    health_router, metrics_router, request_timing_layer, timing_middleware, HealthState,
};
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState, ws};

/// Alle fachlichen Routen
pub fn campus_router() -> Router<AppState> {
    Router::new()
        // Seiten
        .route("/", get(handlers::seiten::startseite))
        .route(
            "/office-of-the-registra",
            get(handlers::seiten::registratur),
        )
        // Chat
        .route("/register/:user", post(handlers::chat::registrieren))
        .route("/chat", get(handlers::chat::uebersicht))
        .route("/chat/private-chat", get(handlers::chat::privat_seite))
        .route("/chat/public-chat", get(handlers::chat::oeffentlich_seite))
        .route("/chat/:username/:user", get(ws::privat_chat))
        .route("/public-chat/:username", get(ws::oeffentlicher_chat))
        // Forum
        .route("/forum", get(handlers::forum::liste))
        .route("/forum/to/:id", get(handlers::forum::detail))
        .route("/forum/comment/:id", post(handlers::forum::kommentieren))
        .route("/forum/create-forum", get(handlers::forum::anlegen_formular))
        .route(
            "/forum/redirect-to-forum",
            post(handlers::forum::anlegen),
        )
        // Karteikarten
        .route("/flashcard", get(handlers::flashcards::seite))
        .route("/save_data", post(handlers::flashcards::speichern))
        .route("/next_card", get(handlers::flashcards::naechste))
        .route("/prev_card", get(handlers::flashcards::vorherige))
        .route(
            "/delete_collection",
            get(handlers::flashcards::sammlung_loeschen),
        )
}

/// Vollstaendige Anwendung inklusive `/health`, `/metrics` und `/static`
pub fn app(state: AppState, statisch: Option<&Path>) -> Router {
    let db = Arc::clone(&state.db);
    let health = HealthState::mit_pruefung(move || {
        let db = Arc::clone(&db);
        async move { db.erreichbar().await }
    });
    let metriken = state.metriken.clone();

    let mut router = campus_router()
        .layer(middleware::from_fn_with_state(
            metriken.clone(),
            timing_middleware,
        ))
        .with_state(state)
        .merge(health_router(health))
        .merge(metrics_router(metriken));

    if let Some(verzeichnis) = statisch {
        router = router.nest_service("/static", ServeDir::new(verzeichnis));
    }

    router.layer(request_timing_layer())
}

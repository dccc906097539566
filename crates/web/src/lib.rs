//! # campus-web
//!
//! HTTP- und WebSocket-Fassade fuer Campus. Uebersetzt Anfragen in
//! Aufrufe der Dienste aus `campus-flashcards`, `campus-chat` und
//! `campus-forum` und rendert die HTML-Seiten.
//!
//! ## Endpunkte
//! - Seiten: `/`, `/office-of-the-registra`, `/chat`, `/forum`, `/flashcard`, ...
//! - JSON: `/register/:user`, `/save_data`, `/next_card`, `/prev_card`
//! - WebSocket: `/chat/:username/:user` (privat), `/public-chat/:username`
//! - Betrieb: `/health`, `/metrics`, `/static/*`

pub mod error;
pub mod handlers;
pub mod routes;
pub mod seiten;
pub mod state;
pub mod ws;

pub use error::{WebError, WebResult};
pub use routes::app;
pub use state::AppState;

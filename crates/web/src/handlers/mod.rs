//! Axum-Handler, nach Bereich gruppiert

pub mod chat;
pub mod flashcards;
pub mod forum;
pub mod seiten;

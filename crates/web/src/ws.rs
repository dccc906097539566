//! WebSocket-Endpunkte fuer privaten und oeffentlichen Chat
//!
//! Pro Verbindung laufen zwei Teile: die Leseschleife im Handler und ein
//! Schreib-Task, der die Queue aus dem Verbindungsregister in den Socket
//! leert. Nur Text-Frames werden verarbeitet; Close, Stream-Ende oder ein
//! Transportfehler beenden die Sitzung.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use campus_chat::{ChatBereich, OeffentlicheSitzung, PrivatSitzung};
use campus_core::{FehlerArt, Klassifiziert};
use futures_util::{
    stream::{SplitSink, SplitStream},
    SinkExt, StreamExt,
};
use tokio::sync::mpsc;

use crate::state::AppState;

/// GET /chat/:username/:user (Upgrade)
pub async fn privat_chat(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Path((username, user)): Path<(String, String)>,
) -> Response {
    ws.on_upgrade(move |socket| privat_sitzung(socket, state, username, user))
}

/// GET /public-chat/:username (Upgrade)
pub async fn oeffentlicher_chat(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Response {
    ws.on_upgrade(move |socket| oeffentliche_sitzung(socket, state, username))
}

async fn privat_sitzung(socket: WebSocket, state: AppState, username: String, user: String) {
    let (mut ws_sender, ws_receiver) = socket.split();

    let (sitzung, rx) = match PrivatSitzung::eroeffnen(
        state.chat_verlauf.clone(),
        state.privat.clone(),
        username.clone(),
        user,
    )
    .await
    {
        Ok(paar) => paar,
        Err(e) => {
            tracing::error!(benutzer = %username, "Private Sitzung nicht eroeffnet: {e}");
            let _ = ws_sender.close().await;
            return;
        }
    };

    let gauge = state
        .metriken
        .chat_connections
        .with_label_values(&[ChatBereich::Privat.als_str()]);
    gauge.inc();

    // Schreiber zuerst starten, sonst blockiert ein langer Verlauf die Queue
    let schreiber = tokio::spawn(schreiben(ws_sender, rx));

    match sitzung.verlauf_abspielen().await {
        Ok(anzahl) => tracing::debug!(benutzer = %username, anzahl, "Verlauf abgespielt"),
        Err(e) => tracing::warn!(benutzer = %username, "Verlauf nicht abgespielt: {e}"),
    }

    let zaehler = state
        .metriken
        .chat_messages_total
        .with_label_values(&[ChatBereich::Privat.als_str()]);
    let mut frames = ws_receiver;
    while let Some(text) = naechster_text(&mut frames).await {
        zaehler.inc();
        if let Err(e) = sitzung.empfangen(&text).await {
            if e.art() == FehlerArt::Verbindung {
                tracing::debug!(benutzer = %username, "Verbindung geschlossen: {e}");
                break;
            }
            tracing::error!(benutzer = %username, "Nachricht nicht gespeichert: {e}");
        }
    }

    sitzung.schliessen();
    gauge.dec();
    schreiber.abort();
}

async fn oeffentliche_sitzung(socket: WebSocket, state: AppState, username: String) {
    let (ws_sender, mut frames) = socket.split();
    let (sitzung, rx) = OeffentlicheSitzung::eroeffnen(state.oeffentlich.clone(), username).await;

    let gauge = state
        .metriken
        .chat_connections
        .with_label_values(&[ChatBereich::Oeffentlich.als_str()]);
    gauge.inc();

    let schreiber = tokio::spawn(schreiben(ws_sender, rx));
    let zaehler = state
        .metriken
        .chat_messages_total
        .with_label_values(&[ChatBereich::Oeffentlich.als_str()]);

    while let Some(text) = naechster_text(&mut frames).await {
        zaehler.inc();
        sitzung.empfangen(&text).await;
    }

    sitzung.schliessen().await;
    gauge.dec();
    schreiber.abort();
}

/// Wartet auf den naechsten Text-Frame; `None` bei Verbindungsende
async fn naechster_text(frames: &mut SplitStream<WebSocket>) -> Option<String> {
    while let Some(frame) = frames.next().await {
        match frame {
            Ok(Message::Text(text)) => return Some(text),
            Ok(Message::Close(_)) => return None,
            Ok(_) => continue,
            Err(e) => {
                tracing::debug!("WebSocket-Fehler: {e}");
                return None;
            }
        }
    }
    None
}

/// Leert die Queue einer Verbindung in den Socket
async fn schreiben(mut ws_sender: SplitSink<WebSocket, Message>, mut rx: mpsc::Receiver<String>) {
    while let Some(text) = rx.recv().await {
        if ws_sender.send(Message::Text(text)).await.is_err() {
            break;
        }
    }
    let _ = ws_sender.close().await;
}

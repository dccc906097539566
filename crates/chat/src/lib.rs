//! campus-chat – Verbindungsregister, Chat-Verlaeufe, Chat-Sitzungen
//!
//! Dieses Crate implementiert:
//! - Verbindungsregister: offene Kanaele eines Chat-Bereichs, Unicast und Broadcast
//! - ChatVerlauf: persistente Nachrichtenlisten pro Benutzer
//! - PrivatSitzung / OeffentlicheSitzung: Ablauf einer WebSocket-Sitzung,
//!   unabhaengig vom Transport
//!
//! # Beispiel
//!
//! ```no_run
//! use campus_chat::{ChatBereich, ChatVerlauf, PrivatSitzung, Verbindungsregister};
//! use campus_db::SqliteDb;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let db = Arc::new(SqliteDb::in_memory().await.unwrap());
//!     let verlauf = ChatVerlauf::neu(db);
//!     let register = Verbindungsregister::neu(ChatBereich::Privat);
//!
//!     let (sitzung, mut ausgang) =
//!         PrivatSitzung::eroeffnen(verlauf, register, "alice", "bob").await.unwrap();
//!     sitzung.verlauf_abspielen().await.unwrap();
//!     sitzung.empfangen("hi").await.unwrap();
//!     assert_eq!(ausgang.recv().await.unwrap(), "alice wrote: hi");
//!     sitzung.schliessen();
//! }
//! ```

pub mod error;
pub mod register;
pub mod sitzung;
pub mod types;
pub mod verlauf;

#[cfg(test)]
mod tests;

// Bequeme Re-Exporte
pub use error::{ChatError, ChatResult};
pub use register::{Verbindungsregister, SEND_QUEUE_GROESSE};
pub use sitzung::{OeffentlicheSitzung, PrivatSitzung};
pub use types::{ChatBereich, ChatEintrag};
pub use verlauf::ChatVerlauf;

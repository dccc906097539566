//! campus-forum – Diskussionsforen
//!
//! Foren werden einmal angelegt und danach nur noch um Kommentare
//! ergaenzt. IDs vergibt der Speicher fortlaufend.

pub mod error;
pub mod service;
pub mod types;

pub use error::{ForumError, ForumResult};
pub use service::ForumService;
pub use types::{Forum, ForumAnlage};

//! Integration-Tests fuer ChatHistoryRepository (In-Memory SQLite)

use campus_db::{ChatHistoryRepository, SqliteDb};

async fn db() -> SqliteDb {
    SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden")
}

#[tokio::test]
async fn verlauf_anlegen_ist_idempotent() {
    let db = db().await;

    assert!(!db.history_exists("alice").await.unwrap());
    assert!(db.ensure_history("alice").await.unwrap(), "erster Aufruf legt an");
    assert!(!db.ensure_history("alice").await.unwrap(), "zweiter Aufruf nicht");
    assert!(db.history_exists("alice").await.unwrap());
    assert!(db.get_messages("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn nachrichten_behalten_reihenfolge() {
    let db = db().await;
    db.ensure_history("bob").await.unwrap();

    for text in ["eins", "zwei", "drei"] {
        db.append_message("bob", "alice", text).await.unwrap();
    }

    let nachrichten = db.get_messages("bob").await.unwrap();
    let texte: Vec<&str> = nachrichten.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(texte, vec!["eins", "zwei", "drei"]);
    assert!(nachrichten.iter().all(|n| n.sender == "alice" && n.owner == "bob"));
}

#[tokio::test]
async fn anhaengen_legt_fehlenden_verlauf_an() {
    let db = db().await;

    db.append_message("carol", "dave", "hallo").await.unwrap();

    assert!(db.history_exists("carol").await.unwrap());
    assert_eq!(db.get_messages("carol").await.unwrap().len(), 1);
}

#[tokio::test]
async fn verlaeufe_sind_getrennt() {
    let db = db().await;

    db.append_message("alice", "bob", "fuer alice").await.unwrap();
    db.append_message("bob", "alice", "fuer bob").await.unwrap();

    let alice = db.get_messages("alice").await.unwrap();
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].message, "fuer alice");
}

#[tokio::test]
async fn besitzer_alphabetisch() {
    let db = db().await;

    db.ensure_history("zoe").await.unwrap();
    db.ensure_history("anna").await.unwrap();
    db.append_message("mia", "anna", "hi").await.unwrap();

    assert_eq!(db.list_owners().await.unwrap(), vec!["anna", "mia", "zoe"]);
}

//! Unit-Tests fuer den ChatVerlauf

use std::sync::Arc;

use campus_db::{ChatHistoryRepository, SqliteDb};

use crate::{types::ChatEintrag, verlauf::ChatVerlauf};

async fn test_db() -> Arc<SqliteDb> {
    Arc::new(SqliteDb::in_memory().await.expect("In-Memory-DB konnte nicht geoeffnet werden"))
}

#[tokio::test]
async fn test_registrieren_legt_leeren_verlauf_an() {
    let db = test_db().await;
    let verlauf = ChatVerlauf::neu(db.clone());

    assert!(verlauf.registrieren("alice").await.unwrap());
    assert!(db.history_exists("alice").await.unwrap());
    assert!(verlauf.nachrichten_laden("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_registrieren_behaelt_bestehenden_verlauf() {
    let db = test_db().await;
    let verlauf = ChatVerlauf::neu(db);

    verlauf.nachricht_hinzufuegen("alice", "bob", "hallo").await.unwrap();
    assert!(!verlauf.registrieren("alice").await.unwrap());
    assert_eq!(verlauf.nachrichten_laden("alice").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_lesen_legt_verlauf_an() {
    let db = test_db().await;
    let verlauf = ChatVerlauf::neu(db.clone());

    assert!(!db.history_exists("neu").await.unwrap());
    verlauf.nachrichten_laden("neu").await.unwrap();
    assert!(db.history_exists("neu").await.unwrap(), "Lesen muss den Verlauf anlegen");
    assert_eq!(verlauf.benutzer_liste().await.unwrap(), vec!["neu"]);
}

#[tokio::test]
async fn test_nachrichten_in_einfuegereihenfolge() {
    let db = test_db().await;
    let verlauf = ChatVerlauf::neu(db);

    verlauf.nachricht_hinzufuegen("bob", "alice", "1").await.unwrap();
    verlauf.nachricht_hinzufuegen("bob", "carol", "2").await.unwrap();

    let eintraege = verlauf.nachrichten_laden("bob").await.unwrap();
    assert_eq!(
        eintraege,
        vec![
            ChatEintrag { sender: "alice".into(), message: "1".into() },
            ChatEintrag { sender: "carol".into(), message: "2".into() },
        ]
    );
}

#[test]
fn test_eintrag_serialisierung() {
    let eintrag = ChatEintrag { sender: "alice".into(), message: "hi".into() };
    let json = serde_json::to_string(&eintrag).unwrap();
    assert_eq!(json, r#"{"sender":"alice","message":"hi"}"#);
    assert_eq!(eintrag.als_zeile(), "alice: hi");
}

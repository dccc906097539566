//! Daten ueberleben das Schliessen und erneute Oeffnen der Datei

use campus_db::{ChatHistoryRepository, DatabaseConfig, FlashcardRepository, SqliteDb};

#[tokio::test]
async fn daten_bleiben_nach_neuem_oeffnen_erhalten() {
    let dir = tempfile::tempdir().unwrap();
    let pfad = dir.path().join("unter").join("campus.db");
    let config = DatabaseConfig {
        url: format!("sqlite://{}", pfad.display()),
        max_verbindungen: 2,
        sqlite_wal: false,
    };

    {
        let db = SqliteDb::oeffnen(&config).await.expect("oeffnen fehlgeschlagen");
        db.upsert("Term", "Definition").await.unwrap();
        db.append_message("bob", "alice", "hi").await.unwrap();
        db.pool().close().await;
    }

    let db = SqliteDb::oeffnen(&config).await.expect("erneutes Oeffnen fehlgeschlagen");
    assert!(db.erreichbar().await);
    assert_eq!(db.count().await.unwrap(), 1);
    let verlauf = db.get_messages("bob").await.unwrap();
    assert_eq!(verlauf.len(), 1);
    assert_eq!(verlauf[0].sender, "alice");
}

//! Integration-Tests fuer ForumRepository (In-Memory SQLite)

use campus_core::ForumId;
use campus_db::{models::NeuesForum, ForumRepository, SqliteDb};

async fn db() -> SqliteDb {
    SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden")
}

fn forum<'a>(title: &'a str) -> NeuesForum<'a> {
    NeuesForum {
        username: "u1",
        title,
        description: "D",
        attachment: "",
    }
}

#[tokio::test]
async fn forum_erstellen_ohne_kommentare() {
    let db = db().await;

    let f = db.create_forum(forum("T")).await.unwrap();
    assert_eq!(f.title, "T");
    assert_eq!(f.username, "u1");
    assert!(f.comments.is_empty());

    let geladen = db.get_forum(f.id).await.unwrap().expect("Forum muss existieren");
    assert_eq!(geladen.description, "D");
    assert!(geladen.comments.is_empty());
}

#[tokio::test]
async fn forum_ids_sind_eindeutig_und_steigend() {
    let db = db().await;

    let a = db.create_forum(forum("A")).await.unwrap();
    let b = db.create_forum(forum("B")).await.unwrap();
    let c = db.create_forum(forum("C")).await.unwrap();

    assert!(a.id < b.id && b.id < c.id);
}

#[tokio::test]
async fn kommentar_anhaengen() {
    let db = db().await;
    let f = db.create_forum(forum("T")).await.unwrap();

    assert!(db.add_comment(f.id, "nice").await.unwrap());
    assert!(db.add_comment(f.id, "danke").await.unwrap());

    let geladen = db.get_forum(f.id).await.unwrap().unwrap();
    assert_eq!(geladen.comments, vec!["nice", "danke"]);
}

#[tokio::test]
async fn kommentar_fuer_unbekanntes_forum_wird_ignoriert() {
    let db = db().await;

    assert!(!db.add_comment(ForumId(999), "verloren").await.unwrap());
    assert!(db.get_forum(ForumId(999)).await.unwrap().is_none());
}

#[tokio::test]
async fn liste_ordnet_kommentare_zu() {
    let db = db().await;

    let a = db.create_forum(forum("A")).await.unwrap();
    let b = db.create_forum(forum("B")).await.unwrap();
    db.add_comment(b.id, "b1").await.unwrap();
    db.add_comment(a.id, "a1").await.unwrap();
    db.add_comment(b.id, "b2").await.unwrap();

    let foren = db.list_forums().await.unwrap();
    assert_eq!(foren.len(), 2);
    assert_eq!(foren[0].title, "A");
    assert_eq!(foren[0].comments, vec!["a1"]);
    assert_eq!(foren[1].comments, vec!["b1", "b2"]);
}

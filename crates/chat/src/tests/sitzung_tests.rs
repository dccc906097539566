//! Unit-Tests fuer private und oeffentliche Chat-Sitzungen

use std::sync::Arc;

use campus_db::{ChatHistoryRepository, SqliteDb};

use crate::{
    register::Verbindungsregister,
    sitzung::{OeffentlicheSitzung, PrivatSitzung},
    types::ChatBereich,
    verlauf::ChatVerlauf,
};

async fn test_db() -> Arc<SqliteDb> {
    Arc::new(SqliteDb::in_memory().await.expect("In-Memory-DB konnte nicht geoeffnet werden"))
}

#[tokio::test]
async fn test_privat_nachricht_landet_beim_partner() {
    let db = test_db().await;
    let verlauf = ChatVerlauf::neu(db.clone());
    let register = Verbindungsregister::neu(ChatBereich::Privat);

    verlauf.registrieren("alice").await.unwrap();

    let (sitzung, mut ausgang) =
        PrivatSitzung::eroeffnen(verlauf.clone(), register.clone(), "alice", "bob")
            .await
            .unwrap();
    assert_eq!(sitzung.verlauf_abspielen().await.unwrap(), 0);

    sitzung.empfangen("hi").await.unwrap();

    assert_eq!(ausgang.recv().await.unwrap(), "alice wrote: hi");

    let bob = db.get_messages("bob").await.unwrap();
    assert_eq!(bob.len(), 1);
    assert_eq!(bob[0].sender, "alice");
    assert_eq!(bob[0].message, "hi");
    assert!(db.get_messages("alice").await.unwrap().is_empty());

    sitzung.schliessen();
    assert_eq!(register.anzahl(), 0);
}

#[tokio::test]
async fn test_privat_verlauf_des_partners_wird_abgespielt() {
    let db = test_db().await;
    let verlauf = ChatVerlauf::neu(db);
    let register = Verbindungsregister::neu(ChatBereich::Privat);

    verlauf.nachricht_hinzufuegen("bob", "carol", "erste").await.unwrap();
    verlauf.nachricht_hinzufuegen("bob", "alice", "zweite").await.unwrap();

    let (sitzung, mut ausgang) =
        PrivatSitzung::eroeffnen(verlauf, register, "alice", "bob").await.unwrap();
    assert_eq!(sitzung.verlauf_abspielen().await.unwrap(), 2);

    assert_eq!(ausgang.recv().await.unwrap(), "carol: erste");
    assert_eq!(ausgang.recv().await.unwrap(), "alice: zweite");
}

#[tokio::test]
async fn test_privat_reihenfolge_bleibt_erhalten() {
    let db = test_db().await;
    let verlauf = ChatVerlauf::neu(db.clone());
    let register = Verbindungsregister::neu(ChatBereich::Privat);

    let (sitzung, _ausgang) =
        PrivatSitzung::eroeffnen(verlauf, register, "alice", "bob").await.unwrap();
    for text in ["a", "b", "c", "d"] {
        sitzung.empfangen(text).await.unwrap();
    }

    let texte: Vec<String> = db
        .get_messages("bob")
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert_eq!(texte, vec!["a", "b", "c", "d"]);
}

#[tokio::test]
async fn test_privat_bestaetigung_nur_an_absender() {
    let db = test_db().await;
    let verlauf = ChatVerlauf::neu(db);
    let register = Verbindungsregister::neu(ChatBereich::Privat);

    let (alice, mut alice_rx) =
        PrivatSitzung::eroeffnen(verlauf.clone(), register.clone(), "alice", "bob")
            .await
            .unwrap();
    let (_bob, mut bob_rx) =
        PrivatSitzung::eroeffnen(verlauf, register, "bob", "alice").await.unwrap();

    alice.empfangen("psst").await.unwrap();

    assert_eq!(alice_rx.recv().await.unwrap(), "alice wrote: psst");
    assert!(bob_rx.try_recv().is_err(), "Bob darf die Bestaetigung nicht sehen");
}

#[tokio::test]
async fn test_privat_eroeffnen_legt_betrachter_verlauf_an() {
    let db = test_db().await;
    let verlauf = ChatVerlauf::neu(db.clone());
    let register = Verbindungsregister::neu(ChatBereich::Privat);

    let (_sitzung, _rx) =
        PrivatSitzung::eroeffnen(verlauf, register, "neuling", "bob").await.unwrap();
    assert!(db.history_exists("neuling").await.unwrap());
}

#[tokio::test]
async fn test_oeffentlich_beitritt_nachricht_verlassen() {
    let register = Verbindungsregister::neu(ChatBereich::Oeffentlich);

    let (anna, mut anna_rx) = OeffentlicheSitzung::eroeffnen(register.clone(), "anna").await;
    assert_eq!(anna_rx.recv().await.unwrap(), "anna joined the chat");

    let (ben, mut ben_rx) = OeffentlicheSitzung::eroeffnen(register.clone(), "ben").await;
    assert_eq!(anna_rx.recv().await.unwrap(), "ben joined the chat");
    assert_eq!(ben_rx.recv().await.unwrap(), "ben joined the chat");

    assert_eq!(ben.empfangen("hallo").await, 2);
    assert_eq!(anna_rx.recv().await.unwrap(), "ben says: hallo");
    assert_eq!(ben_rx.recv().await.unwrap(), "ben says: hallo");

    assert_eq!(ben.schliessen().await, 1);
    assert_eq!(anna_rx.recv().await.unwrap(), "ben left the chat");
    assert_eq!(register.anzahl(), 1);

    anna.schliessen().await;
    assert_eq!(register.anzahl(), 0);
}

#[tokio::test]
async fn test_oeffentlich_langsamer_leser_verpasst_nichts() {
    let register = Verbindungsregister::mit_queue_groesse(ChatBereich::Oeffentlich, 2);

    let (anna, mut anna_rx) = OeffentlicheSitzung::eroeffnen(register.clone(), "anna").await;
    let sprecher = tokio::spawn(async move {
        for i in 0..20 {
            anna.empfangen(&format!("m{i}")).await;
        }
        anna
    });

    assert_eq!(anna_rx.recv().await.unwrap(), "anna joined the chat");
    for i in 0..20 {
        assert_eq!(anna_rx.recv().await.unwrap(), format!("anna says: m{i}"));
    }
    sprecher.await.unwrap().schliessen().await;
}

//! Start und Shutdown des Servers mit einer Datei-Datenbank

use campus_server::{config::ServerConfig, Server};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn http_get(adresse: std::net::SocketAddr, pfad: &str) -> String {
    let mut stream = TcpStream::connect(adresse).await.unwrap();
    let anfrage = format!("GET {pfad} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(anfrage.as_bytes()).await.unwrap();
    let mut antwort = String::new();
    stream.read_to_string(&mut antwort).await.unwrap();
    antwort
}

fn test_config(verzeichnis: &std::path::Path) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.datenbank.url = format!("sqlite://{}/daten/campus.db", verzeichnis.display());
    config.statisch.verzeichnis = verzeichnis.join("static");
    config
}

#[tokio::test]
async fn test_server_startet_und_beendet_sich() {
    let verzeichnis = tempfile::tempdir().unwrap();
    std::fs::create_dir(verzeichnis.path().join("static")).unwrap();
    std::fs::write(verzeichnis.path().join("static/campus.js"), "// campus").unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let adresse = listener.local_addr().unwrap();
    let (stopp_tx, stopp_rx) = oneshot::channel::<()>();

    let server = Server::neu(test_config(verzeichnis.path()));
    let laufend = tokio::spawn(server.bedienen(listener, async move {
        let _ = stopp_rx.await;
    }));

    // Warten bis Migrationen durch sind und der Server antwortet
    let mut health = String::new();
    for _ in 0..50 {
        health = http_get(adresse, "/health").await;
        if health.starts_with("HTTP/1.1 200") {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert!(health.starts_with("HTTP/1.1 200"), "{health}");
    assert!(health.contains("\"status\":\"healthy\""));

    let js = http_get(adresse, "/static/campus.js").await;
    assert!(js.contains("// campus"));

    stopp_tx.send(()).unwrap();
    laufend.await.unwrap().unwrap();

    // Datenbankdatei wurde angelegt
    assert!(verzeichnis.path().join("daten/campus.db").exists());
}

#[tokio::test]
async fn test_zweiter_start_auf_derselben_datei() {
    let verzeichnis = tempfile::tempdir().unwrap();

    let server = Server::neu(test_config(verzeichnis.path()));
    let app = server.anwendung().await.unwrap();
    drop(app);

    // Zweiter Start auf derselben Datei migriert erneut ohne Fehler
    let server = Server::neu(test_config(verzeichnis.path()));
    assert!(server.anwendung().await.is_ok());
}

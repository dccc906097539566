//! HTML-Seiten
//!
//! Alle Benutzereingaben werden vor der Ausgabe mit `html-escape`
//! maskiert. Das Verhalten im Browser (WebSocket, Karteikarten blaettern)
//! liegt in `/static/campus.js`; die Seite gibt ihm ueber `data-*`
//! Attribute am `<body>` den Kontext mit.

use campus_chat::ChatEintrag;
use campus_core::ForumId;
use campus_db::models::FlashcardRecord;
use campus_forum::Forum;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

/// Gemeinsamer Rahmen mit Navigation
fn rahmen(titel: &str, seite: &str, daten: &[(&str, &str)], inhalt: &str) -> String {
    let mut body_attrs = format!(" data-seite=\"{}\"", attr(seite));
    for (name, wert) in daten {
        body_attrs.push_str(&format!(" data-{}=\"{}\"", name, attr(wert)));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{titel} | Campus</title>\n\
         <link rel=\"stylesheet\" href=\"/static/campus.css\">\n\
         </head>\n\
         <body{body_attrs}>\n\
         <nav>\
         <a href=\"/\">Home</a> \
         <a href=\"/office-of-the-registra\">Register</a> \
         <a href=\"/chat\">Chat</a> \
         <a href=\"/forum\">Forum</a> \
         <a href=\"/flashcard\">Flashcards</a>\
         </nav>\n\
         <main>\n<h1>{titel}</h1>\n{inhalt}\n</main>\n\
         <script src=\"/static/campus.js\"></script>\n\
         </body>\n\
         </html>\n",
        titel = text(titel),
    )
}

pub fn startseite() -> String {
    rahmen(
        "Campus",
        "home",
        &[],
        "<p>Study with flashcards, talk in the chat and discuss in the forum.</p>\n\
         <ul>\n\
         <li><a href=\"/office-of-the-registra\">Register a chat name</a></li>\n\
         <li><a href=\"/chat\">Chat</a></li>\n\
         <li><a href=\"/forum\">Forum</a></li>\n\
         <li><a href=\"/flashcard\">Flashcards</a></li>\n\
         </ul>",
    )
}

pub fn registratur() -> String {
    rahmen(
        "Office of the Registrar",
        "registratur",
        &[],
        "<form id=\"registrieren\">\n\
         <label>Username <input name=\"user\" required></label>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n\
         <p id=\"meldung\"></p>",
    )
}

/// Liste aller Benutzer mit Chat-Verlauf
pub fn chat_uebersicht(benutzer: &[String]) -> String {
    let mut inhalt = String::from("<ul class=\"benutzer\">\n");
    for name in benutzer {
        inhalt.push_str(&format!(
            "<li>{name} \
             <a href=\"/chat/private-chat?username={q}\">private</a> \
             <a href=\"/chat/public-chat?username={q}\">public</a></li>\n",
            name = text(name),
            q = attr(&urlencoding::encode(name)),
        ));
    }
    inhalt.push_str("</ul>");
    if benutzer.is_empty() {
        inhalt.push_str("\n<p>No users registered yet.</p>");
    }
    rahmen("Chat", "chat", &[], &inhalt)
}

/// Private Chat-Seite mit dem eigenen Verlauf
pub fn privat_chat(benutzername: &str, benutzer: &[String], verlauf: &[ChatEintrag]) -> String {
    let mut inhalt = String::from("<label>Chat with <select id=\"partner\">\n");
    for name in benutzer {
        inhalt.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            attr(name),
            text(name)
        ));
    }
    inhalt.push_str("</select></label>\n<ul id=\"nachrichten\">\n");
    for eintrag in verlauf {
        inhalt.push_str(&format!("<li>{}</li>\n", text(&eintrag.als_zeile())));
    }
    inhalt.push_str(
        "</ul>\n\
         <form id=\"senden\"><input name=\"text\" autocomplete=\"off\"><button>Send</button></form>",
    );
    rahmen(
        "Private chat",
        "privat-chat",
        &[("username", benutzername)],
        &inhalt,
    )
}

pub fn oeffentlicher_chat(benutzername: &str) -> String {
    rahmen(
        "Public chat",
        "oeffentlicher-chat",
        &[("username", benutzername)],
        "<ul id=\"nachrichten\"></ul>\n\
         <form id=\"senden\"><input name=\"text\" autocomplete=\"off\"><button>Send</button></form>",
    )
}

/// Alle Foren in Anlagereihenfolge
pub fn forum_liste(foren: &[Forum]) -> String {
    let mut inhalt = String::from("<p><a href=\"/forum/create-forum\">Create a forum</a></p>\n<ul class=\"foren\">\n");
    for forum in foren {
        inhalt.push_str(&format!(
            "<li><a href=\"/forum/to/{id}\">{titel}</a> by {autor} ({n} comments)</li>\n",
            id = forum.id.inner(),
            titel = text(&forum.title),
            autor = text(&forum.username),
            n = forum.comments.len(),
        ));
    }
    inhalt.push_str("</ul>");
    rahmen("Forum", "forum", &[], &inhalt)
}

pub fn forum_detail(forum: &Forum) -> String {
    let mut inhalt = format!(
        "<p class=\"autor\">by {}</p>\n<p>{}</p>\n",
        text(&forum.username),
        text(&forum.description)
    );
    if !forum.file.is_empty() {
        inhalt.push_str(&format!(
            "<p class=\"anhang\">Attachment: {}</p>\n",
            text(&forum.file)
        ));
    }
    inhalt.push_str("<h2>Comments</h2>\n<ol class=\"kommentare\">\n");
    for kommentar in &forum.comments {
        inhalt.push_str(&format!("<li>{}</li>\n", text(kommentar)));
    }
    inhalt.push_str(&format!(
        "</ol>\n\
         <form method=\"post\" action=\"/forum/comment/{}\">\n\
         <textarea name=\"comment\" required></textarea>\n\
         <button type=\"submit\">Comment</button>\n\
         </form>",
        forum.id.inner()
    ));
    rahmen(&forum.title, "forum-detail", &[], &inhalt)
}

pub fn forum_anlegen() -> String {
    rahmen(
        "Create forum",
        "forum-anlegen",
        &[],
        "<form method=\"post\" action=\"/forum/redirect-to-forum\">\n\
         <label>Username <input name=\"username\" required></label>\n\
         <label>Title <input name=\"title\" required></label>\n\
         <label>Description <textarea name=\"description\" required></textarea></label>\n\
         <label>Attachment <input name=\"file\"></label>\n\
         <button type=\"submit\">Create</button>\n\
         </form>",
    )
}

/// Antwort auf einen Kommentar zu einem Forum das es nicht gibt
pub fn forum_fehlt(id: ForumId) -> String {
    let inhalt = format!(
        "<p>No forum with id {}.</p>\n<p><a href=\"/forum\">Back to all forums</a></p>",
        id.inner()
    );
    rahmen("Forum not found", "forum-fehlt", &[], &inhalt)
}

/// Bestaetigung nach dem Anlegen
pub fn forum_angelegt(forum: &Forum) -> String {
    let inhalt = format!(
        "<p>Forum <a href=\"/forum/to/{}\">{}</a> created.</p>\n<p><a href=\"/forum\">Back to all forums</a></p>",
        forum.id.inner(),
        text(&forum.title)
    );
    rahmen("Forum created", "forum-angelegt", &[], &inhalt)
}

pub fn karteikarten(karten: &[FlashcardRecord]) -> String {
    let anzahl = karten.len().to_string();
    let inhalt = "<form id=\"karte-speichern\">\n\
         <label>Term <input name=\"term\" required></label>\n\
         <label>Definition <textarea name=\"definition\" required></textarea></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <div id=\"karte\"><h2 id=\"term\"></h2><p id=\"definition\"></p></div>\n\
         <button id=\"zurueck\">Previous</button> <button id=\"vor\">Next</button>\n\
         <p><span id=\"anzahl\"></span> cards</p>\n\
         <button id=\"loeschen\">Delete collection</button>";
    rahmen("Flashcards", "karteikarten", &[("anzahl", anzahl.as_str())], inhalt)
}

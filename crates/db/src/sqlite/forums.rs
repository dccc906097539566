//! SQLite-Implementierung des ForumRepository

use std::collections::HashMap;

use campus_core::ForumId;

use crate::models::{ForumRecord, NeuesForum};
use crate::repository::{DbResult, ForumRepository};
use crate::sqlite::{jetzt, parse_timestamp, pool::SqliteDb};

impl ForumRepository for SqliteDb {
    async fn create_forum(&self, data: NeuesForum<'_>) -> DbResult<ForumRecord> {
        let (now, now_str) = jetzt();
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            "INSERT INTO forums (username, title, description, attachment, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(data.username)
        .bind(data.title)
        .bind(data.description)
        .bind(data.attachment)
        .bind(&now_str)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;

        Ok(ForumRecord {
            id: ForumId(id),
            username: data.username.to_string(),
            title: data.title.to_string(),
            description: data.description.to_string(),
            attachment: data.attachment.to_string(),
            comments: Vec::new(),
            created_at: now,
        })
    }

    async fn get_forum(&self, id: ForumId) -> DbResult<Option<ForumRecord>> {
        let row = sqlx::query(
            "SELECT id, username, title, description, attachment, created_at
             FROM forums WHERE id = ?",
        )
        .bind(id.inner())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let comments: Vec<String> = sqlx::query_scalar(
            "SELECT content FROM forum_comments WHERE forum_id = ? ORDER BY id ASC",
        )
        .bind(id.inner())
        .fetch_all(&self.pool)
        .await?;

        row_to_forum(&row, comments).map(Some)
    }

    async fn list_forums(&self) -> DbResult<Vec<ForumRecord>> {
        use sqlx::Row as _;

        let rows = sqlx::query(
            "SELECT id, username, title, description, attachment, created_at
             FROM forums ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let comment_rows =
            sqlx::query("SELECT forum_id, content FROM forum_comments ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;

        // Kommentare nach Forum gruppieren, Reihenfolge bleibt erhalten
        let mut kommentare: HashMap<i64, Vec<String>> = HashMap::new();
        for r in &comment_rows {
            let forum_id: i64 = r.try_get("forum_id")?;
            let content: String = r.try_get("content")?;
            kommentare.entry(forum_id).or_default().push(content);
        }

        rows.iter()
            .map(|r| {
                let id: i64 = r.try_get("id")?;
                row_to_forum(r, kommentare.remove(&id).unwrap_or_default())
            })
            .collect()
    }

    async fn add_comment(&self, id: ForumId, comment: &str) -> DbResult<bool> {
        let (_, now_str) = jetzt();
        let mut tx = self.pool.begin().await?;

        let vorhanden: Option<i64> = sqlx::query_scalar("SELECT id FROM forums WHERE id = ?")
            .bind(id.inner())
            .fetch_optional(&mut *tx)
            .await?;

        if vorhanden.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("INSERT INTO forum_comments (forum_id, content, created_at) VALUES (?, ?, ?)")
            .bind(id.inner())
            .bind(comment)
            .bind(&now_str)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}

fn row_to_forum(row: &sqlx::sqlite::SqliteRow, comments: Vec<String>) -> DbResult<ForumRecord> {
    use sqlx::Row as _;

    let created_at: String = row.try_get("created_at")?;

    Ok(ForumRecord {
        id: ForumId(row.try_get("id")?),
        username: row.try_get("username")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        attachment: row.try_get("attachment")?,
        comments,
        created_at: parse_timestamp(&created_at)?,
    })
}

//! SQLite-Implementierung des ChatHistoryRepository

use crate::models::ChatNachrichtRecord;
use crate::repository::{ChatHistoryRepository, DbResult};
use crate::sqlite::{jetzt, parse_timestamp, pool::SqliteDb};

impl ChatHistoryRepository for SqliteDb {
    async fn ensure_history(&self, owner: &str) -> DbResult<bool> {
        let (_, now_str) = jetzt();
        let mut tx = self.pool.begin().await?;

        let affected = sqlx::query(
            "INSERT INTO chat_histories (owner, created_at) VALUES (?, ?)
             ON CONFLICT(owner) DO NOTHING",
        )
        .bind(owner)
        .bind(&now_str)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        if affected > 0 {
            tracing::debug!(owner = %owner, "Chat-Verlauf angelegt");
        }
        Ok(affected > 0)
    }

    async fn history_exists(&self, owner: &str) -> DbResult<bool> {
        let gefunden: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM chat_histories WHERE owner = ?")
                .bind(owner)
                .fetch_optional(&self.pool)
                .await?;
        Ok(gefunden.is_some())
    }

    async fn append_message(
        &self,
        owner: &str,
        sender: &str,
        message: &str,
    ) -> DbResult<ChatNachrichtRecord> {
        let (now, now_str) = jetzt();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO chat_histories (owner, created_at) VALUES (?, ?)
             ON CONFLICT(owner) DO NOTHING",
        )
        .bind(owner)
        .bind(&now_str)
        .execute(&mut *tx)
        .await?;

        let id = sqlx::query(
            "INSERT INTO chat_messages (owner, sender, message, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(owner)
        .bind(sender)
        .bind(message)
        .bind(&now_str)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;

        Ok(ChatNachrichtRecord {
            id,
            owner: owner.to_string(),
            sender: sender.to_string(),
            message: message.to_string(),
            created_at: now,
        })
    }

    async fn get_messages(&self, owner: &str) -> DbResult<Vec<ChatNachrichtRecord>> {
        let rows = sqlx::query(
            "SELECT id, owner, sender, message, created_at
             FROM chat_messages
             WHERE owner = ?
             ORDER BY id ASC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_nachricht).collect()
    }

    async fn list_owners(&self) -> DbResult<Vec<String>> {
        let owners: Vec<String> =
            sqlx::query_scalar("SELECT owner FROM chat_histories ORDER BY owner")
                .fetch_all(&self.pool)
                .await?;
        Ok(owners)
    }
}

fn row_to_nachricht(row: &sqlx::sqlite::SqliteRow) -> DbResult<ChatNachrichtRecord> {
    use sqlx::Row as _;

    let created_at: String = row.try_get("created_at")?;

    Ok(ChatNachrichtRecord {
        id: row.try_get("id")?,
        owner: row.try_get("owner")?,
        sender: row.try_get("sender")?,
        message: row.try_get("message")?,
        created_at: parse_timestamp(&created_at)?,
    })
}
